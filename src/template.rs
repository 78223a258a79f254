use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::ACCEPT_LANGUAGE, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::{collections::HashMap, convert::Infallible, sync::Arc};

use crate::{
    config::Config,
    language::{Locale, path_locale, strip_locale},
    page::Page,
    preferences::{self, Consent, Theme},
    routes::AppState,
    seo,
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    use crate::language::Locale;

    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let locale = askama::get_value::<Locale>(values, "locale")
            .copied()
            .unwrap_or_default();

        Ok(rust_i18n::t!(value, locale = locale.as_str()).to_string())
    }
}

pub struct NavLink {
    pub label: String,
    pub href: String,
    pub current: bool,
}

pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// Layout data shared by every page: head metadata, header and footer
pub struct Chrome {
    pub locale: Locale,
    pub og_locale: &'static str,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub canonical: String,
    pub indexable: bool,
    pub alternates: Vec<Alternate>,
    pub schemas: Vec<String>,
    pub nav: Vec<NavLink>,
    pub languages: Vec<NavLink>,
    pub social: Vec<NavLink>,
    pub legal: Vec<NavLink>,
    pub theme: Theme,
    pub show_consent_banner: bool,
    pub analytics_script: Option<String>,
    pub contact_email: String,
    pub year: i32,
}

pub struct Template {
    locale: Locale,
    /// Request path below the locale segment
    path: String,
    consent: Option<Consent>,
    theme: Theme,
    config: Arc<Config>,
}

impl Template {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.locale.as_str()).to_string()
    }

    pub fn chrome(&self, page: Page) -> serde_json::Result<Chrome> {
        let site = &self.config.site;
        let base_url = site.base_url();

        let title = match page.title_key() {
            Some(key) => format!("{} | {}", self.t(key), site.name),
            None => site.name.to_owned(),
        };

        let mut schemas = vec![seo::to_script(&seo::organization(site, self.locale))?];
        if let Some(breadcrumbs) = seo::breadcrumbs(site, self.locale, page) {
            schemas.push(seo::to_script(&breadcrumbs)?);
        }
        if page == Page::Services {
            schemas.push(seo::to_script(&seo::services(site, self.locale))?);
        }

        let mut alternates: Vec<Alternate> = Locale::ALL
            .into_iter()
            .map(|locale| Alternate {
                hreflang: locale.as_str(),
                href: format!("{base_url}{}", page.href(locale)),
            })
            .collect();
        alternates.push(Alternate {
            hreflang: "x-default",
            href: format!("{base_url}{}", page.href(Locale::default())),
        });

        let nav = Page::NAV
            .into_iter()
            .map(|item| NavLink {
                label: self.t(item.nav_key()),
                href: item.href(self.locale),
                current: item == page,
            })
            .collect();

        let languages = Locale::ALL
            .into_iter()
            .map(|locale| NavLink {
                label: locale.native_name().to_owned(),
                href: format!("/{locale}{}", self.path),
                current: locale == self.locale,
            })
            .collect();

        let social = [("GitHub", &site.github), ("LinkedIn", &site.linkedin), ("X", &site.twitter)]
            .into_iter()
            .filter(|(_, url)| !url.is_empty())
            .map(|(label, url)| NavLink {
                label: label.to_owned(),
                href: url.to_owned(),
                current: false,
            })
            .collect();

        let legal = [Page::Legal, Page::Privacy]
            .into_iter()
            .map(|item| NavLink {
                label: self.t(item.nav_key()),
                href: item.href(self.locale),
                current: item == page,
            })
            .collect();

        let analytics_script = Some(site.analytics_script.to_owned())
            .filter(|script| !script.is_empty() && self.consent == Some(Consent::Accepted));

        Ok(Chrome {
            locale: self.locale,
            og_locale: self.locale.og_locale(),
            title,
            description: self.t(page.description_key()),
            site_name: site.name.to_owned(),
            canonical: format!("{base_url}{}", page.href(self.locale)),
            indexable: page.is_indexable(),
            alternates,
            schemas,
            nav,
            languages,
            social,
            legal,
            theme: self.theme,
            show_consent_banner: self.consent.is_none(),
            analytics_script,
            contact_email: site.contact_email.to_owned(),
            year: time::OffsetDateTime::now_utc().year(),
        })
    }

    fn render_with_values<T: askama::Template>(&self, template: T) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("locale", Box::new(self.locale));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    pub fn not_found(&self) -> Response {
        match self.chrome(Page::NotFound) {
            Ok(chrome) => (StatusCode::NOT_FOUND, self.render(NotFoundTemplate { chrome })).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to build page layout");

                (StatusCode::NOT_FOUND, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    pub fn server_error(&self) -> Response {
        let page = self
            .chrome(Page::ServerError)
            .map(|chrome| self.render(ServerTemplate { chrome }));

        match page {
            Ok(page) => (StatusCode::INTERNAL_SERVER_ERROR, page).into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response(),
        }
    }
}

impl FromRequestParts<AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let request_path = parts.uri.path();

        let locale = path_locale(request_path).unwrap_or_else(|| {
            Locale::negotiate(
                parts
                    .headers
                    .get(ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok()),
            )
        });

        let jar = CookieJar::from_headers(&parts.headers);

        Ok(Template {
            locale,
            path: strip_locale(request_path).to_owned(),
            consent: preferences::consent(&jar),
            theme: preferences::theme(&jar),
            config: state.config.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub chrome: Chrome,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub chrome: Chrome,
}

/// Unwrap a page result or answer with the 500 page
#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template.server_error();
            }
        }
    };
}
