use axum::{
    extract::Request,
    http::header::ACCEPT_LANGUAGE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    language::{Locale, path_locale},
    page::Page,
    template::Template,
};

/// Guard for `/{locale}/...` routes.
///
/// A known page requested without a locale (`/about`) is redirected to the
/// negotiated locale, anything else with an unsupported first segment gets
/// the localized 404 page.
pub async fn require_locale(template: Template, req: Request, next: Next) -> Response {
    let path = req.uri().path();

    if path_locale(path).is_some() {
        return next.run(req).await;
    }

    let Some(page) = Page::from_path(path) else {
        return template.not_found();
    };

    let locale = Locale::negotiate(
        req.headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let target = match req.uri().query() {
        Some(query) => format!("{}?{query}", page.href(locale)),
        None => page.href(locale),
    };

    Redirect::temporary(&target).into_response()
}
