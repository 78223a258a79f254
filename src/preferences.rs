//! Visitor preferences kept in first-party cookies

use std::str::FromStr;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use strum::{AsRefStr, Display, EnumString};

pub const CONSENT_COOKIE: &str = "corweb-cookie-consent";
pub const THEME_COOKIE: &str = "corweb-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Consent {
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// `None` until the visitor answered the banner
pub fn consent(jar: &CookieJar) -> Option<Consent> {
    jar.get(CONSENT_COOKIE)
        .and_then(|cookie| Consent::from_str(cookie.value()).ok())
}

pub fn theme(jar: &CookieJar) -> Theme {
    jar.get(THEME_COOKIE)
        .and_then(|cookie| Theme::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

/// Site wide cookie kept for a year
pub fn cookie(name: &'static str, value: impl AsRef<str>) -> Cookie<'static> {
    Cookie::build((name, value.as_ref().to_owned()))
        .path("/")
        .max_age(time::Duration::days(365))
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_unknown_cookies() {
        let jar = CookieJar::new();

        assert_eq!(consent(&jar), None);
        assert_eq!(theme(&jar), Theme::Dark);

        let jar = jar
            .add(cookie(CONSENT_COOKIE, "maybe"))
            .add(cookie(THEME_COOKIE, "sepia"));

        assert_eq!(consent(&jar), None);
        assert_eq!(theme(&jar), Theme::Dark);
    }

    #[test]
    fn test_stored_choices() {
        let jar = CookieJar::new()
            .add(cookie(CONSENT_COOKIE, Consent::Declined))
            .add(cookie(THEME_COOKIE, Theme::Light));

        assert_eq!(consent(&jar), Some(Consent::Declined));
        assert_eq!(theme(&jar), Theme::Light);
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = cookie(THEME_COOKIE, Theme::Dark.toggled());

        assert_eq!(cookie.value(), "light");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(365)));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
