use std::str::FromStr;

use axum::{
    extract::Form,
    http::{HeaderMap, StatusCode, header::REFERER},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use url::Url;

use crate::preferences::{self, CONSENT_COOKIE, Consent, THEME_COOKIE};

/// Same-site path of the referring page, `/` when absent or unusable
fn back(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Url::parse(value).ok())
        .map(|url| match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_owned(),
        })
        .unwrap_or_else(|| "/".to_owned())
}

#[derive(Deserialize)]
pub struct ConsentInput {
    pub choice: String,
}

pub async fn consent(
    jar: CookieJar,
    headers: HeaderMap,
    Form(input): Form<ConsentInput>,
) -> Response {
    let Ok(choice) = Consent::from_str(&input.choice) else {
        return (StatusCode::BAD_REQUEST, "Unknown consent choice").into_response();
    };

    tracing::debug!(%choice, "Cookie consent recorded");

    (
        jar.add(preferences::cookie(CONSENT_COOKIE, choice)),
        Redirect::to(&back(&headers)),
    )
        .into_response()
}

pub async fn theme(jar: CookieJar, headers: HeaderMap) -> Response {
    let next = preferences::theme(&jar).toggled();

    (
        jar.add(preferences::cookie(THEME_COOKIE, next)),
        Redirect::to(&back(&headers)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_back_keeps_only_path_and_query() {
        let mut headers = HeaderMap::new();
        assert_eq!(back(&headers), "/");

        headers.insert(REFERER, HeaderValue::from_static("https://corweb.com/fr/about?x=1"));
        assert_eq!(back(&headers), "/fr/about?x=1");

        headers.insert(REFERER, HeaderValue::from_static("https://evil.example/en"));
        assert_eq!(back(&headers), "/en");

        headers.insert(REFERER, HeaderValue::from_static("not a url"));
        assert_eq!(back(&headers), "/");
    }
}
