use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const DAILY: &str = "public, max-age=86400";
const NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

fn policy(path: &str) -> &'static str {
    match path {
        p if p.starts_with("/static/") => IMMUTABLE,
        "/robots.txt" | "/sitemap.xml" => DAILY,
        _ => NO_STORE,
    }
}

/// Set cache headers: embedded assets are immutable for a build, pages and
/// API answers are never stored
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let value = policy(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    if value == NO_STORE {
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(value));

    response
}
