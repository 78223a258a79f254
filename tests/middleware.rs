use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::ACCEPT_ENCODING},
};

mod common;

use common::{RecordingTransport, header, send};

fn app() -> axum::Router {
    corweb::cli::server::app(common::state(Arc::new(RecordingTransport::default())))
}

#[tokio::test]
async fn test_cache_headers() {
    let response = common::get(app(), "/static/logo.svg").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header(&response, "cache-control"),
        Some("public, max-age=31536000, immutable")
    );

    let response = common::get(app(), "/robots.txt").await;
    assert_eq!(header(&response, "cache-control"), Some("public, max-age=86400"));

    let response = common::get(app(), "/en/about").await;
    assert!(header(&response, "cache-control").is_some_and(|v| v.starts_with("no-store")));
    assert_eq!(header(&response, "pragma"), Some("no-cache"));
}

#[tokio::test]
async fn test_compression_is_negotiated() {
    let response = send(
        app(),
        Request::builder()
            .uri("/en/services")
            .header(ACCEPT_ENCODING, "gzip")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "content-encoding"), Some("gzip"));
}
