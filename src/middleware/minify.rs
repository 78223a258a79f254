use axum::{
    body::Body,
    http::{HeaderMap, header},
    response::Response,
};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::body::to_bytes;
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });
    }
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

/// Minify rendered pages in release builds
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if !is_html(response.headers()) {
        return response;
    }

    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let (mut parts, body) = response.into_parts();
            let bytes = match to_bytes(body, usize::MAX).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::error!(err = %err, "Failed to buffer page for minification");
                    return Response::from_parts(parts, Body::empty());
                }
            };

            parts.headers.remove(header::CONTENT_LENGTH);

            Response::from_parts(parts, Body::from(minify_html::minify(&bytes, &MINIFY_CFG)))
        } else {
            response
        }
    }
}
