use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::routes::AppState;

pub async fn sitemap(State(app_state): State<AppState>) -> impl IntoResponse {
    let today = time::OffsetDateTime::now_utc().date();

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        crate::sitemap::render(app_state.config.site.base_url(), today),
    )
}

pub async fn robots(State(app_state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        crate::sitemap::robots(app_state.config.site.base_url()),
    )
}
