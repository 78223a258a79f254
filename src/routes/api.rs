use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use corweb_contact::endpoint;

use crate::routes::AppState;

/// `POST /api/contact`, the body is read raw so malformed JSON reaches the
/// endpoint instead of an extractor rejection
pub async fn contact(State(app_state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let reply = endpoint::handle(&body, &app_state.mailer).await;

    (reply.status, Json(reply.envelope))
}
