#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use corweb::{AppState, config::Config};
use corweb_contact::Mailer;
use corweb_notification::{OutgoingEmail, Transport};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Keeps every message it is asked to send
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        Ok(format!("msg-{}", sent.len()))
    }
}

#[derive(Default)]
pub struct FailingTransport {
    attempts: Mutex<usize>,
}

impl FailingTransport {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _email: &OutgoingEmail) -> anyhow::Result<String> {
        *self.attempts.lock().unwrap() += 1;

        anyhow::bail!("domain not verified: corweb.io (provider code 403)")
    }
}

pub fn state(transport: Arc<dyn Transport>) -> AppState {
    let config = Config::default();
    let mailer = Mailer::new(
        transport,
        &config.email.from_address,
        &config.email.contact_address,
        "corweb.io",
    );

    AppState {
        config: Arc::new(config),
        mailer: Arc::new(mailer),
        form_tokens: Arc::default(),
    }
}

pub fn app(transport: Arc<dyn Transport>) -> Router {
    corweb::router(state(transport))
}

pub fn recording_app() -> (Router, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());

    (app(transport.clone()), transport)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
