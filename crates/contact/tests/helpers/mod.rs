use std::sync::{Arc, Mutex};

use corweb_contact::Mailer;
use corweb_notification::{OutgoingEmail, Transport};

pub const FROM: &str = "Corweb <onboarding@resend.dev>";
pub const TO: &str = "hello@corweb.io";
pub const SITE: &str = "corweb.io";

/// Keeps every message it is asked to send
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    #[allow(dead_code)]
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

/// Refuses every message with a provider-specific reason
#[derive(Default)]
pub struct FailingTransport {
    attempts: Mutex<usize>,
}

impl FailingTransport {
    #[allow(dead_code)]
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

pub fn mailer(transport: Arc<dyn Transport>) -> Mailer {
    Mailer::new(transport, FROM, TO, SITE)
}
