use serde::{Deserialize, Serialize};

use crate::{OutgoingEmail, Transport};

/// Delivery through the Resend HTTP API
#[derive(Clone)]
pub struct ResendTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl<'a> From<&'a OutgoingEmail> for SendEmailRequest<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: [&email.to],
            reply_to: &email.reply_to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        }
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendTransport {
    pub fn new(api_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("corweb/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/emails", api_url.trim_end_matches('/')),
            api_key: api_key.to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl Transport for ResendTransport {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<String> {
        if self.api_key.is_empty() {
            anyhow::bail!("Resend api key is not configured");
        }

        tracing::info!(to = %email.to, subject = %email.subject, "Sending email with Resend");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest::from(email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Resend rejected the message ({status}): {body}");
        }

        let sent: SendEmailResponse = response.json().await?;

        Ok(sent.id)
    }
}
