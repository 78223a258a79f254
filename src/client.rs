//! [`Submitter`] implementations driving the contact form controller

use std::sync::Arc;

use corweb_contact::{
    Mailer, ResponseEnvelope, endpoint,
    form::{PendingSubmission, Submitter},
};
use url::Url;

/// Hands the submission to the endpoint without a network round trip
pub struct InProcessSubmitter {
    mailer: Arc<Mailer>,
}

impl InProcessSubmitter {
    pub fn new(mailer: Arc<Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait::async_trait]
impl Submitter for InProcessSubmitter {
    async fn submit(&self, submission: &PendingSubmission) -> anyhow::Result<ResponseEnvelope> {
        let body = serde_json::to_vec(submission)?;

        Ok(endpoint::handle(&body, &self.mailer).await.envelope)
    }
}

/// Posts the submission to a running server's `/api/contact`
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(base_url)?.join("/api/contact")?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("corweb/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, submission: &PendingSubmission) -> anyhow::Result<ResponseEnvelope> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let envelope: ResponseEnvelope = response.json().await?;

        tracing::debug!(%status, success = envelope.success, "Contact endpoint answered");

        Ok(envelope)
    }
}
