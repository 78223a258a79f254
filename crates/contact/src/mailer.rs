use std::sync::Arc;

use corweb_notification::{
    OutgoingEmail, Transport,
    contact::{ContactEmail, RenderError},
};

use crate::CanonicalSubmission;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to render contact email: {0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Provider(anyhow::Error),
}

/// Provider-assigned identifier of a sent message
pub type MessageId = String;

pub type DispatchOutcome = Result<MessageId, DispatchError>;

/// Sends contact submissions to the operator mailbox.
///
/// Sender and recipient are fixed at construction; the submitter's address
/// only ever lands in `Reply-To`.
#[derive(Clone)]
pub struct Mailer {
    transport: Arc<dyn Transport>,
    from: String,
    to: String,
    site: String,
}

impl Mailer {
    pub fn new(
        transport: Arc<dyn Transport>,
        from: impl Into<String>,
        to: impl Into<String>,
        site: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            from: from.into(),
            to: to.into(),
            site: site.into(),
        }
    }

    pub fn compose(&self, submission: &CanonicalSubmission) -> Result<OutgoingEmail, DispatchError> {
        let body = ContactEmail::render(
            &self.site,
            &submission.name,
            &submission.email,
            submission.company.as_deref(),
            &submission.message,
        )?;

        Ok(OutgoingEmail {
            from: self.from.to_owned(),
            to: self.to.to_owned(),
            reply_to: submission.email.to_owned(),
            subject: submission.subject(),
            html: body.html,
            text: body.text,
        })
    }

    /// One attempt, no retry
    pub async fn dispatch(&self, submission: &CanonicalSubmission) -> DispatchOutcome {
        let email = self.compose(submission)?;

        self.transport
            .send(&email)
            .await
            .map_err(DispatchError::Provider)
    }
}
