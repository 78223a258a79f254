//! Submission endpoint: parse, validate, normalize, dispatch.
//!
//! Every stage returns a `Result`; [`handle`] folds them into one of three
//! outcomes and each outcome maps to exactly one response shape.

use http::StatusCode;
use serde_json::Value;

use crate::{
    DispatchError, FAILED_TO_SEND_EMAIL, INTERNAL_SERVER_ERROR, Mailer, MessageId,
    ResponseEnvelope, ValidationResult, check, normalize,
};

#[derive(Debug)]
pub enum Fault {
    /// Unreadable body or anything else unexpected
    Internal,
    /// The email provider refused or could not be reached
    Dispatch,
}

#[derive(Debug)]
pub enum Outcome {
    Sent(MessageId),
    Rejected(ValidationResult),
    Failed(Fault),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: ResponseEnvelope,
}

impl From<Outcome> for Reply {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Sent(id) => Reply {
                status: StatusCode::OK,
                envelope: ResponseEnvelope::sent(Some(id).filter(|id| !id.is_empty())),
            },
            Outcome::Rejected(result) => Reply {
                status: StatusCode::BAD_REQUEST,
                envelope: ResponseEnvelope::invalid(result.into_errors()),
            },
            Outcome::Failed(Fault::Dispatch) => Reply {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                envelope: ResponseEnvelope::failed(FAILED_TO_SEND_EMAIL),
            },
            Outcome::Failed(Fault::Internal) => Reply {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                envelope: ResponseEnvelope::failed(INTERNAL_SERVER_ERROR),
            },
        }
    }
}

pub async fn process(body: &[u8], mailer: &Mailer) -> Outcome {
    // A body that is not JSON is reported like any other server fault.
    let input: Value = match serde_json::from_slice(body) {
        Ok(input) => input,
        Err(err) => {
            tracing::error!(err = %err, "Contact form error");
            return Outcome::Failed(Fault::Internal);
        }
    };

    let validated = match check(&input) {
        Ok(validated) => validated,
        Err(result) => {
            tracing::debug!(errors = ?result.errors(), "Contact form rejected");
            return Outcome::Rejected(result);
        }
    };

    let submission = normalize(validated);

    match mailer.dispatch(&submission).await {
        Ok(id) => {
            tracing::info!(message_id = %id, "Contact form forwarded");
            Outcome::Sent(id)
        }
        Err(DispatchError::Provider(err)) => {
            tracing::error!(err = %err, "Email provider error");
            Outcome::Failed(Fault::Dispatch)
        }
        Err(err @ DispatchError::Render(_)) => {
            tracing::error!(err = %err, "Contact form error");
            Outcome::Failed(Fault::Internal)
        }
    }
}

pub async fn handle(body: &[u8], mailer: &Mailer) -> Reply {
    process(body, mailer).await.into()
}
