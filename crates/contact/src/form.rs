//! Contact form controller.
//!
//! Transitions:
//!
//! | from       | to         | trigger                         |
//! |------------|------------|---------------------------------|
//! | idle       | submitting | submit with valid fields        |
//! | error      | submitting | resubmit with valid fields      |
//! | submitting | success    | endpoint answered `success`     |
//! | submitting | error      | any other answer or no answer   |
//!
//! [`Form`] encodes the table in its type parameter, so a transition such
//! as success to submitting has no method to call. [`ContactForm`] wraps the
//! typed states for callers that hold the form across events.

use serde::{Deserialize, Serialize};

use crate::{Field, ResponseEnvelope, violations};

/// Translation key of the banner shown for any server or network failure
pub const GENERIC_ERROR_KEY: &str = "contact_page.form.error_message";

/// Raw values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

/// Translation keys of per-field messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    /// Same thresholds as the submission endpoint
    pub fn check(fields: &FormFields) -> Self {
        let mut errors = Self::default();

        for field in violations(&fields.name, &fields.email, &fields.message) {
            let slot = match field {
                Field::Name => &mut errors.name,
                Field::Email => &mut errors.email,
                Field::Message => &mut errors.message,
            };
            *slot = Some(field.error_key());
        }

        errors
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Body sent to the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

impl From<&FormFields> for PendingSubmission {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.to_owned(),
            email: fields.email.to_owned(),
            company: Some(fields.company.to_owned()).filter(|c| !c.is_empty()),
            message: fields.message.to_owned(),
        }
    }
}

/// Delivers a pending submission to the endpoint and returns its answer
#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &PendingSubmission) -> anyhow::Result<ResponseEnvelope>;
}

#[derive(Debug, Default)]
pub struct Idle {
    pub fields: FormFields,
    pub errors: FieldErrors,
}

#[derive(Debug)]
pub struct Submitting {
    pub fields: FormFields,
}

#[derive(Debug)]
pub struct Success;

#[derive(Debug)]
pub struct Failed {
    pub fields: FormFields,
    pub errors: FieldErrors,
}

#[derive(Debug)]
pub struct Form<S> {
    state: S,
}

impl<S> Form<S> {
    pub fn state(&self) -> &S {
        &self.state
    }
}

impl Default for Form<Idle> {
    fn default() -> Self {
        Self::new()
    }
}

impl Form<Idle> {
    pub fn new() -> Self {
        Self {
            state: Idle::default(),
        }
    }

    /// Stays idle with field errors when client validation fails
    pub fn submit(self, fields: FormFields) -> Result<Form<Submitting>, Form<Idle>> {
        let errors = FieldErrors::check(&fields);
        if !errors.is_empty() {
            return Err(Form {
                state: Idle { fields, errors },
            });
        }

        Ok(Form {
            state: Submitting { fields },
        })
    }
}

impl Form<Failed> {
    pub fn submit(self, fields: FormFields) -> Result<Form<Submitting>, Form<Failed>> {
        let errors = FieldErrors::check(&fields);
        if !errors.is_empty() {
            return Err(Form {
                state: Failed { fields, errors },
            });
        }

        Ok(Form {
            state: Submitting { fields },
        })
    }
}

impl Form<Submitting> {
    pub fn pending(&self) -> PendingSubmission {
        PendingSubmission::from(&self.state.fields)
    }

    /// Inputs are discarded
    pub fn succeed(self) -> Form<Success> {
        Form { state: Success }
    }

    pub fn fail(self) -> Form<Failed> {
        Form {
            state: Failed {
                fields: self.state.fields,
                errors: FieldErrors::default(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Client validation failed, nothing was sent
    Rejected(FieldErrors),
    /// The caller must deliver this body, then call [`ContactForm::complete`]
    Started(PendingSubmission),
    /// A submission is in flight or the form already succeeded
    Ignored,
}

#[derive(Debug)]
pub enum ContactForm {
    Idle(Form<Idle>),
    Submitting(Form<Submitting>),
    Success(Form<Success>),
    Failed(Form<Failed>),
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm::Idle(Form::new())
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        match self {
            ContactForm::Idle(_) => FormState::Idle,
            ContactForm::Submitting(_) => FormState::Submitting,
            ContactForm::Success(_) => FormState::Success,
            ContactForm::Failed(_) => FormState::Error,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ContactForm::Submitting(_))
    }

    /// Current input values, `None` once the form succeeded
    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            ContactForm::Idle(form) => Some(&form.state().fields),
            ContactForm::Submitting(form) => Some(&form.state().fields),
            ContactForm::Failed(form) => Some(&form.state().fields),
            ContactForm::Success(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ContactForm::Idle(form) => Some(&form.state().errors),
            ContactForm::Failed(form) => Some(&form.state().errors),
            _ => None,
        }
    }

    /// Banner translation key while in the error state
    pub fn failure(&self) -> Option<&'static str> {
        match self {
            ContactForm::Failed(_) => Some(GENERIC_ERROR_KEY),
            _ => None,
        }
    }

    pub fn submit(&mut self, fields: FormFields) -> SubmitAttempt {
        let (next, attempt) = match std::mem::take(self) {
            ContactForm::Idle(form) => match form.submit(fields) {
                Ok(form) => {
                    let pending = form.pending();
                    (ContactForm::Submitting(form), SubmitAttempt::Started(pending))
                }
                Err(form) => {
                    let errors = form.state().errors.clone();
                    (ContactForm::Idle(form), SubmitAttempt::Rejected(errors))
                }
            },
            ContactForm::Failed(form) => match form.submit(fields) {
                Ok(form) => {
                    let pending = form.pending();
                    (ContactForm::Submitting(form), SubmitAttempt::Started(pending))
                }
                Err(form) => {
                    let errors = form.state().errors.clone();
                    (ContactForm::Failed(form), SubmitAttempt::Rejected(errors))
                }
            },
            current @ (ContactForm::Submitting(_) | ContactForm::Success(_)) => {
                (current, SubmitAttempt::Ignored)
            }
        };

        *self = next;
        attempt
    }

    /// Apply the endpoint answer; returns `false` when nothing was in flight
    pub fn complete(&mut self, result: anyhow::Result<ResponseEnvelope>) -> bool {
        let form = match std::mem::take(self) {
            ContactForm::Submitting(form) => form,
            current => {
                *self = current;
                return false;
            }
        };

        *self = match result {
            Ok(envelope) if envelope.success => ContactForm::Success(form.succeed()),
            Ok(envelope) => {
                tracing::debug!(?envelope, "Contact submission refused");
                ContactForm::Failed(form.fail())
            }
            Err(err) => {
                tracing::warn!(err = %err, "Contact submission did not complete");
                ContactForm::Failed(form.fail())
            }
        };

        true
    }

    pub async fn run<S: Submitter + ?Sized>(&mut self, fields: FormFields, submitter: &S) -> FormState {
        if let SubmitAttempt::Started(pending) = self.submit(fields) {
            let result = submitter.submit(&pending).await;
            self.complete(result);
        }

        self.state()
    }
}
