use axum::{
    extract::{Form, State},
    response::Response,
};
use corweb_contact::{
    ResponseEnvelope,
    form::{ContactForm, FormFields, FormState},
};
use serde::Deserialize;

use crate::{
    client::InProcessSubmitter,
    form_tokens::{Claim, FormTokens},
    page::Page,
    routes::AppState,
    template::{Chrome, Template, filters},
};

/// Contact form as rendered for one controller state
pub struct FormView {
    pub success: bool,
    pub submitting: bool,
    pub token: String,
    pub fields: FormFields,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub message_error: Option<String>,
    pub failure: Option<String>,
}

impl FormView {
    fn new(form: &ContactForm, template: &Template, token: String) -> Self {
        let errors = form.errors();
        let message = |key: Option<&'static str>| key.map(|key| template.t(key));

        Self {
            success: form.fields().is_none(),
            submitting: form.is_submitting(),
            token,
            fields: form.fields().cloned().unwrap_or_default(),
            name_error: message(errors.and_then(|e| e.name)),
            email_error: message(errors.and_then(|e| e.email)),
            message_error: message(errors.and_then(|e| e.message)),
            failure: message(form.failure()),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub chrome: Chrome,
    pub form: FormView,
}

/// Posted form: the visible fields plus the one-shot token
#[derive(Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    fn split(self) -> (String, FormFields) {
        let fields = FormFields {
            name: self.name,
            email: self.email,
            company: self.company,
            message: self.message,
        };

        (self.token, fields)
    }
}

fn render(template: &Template, form: &ContactForm, token: String) -> Response {
    let chrome = crate::try_page_response!(template.chrome(Page::Contact), template);

    template.render(ContactTemplate {
        chrome,
        form: FormView::new(form, template, token),
    })
}

pub async fn page(template: Template) -> Response {
    render(&template, &ContactForm::new(), FormTokens::issue())
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactInput>,
) -> Response {
    let (token, fields) = input.split();
    let mut form = ContactForm::new();

    let claim = if token.is_empty() {
        Claim::Fresh
    } else {
        app_state.form_tokens.claim(&token)
    };

    match claim {
        Claim::Fresh => {
            let submitter = InProcessSubmitter::new(app_state.mailer.clone());
            let state = form.run(fields, &submitter).await;

            if !token.is_empty() {
                app_state.form_tokens.finish(&token, state == FormState::Success);
            }

            tracing::debug!(?state, locale = %template.locale(), "Contact form handled");
        }
        // The first request is still delivering, show the form as pending
        Claim::InFlight => {
            form.submit(fields);

            tracing::debug!("Repeated contact form ignored while in flight");
        }
        Claim::Sent => {
            form.submit(fields);
            form.complete(Ok(ResponseEnvelope::sent(None)));

            tracing::debug!("Repeated contact form ignored after delivery");
        }
    }

    // Retries after a failure get a new token
    let token = match form.state() {
        FormState::Submitting => token,
        _ => FormTokens::issue(),
    };

    render(&template, &form, token)
}
