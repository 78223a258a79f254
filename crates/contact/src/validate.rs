use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use validator::Validate;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// Permissive `local@domain.tld` shape, not an RFC 5322 check
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Reason reported by the submission endpoint
    pub fn reason(&self) -> &'static str {
        match self {
            Field::Name => "Name is required and must be at least 2 characters",
            Field::Email => "Valid email is required",
            Field::Message => "Message is required and must be at least 10 characters",
        }
    }

    /// Translation key shown next to the form input
    pub fn error_key(&self) -> &'static str {
        match self {
            Field::Name => "contact_page.form.errors.name_required",
            Field::Email => "contact_page.form.errors.email_invalid",
            Field::Message => "contact_page.form.errors.message_required",
        }
    }
}

#[derive(Validate)]
struct FieldRules {
    #[validate(length(min = 2))]
    name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    email: String,
    #[validate(length(min = 10))]
    message: String,
}

/// Fields breaking a rule, always in name, email, message order.
///
/// Name and message are measured after trimming, the email pattern is
/// matched against the raw value.
pub fn violations(name: &str, email: &str, message: &str) -> Vec<Field> {
    let rules = FieldRules {
        name: name.trim().to_owned(),
        email: email.to_owned(),
        message: message.trim().to_owned(),
    };

    let Err(errors) = rules.validate() else {
        return Vec::new();
    };

    let failed = errors.field_errors();

    Field::ALL
        .into_iter()
        .filter(|field| failed.contains_key(field.key()))
        .collect()
}

/// Ordered field error reasons, empty when the input is acceptable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl From<Vec<Field>> for ValidationResult {
    fn from(fields: Vec<Field>) -> Self {
        Self {
            errors: fields.iter().map(|f| f.reason().to_owned()).collect(),
        }
    }
}

/// Proof that an input passed validation.
///
/// Only [`check`] builds one, which makes it the sole way into
/// [`crate::normalize`].
#[derive(Debug, Clone, Copy)]
pub struct Validated<'a> {
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) company: Option<&'a str>,
    pub(crate) message: &'a str,
}

pub fn check(input: &Value) -> Result<Validated<'_>, ValidationResult> {
    let Some(object) = input.as_object() else {
        return Err(ValidationResult {
            errors: vec![INVALID_REQUEST_BODY.to_owned()],
        });
    };

    let text = |key: &str| object.get(key).and_then(Value::as_str);

    let name = text("name").unwrap_or_default();
    let email = text("email").unwrap_or_default();
    let message = text("message").unwrap_or_default();

    let failed = violations(name, email, message);
    if !failed.is_empty() {
        return Err(failed.into());
    }

    Ok(Validated {
        name,
        email,
        company: text("company"),
        message,
    })
}

pub fn validate(input: &Value) -> ValidationResult {
    check(input).err().unwrap_or_default()
}
