use serde::Serialize;

use crate::Validated;

/// A contact request that passed validation and was normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

impl CanonicalSubmission {
    /// `New Contact: {name}`, with ` ({company})` appended when known
    pub fn subject(&self) -> String {
        match &self.company {
            Some(company) => format!("New Contact: {} ({company})", self.name),
            None => format!("New Contact: {}", self.name),
        }
    }
}

pub fn normalize(input: Validated<'_>) -> CanonicalSubmission {
    CanonicalSubmission {
        name: input.name.trim().to_owned(),
        email: input.email.trim().to_lowercase(),
        company: input
            .company
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned),
        message: input.message.trim().to_owned(),
    }
}
