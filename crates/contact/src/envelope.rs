use serde::{Deserialize, Serialize};

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const FAILED_TO_SEND_EMAIL: &str = "Failed to send email";

/// JSON body returned by `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl ResponseEnvelope {
    pub fn sent(message_id: Option<String>) -> Self {
        Self {
            success: true,
            errors: None,
            error: None,
            message_id,
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors: Some(errors),
            error: None,
            message_id: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            success: false,
            errors: None,
            error: Some(error.to_owned()),
            message_id: None,
        }
    }
}
