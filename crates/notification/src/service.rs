//! Outbound email plumbing shared by every transport

use std::sync::Arc;

use lettre::message::Mailbox;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{ResendTransport, SmtpTransport};

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: String::new(),
            api_url: default_api_url(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_address() -> String {
    "Corweb <onboarding@resend.dev>".to_string()
}

fn default_contact_address() -> String {
    "hello@corweb.io".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

impl EmailConfig {
    /// Check that both fixed addresses are valid mailboxes
    pub fn validate(&self) -> Result<(), String> {
        self.from_address
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid sender address '{}': {e}", self.from_address))?;

        self.contact_address
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid contact address '{}': {e}", self.contact_address))?;

        Ok(())
    }
}

/// A fully rendered message, ready to hand over to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Delivers one message per call and returns the provider message id
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<String>;
}

/// Build the transport selected by configuration
///
/// A missing credential only produces a warning here; sends will fail at
/// request time instead.
pub fn transport(config: &EmailConfig) -> anyhow::Result<Arc<dyn Transport>> {
    match config.provider {
        Provider::Resend => {
            if config.api_key.is_empty() {
                tracing::warn!("Resend api key is not set. Email sending will fail.");
            }

            tracing::info!(
                api_url = %config.api_url,
                from = %config.from_address,
                "Email service initialized with Resend"
            );

            Ok(Arc::new(ResendTransport::new(
                &config.api_url,
                &config.api_key,
            )?))
        }
        Provider::Smtp => Ok(Arc::new(SmtpTransport::new(config)?)),
    }
}
