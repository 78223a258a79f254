use anyhow::Context;
use lettre::{
    Message, Transport as _,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use ulid::Ulid;

use crate::{EmailConfig, OutgoingEmail, Transport};

/// SMTP delivery through lettre
#[derive(Clone)]
pub struct SmtpTransport {
    mailer: lettre::SmtpTransport,
}

impl SmtpTransport {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            lettre::SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            lettre::SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

/// `<ulid@domain>` using the sender's domain
fn message_id(from: &Mailbox) -> String {
    format!("<{}@{}>", Ulid::new(), from.email.domain())
}

#[async_trait::async_trait]
impl Transport for SmtpTransport {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<String> {
        let from: Mailbox = email.from.parse().context("Failed to parse from address")?;
        let id = message_id(&from);

        let message = Message::builder()
            .message_id(Some(id.clone()))
            .from(from)
            .to(email.to.parse().context("Failed to parse to address")?)
            .reply_to(
                email
                    .reply_to
                    .parse()
                    .context("Failed to parse reply-to address")?,
            )
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .context("Failed to build email message")?;

        tracing::info!(to = %email.to, subject = %email.subject, "Sending email over SMTP");

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(id)
    }
}
