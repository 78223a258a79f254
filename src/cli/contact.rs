use clap::Args;
use corweb_contact::form::{ContactForm, FormFields, FormState, GENERIC_ERROR_KEY};

use crate::{client::HttpSubmitter, config::Config, language::Locale};

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub message: String,

    /// Base url of a running server (defaults to the configured address)
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long, default_value = "en")]
    pub locale: Locale,
}

/// Send a contact request to a running server through the form controller
pub async fn submit(config: &Config, args: ContactArgs) -> anyhow::Result<()> {
    let base_url = args
        .url
        .unwrap_or_else(|| format!("http://{}:{}", config.server.host, config.server.port));
    let submitter = HttpSubmitter::new(&base_url)?;
    let locale = args.locale.as_str();

    let mut form = ContactForm::new();
    let fields = FormFields {
        name: args.name,
        email: args.email,
        company: args.company.unwrap_or_default(),
        message: args.message,
    };

    match form.run(fields, &submitter).await {
        FormState::Success => {
            tracing::info!(
                endpoint = %submitter.endpoint(),
                "{}",
                rust_i18n::t!("contact_page.form.success_title", locale = locale)
            );

            Ok(())
        }
        FormState::Idle => {
            let errors = form.errors().map(|errors| [errors.name, errors.email, errors.message]);
            let reasons: Vec<String> = errors
                .into_iter()
                .flatten()
                .flatten()
                .map(|key| rust_i18n::t!(key, locale = locale).to_string())
                .collect();

            anyhow::bail!(reasons.join("\n"))
        }
        FormState::Submitting | FormState::Error => {
            anyhow::bail!(rust_i18n::t!(GENERIC_ERROR_KEY, locale = locale).to_string())
        }
    }
}
