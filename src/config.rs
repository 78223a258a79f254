use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use corweb_notification::EmailConfig;
use serde::Deserialize;
use std::env;

use crate::observability::LogFormat;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Public facing site identity, used in pages, metadata and the sitemap
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_url")]
    pub url: String,
    /// Address shown to visitors, not the one contact emails are sent to
    #[serde(default = "default_site_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_github")]
    pub github: String,
    #[serde(default = "default_linkedin")]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    /// Analytics script URL, loaded only after cookie consent
    #[serde(default)]
    pub analytics_script: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            url: default_site_url(),
            contact_email: default_site_contact_email(),
            github: default_github(),
            linkedin: default_linkedin(),
            twitter: String::new(),
            analytics_script: String::new(),
        }
    }
}

impl SiteConfig {
    /// Site url without trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

fn default_site_name() -> String {
    "Corweb".to_string()
}

fn default_site_url() -> String {
    "https://corweb.com".to_string()
}

fn default_site_contact_email() -> String {
    "hello@corweb.io".to_string()
}

fn default_github() -> String {
    "https://github.com/corweb-io".to_string()
}

fn default_linkedin() -> String {
    "https://www.linkedin.com/company/corweb-io".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (RESEND_API_KEY, RESEND_FROM_EMAIL, CONTACT_EMAIL, SITE_URL)
    /// 2. Environment variables (CORWEB__EMAIL__API_KEY, etc.)
    /// 3. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CORWEB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("RESEND_API_KEY", "email.api_key"),
            ("RESEND_FROM_EMAIL", "email.from_address"),
            ("CONTACT_EMAIL", "email.contact_address"),
            ("SITE_URL", "site.url"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        url::Url::parse(&self.site.url)
            .map_err(|e| format!("Invalid site url '{}': {e}", self.site.url))?;

        self.email.validate()
    }
}
