pub mod assets;
pub mod cli;
pub mod client;
pub mod config;
pub mod form_tokens;
pub mod language;
pub mod middleware;
pub mod observability;
pub mod page;
pub mod preferences;
pub mod routes;
pub mod seo;
pub mod sitemap;
pub mod template;

pub use routes::{AppState, router};

rust_i18n::i18n!("locales", fallback = "en");
