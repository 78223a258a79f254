pub mod cache;
pub mod locale;
pub mod minify;

pub use cache::cache_control_middleware;
pub use locale::require_locale;
pub use minify::minify_html_middleware;
