use std::sync::Arc;

use axum::{
    Router, middleware,
    response::Response,
    routing::{get, post},
};
use corweb_contact::Mailer;

use crate::{config::Config, form_tokens::FormTokens, template::Template};

mod about;
mod api;
mod contact;
mod health;
mod index;
mod legal;
mod portfolio;
mod preferences;
mod privacy;
mod services;
mod sitemap;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub mailer: Arc<Mailer>,
    pub form_tokens: Arc<FormTokens>,
}

pub async fn fallback(template: Template) -> Response {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    let pages = Router::new()
        .route("/{locale}", get(index::page))
        .route("/{locale}/services", get(services::page))
        .route("/{locale}/portfolio", get(portfolio::page))
        .route("/{locale}/about", get(about::page))
        .route("/{locale}/contact", get(contact::page).post(contact::action))
        .route("/{locale}/legal", get(legal::page))
        .route("/{locale}/privacy", get(privacy::page))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            crate::middleware::require_locale,
        ));

    Router::new()
        .route("/", get(index::redirect))
        .route("/health", get(health::health))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/robots.txt", get(sitemap::robots))
        .route("/api/contact", post(api::contact))
        .route("/preferences/consent", post(preferences::consent))
        .route("/preferences/theme", post(preferences::theme))
        .merge(pages)
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService)
        .with_state(app_state)
}
