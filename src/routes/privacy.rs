use axum::response::Response;

use crate::{
    page::Page,
    template::{Chrome, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub chrome: Chrome,
}

pub async fn page(template: Template) -> Response {
    let chrome = crate::try_page_response!(template.chrome(Page::Privacy), template);

    template.render(PrivacyTemplate { chrome })
}
