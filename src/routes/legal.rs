use axum::response::Response;

use crate::{
    page::Page,
    template::{Chrome, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "legal.html")]
pub struct LegalTemplate {
    pub chrome: Chrome,
}

pub async fn page(template: Template) -> Response {
    let chrome = crate::try_page_response!(template.chrome(Page::Legal), template);

    template.render(LegalTemplate { chrome })
}
