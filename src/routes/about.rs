use axum::response::Response;

use crate::{
    page::Page,
    template::{Chrome, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub chrome: Chrome,
}

pub async fn page(template: Template) -> Response {
    let chrome = crate::try_page_response!(template.chrome(Page::About), template);

    template.render(AboutTemplate { chrome })
}
