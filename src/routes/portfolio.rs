use axum::response::Response;

use crate::{
    page::Page,
    template::{Chrome, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub chrome: Chrome,
}

pub async fn page(template: Template) -> Response {
    let chrome = crate::try_page_response!(template.chrome(Page::Portfolio), template);

    template.render(PortfolioTemplate { chrome })
}
