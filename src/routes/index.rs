use axum::{
    http::{HeaderMap, header::ACCEPT_LANGUAGE},
    response::{Redirect, Response},
};

use crate::{
    language::Locale,
    page::Page,
    template::{Chrome, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub chrome: Chrome,
}

pub async fn page(template: Template) -> Response {
    let chrome = crate::try_page_response!(template.chrome(Page::Home), template);

    template.render(IndexTemplate { chrome })
}

/// `/` has no content of its own
pub async fn redirect(headers: HeaderMap) -> Redirect {
    let locale = Locale::negotiate(headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()));

    Redirect::temporary(&Page::Home.href(locale))
}
