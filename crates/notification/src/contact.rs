use askama::Template;

pub use askama::Error as RenderError;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub site: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub company: Option<&'a str>,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub site: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub company: Option<&'a str>,
    pub message: &'a str,
}

/// Rendered operator notification for one contact submission
pub struct ContactEmail {
    pub html: String,
    pub text: String,
}

impl ContactEmail {
    pub fn render(
        site: &str,
        name: &str,
        email: &str,
        company: Option<&str>,
        message: &str,
    ) -> Result<Self, RenderError> {
        let html = ContactHtmlTemplate {
            site,
            name,
            email,
            company,
            message,
        }
        .render()?;

        let text = ContactPlainTemplate {
            site,
            name,
            email,
            company,
            message,
        }
        .render()?;

        Ok(Self { html, text })
    }
}
