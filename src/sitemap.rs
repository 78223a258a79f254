//! XML sitemap and robots.txt

use std::fmt::{self, Write};

use time::Date;

use crate::{language::Locale, page::Page};

/// One `<url>` per locale and navigable page, each listing every
/// language version as an `xhtml:link` alternate
pub fn render(base_url: &str, today: Date) -> String {
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
        "\n",
    ));

    for locale in Locale::ALL {
        for page in Page::NAV {
            if let Err(err) = write_url(&mut xml, base_url, today, locale, page) {
                tracing::error!(err = %err, "Failed to write sitemap entry");
            }
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

fn write_url(
    xml: &mut String,
    base_url: &str,
    today: Date,
    locale: Locale,
    page: Page,
) -> fmt::Result {
    let priority = if page == Page::Home { "1.0" } else { "0.8" };

    writeln!(xml, "  <url>")?;
    writeln!(xml, "    <loc>{base_url}{}</loc>", page.href(locale))?;
    writeln!(xml, "    <lastmod>{today}</lastmod>")?;
    writeln!(xml, "    <changefreq>monthly</changefreq>")?;
    writeln!(xml, "    <priority>{priority}</priority>")?;
    for alternate in Locale::ALL {
        writeln!(
            xml,
            r#"    <xhtml:link rel="alternate" hreflang="{alternate}" href="{base_url}{}"/>"#,
            page.href(alternate)
        )?;
    }
    writeln!(xml, "  </url>")
}

pub fn robots(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {base_url}/sitemap.xml\n")
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    fn today() -> Date {
        Date::from_calendar_date(2026, Month::October, 16).unwrap()
    }

    #[test]
    fn test_every_locale_and_page_listed() {
        let xml = render("https://corweb.com", today());

        assert_eq!(xml.matches("<url>").count(), Locale::ALL.len() * Page::NAV.len());
        assert!(xml.contains("<loc>https://corweb.com/en</loc>"));
        assert!(xml.contains("<loc>https://corweb.com/fr/contact</loc>"));
        assert!(xml.contains("<lastmod>2026-10-16</lastmod>"));
        assert!(!xml.contains("/legal"));
    }

    #[test]
    fn test_priorities() {
        let xml = render("https://corweb.com", today());

        assert_eq!(xml.matches("<priority>1.0</priority>").count(), 2);
        assert_eq!(xml.matches("<priority>0.8</priority>").count(), 8);
    }

    #[test]
    fn test_alternates() {
        let xml = render("https://corweb.com", today());

        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="fr" href="https://corweb.com/fr/about"/>"#
        ));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        assert!(robots("https://corweb.io").ends_with("Sitemap: https://corweb.io/sitemap.xml\n"));
    }
}
