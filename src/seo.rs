//! schema.org JSON-LD documents embedded in page heads

use serde_json::{Value, json};

use crate::{config::SiteConfig, language::Locale, page::Page};

pub fn organization(site: &SiteConfig, locale: Locale) -> Value {
    let same_as: Vec<&str> = [&site.twitter, &site.linkedin, &site.github]
        .into_iter()
        .map(String::as_str)
        .filter(|link| !link.is_empty())
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.name,
        "url": site.base_url(),
        "logo": format!("{}/static/logo.svg", site.base_url()),
        "description": rust_i18n::t!("schema.organization_description", locale = locale.as_str()),
        "contactPoint": {
            "@type": "ContactPoint",
            "email": site.contact_email,
            "contactType": "customer service",
            "availableLanguage": Locale::ALL.map(|l| l.english_name()),
        },
        "sameAs": same_as,
    })
}

/// `BreadcrumbList` for a page, `None` when the page has no trail
pub fn breadcrumbs(site: &SiteConfig, locale: Locale, page: Page) -> Option<Value> {
    let trail = page.breadcrumbs();
    if trail.is_empty() {
        return None;
    }

    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": rust_i18n::t!(crumb.nav_key(), locale = locale.as_str()),
                "item": format!("{}{}", site.base_url(), crumb.href(locale)),
            })
        })
        .collect();

    Some(json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    }))
}

const SERVICES: [&str; 4] = ["web_apps", "mobile_apps", "custom_tools", "api_integrations"];

/// `ItemList` of the services offered, each provided by the organization
pub fn services(site: &SiteConfig, locale: Locale) -> Value {
    let items: Vec<Value> = SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": {
                    "@type": "Service",
                    "name": rust_i18n::t!(format!("schema.services.{service}.name"), locale = locale.as_str()),
                    "description": rust_i18n::t!(format!("schema.services.{service}.description"), locale = locale.as_str()),
                    "provider": {
                        "@type": "Organization",
                        "name": site.name,
                        "url": site.base_url(),
                    },
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": items,
    })
}

/// Serialize for a `<script type="application/ld+json">` body.
///
/// `</` is escaped so submitted or translated text can never close the tag.
pub fn to_script(value: &Value) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_skips_empty_links() {
        let site = SiteConfig::default();
        let schema = organization(&site, Locale::En);

        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["url"], "https://corweb.com");
        assert_eq!(schema["sameAs"].as_array().map(Vec::len), Some(2));
        assert_eq!(
            schema["contactPoint"]["availableLanguage"],
            json!(["English", "French"])
        );
    }

    #[test]
    fn test_breadcrumb_positions_and_urls() {
        let site = SiteConfig::default();
        let schema = breadcrumbs(&site, Locale::Fr, Page::Contact).unwrap();
        let items = schema["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://corweb.com/fr");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["item"], "https://corweb.com/fr/contact");
    }

    #[test]
    fn test_no_breadcrumbs_for_legal_pages() {
        assert!(breadcrumbs(&SiteConfig::default(), Locale::En, Page::Legal).is_none());
    }

    #[test]
    fn test_services_list() {
        let schema = services(&SiteConfig::default(), Locale::En);
        let items = schema["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[3]["position"], 4);
        assert_eq!(items[0]["item"]["provider"]["name"], "Corweb");
    }

    #[test]
    fn test_script_cannot_close_tag() {
        let script = to_script(&json!({"name": "</script><script>alert(1)"})).unwrap();

        assert!(!script.contains("</script>"));
    }
}
