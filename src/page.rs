use crate::language::Locale;

/// Every page the site renders, localized under `/{locale}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Portfolio,
    About,
    Contact,
    Legal,
    Privacy,
    NotFound,
    ServerError,
}

impl Page {
    /// Header navigation order, also the sitemap order
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::Services,
        Page::Portfolio,
        Page::About,
        Page::Contact,
    ];

    const ROUTED: [Page; 7] = [
        Page::Home,
        Page::Services,
        Page::Portfolio,
        Page::About,
        Page::Contact,
        Page::Legal,
        Page::Privacy,
    ];

    /// Path below the locale prefix
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home | Page::NotFound | Page::ServerError => "",
            Page::Services => "/services",
            Page::Portfolio => "/portfolio",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Legal => "/legal",
            Page::Privacy => "/privacy",
        }
    }

    /// Routed page for an un-prefixed path such as `/about`
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.trim_end_matches('/');

        Self::ROUTED.into_iter().find(|page| page.path() == path)
    }

    pub fn href(&self, locale: Locale) -> String {
        format!("/{locale}{}", self.path())
    }

    /// Translation key of the navigation label
    pub fn nav_key(&self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::Services => "nav.services",
            Page::Portfolio => "nav.portfolio",
            Page::About => "nav.about",
            Page::Contact => "nav.contact",
            Page::Legal => "footer.legal",
            Page::Privacy => "footer.privacy",
            Page::NotFound => "not_found.title",
            Page::ServerError => "server_error.title",
        }
    }

    /// Title key, `None` when the page uses the bare site title
    pub fn title_key(&self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::Services => Some("services_page.title"),
            Page::Portfolio => Some("portfolio_page.title"),
            Page::About => Some("about_page.title"),
            Page::Contact => Some("contact_page.title"),
            Page::Legal => Some("legal_page.title"),
            Page::Privacy => Some("privacy_page.title"),
            Page::NotFound => Some("not_found.title"),
            Page::ServerError => Some("server_error.title"),
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            Page::Home | Page::NotFound | Page::ServerError => "metadata.description",
            Page::Services => "services_page.description",
            Page::Portfolio => "portfolio_page.description",
            Page::About => "about_page.description",
            Page::Contact => "contact_page.description",
            Page::Legal => "legal_page.description",
            Page::Privacy => "privacy_page.description",
        }
    }

    /// Breadcrumb trail below home, empty for pages without one
    pub fn breadcrumbs(&self) -> &'static [Page] {
        match self {
            Page::Services => &[Page::Home, Page::Services],
            Page::Portfolio => &[Page::Home, Page::Portfolio],
            Page::About => &[Page::Home, Page::About],
            Page::Contact => &[Page::Home, Page::Contact],
            _ => &[],
        }
    }

    pub fn is_indexable(&self) -> bool {
        !matches!(self, Page::NotFound | Page::ServerError)
    }
}
