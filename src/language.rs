use std::str::FromStr;

use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// OpenGraph `og:locale` value
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Fr => "fr_FR",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "French",
        }
    }

    /// Best supported locale for an `Accept-Language` header value.
    ///
    /// Tags are ranked by quality, ties keep header order, and only the
    /// primary subtag is compared (`fr-CA` selects `fr`).
    pub fn negotiate(accept_language: Option<&str>) -> Self {
        let Some(header) = accept_language else {
            return Locale::default();
        };

        let mut ranges: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|range| {
                let mut parts = range.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() {
                    return None;
                }

                let quality = parts
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);

                Some((tag, quality))
            })
            .filter(|(_, quality)| *quality > 0.0)
            .collect();

        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges
            .into_iter()
            .find_map(|(tag, _)| {
                let primary = tag.split('-').next().unwrap_or(tag);
                Locale::from_str(&primary.to_lowercase()).ok()
            })
            .unwrap_or_default()
    }
}

/// Locale named by the first segment of a request path
pub fn path_locale(path: &str) -> Option<Locale> {
    let segment = path.trim_start_matches('/').split('/').next()?;

    Locale::from_str(segment).ok()
}

/// The path without its locale segment, `""` for the locale root
pub fn strip_locale(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((segment, rest)) if Locale::from_str(segment).is_ok() => {
            &path[path.len() - rest.len() - 1..]
        }
        None if Locale::from_str(trimmed).is_ok() => "",
        _ => path,
    }
}
