//! Render model for one project card.
//!
//! A card is derived 1:1 from a [`ProjectEntry`] with every optional field
//! already resolved to its display fallback, so the view layer never branches
//! on missing data.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use crate::config::SiteConfig;
use crate::net::types::ProjectEntry;

pub const FALLBACK_HREF: &str = "#";
pub const FALLBACK_ALT: &str = "Project image";
pub const FALLBACK_TITLE: &str = "Untitled Project";
pub const FALLBACK_DESCRIPTION: &str = "No description available";
pub const FALLBACK_ICON: &str = "fa-file-alt";
pub const FALLBACK_READING_TIME: &str = "3 min";

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub href: String,
    pub image: String,
    pub alt: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: String,
    pub icon: String,
    pub reading_time: String,
    /// Lowercased categories then tags, space-joined.
    pub filter_key: String,
}

impl ProjectCard {
    pub fn from_entry(entry: &ProjectEntry, config: &SiteConfig) -> Self {
        let title = entry.title.clone();
        Self {
            href: entry
                .permalink
                .as_deref()
                .map_or_else(|| FALLBACK_HREF.to_owned(), |link| resolve_link(&config.site_base_url, link)),
            image: entry.image.clone().unwrap_or_else(|| config.default_thumbnail.clone()),
            alt: title.clone().unwrap_or_else(|| FALLBACK_ALT.to_owned()),
            title: title.unwrap_or_else(|| FALLBACK_TITLE.to_owned()),
            description: entry.description.clone().unwrap_or_else(|| FALLBACK_DESCRIPTION.to_owned()),
            categories: entry.categories.clone(),
            date: entry.date.clone().unwrap_or_default(),
            icon: entry.icon.clone().unwrap_or_else(|| FALLBACK_ICON.to_owned()),
            reading_time: entry.reading_time.clone().unwrap_or_else(|| FALLBACK_READING_TIME.to_owned()),
            filter_key: filter_key(&entry.categories, &entry.tags),
        }
    }

    /// Substring match against the filter key; `all` matches everything.
    ///
    /// A filter that prefixes a longer tag also matches it (`post` hits
    /// `posts`).
    pub fn matches(&self, filter: &str) -> bool {
        filter == FILTER_ALL || self.filter_key.contains(filter)
    }
}

/// Lowercase and space-join categories followed by tags, preserving order.
pub fn filter_key(categories: &[String], tags: &[String]) -> String {
    categories.iter().chain(tags).map(|label| label.to_lowercase()).collect::<Vec<_>>().join(" ")
}

fn resolve_link(base: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_owned();
    }
    let base = base.trim_end_matches('/');
    if link.starts_with('/') { format!("{base}{link}") } else { format!("{base}/{link}") }
}
