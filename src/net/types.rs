//! Typed records for the three remote feeds.
//!
//! DESIGN
//! ======
//! Required fields are plain struct fields, so a payload without them fails to
//! decode and surfaces as `FeedError::MalformedPayload`. Optional fields go
//! through lenient deserializers: a missing, null, empty, or wrong-typed value
//! becomes `None` (or an empty list) instead of rejecting the whole feed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Live subscriber-count payload (`socialcounts` endpoint).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriberPayload {
    pub est_sub: f64,
    pub table: Vec<CountRow>,
}

/// One labelled counter inside [`SubscriberPayload::table`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountRow {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub count: Option<f64>,
}

impl SubscriberPayload {
    /// Count of the first row labelled `label`, or 0 when there is none.
    pub fn table_count(&self, label: &str) -> f64 {
        self.table
            .iter()
            .find(|row| row.name.as_deref() == Some(label))
            .and_then(|row| row.count)
            .unwrap_or(0.0)
    }
}

/// One entry of the blog-wide index feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogIndexEntry {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub permalink: Option<String>,
}

impl BlogIndexEntry {
    /// A real post page, as opposed to the `/posts/` section listing.
    pub fn is_post(&self) -> bool {
        self.kind.as_deref() == Some("posts")
            && self.permalink.as_deref().is_some_and(|link| !link.ends_with("/posts/"))
    }
}

/// One entry of the localized content index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub permalink: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(rename = "readingTime", deserialize_with = "lenient_string")]
    pub reading_time: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub note: Option<String>,
}

impl ProjectEntry {
    /// Entries whose `note` is `project` (any case) belong in the grid.
    pub fn is_project(&self) -> bool {
        self.note.as_deref().is_some_and(|note| note.to_lowercase() == "project")
    }
}

/// Subscriber and channel-view totals for the stats section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    pub subs: u64,
    pub channel_views: u64,
}

/// Convert a feed number to a display count, flooring and clamping at 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn count_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 { value.floor() as u64 } else { 0 }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn lenient_string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
