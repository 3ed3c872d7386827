//! Feed fetchers for the stats section and the project grid.
//!
//! ERROR HANDLING
//! ==============
//! The two stat fetchers never fail: any transport, status, or payload error
//! is logged once and replaced by the configured fallback. The project fetch
//! returns its error so the pipeline can render a failure message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FeedError;
use super::transport::{FeedTransport, get_json};
use super::types::{BlogIndexEntry, ChannelStats, ProjectEntry, SubscriberPayload, count_from_f64};
use crate::config::SiteConfig;

/// Label of the subscriber-table row holding lifetime channel views.
pub const CHANNEL_VIEWS_LABEL: &str = "Channel Views";

/// Fetch live subscriber and channel-view totals.
///
/// Falls back to `config.fallbacks` on any failure; never retries.
pub async fn fetch_youtube_subscribers(transport: &dyn FeedTransport, config: &SiteConfig) -> ChannelStats {
    match get_json::<SubscriberPayload>(transport, &config.subscribers_url).await {
        Ok(payload) => channel_stats_from_payload(&payload),
        Err(e) => {
            leptos::logging::warn!("subscriber stats unavailable, using fallback: {e}");
            ChannelStats { subs: config.fallbacks.subscribers, channel_views: config.fallbacks.channel_views }
        }
    }
}

/// Count published blog posts in the blog-wide index.
///
/// Falls back to `config.fallbacks.posts` on any failure.
pub async fn fetch_blog_post_count(transport: &dyn FeedTransport, config: &SiteConfig) -> u64 {
    match get_json::<Vec<BlogIndexEntry>>(transport, &config.blog_index_url).await {
        Ok(entries) => count_posts(&entries),
        Err(e) => {
            leptos::logging::warn!("blog post count unavailable, using fallback: {e}");
            config.fallbacks.posts
        }
    }
}

/// Fetch the content index and keep only project entries, in feed order.
///
/// # Errors
///
/// Returns the transport error, or [`FeedError::MalformedPayload`] when the
/// feed is not a JSON array of objects.
pub async fn fetch_project_entries(
    transport: &dyn FeedTransport,
    config: &SiteConfig,
) -> Result<Vec<ProjectEntry>, FeedError> {
    let entries = get_json::<Vec<ProjectEntry>>(transport, &config.content_index_url).await?;
    Ok(select_projects(entries))
}

fn channel_stats_from_payload(payload: &SubscriberPayload) -> ChannelStats {
    ChannelStats {
        subs: count_from_f64(payload.est_sub),
        channel_views: count_from_f64(payload.table_count(CHANNEL_VIEWS_LABEL)),
    }
}

fn count_posts(entries: &[BlogIndexEntry]) -> u64 {
    entries.iter().filter(|entry| entry.is_post()).count() as u64
}

/// Keep entries marked as projects.
pub fn select_projects(entries: Vec<ProjectEntry>) -> Vec<ProjectEntry> {
    entries.into_iter().filter(ProjectEntry::is_project).collect()
}
