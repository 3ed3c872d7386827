//! Async fan-out for the page's visibility triggers.
//!
//! A trigger launches a bounded set of independent loads. Each result is
//! handed to its callback as soon as it resolves, and the returned future
//! completes only when every launched load has finished. Nothing here is
//! cancellable.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::config::SiteConfig;
use crate::net::api::{fetch_blog_post_count, fetch_project_entries, fetch_youtube_subscribers};
use crate::net::error::FeedError;
use crate::net::transport::FeedTransport;
use crate::net::types::{ChannelStats, ProjectEntry};

/// Stat values for the count-up tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub channel: ChannelStats,
    pub posts: u64,
}

/// Which loads a [`run_reveal`] call launched and finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealReport {
    pub stats_loaded: bool,
    pub projects_loaded: bool,
}

/// Fetch both stat feeds concurrently. Never fails.
pub async fn load_stats(transport: &dyn FeedTransport, config: &SiteConfig) -> StatsSnapshot {
    let (channel, posts) =
        futures::join!(fetch_youtube_subscribers(transport, config), fetch_blog_post_count(transport, config));
    StatsSnapshot { channel, posts }
}

/// Fetch the project entries of the content feed.
///
/// # Errors
///
/// Returns the feed error for the pipeline to render.
pub async fn load_projects(
    transport: &dyn FeedTransport,
    config: &SiteConfig,
) -> Result<Vec<ProjectEntry>, FeedError> {
    fetch_project_entries(transport, config).await
}

/// Launch the stats load, and the project load when `include_projects` is
/// set, then wait for both.
pub async fn run_reveal<S, P>(
    transport: &dyn FeedTransport,
    config: &SiteConfig,
    include_projects: bool,
    on_stats: S,
    on_projects: P,
) -> RevealReport
where
    S: FnOnce(StatsSnapshot),
    P: FnOnce(Result<Vec<ProjectEntry>, FeedError>),
{
    let stats = async {
        on_stats(load_stats(transport, config).await);
        true
    };
    let projects = async {
        if !include_projects {
            return false;
        }
        on_projects(load_projects(transport, config).await);
        true
    };
    let (stats_loaded, projects_loaded) = futures::join!(stats, projects);
    RevealReport { stats_loaded, projects_loaded }
}
