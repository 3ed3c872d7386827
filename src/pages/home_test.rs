#![cfg(not(feature = "csr"))]

use super::*;
use crate::net::types::ChannelStats;
use crate::state::projects::LoadStatus;

fn project(title: &str) -> ProjectEntry {
    ProjectEntry { title: Some(title.to_owned()), note: Some("project".to_owned()), ..ProjectEntry::default() }
}

#[test]
fn apply_projects_result_renders_success() {
    Owner::new().with(|| {
        let projects = RwSignal::new(ProjectsState::default());
        projects.update(|p| {
            p.begin_loading();
        });
        apply_projects_result(projects, Ok(vec![project("A"), project("B")]), &SiteConfig::default());
        let state = projects.get_untracked();
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.count, 2);
    });
}

#[test]
fn apply_projects_result_absorbs_failure() {
    Owner::new().with(|| {
        let projects = RwSignal::new(ProjectsState::default());
        apply_projects_result(projects, Err(FeedError::Unavailable), &SiteConfig::default());
        let state = projects.get_untracked();
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.count, 0);
        assert!(state.error.is_some());
    });
}

#[test]
fn animate_stats_lands_on_snapshot_values() {
    Owner::new().with(|| {
        let stats = RwSignal::new(StatsState::default());
        let snapshot = StatsSnapshot { channel: ChannelStats { subs: 12_500, channel_views: 20_000 }, posts: 14 };
        animate_stats(stats, snapshot, &CounterDurations::default());
        let state = stats.get_untracked();
        assert_eq!(state.subscribers, 12_500);
        assert_eq!(state.views, 20_000);
        assert_eq!(state.posts, 14);
        assert_eq!(state.projects, 0);
    });
}

#[test]
fn projects_tile_writes_through_before_reveal() {
    Owner::new().with(|| {
        let stats = RwSignal::new(StatsState::default());
        let projects = RwSignal::new(ProjectsState::default());
        projects.update(|p| {
            p.begin_loading();
        });
        apply_projects_result(
            projects,
            Ok(vec![project("A"), project("B"), project("C")]),
            &SiteConfig::default(),
        );
        let count = projects.get_untracked().count;
        sync_projects_tile(stats, count, 1000.0);
        assert_eq!(count, 3);
        assert_eq!(stats.get_untracked().projects, 3);
        assert!(!stats.get_untracked().projects_animated);
    });
}

#[test]
fn projects_tile_counts_up_on_reveal_after_early_load() {
    Owner::new().with(|| {
        let stats = RwSignal::new(StatsState::default());
        sync_projects_tile(stats, 4, 1000.0);
        assert_eq!(stats.get_untracked().projects, 4);

        stats.update(StatsState::mark_revealed);
        sync_projects_tile(stats, 4, 1000.0);
        assert!(stats.get_untracked().projects_animated);
        assert_eq!(stats.get_untracked().projects, 4);
    });
}

#[test]
fn projects_tile_counts_up_then_follows_filters() {
    Owner::new().with(|| {
        let stats = RwSignal::new(StatsState::default());
        stats.update(StatsState::mark_revealed);
        sync_projects_tile(stats, 0, 1000.0);
        assert!(!stats.get_untracked().projects_animated);

        sync_projects_tile(stats, 6, 1000.0);
        assert!(stats.get_untracked().projects_animated);
        assert_eq!(stats.get_untracked().projects, 6);

        sync_projects_tile(stats, 2, 1000.0);
        assert_eq!(stats.get_untracked().projects, 2);

        sync_projects_tile(stats, 0, 1000.0);
        assert_eq!(stats.get_untracked().projects, 0);
    });
}
