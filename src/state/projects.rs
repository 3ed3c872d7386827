//! Project grid state: load lifecycle, rendered cards, and tag filtering.
//!
//! DESIGN
//! ======
//! The displayed count, the empty message, and card visibility are all
//! answered from this one struct, so the count can never drift from the set
//! of visible cards. `begin_loading` doubles as the load guard: both
//! visibility triggers call it, and only the first one wins a fetch.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::project_card::{FILTER_ALL, ProjectCard};
use crate::config::SiteConfig;
use crate::net::error::FeedError;
use crate::net::types::ProjectEntry;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects. Please try again later.";

/// Lifecycle of the project feed for this page visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectsState {
    pub status: LoadStatus,
    pub cards: Vec<ProjectCard>,
    pub active_filter: String,
    /// Number shown in the projects header and the stats tile.
    pub count: usize,
    pub error: Option<String>,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
            cards: Vec::new(),
            active_filter: FILTER_ALL.to_owned(),
            count: 0,
            error: None,
        }
    }
}

impl ProjectsState {
    /// Enter `Loading` unless a load is in flight or already succeeded.
    ///
    /// Returns `true` when the caller should issue the fetch.
    pub fn begin_loading(&mut self) -> bool {
        if matches!(self.status, LoadStatus::Loading | LoadStatus::Ready) {
            return false;
        }
        self.status = LoadStatus::Loading;
        self.error = None;
        true
    }

    /// Replace the grid with the project entries of a fresh feed.
    ///
    /// Non-project entries are skipped. The filter resets to `all`.
    pub fn apply_entries(&mut self, entries: &[ProjectEntry], config: &SiteConfig) {
        self.cards = entries
            .iter()
            .filter(|entry| entry.is_project())
            .map(|entry| ProjectCard::from_entry(entry, config))
            .collect();
        self.active_filter = FILTER_ALL.to_owned();
        self.status = LoadStatus::Ready;
        self.error = None;
        self.update_projects_count(self.cards.len());
    }

    /// Absorb a failed load: zero count and an error block in place of cards.
    pub fn apply_failure(&mut self, err: &FeedError) {
        leptos::logging::error!("error fetching projects: {err}");
        self.cards.clear();
        self.status = LoadStatus::Failed;
        self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
        self.update_projects_count(0);
    }

    /// Activate `value` as the only filter and recount visible cards.
    ///
    /// Filters are wired only once cards have loaded; earlier clicks are
    /// ignored.
    pub fn select_filter(&mut self, value: &str) {
        if self.status != LoadStatus::Ready {
            return;
        }
        value.clone_into(&mut self.active_filter);
        let visible = self.visible_count();
        self.update_projects_count(visible);
    }

    pub fn update_projects_count(&mut self, count: usize) {
        self.count = count;
    }

    pub fn is_card_visible(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|card| card.matches(&self.active_filter))
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matches(&self.active_filter)).count()
    }

    pub fn is_filter_active(&self, value: &str) -> bool {
        self.active_filter == value
    }

    pub fn shows_skeleton(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// The card container is shown for a non-empty grid or the error block.
    pub fn shows_container(&self) -> bool {
        match self.status {
            LoadStatus::Ready => !self.cards.is_empty(),
            LoadStatus::Failed => true,
            LoadStatus::Idle | LoadStatus::Loading => false,
        }
    }

    pub fn shows_empty_message(&self) -> bool {
        self.status == LoadStatus::Ready && self.count == 0
    }
}
