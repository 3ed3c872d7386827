//! Displayed values for the animated stats tiles.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Identifies one stats tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterSlot {
    Subscribers,
    Views,
    Posts,
    Projects,
}

impl CounterSlot {
    /// DOM id of the tile's number element.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Subscribers => "subscribers-count",
            Self::Views => "views-count",
            Self::Posts => "posts-count",
            Self::Projects => "projects-count",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Subscribers => "YouTube Subscribers",
            Self::Views => "Channel Views",
            Self::Posts => "Blog Posts",
            Self::Projects => "Projects",
        }
    }
}

/// Integers currently rendered in the stats section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    pub subscribers: i64,
    pub views: i64,
    pub posts: i64,
    pub projects: i64,
    /// Set when the stats section first scrolls into view.
    pub revealed: bool,
    /// The projects tile counts up once, for the first positive count seen
    /// after the reveal; every other update is written directly.
    pub projects_animated: bool,
}

impl StatsState {
    pub fn get(&self, slot: CounterSlot) -> i64 {
        match slot {
            CounterSlot::Subscribers => self.subscribers,
            CounterSlot::Views => self.views,
            CounterSlot::Posts => self.posts,
            CounterSlot::Projects => self.projects,
        }
    }

    pub fn set(&mut self, slot: CounterSlot, value: i64) {
        match slot {
            CounterSlot::Subscribers => self.subscribers = value,
            CounterSlot::Views => self.views = value,
            CounterSlot::Posts => self.posts = value,
            CounterSlot::Projects => self.projects = value,
        }
    }

    pub fn mark_revealed(&mut self) {
        self.revealed = true;
    }

    /// Claim the one-shot projects count-up for a new `count`.
    ///
    /// Returns `true` exactly once, for the first positive count seen after
    /// the section was revealed.
    pub fn claim_projects_animation(&mut self, count: usize) -> bool {
        if !self.revealed || self.projects_animated || count == 0 {
            return false;
        }
        self.projects_animated = true;
        true
    }
}
