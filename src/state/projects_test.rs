use super::*;

fn project(title: &str, categories: &[&str], tags: &[&str]) -> ProjectEntry {
    ProjectEntry {
        title: Some(title.to_owned()),
        categories: categories.iter().map(|s| (*s).to_owned()).collect(),
        tags: tags.iter().map(|s| (*s).to_owned()).collect(),
        note: Some("project".to_owned()),
        ..ProjectEntry::default()
    }
}

fn loaded() -> ProjectsState {
    let mut state = ProjectsState::default();
    assert!(state.begin_loading());
    state.apply_entries(
        &[
            project("Sandbox", &["Web"], &["Rust"]),
            project("Pocket", &["Mobile"], &["Kotlin"]),
            project("Scraper", &["Tools"], &["Rust", "Web"]),
        ],
        &SiteConfig::default(),
    );
    state
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn default_state_is_idle_with_all_filter() {
    let state = ProjectsState::default();
    assert_eq!(state.status, LoadStatus::Idle);
    assert_eq!(state.active_filter, "all");
    assert!(!state.shows_skeleton());
    assert!(!state.shows_container());
    assert!(!state.shows_empty_message());
}

#[test]
fn begin_loading_shows_skeleton_once() {
    let mut state = ProjectsState::default();
    assert!(state.begin_loading());
    assert!(state.shows_skeleton());
    assert!(!state.shows_container());
    assert!(!state.begin_loading(), "second trigger must not refetch");
}

#[test]
fn begin_loading_refuses_after_success() {
    let mut state = loaded();
    assert!(!state.begin_loading());
    assert_eq!(state.status, LoadStatus::Ready);
}

#[test]
fn begin_loading_allows_retry_after_failure() {
    let mut state = ProjectsState::default();
    state.begin_loading();
    state.apply_failure(&FeedError::Unavailable);
    assert!(state.begin_loading());
    assert_eq!(state.error, None);
}

#[test]
fn apply_entries_renders_only_projects() {
    let mut state = ProjectsState::default();
    state.begin_loading();
    let mut post = project("Diary", &[], &[]);
    post.note = Some("post".to_owned());
    let untagged = ProjectEntry { title: Some("Loose".to_owned()), ..ProjectEntry::default() };
    state.apply_entries(&[project("Sandbox", &["Web"], &[]), post, untagged], &SiteConfig::default());
    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.cards[0].title, "Sandbox");
    assert_eq!(state.count, 1);
}

#[test]
fn apply_entries_sets_count_and_hides_skeleton() {
    let state = loaded();
    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.count, 3);
    assert_eq!(state.count, state.visible_count());
    assert!(!state.shows_skeleton());
    assert!(state.shows_container());
    assert!(!state.shows_empty_message());
}

#[test]
fn empty_feed_shows_empty_message_with_zero_count() {
    let mut state = ProjectsState::default();
    state.begin_loading();
    state.apply_entries(&[], &SiteConfig::default());
    assert_eq!(state.count, 0);
    assert!(state.shows_empty_message());
    assert!(!state.shows_container());
}

#[test]
fn apply_failure_zeroes_count_and_sets_message() {
    let mut state = ProjectsState::default();
    state.begin_loading();
    state.apply_failure(&FeedError::MalformedPayload { url: "u".to_owned(), reason: "eof".to_owned() });
    assert_eq!(state.status, LoadStatus::Failed);
    assert_eq!(state.count, 0);
    assert_eq!(state.error.as_deref(), Some("Failed to load projects. Please try again later."));
    assert!(state.shows_container());
    assert!(!state.shows_skeleton());
    assert!(!state.shows_empty_message());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn select_filter_counts_substring_matches() {
    let mut state = loaded();
    state.select_filter("rust");
    assert_eq!(state.count, 2);
    assert!(state.is_card_visible(0));
    assert!(!state.is_card_visible(1));
    assert!(state.is_card_visible(2));
    assert!(state.is_filter_active("rust"));
    assert!(!state.is_filter_active("all"));
}

#[test]
fn select_filter_with_no_matches_shows_empty_message() {
    let mut state = loaded();
    state.select_filter("design");
    assert_eq!(state.count, 0);
    assert!(state.shows_empty_message());
}

#[test]
fn select_all_after_other_filter_restores_everything() {
    let mut state = loaded();
    state.select_filter("mobile");
    assert_eq!(state.count, 1);
    state.select_filter("all");
    assert_eq!(state.count, 3);
    assert!((0..3).all(|i| state.is_card_visible(i)));
    assert!(!state.shows_empty_message());
}

#[test]
fn select_filter_is_ignored_before_load() {
    let mut state = ProjectsState::default();
    state.select_filter("web");
    assert_eq!(state.active_filter, "all");
    assert_eq!(state.count, 0);
}

#[test]
fn count_matches_visible_cards_for_every_filter() {
    let mut state = loaded();
    for filter in ["all", "web", "rust", "kotlin", "tools", "nothing", "o"] {
        state.select_filter(filter);
        assert_eq!(state.count, state.visible_count(), "filter {filter}");
    }
}

#[test]
fn reload_resets_filter_to_all() {
    let mut state = loaded();
    state.select_filter("mobile");
    state.apply_entries(&[project("Only", &["Mobile"], &[])], &SiteConfig::default());
    assert_eq!(state.active_filter, "all");
    assert_eq!(state.count, 1);
}

#[test]
fn out_of_range_card_is_not_visible() {
    let state = loaded();
    assert!(!state.is_card_visible(42));
}
