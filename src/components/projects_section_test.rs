use super::*;
use crate::components::project_card::card_class;

fn has_hidden(class: &str) -> bool {
    class.split_whitespace().any(|c| c == "hidden")
}

#[test]
fn hidden_unless_appends_hidden_only_when_not_shown() {
    assert_eq!(hidden_unless(true, "grid gap-8"), "grid gap-8");
    assert_eq!(hidden_unless(false, "grid gap-8"), "grid gap-8 hidden");
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(0), "0 projects");
    assert_eq!(count_label(1), "1 project");
    assert_eq!(count_label(7), "7 projects");
}

#[test]
fn card_class_hides_filtered_cards() {
    assert!(!has_hidden(&card_class(true)));
    assert!(has_hidden(&card_class(false)));
    assert!(card_class(true).starts_with("project-card "));
}

#[test]
fn section_classes_follow_state() {
    let mut state = ProjectsState::default();
    state.begin_loading();
    assert!(!has_hidden(&hidden_unless(state.shows_skeleton(), GRID_CLASSES)));
    assert!(has_hidden(&hidden_unless(state.shows_container(), GRID_CLASSES)));
    assert!(has_hidden(&hidden_unless(state.shows_empty_message(), EMPTY_CLASSES)));
}

#[test]
fn skeleton_and_grid_share_layout() {
    let mut state = ProjectsState::default();
    state.begin_loading();
    let skeleton = hidden_unless(state.shows_skeleton(), GRID_CLASSES);
    state.apply_entries(&[], &crate::config::SiteConfig::default());
    let grid = hidden_unless(state.shows_container(), GRID_CLASSES);
    assert_eq!(skeleton, GRID_CLASSES);
    assert!(grid.starts_with(GRID_CLASSES));
}
