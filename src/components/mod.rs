//! Leptos view components for the portfolio page.
//!
//! Components read shared state from context signals and keep their class
//! computations in plain functions so styling rules are testable natively.

pub mod navbar;
pub mod project_card;
pub mod project_filters;
pub mod projects_section;
pub mod stats_section;
