//! Client-side page state.
//!
//! DESIGN
//! ======
//! State is split by concern (`projects`, `stats`, `ui`) so each section of
//! the page depends on a small model that can be tested without a DOM.

pub mod project_card;
pub mod projects;
pub mod stats;
pub mod ui;
