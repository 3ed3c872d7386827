//! Utility helpers shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, animation frames, intersection observers) from component logic.

pub mod counter;
pub mod dark_mode;
pub mod preferences;
pub mod visibility;
