//! Theme preference: initial read, `<html>` class application, and toggle.
//!
//! The stored value is `"dark"` or `"light"` under the configured key. With
//! nothing stored, the system color-scheme preference decides. Applying the
//! theme toggles the `dark` class on `<html>`, which the Tailwind `dark:`
//! variants key off. Requires a browser environment; native builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::preferences::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the initial theme.
///
/// A stored `"dark"` wins. Any other non-empty stored value means light.
/// Only an absent (or empty) value defers to `system_prefers_dark`.
pub fn read_preference(store: &dyn PreferenceStore, key: &str, system_prefers_dark: bool) -> Theme {
    match store.get(key).as_deref() {
        Some("dark") => Theme::Dark,
        None | Some("") if system_prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Set or clear the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: Theme, store: &dyn PreferenceStore, key: &str) -> Theme {
    let next = current.flipped();
    apply(next);
    store.set(key, next.as_str());
    next
}
