//! Injected dependencies for the page: feed transport, preference store, and
//! site configuration.
//!
//! `App` builds the production set and provides it through Leptos context;
//! components read it back with `expect_context::<Services>()`.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::net::transport::{FeedTransport, HttpTransport};
use crate::util::preferences::{LocalStorage, PreferenceStore};

#[derive(Clone)]
pub struct Services {
    pub transport: Arc<dyn FeedTransport>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub config: Arc<SiteConfig>,
}

impl Services {
    pub fn new(
        transport: Arc<dyn FeedTransport>,
        preferences: Arc<dyn PreferenceStore>,
        config: SiteConfig,
    ) -> Self {
        Self { transport, preferences, config: Arc::new(config) }
    }

    /// Browser fetch + `localStorage`, with config from build-time overrides.
    ///
    /// A bad override is logged and the defaults are used instead.
    pub fn browser() -> Self {
        let config = SiteConfig::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring site config overrides: {e}");
            SiteConfig::default()
        });
        Self::new(Arc::new(HttpTransport), Arc::new(LocalStorage), config)
    }
}
