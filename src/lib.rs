//! # portfolio
//!
//! Leptos + WASM front end for a personal portfolio/blog site.
//!
//! The page toggles a persisted light/dark theme, opens a mobile menu,
//! animates a handful of remote statistics into view, and renders the
//! project feed as filterable cards. Browser glue lives behind the `csr`
//! feature; without it every environment call is a no-op so the state and
//! feed logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod tasks;
pub mod util;

/// WASM entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portfolio client starting");
    leptos::mount::mount_to_body(app::App);
}
