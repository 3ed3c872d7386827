//! Networking modules for the remote JSON feeds.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` abstracts the HTTP GET so callers can be driven by stubs,
//! `types` defines the three feed schemas, and `api` turns feed payloads into
//! the values the page renders.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
