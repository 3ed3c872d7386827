//! Top-level page components.

pub mod home;
