//! acme-ui - Shared UI components for the acme dashboard
//!
//! Contains pure view components used by the web app and demo.

pub mod components;

pub use components::*;
