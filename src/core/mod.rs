//! Core module: models, routing, rendering, and configuration

pub mod app;
pub mod config;
pub mod loader;
pub mod models;
pub mod render;
pub mod router;
pub mod site;

/// Returns the current version of the `coursegen` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
