//! Shared library for `coursegen`
//!
//! Renders a static course-catalog website from a JSON document: data
//! models, fragment routing, per-view HTML rendering, and configuration.

pub mod core;

pub use crate::core::app::App;
pub use crate::core::config;
pub use crate::core::get_version;
pub use crate::core::loader::{load_catalog, LoadError};
pub use crate::core::models::{Catalog, Lecture, Semester, Subject};
pub use crate::core::render::{load_failure_page, render_page, Page, RenderContext, RenderError};
pub use crate::core::router::ViewState;
pub use crate::core::site::{build_site, BuildError, BuildReport};
