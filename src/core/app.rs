//! Application state
//!
//! Owns the two pieces of state the site has: the loaded catalog and the
//! current view. The original page kept both in module-level globals; here
//! they live in one explicit value owned by the event loop, passed by
//! reference to the renderers.

use crate::core::loader::{self, LoadError};
use crate::core::models::Catalog;
use crate::core::render::{self, Page, RenderError};
use crate::core::router::ViewState;
use std::path::Path;

/// Message shown when the catalog could not be loaded
const LOAD_FAILURE_MESSAGE: &str = "Failed to load catalog data";

/// The application state: loaded catalog plus current view
///
/// The catalog is loaded once at startup. After a failed load the app stays
/// in the error-display state for good: every fragment renders the
/// load-failure page and routing never runs.
#[derive(Debug, Default)]
pub struct App {
    catalog: Option<Catalog>,
    view: ViewState,
}

impl App {
    /// Create an app with no catalog, showing the home view
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: None,
            view: ViewState::Home,
        }
    }

    /// Load the catalog from a JSON file
    ///
    /// # Errors
    /// Returns a [`LoadError`] when the file cannot be read or parsed; the
    /// app keeps its previous (usually absent) catalog in that case
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.catalog = Some(loader::load_catalog(path)?);
        Ok(())
    }

    /// Load the catalog from a JSON string
    ///
    /// # Errors
    /// Returns a [`LoadError`] when the string is not a valid catalog
    pub fn load_from_str(&mut self, json: &str) -> Result<(), LoadError> {
        self.catalog = Some(Catalog::from_json(json)?);
        Ok(())
    }

    /// The loaded catalog, if any
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The current view
    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    /// Handle a fragment-change event
    ///
    /// Resolves the fragment, stores the new view, and renders the full
    /// page (content, navigation bar, breadcrumb trail). Without a loaded
    /// catalog the load-failure page is returned and the view is untouched.
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn handle_fragment(&mut self, fragment: &str) -> Result<Page, RenderError> {
        let Some(catalog) = self.catalog.as_ref() else {
            return render::load_failure_page(LOAD_FAILURE_MESSAGE);
        };

        self.view = ViewState::resolve(fragment, Some(catalog));
        render::render_page(catalog, self.view)
    }
}
