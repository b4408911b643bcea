//! Page rendering
//!
//! Turns a resolved [`ViewState`] and a [`Catalog`] into markup. Renderers
//! are pure: they never mutate state and never validate indices, since
//! validation is the resolver's job. Every piece of catalog text is
//! HTML-escaped by the templates on interpolation.

pub mod nav;
pub mod views;

use crate::core::models::Catalog;
use crate::core::router::ViewState;
use askama::Template;

/// Errors produced while rendering templates
///
/// Re-exported so callers don't need a direct askama dependency. Rendering
/// a well-formed template into a `String` does not fail in practice.
pub type RenderError = askama::Error;

/// A fully rendered page, split into the regions the shell composes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Document title
    pub title: String,
    /// Navigation bar markup
    pub nav_bar: String,
    /// Breadcrumb trail markup
    pub breadcrumbs: String,
    /// Content region markup
    pub content: String,
}

/// Self-contained HTML document shell
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    nav_bar: &'a str,
    breadcrumbs: &'a str,
    content: &'a str,
}

impl Page {
    /// Assemble the regions into a complete HTML document
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn document(&self) -> Result<String, RenderError> {
        PageTemplate {
            title: &self.title,
            nav_bar: &self.nav_bar,
            breadcrumbs: &self.breadcrumbs,
            content: &self.content,
        }
        .render()
    }
}

/// Borrowed data needed to render one page
///
/// Aggregates the catalog and the resolved view so the individual renderers
/// share a single source of truth.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The loaded catalog
    pub catalog: &'a Catalog,
    /// The view being rendered
    pub view: ViewState,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    #[must_use]
    pub const fn new(catalog: &'a Catalog, view: ViewState) -> Self {
        Self { catalog, view }
    }

    /// Document title for the current view
    #[must_use]
    pub fn title(&self) -> String {
        match self.view {
            ViewState::Home => self.catalog.name.clone(),
            ViewState::Semester(si) => self
                .catalog
                .semester(si)
                .map_or_else(|| "Page not found".to_string(), |sem| sem.name.clone()),
            ViewState::Subject(si, ji) => self
                .catalog
                .subject(si, ji)
                .map_or_else(|| "Page not found".to_string(), |subj| subj.name.clone()),
            ViewState::NotFound => "Page not found".to_string(),
        }
    }

    /// Render the content region, navigation bar, and breadcrumb trail
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn page(&self) -> Result<Page, RenderError> {
        Ok(Page {
            title: self.title(),
            nav_bar: nav::nav_bar(self)?,
            breadcrumbs: nav::breadcrumbs(self)?,
            content: views::content(self)?,
        })
    }
}

/// Render the page for a view in one call
///
/// # Errors
/// Returns an error if template rendering fails
pub fn render_page(catalog: &Catalog, view: ViewState) -> Result<Page, RenderError> {
    RenderContext::new(catalog, view).page()
}

/// Render the terminal load-failure page
///
/// Shown when the catalog could not be fetched or parsed; routing never ran,
/// so the navigation bar and breadcrumbs are empty.
///
/// # Errors
/// Returns an error if template rendering fails
pub fn load_failure_page(message: &str) -> Result<Page, RenderError> {
    Ok(Page {
        title: "Load error".to_string(),
        nav_bar: String::new(),
        breadcrumbs: String::new(),
        content: views::load_failure(message)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Semester, Subject};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new("Notes".to_string(), "Test catalog".to_string());
        let mut sem = Semester::new(
            "Semester 1".to_string(),
            "2024".to_string(),
            "Foundations".to_string(),
        );
        sem.subjects.push(Subject::new(
            "Mechanics".to_string(),
            "Kinematics".to_string(),
            "mechanics.pdf".to_string(),
        ));
        catalog.semesters.push(sem);
        catalog
    }

    #[test]
    fn test_titles_follow_view() {
        let catalog = catalog();

        let home = RenderContext::new(&catalog, ViewState::Home);
        assert_eq!(home.title(), "Notes");

        let sem = RenderContext::new(&catalog, ViewState::Semester(0));
        assert_eq!(sem.title(), "Semester 1");

        let subj = RenderContext::new(&catalog, ViewState::Subject(0, 0));
        assert_eq!(subj.title(), "Mechanics");

        let missing = RenderContext::new(&catalog, ViewState::NotFound);
        assert_eq!(missing.title(), "Page not found");
    }

    #[test]
    fn test_document_contains_all_regions() {
        let catalog = catalog();
        let page = render_page(&catalog, ViewState::Home).unwrap();
        let html = page.document().unwrap();

        assert!(html.contains("<title>Notes</title>"));
        assert!(html.contains("id=\"nav-bar\""));
        assert!(html.contains("id=\"breadcrumbs\""));
        assert!(html.contains("id=\"content\""));
        assert!(html.contains(&page.content));
    }

    #[test]
    fn test_load_failure_page_has_no_chrome() {
        let page = load_failure_page("Failed to load catalog data").unwrap();

        assert!(page.nav_bar.is_empty());
        assert!(page.breadcrumbs.is_empty());
        assert!(page.content.contains("Failed to load catalog data"));
    }
}
