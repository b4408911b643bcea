//! Static site building
//!
//! Pre-renders every route of a catalog into an output directory. Each view
//! becomes its own `index.html` under a directory mirroring its fragment
//! (`sem/2/0/index.html` for `#sem/2/0`), plus a `404.html` for unresolved
//! fragments. Links inside the pages stay fragment-based; the file layout
//! only mirrors them for deployment.

use crate::core::models::Catalog;
use crate::core::render::{render_page, RenderError};
use crate::core::router::ViewState;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Why a site build failed
#[derive(Debug)]
pub enum BuildError {
    /// A page could not be rendered
    Render(RenderError),
    /// A page or directory could not be written
    Io(io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "failed to render page: {err}"),
            Self::Io(err) => write!(f, "failed to write page: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RenderError> for BuildError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<io::Error> for BuildError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Pages written by a site build, in site order
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Paths of the written page files
    pub pages: Vec<PathBuf>,
}

impl BuildReport {
    /// Number of pages written
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Output file for a view, relative to the site directory
#[must_use]
pub fn route_file(view: ViewState) -> PathBuf {
    match view {
        ViewState::Home => PathBuf::from("index.html"),
        ViewState::Semester(si) => Path::new("sem")
            .join((si + 1).to_string())
            .join("index.html"),
        ViewState::Subject(si, ji) => Path::new("sem")
            .join((si + 1).to_string())
            .join(ji.to_string())
            .join("index.html"),
        ViewState::NotFound => PathBuf::from("404.html"),
    }
}

/// Render every route of the catalog into `site_dir`
///
/// Directories are created as needed; existing pages are overwritten. The
/// 404 page is always written last.
///
/// # Errors
/// Returns a [`BuildError`] if any page fails to render or write
pub fn build_site(catalog: &Catalog, site_dir: &Path) -> Result<BuildReport, BuildError> {
    let mut routes = ViewState::routes(catalog);
    routes.push(ViewState::NotFound);

    let mut report = BuildReport::default();
    for view in routes {
        let page = render_page(catalog, view)?;
        let html = page.document()?;

        let path = site_dir.join(route_file(view));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        report.pages.push(path);
    }

    Ok(report)
}
