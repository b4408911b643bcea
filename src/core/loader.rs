//! Catalog loading
//!
//! Reads the catalog JSON document from disk. Loading happens once per
//! session; a failure here is terminal and surfaces as the load-failure
//! page rather than a routing outcome.

use crate::core::models::Catalog;
use std::fmt;
use std::fs;
use std::path::Path;

/// Why a catalog could not be loaded
#[derive(Debug)]
pub enum LoadError {
    /// The data file could not be read
    Io(std::io::Error),
    /// The data file is not a valid catalog document
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog data: {err}"),
            Self::Parse(err) => write!(f, "failed to parse catalog data: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load a catalog from a JSON file
///
/// # Arguments
/// * `path` - Path to the catalog JSON document
///
/// # Errors
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if its contents are not a valid catalog
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&content)?;
    Ok(catalog)
}
