//! Fragment routing
//!
//! Maps a URL fragment to the page it identifies. The fragment is the sole
//! routing signal: `#/` is home, `#sem/<N>` is semester N (1-based), and
//! `#sem/<N>/<M>` is subject M (0-based) of semester N. The 1-based/0-based
//! asymmetry is part of the shareable-URL contract and is preserved exactly.

use crate::core::models::Catalog;
use std::fmt;

/// The resolved page identity driving rendering
///
/// Exactly one state is current at a time. Indices in `Semester` and
/// `Subject` are always valid positions into the catalog they were resolved
/// against; invalid fragments resolve to `NotFound` instead of carrying a
/// dangling index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    /// The home page listing all semesters
    #[default]
    Home,
    /// A semester page; carries the 0-based semester index
    Semester(usize),
    /// A subject page; carries 0-based semester and subject indices
    Subject(usize, usize),
    /// The 404 page for fragments that resolve to nothing
    NotFound,
}

/// Parse a 1-based semester number from a fragment segment
///
/// Strict integer parsing: partial matches like `"2x"` are invalid, and so
/// is `"0"` (there is no semester 0). Invalid input behaves identically to
/// an out-of-range number.
fn parse_semester_number(segment: &str) -> Option<usize> {
    segment.parse::<usize>().ok()?.checked_sub(1)
}

/// Parse a 0-based subject index from a fragment segment
fn parse_subject_index(segment: &str) -> Option<usize> {
    segment.parse::<usize>().ok()
}

impl ViewState {
    /// Resolve a URL fragment against a catalog
    ///
    /// The leading `#` is optional and empty segments are ignored, so
    /// `"#/"`, `"/"`, and `""` all resolve to `Home`. Semester and subject
    /// fragments validate their indices against the catalog; when the
    /// catalog has not been loaded yet, they resolve to `NotFound`.
    ///
    /// # Arguments
    /// * `fragment` - The fragment portion of the URL (with or without `#`)
    /// * `catalog` - The loaded catalog, or `None` before the initial load
    #[must_use]
    pub fn resolve(fragment: &str, catalog: Option<&Catalog>) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();

        match parts.as_slice() {
            [] => Self::Home,
            ["sem", number] => {
                match (catalog, parse_semester_number(number)) {
                    (Some(cat), Some(si)) if cat.semester(si).is_some() => Self::Semester(si),
                    _ => Self::NotFound,
                }
            }
            ["sem", number, subject] => {
                match (
                    catalog,
                    parse_semester_number(number),
                    parse_subject_index(subject),
                ) {
                    (Some(cat), Some(si), Some(ji)) if cat.subject(si, ji).is_some() => {
                        Self::Subject(si, ji)
                    }
                    _ => Self::NotFound,
                }
            }
            _ => Self::NotFound,
        }
    }

    /// The canonical fragment addressing this state
    ///
    /// Inverse of [`resolve`](Self::resolve) for states reachable from a
    /// catalog; `NotFound` has no address of its own and maps to `#404`.
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Semester(si) => format!("#sem/{}", si + 1),
            Self::Subject(si, ji) => format!("#sem/{}/{ji}", si + 1),
            Self::NotFound => "#404".to_string(),
        }
    }

    /// The 0-based semester index this state belongs to, if any
    ///
    /// Subject views belong to their owning semester; home and 404 belong
    /// to none. Used for navigation highlighting.
    #[must_use]
    pub const fn semester_index(&self) -> Option<usize> {
        match self {
            Self::Semester(si) | Self::Subject(si, _) => Some(*si),
            Self::Home | Self::NotFound => None,
        }
    }

    /// Enumerate every state reachable from a catalog, in site order
    ///
    /// Home first, then each semester followed by its subjects. `NotFound`
    /// is not included; it is not addressable from catalog data.
    #[must_use]
    pub fn routes(catalog: &Catalog) -> Vec<Self> {
        let mut routes = vec![Self::Home];
        for (si, sem) in catalog.semesters.iter().enumerate() {
            routes.push(Self::Semester(si));
            for ji in 0..sem.subject_count() {
                routes.push(Self::Subject(si, ji));
            }
        }
        routes
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Semester(si) => write!(f, "semester {}", si + 1),
            Self::Subject(si, ji) => write!(f, "semester {} subject {ji}", si + 1),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
