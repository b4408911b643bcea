//! Lecture model

use serde::{Deserialize, Serialize};

/// Represents a single lecture within a subject
///
/// A lecture has no identifier of its own: it is addressed by its 1-based
/// position within the subject's lecture list, which is also the ordinal
/// used for PDF deep-link anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Lecture title (e.g., "Limits and Continuity")
    pub name: String,

    /// Human-readable lecture date (free-form, e.g., "12.09.2024")
    pub date: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Whether the lecture notes are missing from the subject PDF
    #[serde(default)]
    pub missing: bool,
}

impl Lecture {
    /// Create a new lecture with no description and notes present
    ///
    /// # Arguments
    /// * `name` - Lecture title
    /// * `date` - Lecture date
    #[must_use]
    pub const fn new(name: String, date: String) -> Self {
        Self {
            name,
            date,
            desc: None,
            missing: false,
        }
    }

    /// Get the description text, or an empty string when absent
    #[must_use]
    pub fn desc_text(&self) -> &str {
        self.desc.as_deref().unwrap_or("")
    }
}
