//! Subject model

use super::Lecture;
use serde::{Deserialize, Serialize};

/// Represents a subject taught within a semester
///
/// Subjects are addressed by their 0-based position within the owning
/// semester's subject list; that position is exposed directly in routing
/// fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (e.g., "Mathematical Analysis")
    pub name: String,

    /// Short description shown on the semester page
    pub description: String,

    /// File name of the subject's notes PDF (e.g., "analysis.pdf")
    #[serde(rename = "pdfName")]
    pub pdf_name: String,

    /// Lectures in teaching order; the 1-based position is the lecture ordinal
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

impl Subject {
    /// Create a new subject with no lectures
    ///
    /// # Arguments
    /// * `name` - Subject name
    /// * `description` - Short description
    /// * `pdf_name` - File name of the notes PDF
    #[must_use]
    pub const fn new(name: String, description: String, pdf_name: String) -> Self {
        Self {
            name,
            description,
            pdf_name,
            lectures: Vec::new(),
        }
    }

    /// Get a lecture by its 0-based position
    #[must_use]
    pub fn lecture(&self, index: usize) -> Option<&Lecture> {
        self.lectures.get(index)
    }

    /// Get the number of lectures
    #[must_use]
    pub const fn lecture_count(&self) -> usize {
        self.lectures.len()
    }

    /// Count lectures whose notes are missing from the PDF
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.lectures.iter().filter(|l| l.missing).count()
    }
}
