//! Semester model

use super::Subject;
use serde::{Deserialize, Serialize};

/// Represents one semester of the catalog
///
/// Semesters are addressed by their 1-based position in the catalog's
/// semester list; that number is the human-facing identifier used in
/// routing fragments and PDF directory names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester name (e.g., "Semester 1")
    pub name: String,

    /// Human-readable date range (free-form, e.g., "Sep 2024 - Jan 2025")
    pub date: String,

    /// Short description shown on the home page card
    pub description: String,

    /// Subjects in catalog order; the 0-based position is the routing index
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Semester {
    /// Create a new semester with no subjects
    ///
    /// # Arguments
    /// * `name` - Semester name
    /// * `date` - Date range text
    /// * `description` - Short description
    #[must_use]
    pub const fn new(name: String, date: String, description: String) -> Self {
        Self {
            name,
            date,
            description,
            subjects: Vec::new(),
        }
    }

    /// Get a subject by its 0-based position
    #[must_use]
    pub fn subject(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    /// Get the number of subjects
    #[must_use]
    pub const fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_creation() {
        let semester = Semester::new(
            "Semester 1".to_string(),
            "Sep 2024 - Jan 2025".to_string(),
            "First-year foundations".to_string(),
        );

        assert_eq!(semester.name, "Semester 1");
        assert_eq!(semester.subject_count(), 0);
    }

    #[test]
    fn test_subject_lookup() {
        let mut semester = Semester::new(
            "Semester 1".to_string(),
            "Sep 2024 - Jan 2025".to_string(),
            "First-year foundations".to_string(),
        );
        semester.subjects.push(Subject::new(
            "Mathematical Analysis".to_string(),
            "Limits and derivatives".to_string(),
            "analysis.pdf".to_string(),
        ));

        assert!(semester.subject(0).is_some());
        assert_eq!(semester.subject(0).unwrap().name, "Mathematical Analysis");
        assert!(semester.subject(1).is_none());
    }
}
