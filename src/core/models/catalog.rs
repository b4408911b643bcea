//! Catalog model

use super::{Semester, Subject};
use serde::{Deserialize, Serialize};

/// The root course-catalog document
///
/// Everything the site renders comes from one of these, parsed from a single
/// JSON file. Semesters, subjects, and lectures are identified purely by
/// position, so the catalog is the sole authority on which routing indices
/// are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog name, shown as the home page heading
    pub name: String,

    /// Catalog description, shown below the home page heading
    pub description: String,

    /// Semesters in chronological order; the 1-based position is the
    /// human-facing semester number
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Catalog {
    /// Create a new catalog with no semesters
    ///
    /// # Arguments
    /// * `name` - Catalog name
    /// * `description` - Catalog description
    #[must_use]
    pub const fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            semesters: Vec::new(),
        }
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    /// Returns an error if the string is not valid JSON or does not match
    /// the catalog schema
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a semester by its 0-based position
    #[must_use]
    pub fn semester(&self, index: usize) -> Option<&Semester> {
        self.semesters.get(index)
    }

    /// Get a subject by 0-based semester and subject positions
    #[must_use]
    pub fn subject(&self, semester_index: usize, subject_index: usize) -> Option<&Subject> {
        self.semester(semester_index)
            .and_then(|sem| sem.subject(subject_index))
    }

    /// Get the number of semesters
    #[must_use]
    pub const fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Total number of subjects across all semesters
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(Semester::subject_count).sum()
    }

    /// Total number of lectures across all subjects
    #[must_use]
    pub fn lecture_count(&self) -> usize {
        self.semesters
            .iter()
            .flat_map(|sem| &sem.subjects)
            .map(Subject::lecture_count)
            .sum()
    }

    /// Total number of lectures whose notes are missing
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.semesters
            .iter()
            .flat_map(|sem| &sem.subjects)
            .map(Subject::missing_count)
            .sum()
    }

    /// Validate the catalog structure
    ///
    /// Checks that every semester and subject has a non-empty name and that
    /// every subject names a PDF file. These problems don't stop rendering,
    /// but they produce pages with blank headings or dead download links.
    ///
    /// # Errors
    /// Returns `Err` with one message per structural problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("Catalog has an empty name".to_string());
        }

        for (si, sem) in self.semesters.iter().enumerate() {
            let number = si + 1;
            if sem.name.trim().is_empty() {
                problems.push(format!("Semester {number}: empty name"));
            }

            for (ji, subject) in sem.subjects.iter().enumerate() {
                if subject.name.trim().is_empty() {
                    problems.push(format!("Semester {number}, subject {ji}: empty name"));
                }
                if subject.pdf_name.trim().is_empty() {
                    problems.push(format!(
                        "Semester {number}, subject '{}': no PDF file name",
                        subject.name
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new(
            "Physics Notes".to_string(),
            "Lecture notes for the physics program".to_string(),
        );

        let mut sem = Semester::new(
            "Semester 1".to_string(),
            "Sep 2024 - Jan 2025".to_string(),
            "First-year foundations".to_string(),
        );
        sem.subjects.push(Subject::new(
            "Mechanics".to_string(),
            "Kinematics and dynamics".to_string(),
            "mechanics.pdf".to_string(),
        ));
        catalog.semesters.push(sem);
        catalog
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new("Physics Notes".to_string(), "Notes".to_string());

        assert_eq!(catalog.name, "Physics Notes");
        assert_eq!(catalog.semester_count(), 0);
    }

    #[test]
    fn test_positional_lookups() {
        let catalog = sample_catalog();

        assert!(catalog.semester(0).is_some());
        assert!(catalog.semester(1).is_none());
        assert_eq!(catalog.subject(0, 0).unwrap().name, "Mechanics");
        assert!(catalog.subject(0, 1).is_none());
        assert!(catalog.subject(5, 0).is_none());
    }

    #[test]
    fn test_counts() {
        let catalog = sample_catalog();

        assert_eq!(catalog.semester_count(), 1);
        assert_eq!(catalog.subject_count(), 1);
        assert_eq!(catalog.lecture_count(), 0);
        assert_eq!(catalog.missing_count(), 0);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"{
                "name": "Physics Notes",
                "description": "Lecture notes",
                "semesters": [
                    {
                        "name": "Semester 1",
                        "date": "Sep 2024",
                        "description": "Foundations",
                        "subjects": [
                            {
                                "name": "Mechanics",
                                "description": "Kinematics",
                                "pdfName": "mechanics.pdf",
                                "lectures": [
                                    {"name": "Kinematics", "date": "02.09"},
                                    {"name": "Dynamics", "date": "09.09", "missing": true}
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.semester_count(), 1);
        assert_eq!(catalog.lecture_count(), 2);
        assert_eq!(catalog.missing_count(), 1);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Catalog::from_json("{not json").is_err());
        assert!(Catalog::from_json(r#"{"name": "x"}"#).is_err()); // no description
    }

    #[test]
    fn test_validate_success() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut catalog = sample_catalog();
        catalog.semesters[0].subjects[0].pdf_name = String::new();
        catalog.semesters[0].name = " ".to_string();

        let problems = catalog.validate().unwrap_err();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("PDF")));
        assert!(problems.iter().any(|p| p.contains("empty name")));
    }
}
