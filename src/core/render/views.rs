//! Content-region renderers
//!
//! One renderer per page type. View-model rows are prepared here so the
//! templates stay simple loops over ready-made fields.

use super::{RenderContext, RenderError};
use crate::core::models::Catalog;
use crate::core::router::ViewState;
use askama::Template;

/// Base directory for subject PDFs, relative to the site root
const PDF_DIR: &str = "pdf";

/// Link target for a subject's notes PDF
///
/// The path encodes the 1-based semester number: `pdf/sem<N>/<pdfName>`.
#[must_use]
pub fn pdf_href(semester_number: usize, pdf_name: &str) -> String {
    format!("{PDF_DIR}/sem{semester_number}/{pdf_name}")
}

/// Deep link to one lecture inside a subject's notes PDF
///
/// Targets the named destination `lecture<ordinal>` (1-based).
#[must_use]
pub fn lecture_href(semester_number: usize, pdf_name: &str, ordinal: usize) -> String {
    format!(
        "{}#nameddest=lecture{ordinal}",
        pdf_href(semester_number, pdf_name)
    )
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    name: &'a str,
    description: &'a str,
    semesters: Vec<SemesterCard<'a>>,
}

struct SemesterCard<'a> {
    href: String,
    name: &'a str,
    date: &'a str,
    description: &'a str,
}

#[derive(Template)]
#[template(path = "semester.html")]
struct SemesterTemplate<'a> {
    name: &'a str,
    date: &'a str,
    description: &'a str,
    subjects: Vec<SubjectCard<'a>>,
}

struct SubjectCard<'a> {
    href: String,
    name: &'a str,
    description: &'a str,
}

#[derive(Template)]
#[template(path = "subject.html")]
struct SubjectTemplate<'a> {
    name: &'a str,
    semester_name: &'a str,
    semester_date: &'a str,
    description: &'a str,
    pdf_href: String,
    lectures: Vec<LectureRow<'a>>,
    back_href: String,
}

struct LectureRow<'a> {
    href: String,
    name: &'a str,
    date: &'a str,
    desc: &'a str,
    missing: bool,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "load_error.html")]
struct LoadErrorTemplate<'a> {
    message: &'a str,
}

/// Render the content region for a resolved view
///
/// Indices inside the view are assumed valid; a dangling index renders the
/// 404 content rather than panicking.
///
/// # Errors
/// Returns an error if template rendering fails
pub fn content(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    match ctx.view {
        ViewState::Home => home(ctx.catalog),
        ViewState::Semester(si) => semester(ctx.catalog, si),
        ViewState::Subject(si, ji) => subject(ctx.catalog, si, ji),
        ViewState::NotFound => not_found(),
    }
}

/// Render the home page: catalog heading plus one card per semester
///
/// # Errors
/// Returns an error if template rendering fails
pub fn home(catalog: &Catalog) -> Result<String, RenderError> {
    let semesters = catalog
        .semesters
        .iter()
        .enumerate()
        .map(|(si, sem)| SemesterCard {
            href: ViewState::Semester(si).fragment(),
            name: &sem.name,
            date: &sem.date,
            description: &sem.description,
        })
        .collect();

    HomeTemplate {
        name: &catalog.name,
        description: &catalog.description,
        semesters,
    }
    .render()
}

/// Render a semester page: heading plus one card per subject
///
/// # Errors
/// Returns an error if template rendering fails
pub fn semester(catalog: &Catalog, semester_index: usize) -> Result<String, RenderError> {
    let Some(sem) = catalog.semester(semester_index) else {
        return not_found();
    };

    let subjects = sem
        .subjects
        .iter()
        .enumerate()
        .map(|(ji, subj)| SubjectCard {
            href: ViewState::Subject(semester_index, ji).fragment(),
            name: &subj.name,
            description: &subj.description,
        })
        .collect();

    SemesterTemplate {
        name: &sem.name,
        date: &sem.date,
        description: &sem.description,
        subjects,
    }
    .render()
}

/// Render a subject page: download link, lecture list, and back link
///
/// Each lecture links to its named destination inside the subject PDF;
/// lectures flagged as missing get the missing-notes marker.
///
/// # Errors
/// Returns an error if template rendering fails
pub fn subject(
    catalog: &Catalog,
    semester_index: usize,
    subject_index: usize,
) -> Result<String, RenderError> {
    let Some(sem) = catalog.semester(semester_index) else {
        return not_found();
    };
    let Some(subj) = sem.subject(subject_index) else {
        return not_found();
    };

    let number = semester_index + 1;
    let lectures = subj
        .lectures
        .iter()
        .enumerate()
        .map(|(li, lecture)| LectureRow {
            href: lecture_href(number, &subj.pdf_name, li + 1),
            name: &lecture.name,
            date: &lecture.date,
            desc: lecture.desc_text(),
            missing: lecture.missing,
        })
        .collect();

    SubjectTemplate {
        name: &subj.name,
        semester_name: &sem.name,
        semester_date: &sem.date,
        description: &subj.description,
        pdf_href: pdf_href(number, &subj.pdf_name),
        lectures,
        back_href: ViewState::Semester(semester_index).fragment(),
    }
    .render()
}

/// Render the 404 page with a link home
///
/// # Errors
/// Returns an error if template rendering fails
pub fn not_found() -> Result<String, RenderError> {
    NotFoundTemplate.render()
}

/// Render the terminal load-failure message
///
/// # Errors
/// Returns an error if template rendering fails
pub fn load_failure(message: &str) -> Result<String, RenderError> {
    LoadErrorTemplate { message }.render()
}
