//! Integration tests for the static site build

use coursegen::{build_site, Catalog};
use std::fs;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"{
    "name": "Physics Notes",
    "description": "Lecture notes for the physics program",
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
                    "lectures": [{"name": "Kinematics", "date": "02.09"}]
                },
                {
                    "name": "Linear Algebra",
                    "description": "Vectors",
                    "pdfName": "linalg.pdf",
                    "lectures": []
                }
            ]
        },
        {
            "name": "Semester 2",
            "date": "Feb 2025",
            "description": "Electromagnetism",
            "subjects": []
        }
    ]
}"#;

#[test]
fn build_writes_one_page_per_route_plus_404() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let out = TempDir::new().unwrap();

    let report = build_site(&catalog, out.path()).unwrap();

    // Home + 2 semesters + 2 subjects + 404
    assert_eq!(report.page_count(), 6);
    assert!(out.path().join("index.html").is_file());
    assert!(out.path().join("sem/1/index.html").is_file());
    assert!(out.path().join("sem/1/0/index.html").is_file());
    assert!(out.path().join("sem/1/1/index.html").is_file());
    assert!(out.path().join("sem/2/index.html").is_file());
    assert!(out.path().join("404.html").is_file());
}

#[test]
fn built_pages_contain_their_view() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let out = TempDir::new().unwrap();

    build_site(&catalog, out.path()).unwrap();

    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(home.contains("<title>Physics Notes</title>"));
    assert!(home.contains("href=\"#sem/1\""));

    let semester = fs::read_to_string(out.path().join("sem/1/index.html")).unwrap();
    assert!(semester.contains("Semester 1"));
    assert!(semester.contains("href=\"#sem/1/0\""));

    let subject = fs::read_to_string(out.path().join("sem/1/0/index.html")).unwrap();
    assert!(subject.contains("Mechanics"));
    assert!(subject.contains("pdf/sem1/mechanics.pdf"));

    let not_found = fs::read_to_string(out.path().join("404.html")).unwrap();
    assert!(not_found.contains("404"));
    assert!(not_found.contains("href=\"#/\""));
}

#[test]
fn rebuilding_overwrites_existing_pages() {
    let mut catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let out = TempDir::new().unwrap();

    build_site(&catalog, out.path()).unwrap();

    catalog.name = "Renamed Notes".to_string();
    build_site(&catalog, out.path()).unwrap();

    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(home.contains("Renamed Notes"));
    assert!(!home.contains("<title>Physics Notes</title>"));
}

#[test]
fn empty_catalog_still_builds_home_and_404() {
    let catalog = Catalog::from_json(
        r#"{"name": "Empty", "description": "No semesters yet", "semesters": []}"#,
    )
    .unwrap();
    let out = TempDir::new().unwrap();

    let report = build_site(&catalog, out.path()).unwrap();

    assert_eq!(report.page_count(), 2);
    assert!(out.path().join("index.html").is_file());
    assert!(out.path().join("404.html").is_file());
}
