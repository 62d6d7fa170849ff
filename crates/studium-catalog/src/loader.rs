//! TOML fixture loading.
//!
//! Catalogs can be supplied as TOML files in a data directory, one file per
//! catalog kind (`courses.toml`, `faculty.toml`, `scholarships.toml`), each
//! holding an array of tables named after the kind:
//!
//! ```toml
//! [[courses]]
//! id = 1
//! title = "Physics"
//! stream = "Science"
//! board = "CBSE"
//! tags = ["lab", "numericals"]
//! ```
//!
//! Loading goes through the typed records, so fixture files get the same
//! schema validation as built-in samples.

use serde::Deserialize;
use std::path::Path;
use studium_core::{Error, Result};

use crate::catalog::Catalog;
use crate::records::{
    course_catalog, faculty_catalog, scholarship_catalog, CatalogKind, Course, FacultyMember,
    Scholarship,
};

#[derive(Debug, Deserialize)]
struct CoursesFile {
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct FacultyFile {
    #[serde(default)]
    faculty: Vec<FacultyMember>,
}

#[derive(Debug, Deserialize)]
struct ScholarshipsFile {
    #[serde(default)]
    scholarships: Vec<Scholarship>,
}

fn read_fixture(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

fn parse_fixture<T: serde::de::DeserializeOwned>(raw: &str, path: &Path) -> Result<T> {
    toml::from_str(raw).map_err(|e| Error::parse(format!("failed to parse {}: {e}", path.display())))
}

/// Load the course catalog from a fixture file.
pub fn load_courses(path: &Path) -> Result<Catalog> {
    let raw = read_fixture(path)?;
    let file: CoursesFile = parse_fixture(&raw, path)?;
    let catalog = course_catalog(file.courses)?;
    log::info!("loaded {} courses from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load the faculty catalog from a fixture file.
pub fn load_faculty(path: &Path) -> Result<Catalog> {
    let raw = read_fixture(path)?;
    let file: FacultyFile = parse_fixture(&raw, path)?;
    let catalog = faculty_catalog(file.faculty)?;
    log::info!(
        "loaded {} faculty members from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Load the scholarship catalog from a fixture file.
pub fn load_scholarships(path: &Path) -> Result<Catalog> {
    let raw = read_fixture(path)?;
    let file: ScholarshipsFile = parse_fixture(&raw, path)?;
    let catalog = scholarship_catalog(file.scholarships)?;
    log::info!(
        "loaded {} scholarships from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Load one catalog kind from its conventional file in a data directory.
///
/// The file name is `<kind>.toml` (e.g. `courses.toml`).
pub fn load_catalog(dir: &Path, kind: CatalogKind) -> Result<Catalog> {
    let path = dir.join(format!("{}.toml", kind.as_str()));
    match kind {
        CatalogKind::Courses => load_courses(&path),
        CatalogKind::Faculty => load_faculty(&path),
        CatalogKind::Scholarships => load_scholarships(&path),
    }
}

// ============================================================================
// Tests
// ============================================================================
