//! Typed catalog records and their catalog constructors.
//!
//! Each catalog kind has a typed record matching its fixture shape. Records
//! convert into the generic [`CatalogEntry`] with their categorical fields
//! mapped into facets under the fixed facet names below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use studium_core::{Error, Result};

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;

/// Facet name for a course's academic stream.
pub const FACET_STREAM: &str = "stream";
/// Facet name for a course's examination board.
pub const FACET_BOARD: &str = "board";
/// Facet name for a faculty member's department.
pub const FACET_DEPARTMENT: &str = "department";
/// Facet name for a faculty member's designation.
pub const FACET_DESIGNATION: &str = "designation";
/// Facet name for a scholarship's study level.
pub const FACET_LEVEL: &str = "level";
/// Facet name for a scholarship's award type.
pub const FACET_AWARD: &str = "award";

// ============================================================================
// CatalogKind
// ============================================================================

/// The catalog kinds Studium ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Course offerings.
    Courses,
    /// Faculty directory.
    Faculty,
    /// Scholarship listings.
    Scholarships,
}

impl CatalogKind {
    /// All kinds, in display order.
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Courses,
        CatalogKind::Faculty,
        CatalogKind::Scholarships,
    ];

    /// The catalog name, also the fixture file stem (`courses.toml`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Courses => "courses",
            CatalogKind::Faculty => "faculty",
            CatalogKind::Scholarships => "scholarships",
        }
    }

    /// The facet names entries of this kind carry.
    pub fn facet_names(&self) -> &'static [&'static str] {
        match self {
            CatalogKind::Courses => &[FACET_STREAM, FACET_BOARD],
            CatalogKind::Faculty => &[FACET_DEPARTMENT, FACET_DESIGNATION],
            CatalogKind::Scholarships => &[FACET_LEVEL, FACET_AWARD],
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "courses" => Ok(CatalogKind::Courses),
            "faculty" => Ok(CatalogKind::Faculty),
            "scholarships" => Ok(CatalogKind::Scholarships),
            other => Err(Error::not_found(format!("catalog kind '{other}'"))),
        }
    }
}

// ============================================================================
// Course
// ============================================================================

/// A course offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique id within the course catalog.
    pub id: u32,
    /// Course title.
    pub title: String,
    /// Short syllabus summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Academic stream (e.g. "Science", "Commerce", "Arts/Humanities").
    pub stream: String,
    /// Examination board (e.g. "CBSE", "ICSE").
    pub board: String,
    /// Subject tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<Course> for CatalogEntry {
    fn from(course: Course) -> Self {
        let mut builder = CatalogEntry::builder()
            .id(course.id)
            .title(course.title)
            .facet(FACET_STREAM, course.stream)
            .facet(FACET_BOARD, course.board)
            .tags(course.tags);
        if let Some(description) = course.description {
            builder = builder.description(description);
        }
        builder.build()
    }
}

// ============================================================================
// FacultyMember
// ============================================================================

/// A faculty directory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Unique id within the faculty catalog.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Designation (e.g. "Professor", "Assistant Professor").
    pub designation: String,
    /// Department (e.g. "Physics", "History").
    pub department: String,
    /// Areas of expertise.
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl From<FacultyMember> for CatalogEntry {
    fn from(member: FacultyMember) -> Self {
        let mut builder = CatalogEntry::builder()
            .id(member.id)
            .title(member.name)
            .facet(FACET_DEPARTMENT, member.department)
            .facet(FACET_DESIGNATION, member.designation)
            .tags(member.expertise);
        if let Some(bio) = member.bio {
            builder = builder.description(bio);
        }
        builder.build()
    }
}

// ============================================================================
// Scholarship
// ============================================================================

/// A scholarship listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    /// Unique id within the scholarship catalog.
    pub id: u32,
    /// Scholarship name.
    pub title: String,
    /// Eligibility and benefit summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Study level (e.g. "Undergraduate", "Postgraduate").
    pub level: String,
    /// Award type (e.g. "Full Tuition", "Partial", "Stipend").
    pub award: String,
    /// Eligibility tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<Scholarship> for CatalogEntry {
    fn from(scholarship: Scholarship) -> Self {
        let mut builder = CatalogEntry::builder()
            .id(scholarship.id)
            .title(scholarship.title)
            .facet(FACET_LEVEL, scholarship.level)
            .facet(FACET_AWARD, scholarship.award)
            .tags(scholarship.tags);
        if let Some(description) = scholarship.description {
            builder = builder.description(description);
        }
        builder.build()
    }
}

// ============================================================================
// Catalog constructors
// ============================================================================

fn owned_facet_names(kind: CatalogKind) -> Vec<String> {
    kind.facet_names().iter().map(|s| s.to_string()).collect()
}

/// Build the course catalog from typed records.
pub fn course_catalog(courses: Vec<Course>) -> Result<Catalog> {
    let entries = courses.into_iter().map(CatalogEntry::from).collect();
    Catalog::new(
        CatalogKind::Courses.as_str(),
        owned_facet_names(CatalogKind::Courses),
        entries,
    )
}

/// Build the faculty catalog from typed records.
pub fn faculty_catalog(members: Vec<FacultyMember>) -> Result<Catalog> {
    let entries = members.into_iter().map(CatalogEntry::from).collect();
    Catalog::new(
        CatalogKind::Faculty.as_str(),
        owned_facet_names(CatalogKind::Faculty),
        entries,
    )
}

/// Build the scholarship catalog from typed records.
pub fn scholarship_catalog(scholarships: Vec<Scholarship>) -> Result<Catalog> {
    let entries = scholarships.into_iter().map(CatalogEntry::from).collect();
    Catalog::new(
        CatalogKind::Scholarships.as_str(),
        owned_facet_names(CatalogKind::Scholarships),
        entries,
    )
}

// ============================================================================
// Tests
// ============================================================================
