//! Catalog data model for Studium.
//!
//! This crate defines the browsable catalogs: the generic [`CatalogEntry`]
//! shape, the typed records it is built from ([`Course`], [`FacultyMember`],
//! [`Scholarship`]), the schema-checked [`Catalog`] container, TOML fixture
//! loading, and the built-in sample catalogs.
//!
//! Entries are immutable once a catalog is constructed; a catalog's entry
//! order is its canonical display order and is preserved by everything
//! downstream.
//!
//! # Example
//!
//! ```rust
//! use studium_catalog::samples;
//!
//! let catalog = samples::courses().unwrap();
//! assert!(!catalog.is_empty());
//! assert!(catalog.facet_values("stream").contains(&"Science"));
//! ```

pub mod catalog;
pub mod entry;
pub mod loader;
pub mod records;
pub mod samples;

// Re-exports
pub use catalog::Catalog;
pub use entry::{CatalogEntry, CatalogEntryBuilder};
pub use loader::{load_catalog, load_courses, load_faculty, load_scholarships};
pub use records::{
    course_catalog, faculty_catalog, scholarship_catalog, CatalogKind, Course, FacultyMember,
    Scholarship,
};
