//! Catalog entry representation.
//!
//! This module defines [`CatalogEntry`], the generic shape shared by every
//! catalog kind. Typed records (courses, faculty, scholarships) convert into
//! this shape so the filter core can treat all catalogs uniformly.
//!
//! # Creating Entries
//!
//! Entries can be created from typed records via `From` impls or directly
//! with the builder:
//!
//! ```rust
//! use studium_catalog::CatalogEntry;
//!
//! let entry = CatalogEntry::builder()
//!     .id(1)
//!     .title("Physics")
//!     .description("Mechanics, optics, and modern physics")
//!     .facet("stream", "Science")
//!     .facet("board", "CBSE")
//!     .build();
//!
//! assert_eq!(entry.facet("stream"), Some("Science"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single browsable catalog item.
///
/// Entries hold the display fields, the categorical facet attributes used
/// for exact-match filtering, and the tag list. All fields are search
/// targets; see [`search_fields`](CatalogEntry::search_fields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier within one catalog, stable for the catalog's
    /// lifetime.
    pub id: u32,

    /// Display title (course name, person name, scholarship name).
    pub title: String,

    /// Brief description shown alongside the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Categorical attributes keyed by facet name (e.g. "stream", "board").
    ///
    /// Values here are matched exactly by facet filtering and are drawn from
    /// the fixed value lists rendered in facet controls.
    #[serde(default)]
    pub facets: BTreeMap<String, String>,

    /// Free-form tag or expertise list.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    /// Create a new entry builder.
    pub fn builder() -> CatalogEntryBuilder {
        CatalogEntryBuilder::default()
    }

    /// Look up one facet value by name.
    pub fn facet(&self, name: &str) -> Option<&str> {
        self.facets.get(name).map(String::as_str)
    }

    /// All text fields that free-text search scans.
    ///
    /// Yields the title, the description (absent behaves as empty), every
    /// facet value, and every tag.
    pub fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.description.as_deref())
            .chain(self.facets.values().map(String::as_str))
            .chain(self.tags.iter().map(String::as_str))
    }
}

/// Builder for [`CatalogEntry`].
#[derive(Debug, Default)]
pub struct CatalogEntryBuilder {
    entry: CatalogEntry,
}

impl CatalogEntryBuilder {
    /// Set the entry id.
    pub fn id(mut self, id: u32) -> Self {
        self.entry.id = id;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entry.title = title.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entry.description = Some(description.into());
        self
    }

    /// Set one facet value.
    pub fn facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry.facets.insert(name.into(), value.into());
        self
    }

    /// Set the tag list.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.entry.tags = tags;
        self
    }

    /// Append one tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.entry.tags.push(tag.into());
        self
    }

    /// Build the entry.
    pub fn build(self) -> CatalogEntry {
        self.entry
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> CatalogEntry {
        CatalogEntry::builder()
            .id(7)
            .title("Physics")
            .description("Mechanics, optics, and modern physics")
            .facet("stream", "Science")
            .facet("board", "CBSE")
            .tags(vec!["lab".to_string(), "numericals".to_string()])
            .build()
    }

    // ------------------------------------------------------------------------
    // Builder tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_builder() {
        let entry = sample_entry();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.title, "Physics");
        assert_eq!(entry.facet("stream"), Some("Science"));
        assert_eq!(entry.facet("board"), Some("CBSE"));
        assert!(entry.description.is_some());
    }

    #[test]
    fn test_builder_minimal() {
        let entry = CatalogEntry::builder().id(1).title("History").build();
        assert_eq!(entry.id, 1);
        assert!(entry.description.is_none());
        assert!(entry.facets.is_empty());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_builder_tag_appends() {
        let entry = CatalogEntry::builder()
            .id(2)
            .title("Chemistry")
            .tag("lab")
            .tag("organic")
            .build();
        assert_eq!(entry.tags, vec!["lab", "organic"]);
    }

    // ------------------------------------------------------------------------
    // Facet lookup tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_facet_lookup() {
        let entry = sample_entry();
        assert_eq!(entry.facet("stream"), Some("Science"));
        assert_eq!(entry.facet("department"), None);
    }

    // ------------------------------------------------------------------------
    // Search field tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_search_fields_include_all_text() {
        let entry = sample_entry();
        let fields: Vec<&str> = entry.search_fields().collect();
        assert!(fields.contains(&"Physics"));
        assert!(fields.contains(&"Mechanics, optics, and modern physics"));
        assert!(fields.contains(&"Science"));
        assert!(fields.contains(&"CBSE"));
        assert!(fields.contains(&"lab"));
        assert!(fields.contains(&"numericals"));
    }

    #[test]
    fn test_search_fields_missing_description() {
        let entry = CatalogEntry::builder().id(1).title("History").build();
        let fields: Vec<&str> = entry.search_fields().collect();
        assert_eq!(fields, vec!["History"]);
    }

    // ------------------------------------------------------------------------
    // Serialization tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_serialization_roundtrip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let restored: CatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, restored);
    }

    #[test]
    fn test_serialization_skips_missing_description() {
        let entry = CatalogEntry::builder().id(1).title("History").build();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("description"));
    }
}
