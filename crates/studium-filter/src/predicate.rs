//! Facet and search predicates.
//!
//! Pure functions deciding whether one entry passes one restriction. Both
//! are total: every input has a well-defined boolean result.
//!
//! Search matching is case-insensitive substring matching over the entry's
//! search fields. Facet matching is exact, case-sensitive string equality,
//! since facet values come from the fixed lists rendered in facet controls
//! rather than free text.

use studium_catalog::CatalogEntry;

use crate::state::FacetSelection;

/// Whether an entry matches a free-text search term.
///
/// An empty term matches everything. Otherwise the lowercased term must be a
/// substring of at least one lowercased search field (title, description,
/// facet values, tags). A missing description behaves as an empty string.
pub fn matches_search(entry: &CatalogEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    entry
        .search_fields()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Whether an entry matches one facet selection.
///
/// [`FacetSelection::All`] matches everything. A value selection requires
/// the entry's facet to equal the value exactly; an entry lacking the facet
/// never matches a value selection.
pub fn matches_facet(entry: &CatalogEntry, name: &str, selection: &FacetSelection) -> bool {
    match selection {
        FacetSelection::All => true,
        FacetSelection::Value(value) => entry.facet(name) == Some(value.as_str()),
    }
}

// ============================================================================
// Tests
// ============================================================================
