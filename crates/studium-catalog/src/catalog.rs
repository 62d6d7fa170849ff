//! Schema-checked catalog container.
//!
//! A [`Catalog`] owns an ordered list of [`CatalogEntry`] values together
//! with the facet names its entries may carry. Construction validates the
//! schema once; afterwards the catalog is immutable and every consumer can
//! rely on unique ids and declared facet keys.

use serde::Serialize;
use std::collections::BTreeSet;
use studium_core::{Error, Result};

use crate::entry::CatalogEntry;

/// An immutable, ordered collection of catalog entries.
///
/// Entry order is the canonical display order. Filtering preserves it.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    name: String,
    facet_names: Vec<String>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Construct a catalog, validating its schema.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if two entries share an id, or if an entry
    /// carries a facet key that is not in `facet_names`.
    pub fn new(
        name: impl Into<String>,
        facet_names: Vec<String>,
        entries: Vec<CatalogEntry>,
    ) -> Result<Self> {
        let name = name.into();
        let declared: BTreeSet<&str> = facet_names.iter().map(String::as_str).collect();

        let mut seen_ids = BTreeSet::new();
        for entry in &entries {
            if !seen_ids.insert(entry.id) {
                return Err(Error::catalog(format!(
                    "duplicate id {} in catalog '{name}'",
                    entry.id
                )));
            }
            for key in entry.facets.keys() {
                if !declared.contains(key.as_str()) {
                    return Err(Error::catalog(format!(
                        "entry {} in catalog '{name}' has undeclared facet '{key}'",
                        entry.id
                    )));
                }
            }
        }

        log::debug!(
            "catalog '{name}' constructed: {} entries, facets [{}]",
            entries.len(),
            facet_names.join(", ")
        );

        Ok(Self {
            name,
            facet_names,
            entries,
        })
    }

    /// The catalog name (e.g. "courses").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The facet names entries of this catalog may carry.
    pub fn facet_names(&self) -> &[String] {
        &self.facet_names
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up one entry by id.
    pub fn entry(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Distinct values of one facet, in first-seen entry order.
    ///
    /// This powers facet controls: a selection control for facet `name`
    /// offers "All" plus exactly these values. An unknown facet name yields
    /// an empty list.
    pub fn facet_values(&self, name: &str) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut values = Vec::new();
        for entry in &self.entries {
            if let Some(value) = entry.facet(name) {
                if seen.insert(value) {
                    values.push(value);
                }
            }
        }
        values
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
