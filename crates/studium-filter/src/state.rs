//! Filter state: the active search term and facet selections.
//!
//! [`FilterState`] is owned by exactly one browsing surface at a time and is
//! mutated in place by discrete user actions (type in the search box, pick a
//! facet value, clear everything). It holds no business logic beyond
//! assignment; the evaluator reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The sentinel value rendered for an unrestricted facet.
pub const ALL_LABEL: &str = "All";

/// Selection state of one facet.
///
/// `All` is the default and places no restriction on the facet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetSelection {
    /// No restriction; every entry passes this facet.
    #[default]
    All,
    /// Restrict to entries whose facet equals this value exactly.
    Value(String),
}

impl FacetSelection {
    /// Create a value selection.
    pub fn value(value: impl Into<String>) -> Self {
        FacetSelection::Value(value.into())
    }

    /// Whether this selection is the unrestricted sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    /// The selected value, if any.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            FacetSelection::All => None,
            FacetSelection::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for FacetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetSelection::All => write!(f, "{ALL_LABEL}"),
            FacetSelection::Value(value) => write!(f, "{value}"),
        }
    }
}

/// The active filter state for one catalog-browsing surface.
///
/// Created on mount with the catalog's facet names (every facet starting at
/// [`FacetSelection::All`]), mutated in place on each user interaction, and
/// discarded on navigation away. Single-threaded by construction; no
/// mutation is ever observed partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    search_term: String,
    selected: BTreeMap<String, FacetSelection>,
}

impl FilterState {
    /// Create a state for the given facet names, all unrestricted.
    pub fn new<I, S>(facet_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_term: String::new(),
            selected: facet_names
                .into_iter()
                .map(|name| (name.into(), FacetSelection::All))
                .collect(),
        }
    }

    /// Create a state matching a catalog's declared facets.
    pub fn for_catalog(catalog: &studium_catalog::Catalog) -> Self {
        Self::new(catalog.facet_names().iter().cloned())
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Overwrite the search term verbatim.
    ///
    /// No trimming is applied; matching is case-insensitive at evaluation
    /// time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Overwrite one facet's selection.
    ///
    /// Setting [`FacetSelection::All`] clears that facet's restriction. Any
    /// value string is legal; a value matching no entry yields zero matches
    /// rather than an error. A facet name that was not configured at
    /// construction is ignored with a warning.
    pub fn set_facet(&mut self, name: &str, selection: FacetSelection) {
        match self.selected.get_mut(name) {
            Some(slot) => *slot = selection,
            None => log::warn!("ignoring selection for unknown facet '{name}'"),
        }
    }

    /// Convenience: restrict one facet to a value.
    pub fn select(&mut self, name: &str, value: impl Into<String>) {
        self.set_facet(name, FacetSelection::value(value));
    }

    /// Convenience: lift one facet's restriction.
    pub fn clear_facet(&mut self, name: &str) {
        self.set_facet(name, FacetSelection::All);
    }

    /// Reset the search term to empty and every facet to `All`.
    ///
    /// A single call; the evaluator never observes a partially cleared
    /// state.
    pub fn clear_all(&mut self) {
        self.search_term.clear();
        for selection in self.selected.values_mut() {
            *selection = FacetSelection::All;
        }
    }

    /// One facet's current selection, or `None` for an unconfigured name.
    pub fn selection(&self, name: &str) -> Option<&FacetSelection> {
        self.selected.get(name)
    }

    /// The configured facet names.
    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.selected.keys().map(String::as_str)
    }

    /// All facet selections, restricted or not.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &FacetSelection)> {
        self.selected
            .iter()
            .map(|(name, selection)| (name.as_str(), selection))
    }

    /// The restricted facets only, as (name, value) pairs for rendering
    /// active-filter chips.
    pub fn active_selections(&self) -> Vec<(&str, &str)> {
        self.selected
            .iter()
            .filter_map(|(name, selection)| {
                selection.as_value().map(|value| (name.as_str(), value))
            })
            .collect()
    }

    /// Whether no restriction is active at all.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.selected.values().all(FacetSelection::is_all)
    }
}

// ============================================================================
// Tests
// ============================================================================
