//! The filter evaluator.
//!
//! Combines the search predicate and every facet predicate into one
//! boolean-AND filter over a catalog's entries. Facet order does not affect
//! the result (commutative AND); predicates short-circuit on the first
//! failure.

use studium_catalog::CatalogEntry;

use crate::predicate::{matches_facet, matches_search};
use crate::state::FilterState;

/// Compute the visible subset of `entries` under `state`.
///
/// The result preserves input order (stable filter) and never contains an
/// entry absent from the input. An empty input, or a state excluding every
/// entry, yields an empty vec; the presentation layer renders that as an
/// explicit empty state, not an error.
pub fn evaluate<'a>(entries: &'a [CatalogEntry], state: &FilterState) -> Vec<&'a CatalogEntry> {
    let visible: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| {
            matches_search(entry, state.search_term())
                && state
                    .selections()
                    .all(|(name, selection)| matches_facet(entry, name, selection))
        })
        .collect();

    log::debug!(
        "evaluate: term='{}', {} active facet(s), {}/{} entries visible",
        state.search_term(),
        state.active_selections().len(),
        visible.len(),
        entries.len()
    );

    visible
}

// ============================================================================
// Tests
// ============================================================================
