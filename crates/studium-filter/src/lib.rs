//! Catalog filter core for Studium.
//!
//! This crate computes the visible subset of a catalog from the active
//! filter state: a free-text search term combined with zero or more
//! categorical facet selections. Every catalog-browsing surface composes
//! this one module instead of reimplementing the filter inline.
//!
//! The whole crate is pure, synchronous, and total: no operation fails, no
//! operation blocks, and evaluation is a function of its arguments alone.
//! The only "failure" a consumer can observe is a legitimately empty result,
//! which the presentation layer must render as an explicit empty state.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    studium-filter                      │
//! ├────────────────────────────────────────────────────────┤
//! │  FilterState (search term + per-facet selection)       │
//! │  FacetSelection (All | Value)                          │
//! ├────────────────────────────────────────────────────────┤
//! │  matches_search / matches_facet (pure predicates)      │
//! │  evaluate (AND of all predicates, order-preserving)    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use studium_catalog::samples;
//! use studium_filter::{evaluate, FilterState};
//!
//! let catalog = samples::courses().unwrap();
//! let mut state = FilterState::for_catalog(&catalog);
//!
//! state.select("stream", "Science");
//! state.set_search_term("python");
//!
//! let visible = evaluate(catalog.entries(), &state);
//! assert!(visible.iter().all(|e| e.facet("stream") == Some("Science")));
//!
//! state.clear_all();
//! assert_eq!(evaluate(catalog.entries(), &state).len(), catalog.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod evaluate;
pub mod predicate;
pub mod state;

mod proptests;

// Re-exports
pub use evaluate::evaluate;
pub use predicate::{matches_facet, matches_search};
pub use state::{FacetSelection, FilterState};
