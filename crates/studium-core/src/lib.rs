//! Studium Core — shared error types and utilities.
//!
//! This crate provides the foundational types used across all Studium crates.
//! It has no internal Studium dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Key normalization utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::keys::normalize_key;
