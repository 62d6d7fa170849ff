//! Facet key normalization.
//!
//! Facet names arrive from the command line and from config files with
//! inconsistent casing and separators. Catalogs declare their facet names in
//! lowercase kebab-case; this module maps user-supplied keys onto that form.

/// Normalize a facet key to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use studium_core::util::keys::normalize_key;
///
/// assert_eq!(normalize_key("Stream"), "stream");
/// assert_eq!(normalize_key("award_type"), "award-type");
/// assert_eq!(normalize_key("  Exam   Board  "), "exam-board");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .replace('_', " ") // Convert underscores to spaces first
        .split_whitespace() // Split on any whitespace, collapsing multiples
        .collect::<Vec<&str>>()
        .join("-")
}
