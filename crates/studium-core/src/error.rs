//! Error types for studium-core.

use std::path::{Path, PathBuf};

/// Errors that can occur at the edges of the Studium toolkit.
///
/// The filter core itself is total and never fails; errors only arise when
/// loading fixtures, reading configuration, or constructing catalogs.
///
/// All variants are marked `#[non_exhaustive]` to allow adding new error
/// types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error (missing file, bad value, unresolvable path)
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Fixture or document deserialization error
    #[error("Parse error: {message}")]
    Parse {
        /// What went wrong
        message: String,
    },

    /// I/O error with path context
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path of the file or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog schema violation (duplicate id, undeclared facet key)
    #[error("Catalog error: {message}")]
    Catalog {
        /// What schema rule was violated
        message: String,
    },

    /// Lookup failure for a named or numbered thing
    #[error("Not found: {what}")]
    NotFound {
        /// Description of what was looked up
        what: String,
    },
}

/// Convenience `Result` type alias for Studium operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates an I/O error carrying the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a catalog schema error.
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Error::Catalog {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound { what: what.into() }
    }

    /// Returns whether this error stems from user input (bad flag, bad
    /// lookup) rather than a broken environment.
    ///
    /// CLI frontends use this to decide between a short message and a
    /// full diagnostic.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Config { .. } => false,
            Error::Parse { .. } => false,
            Error::Io { .. } => false,
            Error::Catalog { .. } => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
