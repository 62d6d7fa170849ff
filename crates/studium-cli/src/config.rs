//! CLI configuration.
//!
//! Configuration lives in a TOML file (`studium.toml`), resolved from the
//! platform config directory or an explicit `--config` path. Every field
//! has a default, so a missing file (without `--config`) is not an error.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use studium_core::{Error, Result};

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudiumConfig {
    /// Catalog data settings.
    pub data: DataConfig,
}

/// Where catalog data comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory containing catalog fixture files (`courses.toml`, ...).
    /// Built-in samples are used when unset.
    pub dir: Option<PathBuf>,
}

impl StudiumConfig {
    /// Resolve the config file path.
    ///
    /// An explicit path wins; otherwise the platform config directory
    /// (`<config_dir>/studium/studium.toml`). Returns `None` when the
    /// platform config directory cannot be determined.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| dir.join("studium").join("studium.toml")),
        }
    }

    /// Load configuration.
    ///
    /// # Errors
    ///
    /// An explicit `--config` path that does not exist or does not parse is
    /// an error. Without an explicit path, a missing file yields defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Err(Error::config(
                "could not determine config directory for this platform",
            ));
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "config file not found at {}",
                    path.display()
                )));
            }
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        toml::from_str(&raw)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }
}

// ============================================================================
// Tests
// ============================================================================
