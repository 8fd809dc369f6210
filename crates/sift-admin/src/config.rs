//! Application configuration loading.
//!
//! Optional per-view defaults live at `<config_dir>/sift/config.toml`:
//!
//! ```toml
//! [products]
//! page_size = 25
//! sort_key = "price"
//! sort_direction = "descending"
//!
//! [categories]
//! sort_key = "name"
//! ```
//!
//! A missing file is fine - the built-in defaults apply (10 rows per page,
//! products newest first, categories by name).

use serde::Deserialize;
use sift_core::{config_path, ConfigError, SortDirection, ViewConfig};
use std::path::Path;

/// Per-view defaults for the admin CLI.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdminConfig {
    pub products: ViewConfig,
    pub categories: ViewConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            products: ViewConfig::sorted_by("created_at", SortDirection::Descending),
            categories: ViewConfig::sorted_by("name", SortDirection::Ascending),
        }
    }
}

impl AdminConfig {
    /// Load from the user's config file, falling back to defaults when no
    /// file exists. A file that exists but does not parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Err(ConfigError::NoConfigDir),
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
