//! Configuration types.
//!
//! Per-view defaults live in `<config_dir>/sift/config.toml`. These types
//! only describe the configuration; loading is the application's concern.

use crate::query::{SortDirection, SortSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Defaults for one list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    /// Records per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Default sort column.
    pub sort_key: String,

    /// Default sort direction.
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl ViewConfig {
    /// Defaults for a view sorted by the given column.
    pub fn sorted_by(sort_key: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            page_size: default_page_size(),
            sort_key: sort_key.into(),
            sort_direction,
        }
    }

    /// The sort spec this config describes.
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec {
            key: self.sort_key.clone(),
            direction: self.sort_direction,
        }
    }
}

fn default_page_size() -> usize {
    10
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sift"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_uses_default_page_size() {
        let config = ViewConfig::sorted_by("name", SortDirection::Ascending);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.sort_spec(), SortSpec::ascending("name"));
    }
}
