//! Core types for the sift list-view query engine.
//!
//! This crate contains shared data structures used across all sift crates:
//! - Record and field types for list views
//! - Query, filter, and sort types
//! - Selection bookkeeping
//! - Configuration types
//! - Error types

mod config;
mod error;
mod query;
mod record;
mod selection;

pub use config::{config_dir, config_path, ViewConfig};
pub use error::{ConfigError, QueryError};
pub use query::{Filter, Query, SortDirection, SortSpec};
pub use record::{FieldValue, Listable, RecordId};
pub use selection::SelectionSet;
