//! Query types: search, filters, sort, and pagination inputs.

use crate::record::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sort direction for a list view column.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison.
    ///
    /// Descending reverses the comparison itself, not the final sequence,
    /// so equal keys keep their original relative order either way.
    pub fn apply(self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// The sort column and direction for a list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    /// Field name to sort by.
    pub key: String,

    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort ascending by the given field.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort descending by the given field.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// A per-field filter constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// The "All" option in a filter dropdown - matches every record.
    All,

    /// Exact match against the field value.
    Equals(FieldValue),
}

impl Filter {
    /// Exact-match filter for a field value.
    pub fn equals(value: impl Into<FieldValue>) -> Self {
        Self::Equals(value.into())
    }
}

/// Everything that determines which slice of a collection is visible.
///
/// Owned by the presentation layer and mutated between calls; the engine
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Query {
    /// Search box text. Empty means no search constraint.
    #[serde(default)]
    pub search: String,

    /// Per-field filter constraints. A field not present here (or mapped to
    /// `Filter::All`) is unconstrained. An `Equals` filter on a field the
    /// record shape does not define matches nothing.
    #[serde(default)]
    pub filters: BTreeMap<String, Filter>,

    /// Sort column and direction.
    pub sort: SortSpec,

    /// 1-based page number. Must be positive.
    pub page: usize,

    /// Records per page. Must be positive.
    pub page_size: usize,
}

impl Query {
    /// A first-page query with the given sort and page size.
    pub fn new(sort: SortSpec, page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort,
            page: 1,
            page_size,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set a filter for a field.
    pub fn with_filter(mut self, field: impl Into<String>, filter: Filter) -> Self {
        self.filters.insert(field.into(), filter);
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Column-header click: the active ascending column flips to
    /// descending; any other click sorts that column ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort.key == key && self.sort.direction == SortDirection::Ascending {
            self.sort.direction = SortDirection::Descending;
        } else {
            self.sort = SortSpec::ascending(key);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
