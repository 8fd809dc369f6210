//! The computed page returned by the query pipeline.

use serde::{Deserialize, Serialize};
use sift_core::{Listable, RecordId};

/// One visible page of records plus pagination metadata.
///
/// Pure data: two `apply` calls with identical inputs produce identical
/// results, so the presentation layer can recompute it on every state
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResult<R> {
    /// The records on the requested page, in display order.
    pub visible: Vec<R>,

    /// Total number of records after search and filters, across all pages.
    pub total: usize,

    /// 0-based index of the first record of the page within the filtered
    /// sequence. May point past the end - the engine does not clamp the
    /// requested page.
    pub first_index: usize,

    /// 0-based exclusive end index of the page within the filtered
    /// sequence.
    pub last_index: usize,
}

impl<R> PageResult<R> {
    /// Check if there is a page before this one.
    pub fn has_prev(&self, page: usize) -> bool {
        page > 1
    }

    /// Check if there are records after this page.
    pub fn has_next(&self) -> bool {
        self.last_index < self.total
    }

    /// Number of pages the filtered sequence spans. Zero when empty.
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total.div_ceil(page_size)
    }

    /// 1-based inclusive bounds for the "Showing X to Y of Z results"
    /// footer. `None` when the page is empty.
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            None
        } else {
            Some((self.first_index + 1, self.first_index + self.visible.len()))
        }
    }

    /// Check if the page itself holds no records.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl<R: Listable> PageResult<R> {
    /// Ids of the visible records, in display order.
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible.iter().map(Listable::id).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn page(visible: usize, total: usize, first: usize) -> PageResult<u32> {
        PageResult {
            visible: vec![0; visible],
            total,
            first_index: first,
            last_index: first + visible,
        }
    }

    #[test]
    fn test_has_next_on_middle_page() {
        let result = page(10, 25, 10);
        assert!(result.has_next());
        assert!(result.has_prev(2));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let result = page(5, 25, 20);
        assert!(!result.has_next());
        assert_eq!(result.page_count(10), 3);
    }

    #[test]
    fn test_display_range_is_one_based() {
        let result = page(10, 25, 10);
        assert_eq!(result.display_range(), Some((11, 20)));
    }

    #[test]
    fn test_empty_page_has_no_display_range() {
        let result = page(0, 0, 0);
        assert_eq!(result.display_range(), None);
        assert_eq!(result.page_count(10), 0);
    }
}
