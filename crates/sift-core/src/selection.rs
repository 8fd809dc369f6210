//! Bulk-selection bookkeeping.

use crate::record::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of record ids checked for a bulk action.
///
/// Lives for the duration of a view session, independent of pagination:
/// ids stay selected when the user pages away. Cleared explicitly, never
/// pruned behind the caller's back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an id is selected.
    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// Toggle one id: remove it if selected, add it otherwise.
    pub fn toggle(&mut self, id: RecordId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Add one id.
    pub fn insert(&mut self, id: RecordId) {
        self.ids.insert(id);
    }

    /// Replace the entire selection with the given ids.
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.ids = ids.into_iter().collect();
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the selected ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    /// Drain the selection into a sorted list, leaving it empty.
    ///
    /// This is the hand-off to a bulk action: the action gets the ids, the
    /// view starts over with nothing selected.
    pub fn take(&mut self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.ids.drain().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<RecordId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
