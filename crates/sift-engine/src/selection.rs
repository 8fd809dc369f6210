//! Selection operations over the visible page.

use sift_core::{RecordId, SelectionSet};

/// Check whether every record on the visible page is selected.
///
/// False for an empty page: a header checkbox over nothing is unchecked.
/// Membership is checked id by id - two sets of equal size are not enough.
pub fn is_all_visible_selected(selection: &SelectionSet, visible_ids: &[RecordId]) -> bool {
    !visible_ids.is_empty() && visible_ids.iter().all(|id| selection.contains(*id))
}

/// The header checkbox: select or deselect the whole visible page.
///
/// Checking replaces the entire selection with exactly the visible ids;
/// unchecking clears the entire selection. Both directions discard ids
/// selected on other pages, so selection is always page-scoped and that
/// rule lives in this one function. Whether the box is currently checked
/// is derived from the selection itself, never trusted from the caller.
pub fn toggle_select_all(selection: &mut SelectionSet, visible_ids: &[RecordId]) {
    if is_all_visible_selected(selection, visible_ids) {
        selection.clear();
    } else {
        selection.replace_with(visible_ids.iter().copied());
    }
}

/// A row checkbox: toggle one id in or out of the selection.
pub fn toggle_one(selection: &mut SelectionSet, id: RecordId) {
    selection.toggle(id);
}

// =============================================================================
// Tests
// =============================================================================
