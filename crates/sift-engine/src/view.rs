//! Per-view state threading: one query and one selection, owned explicitly.

use crate::page::PageResult;
use crate::pipeline::apply;
use crate::selection::{is_all_visible_selected, toggle_one, toggle_select_all};
use sift_core::{Filter, Listable, Query, QueryError, RecordId, SelectionSet, SortSpec, ViewConfig};

/// The state behind one list view: its query and its selection.
///
/// Records are not owned here - the data source supplies them fresh on
/// every `refresh`. Everything else a list screen would keep as ambient
/// state (search text, sort config, page, checked ids) lives in this
/// struct and changes only through its methods.
#[derive(Debug, Clone)]
pub struct ListView {
    query: Query,
    selection: SelectionSet,
}

impl ListView {
    /// Create a view with the given default sort and page size.
    pub fn new(sort: SortSpec, page_size: usize) -> Self {
        Self {
            query: Query::new(sort, page_size),
            selection: SelectionSet::new(),
        }
    }

    /// Create a view from per-view configuration defaults.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.sort_spec(), config.page_size)
    }

    /// The current query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // -------------------------------------------------------------------------
    // Query mutation
    // -------------------------------------------------------------------------

    /// Set the search box text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Set a filter for a field.
    pub fn set_filter(&mut self, field: impl Into<String>, filter: Filter) {
        self.query.filters.insert(field.into(), filter);
    }

    /// Column-header click: toggle the sort on a column.
    pub fn toggle_sort(&mut self, key: &str) {
        self.query.toggle_sort(key);
    }

    /// Jump straight to a page. The value is not validated here; `refresh`
    /// rejects zero and clamps overruns.
    pub fn go_to_page(&mut self, page: usize) {
        self.query.page = page;
    }

    /// Change the page size. `refresh` rejects zero.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page_size = page_size;
    }

    /// Go to the next page. Any overrun is clamped on the next `refresh`.
    pub fn next_page(&mut self) {
        self.query.page += 1;
    }

    /// Go to the previous page, never below page 1.
    pub fn prev_page(&mut self) {
        self.query.page = self.query.page.saturating_sub(1).max(1);
    }

    // -------------------------------------------------------------------------
    // Refresh
    // -------------------------------------------------------------------------

    /// Run the pipeline over a fresh record collection.
    ///
    /// The engine itself never clamps the page; that is this layer's job.
    /// When the current page has run past the end of a non-empty result
    /// (the result set shrank, or the user paged too far), the view lands
    /// on the last page instead of showing an empty one.
    pub fn refresh<R: Listable + Clone>(
        &mut self,
        records: &[R],
    ) -> Result<PageResult<R>, QueryError> {
        let result = apply(records, &self.query)?;
        if result.is_empty() && result.total > 0 {
            let last_page = result.page_count(self.query.page_size);
            tracing::debug!(
                from = self.query.page,
                to = last_page,
                "clamping page past end of results"
            );
            self.query.page = last_page;
            return apply(records, &self.query);
        }
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle one record's checkbox.
    pub fn toggle(&mut self, id: RecordId) {
        toggle_one(&mut self.selection, id);
    }

    /// The header checkbox over the given page.
    pub fn toggle_select_all_visible<R: Listable>(&mut self, page: &PageResult<R>) {
        toggle_select_all(&mut self.selection, &page.visible_ids());
    }

    /// Checked state for the header checkbox over the given page.
    pub fn is_page_fully_selected<R: Listable>(&self, page: &PageResult<R>) -> bool {
        is_all_visible_selected(&self.selection, &page.visible_ids())
    }

    /// Number of selected records, across all pages.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Hand the selection to a bulk action and start over empty.
    pub fn take_selected(&mut self) -> Vec<RecordId> {
        self.selection.take()
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
