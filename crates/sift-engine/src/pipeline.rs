//! The list query pipeline: sort, filter, paginate.

use crate::page::PageResult;
use sift_core::{FieldValue, Filter, Listable, Query, QueryError};

/// Compute the visible page for a query over a record collection.
///
/// Pure: no side effects, and identical inputs yield identical output.
/// Insertion order of `records` is the tie-break baseline - records that
/// compare equal on the sort key keep their relative input order in both
/// sort directions.
///
/// The requested page is not clamped. A page past the end of a non-empty
/// result produces an empty `visible` slice together with the real `total`,
/// so the caller can decide where to land.
pub fn apply<R: Listable + Clone>(records: &[R], query: &Query) -> Result<PageResult<R>, QueryError> {
    if query.page == 0 || query.page_size == 0 {
        return Err(QueryError::InvalidQuery {
            page: query.page,
            page_size: query.page_size,
        });
    }

    let key = query.sort.key.as_str();
    if !R::field_names().contains(&key) {
        return Err(QueryError::UnknownSortKey {
            key: query.sort.key.clone(),
        });
    }

    // Sort runs before filtering so equal keys tie-break on input order
    // regardless of which records survive the filter. Keys are read once
    // per record.
    let mut ordered: Vec<(FieldValue, &R)> = records
        .iter()
        .map(|record| (record.field(key).unwrap_or(FieldValue::Null), record))
        .collect();
    ordered.sort_by(|(a, _), (b, _)| query.sort.direction.apply(a.compare(b)));

    let needle = query.search.to_lowercase();
    let filtered: Vec<&R> = ordered
        .into_iter()
        .map(|(_, record)| record)
        .filter(|record| matches(*record, query, &needle))
        .collect();

    let total = filtered.len();
    let first_index = (query.page - 1).saturating_mul(query.page_size);
    let last_index = first_index.saturating_add(query.page_size).min(total);
    let visible: Vec<R> = filtered
        .into_iter()
        .skip(first_index)
        .take(query.page_size)
        .cloned()
        .collect();

    tracing::trace!(
        total,
        first_index,
        page = query.page,
        visible = visible.len(),
        "applied list query"
    );

    Ok(PageResult {
        visible,
        total,
        first_index,
        last_index,
    })
}

/// Check a record against the search text and every filter constraint.
fn matches<R: Listable>(record: &R, query: &Query, needle: &str) -> bool {
    let matches_search = needle.is_empty()
        || R::search_fields().iter().any(|name| {
            let value = record.field(name).unwrap_or(FieldValue::Null);
            value.search_text().to_lowercase().contains(needle)
        });

    matches_search
        && query.filters.iter().all(|(field, filter)| match filter {
            Filter::All => true,
            // A filter on a field the shape lacks can never match.
            Filter::Equals(want) => record.field(field).is_some_and(|have| have == *want),
        })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_core::{RecordId, SortSpec};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        name: &'static str,
        status: &'static str,
    }

    impl Listable for Row {
        fn id(&self) -> RecordId {
            RecordId(self.id)
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "name" => Some(FieldValue::from(self.name)),
                "status" => Some(FieldValue::from(self.status)),
                _ => None,
            }
        }

        fn field_names() -> &'static [&'static str] {
            &["name", "status"]
        }

        fn search_fields() -> &'static [&'static str] {
            &["name"]
        }
    }

    fn row(id: u64, name: &'static str, status: &'static str) -> Row {
        Row { id, name, status }
    }

    fn collection() -> Vec<Row> {
        vec![row(1, "Alpha", "active"), row(2, "Beta", "archived")]
    }

    fn base_query() -> Query {
        Query::new(SortSpec::ascending("name"), 10)
    }

    #[test]
    fn test_status_filter_keeps_matching_record() {
        let result = apply(
            &collection(),
            &base_query().with_filter("status", Filter::equals("active")),
        )
        .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.visible, vec![row(1, "Alpha", "active")]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = apply(&collection(), &base_query().with_search("bet")).unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.visible[0].id, 2);
    }

    #[test]
    fn test_second_page_of_size_one() {
        let mut query = base_query();
        query.page_size = 1;
        query.page = 2;
        let result = apply(&collection(), &query).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.first_index, 1);
        assert_eq!(result.visible, vec![row(2, "Beta", "archived")]);
    }

    #[test]
    fn test_page_zero_is_invalid() {
        let err = apply(&collection(), &base_query().with_page(0)).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidQuery {
                page: 0,
                page_size: 10
            }
        );
    }

    #[test]
    fn test_page_size_zero_is_invalid() {
        let mut query = base_query();
        query.page_size = 0;
        assert!(matches!(
            apply(&collection(), &query),
            Err(QueryError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_unknown_sort_key_is_an_error() {
        let query = Query::new(SortSpec::ascending("price"), 10);
        let err = apply(&collection(), &query).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSortKey {
                key: "price".to_string()
            }
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let records = vec![
            row(1, "Same", "a"),
            row(2, "Same", "b"),
            row(3, "Same", "c"),
        ];
        let result = apply(&records, &base_query()).unwrap();
        let ids: Vec<u64> = result.visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_descending_ties_keep_input_order() {
        // Descending reverses the comparison, not the sequence, so equal
        // keys must still come out in input order.
        let records = vec![
            row(1, "Same", "a"),
            row(2, "Same", "b"),
            row(3, "Other", "c"),
        ];
        let query = Query::new(SortSpec::descending("name"), 10);
        let ids: Vec<u64> = apply(&records, &query)
            .unwrap()
            .visible
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_past_end_is_empty_but_reports_total() {
        let result = apply(&collection(), &base_query().with_page(5)).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total, 2);
        assert_eq!(result.first_index, 40);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let result = apply(
            &collection(),
            &base_query().with_filter("status", Filter::All),
        )
        .unwrap();
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_filter_on_unknown_field_matches_nothing() {
        let result = apply(
            &collection(),
            &base_query().with_filter("warehouse", Filter::equals("east")),
        )
        .unwrap();
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_apply_is_referentially_transparent() {
        let records = collection();
        let query = base_query().with_search("a");
        let first = apply(&records, &query).unwrap();
        let second = apply(&records, &query).unwrap();
        assert_eq!(first, second);
    }
}
