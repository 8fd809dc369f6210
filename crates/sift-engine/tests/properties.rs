//! Property tests for the query pipeline.

use proptest::prelude::*;
use sift_core::{FieldValue, Filter, Listable, Query, RecordId, SortSpec};
use sift_engine::apply;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u64,
    name: String,
    status: &'static str,
    price: i64,
}

impl Listable for Row {
    fn id(&self) -> RecordId {
        RecordId(self.id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(self.name.clone())),
            "status" => Some(FieldValue::from(self.status)),
            "price" => Some(FieldValue::Int(self.price)),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "status", "price"]
    }

    fn search_fields() -> &'static [&'static str] {
        &["name"]
    }
}

const SORT_KEYS: [&str; 3] = ["name", "status", "price"];
const STATUSES: [&str; 2] = ["active", "archived"];

fn arb_row(id: u64) -> impl Strategy<Value = Row> {
    (
        "[a-c]{0,4}",
        prop_oneof![Just(STATUSES[0]), Just(STATUSES[1])],
        -5i64..5,
    )
        .prop_map(move |(name, status, price)| Row {
            id,
            name,
            status,
            price,
        })
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    // Ids double as input positions so stability is checkable.
    (0usize..24).prop_flat_map(|len| {
        (0..len)
            .map(|i| arb_row(i as u64))
            .collect::<Vec<_>>()
    })
}

fn arb_query() -> impl Strategy<Value = Query> {
    (
        "[a-c]{0,2}",
        prop_oneof![
            Just(SORT_KEYS[0]),
            Just(SORT_KEYS[1]),
            Just(SORT_KEYS[2])
        ],
        any::<bool>(),
        1usize..6,
        1usize..8,
        prop_oneof![
            Just(None),
            Just(Some(STATUSES[0])),
            Just(Some(STATUSES[1]))
        ],
    )
        .prop_map(|(search, key, descending, page, page_size, status)| {
            let sort = if descending {
                SortSpec::descending(key)
            } else {
                SortSpec::ascending(key)
            };
            let mut query = Query::new(sort, page_size).with_search(search);
            query.page = page;
            if let Some(status) = status {
                query = query.with_filter("status", Filter::equals(status));
            }
            query
        })
}

/// The full filtered-and-sorted sequence, fetched as one oversized page.
fn full_sequence(rows: &[Row], query: &Query) -> Vec<Row> {
    let mut wide = query.clone();
    wide.page = 1;
    wide.page_size = rows.len().max(1);
    apply(rows, &wide).unwrap().visible
}

proptest! {
    #[test]
    fn page_never_exceeds_page_size(rows in arb_rows(), query in arb_query()) {
        let result = apply(&rows, &query).unwrap();
        prop_assert!(result.visible.len() <= query.page_size);
        prop_assert!(result.last_index <= result.total);
    }

    #[test]
    fn apply_is_idempotent(rows in arb_rows(), query in arb_query()) {
        let first = apply(&rows, &query).unwrap();
        let second = apply(&rows, &query).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pages_reconstruct_the_filtered_sequence(rows in arb_rows(), query in arb_query()) {
        let expected = full_sequence(&rows, &query);

        let mut collected = Vec::new();
        let mut paged = query.clone();
        paged.page = 1;
        loop {
            let result = apply(&rows, &paged).unwrap();
            if result.is_empty() {
                break;
            }
            collected.extend(result.visible);
            paged.page += 1;
        }

        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn visible_records_match_every_constraint(rows in arb_rows(), query in arb_query()) {
        let result = apply(&rows, &query).unwrap();
        let needle = query.search.to_lowercase();
        for row in &result.visible {
            prop_assert!(row.name.to_lowercase().contains(&needle));
            if let Some(Filter::Equals(want)) = query.filters.get("status") {
                prop_assert_eq!(&FieldValue::from(row.status), want);
            }
        }
    }

    #[test]
    fn equal_sort_keys_keep_input_order(rows in arb_rows(), query in arb_query()) {
        // Row ids are assigned in input order, so within any run of equal
        // sort keys the ids must be increasing - in both directions.
        let sequence = full_sequence(&rows, &query);
        for pair in sequence.windows(2) {
            let left = pair[0].field(&query.sort.key).unwrap();
            let right = pair[1].field(&query.sort.key).unwrap();
            if left == right {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
