//! Property-based tests for the view pipeline and the store.
//!
//! Checks ordering, filtering, pagination and selection invariants across
//! random datasets.

use gridstate::filtering::evaluate;
use gridstate::model::{CellValue, ColumnDef, FilterOperator, Row, SortDirection};
use gridstate::sorting::compare_values;
use gridstate::view::total_pages;
use gridstate::{TableConfig, TableStore};
use proptest::prelude::*;
use std::cmp::Ordering;

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Null),
        any::<bool>().prop_map(CellValue::Bool),
        (-50i64..50).prop_map(CellValue::Int),
        (-50.0f64..50.0).prop_map(CellValue::Float),
        "[a-cA-C]{0,3}".prop_map(CellValue::Text),
    ]
}

/// Any cell, including numeric strings, NaN and short lists.
fn mixed_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        cell(),
        (-20i64..20).prop_map(|n| CellValue::Text(n.to_string())),
        Just(CellValue::Float(f64::NAN)),
        prop::collection::vec(cell(), 0..3).prop_map(CellValue::List),
    ]
}

fn operator() -> impl Strategy<Value = FilterOperator> {
    proptest::sample::select(FilterOperator::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

/// Rows with a unique `id` and a small-domain `key` so ties are common.
fn rows(max: usize) -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop_oneof![Just(None), (0i64..4).prop_map(Some)], 0..max).prop_map(
        |keys| {
            keys.into_iter()
                .enumerate()
                .map(|(i, key)| {
                    let row = Row::new().with("id", i as i64);
                    match key {
                        Some(k) => row.with("key", k),
                        None => row,
                    }
                })
                .collect()
        },
    )
}

fn store(rows: Vec<Row>, page_size: usize) -> TableStore {
    TableStore::builder()
        .data(rows)
        .column(ColumnDef::new("id"))
        .column(ColumnDef::new("key"))
        .config(TableConfig::builder().page_size(page_size).build())
        .build()
        .expect("store")
}

fn id_of(row: &Row) -> i64 {
    match row.value("id") {
        CellValue::Int(id) => id,
        other => panic!("unexpected id {other:?}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn inactive_filter_passes_everything(value in cell(), op in operator()) {
        prop_assert!(evaluate(&value, &CellValue::Null, op));
        prop_assert!(evaluate(&value, &CellValue::from(""), op));
    }

    #[test]
    fn nulls_sort_last_in_both_directions(value in cell(), dir in direction()) {
        prop_assume!(!value.is_null());
        prop_assert_eq!(compare_values(&CellValue::Null, &value, Some(dir)), Ordering::Greater);
        prop_assert_eq!(compare_values(&value, &CellValue::Null, Some(dir)), Ordering::Less);
    }

    #[test]
    fn equal_values_tie(value in cell(), dir in prop::option::of(direction())) {
        prop_assert_eq!(compare_values(&value, &value.clone(), dir), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable(data in rows(40), dir in direction()) {
        let mut store = store(data, 100);
        store.set_sorting("key", Some(dir));
        let sorted: Vec<&Row> = store.view().sorted_rows().collect();

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let order = compare_values(&a.value("key"), &b.value("key"), Some(dir));
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(id_of(a) < id_of(b), "tie broke input order");
            }
        }
    }

    #[test]
    fn comparison_is_transitive(
        a in mixed_cell(),
        b in mixed_cell(),
        c in mixed_cell(),
        dir in direction(),
    ) {
        let le = |x: &CellValue, y: &CellValue| {
            compare_values(x, y, Some(dir)) != Ordering::Greater
        };
        prop_assert_eq!(
            compare_values(&a, &b, Some(dir)),
            compare_values(&b, &a, Some(dir)).reverse()
        );
        if le(&a, &b) && le(&b, &c) {
            prop_assert!(le(&a, &c));
        }
    }

    #[test]
    fn mixed_column_sorts_in_order(
        values in prop::collection::vec(mixed_cell(), 100..200),
        dir in direction(),
    ) {
        let data: Vec<Row> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Row::new().with("id", i as i64).with("key", v))
            .collect();
        let n = data.len();
        let mut store = store(data, n);
        store.set_sorting("key", Some(dir));
        let sorted: Vec<&Row> = store.view().sorted_rows().collect();
        prop_assert_eq!(sorted.len(), n);

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let order = compare_values(&a.value("key"), &b.value("key"), Some(dir));
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(id_of(a) < id_of(b), "tie broke input order");
            }
        }
    }

    #[test]
    fn pages_reconstruct_the_sorted_rows(data in rows(60), page_size in 1usize..9) {
        let n = data.len();
        let mut store = store(data, page_size);
        store.set_sorting("key", Some(SortDirection::Desc));

        let total = store.view().total_pages();
        prop_assert_eq!(total, n.div_ceil(page_size).max(1));
        prop_assert_eq!(total, total_pages(n, page_size));

        let expected: Vec<i64> = store.view().sorted_rows().map(id_of).collect();
        let mut pages = Vec::new();
        for page in 1..=total {
            store.set_page(page);
            pages.extend(store.view().page_rows().map(id_of));
        }
        prop_assert_eq!(pages, expected);
    }

    #[test]
    fn reset_columns_is_idempotent(
        moves in prop::collection::vec((0usize..2, 0usize..2), 0..6),
        widths in prop::collection::vec(0u32..900, 0..4),
    ) {
        let ids = ["id", "key"];
        let mut store = store(Vec::new(), 10);
        for (from, to) in moves {
            store.reorder_column(ids[from], ids[to]);
        }
        for (i, width) in widths.into_iter().enumerate() {
            store.resize_column(ids[i % 2], width);
            store.toggle_column_visibility(ids[i % 2]);
        }
        store.reset_columns();
        let once = store.state().column_states.clone();
        store.reset_columns();
        prop_assert_eq!(&store.state().column_states, &once);
    }

    #[test]
    fn resize_stays_within_bounds(width in any::<u32>()) {
        let mut store = store(Vec::new(), 10);
        store.resize_column("key", width);
        let w = store.column_width("key");
        prop_assert!((50..=500).contains(&w));
    }

    #[test]
    fn selection_flags_follow_select_all(data in rows(30), pick in any::<prop::sample::Index>()) {
        prop_assume!(data.len() > 1);
        let victim = id_of(&data[pick.index(data.len())]);
        let mut store = store(data, 10);

        store.select_all();
        let summary = store.view().selection();
        prop_assert!(summary.all_selected && !summary.some_selected);

        store.deselect_row(victim);
        let summary = store.view().selection();
        prop_assert!(!summary.all_selected && summary.some_selected);
    }
}
