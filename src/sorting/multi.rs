//! Stable multi-key ordering of row indices.

use super::comparator::compare_values;
use crate::model::{CellValue, ColumnDef, Row, SortDirection};
use std::cmp::Ordering;

/// One resolved sort key: the column to read and the direction to apply.
#[derive(Debug, Clone, Copy)]
pub struct SortKey<'a> {
    pub column: &'a ColumnDef,
    pub direction: SortDirection,
}

impl<'a> SortKey<'a> {
    #[must_use]
    pub const fn new(column: &'a ColumnDef, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Compare two already-extracted values for this key.
    ///
    /// A column comparator receives the direction and its result is used
    /// as is.
    #[must_use]
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match &self.column.sort_fn {
            Some(sort_fn) => sort_fn(a, b, self.direction),
            None => compare_values(a, b, Some(self.direction)),
        }
    }
}

/// Compare two rows key by key; the first non-tie decides.
#[must_use]
pub fn compare_rows(a: &Row, b: &Row, keys: &[SortKey<'_>]) -> Ordering {
    keys.iter()
        .map(|key| key.compare(&key.column.value(a), &key.column.value(b)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Order `indices` (positions into `rows`) by `keys`.
///
/// The sort is stable: indices whose rows tie on every key keep their input
/// order. Each key's value is read once per row up front.
#[must_use]
pub fn sort_indices(rows: &[Row], indices: Vec<usize>, keys: &[SortKey<'_>]) -> Vec<usize> {
    if keys.is_empty() || indices.len() < 2 {
        return indices;
    }

    let mut decorated: Vec<(usize, Vec<CellValue>)> = indices
        .into_iter()
        .map(|idx| {
            let values = keys.iter().map(|key| key.column.value(&rows[idx])).collect();
            (idx, values)
        })
        .collect();

    decorated.sort_by(|(_, a), (_, b)| {
        keys.iter()
            .zip(a.iter().zip(b.iter()))
            .map(|(key, (va, vb))| key.compare(va, vb))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    decorated.into_iter().map(|(idx, _)| idx).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("id", 1).with("name", "b").with("age", 30),
            Row::new().with("id", 2).with("name", "a").with("age", 25),
            Row::new().with("id", 3).with("name", "a").with("age", 40),
            Row::new().with("id", 4).with("name", CellValue::Null).with("age", 25),
        ]
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = rows();
        let name = ColumnDef::new("name");
        let keys = [SortKey::new(&name, SortDirection::Asc)];
        assert_eq!(sort_indices(&rows, vec![0, 1, 2, 3], &keys), vec![1, 2, 0, 3]);
    }

    #[test]
    fn later_keys_break_ties() {
        let rows = rows();
        let (age, name) = (ColumnDef::new("age"), ColumnDef::new("name"));
        let keys = [
            SortKey::new(&age, SortDirection::Asc),
            SortKey::new(&name, SortDirection::Desc),
        ];
        // age 25 tie: "a" before null (nulls last even when descending)
        assert_eq!(sort_indices(&rows, vec![0, 1, 2, 3], &keys), vec![1, 3, 0, 2]);
    }

    #[test]
    fn null_stays_last_when_descending() {
        let rows = rows();
        let name = ColumnDef::new("name");
        let keys = [SortKey::new(&name, SortDirection::Desc)];
        assert_eq!(sort_indices(&rows, vec![0, 1, 2, 3], &keys), vec![0, 1, 2, 3]);
    }

    #[test]
    fn custom_comparator_owns_direction() {
        let rows = rows();
        // Always by descending age, whatever the requested direction
        let age = ColumnDef::new("age").sort_fn(|a, b, _| b.to_number().total_cmp(&a.to_number()));
        let keys = [SortKey::new(&age, SortDirection::Asc)];
        assert_eq!(sort_indices(&rows, vec![0, 1, 2, 3], &keys), vec![2, 0, 1, 3]);
    }

    #[test]
    fn compare_rows_matches_index_sort() {
        let rows = rows();
        let name = ColumnDef::new("name");
        let keys = [SortKey::new(&name, SortDirection::Asc)];
        assert_eq!(compare_rows(&rows[0], &rows[1], &keys), Ordering::Greater);
        assert_eq!(compare_rows(&rows[1], &rows[2], &keys), Ordering::Equal);
    }
}
