//! Single-key value comparison.

use crate::model::{CellValue, SortDirection};
use std::cmp::Ordering;

/// Compare two strings the way a human-facing list expects.
///
/// Letters compare case-insensitively first; when two strings differ only
/// in case, lowercase sorts before uppercase.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| {
            let case_key = |c: char| (!c.is_lowercase(), c);
            a.chars().map(case_key).cmp(b.chars().map(case_key))
        })
}

/// Values of different kinds never compare by content; the kind decides.
const fn kind_rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Int(_) | CellValue::Float(_) => 0,
        CellValue::Date(_) => 1,
        CellValue::Text(_) => 2,
        CellValue::Bool(_) => 3,
        CellValue::List(_) => 4,
        CellValue::Null => 5,
    }
}

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// NaN sorts above every number; `-0.0` and `0.0` tie.
fn float_order(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`.
fn int_float_order(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| {
        let fraction = f - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Ascending total order over every value, nulls included (last).
fn base_order(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
        (CellValue::Float(x), CellValue::Float(y)) => float_order(*x, *y),
        (CellValue::Int(x), CellValue::Float(y)) => int_float_order(*x, *y),
        (CellValue::Float(x), CellValue::Int(y)) => int_float_order(*y, *x).reverse(),
        (CellValue::Text(x), CellValue::Text(y)) => locale_compare(x, y),
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::List(x), CellValue::List(y)) => x
            .iter()
            .zip(y)
            .map(|(p, q)| base_order(p, q))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Compare two cell values for one sort key.
///
/// No direction means the key is inactive and everything ties. Equal values
/// tie in either direction. A null sorts after any non-null value no matter
/// the direction; only the order of two non-null values is flipped by
/// `Desc`.
///
/// For every direction this is a total order, so it is safe to hand to
/// `sort_by`. Numbers sort before dates, text, booleans and lists; within a
/// kind values compare by content.
#[must_use]
pub fn compare_values(a: &CellValue, b: &CellValue, direction: Option<SortDirection>) -> Ordering {
    let Some(direction) = direction else {
        return Ordering::Equal;
    };

    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = base_order(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}
