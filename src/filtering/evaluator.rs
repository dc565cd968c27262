//! Built-in filter predicates.

use crate::model::{CellValue, ColumnDef, FilterEntry, FilterOperator, Row};

/// Whether a filter value leaves every row in place.
///
/// Null and the empty string are inactive. Every other value, including an
/// empty list, is active.
#[must_use]
pub fn is_inactive(filter_value: &CellValue) -> bool {
    match filter_value {
        CellValue::Null => true,
        CellValue::Text(s) => s.is_empty(),
        _ => false,
    }
}

/// Test `value` against `filter_value` with `operator`.
///
/// Text operators compare lowercase string coercions of both sides. Ordered
/// operators compare numeric coercions, so anything non-numeric (`NaN`)
/// fails them. `Between` needs a two-element list and passes for any other
/// filter shape.
#[must_use]
pub fn evaluate(value: &CellValue, filter_value: &CellValue, operator: FilterOperator) -> bool {
    if is_inactive(filter_value) {
        return true;
    }

    match operator {
        FilterOperator::Equals => lowered(value) == lowered(filter_value),
        FilterOperator::NotEquals => lowered(value) != lowered(filter_value),
        FilterOperator::Contains => lowered(value).contains(&lowered(filter_value)),
        FilterOperator::NotContains => !lowered(value).contains(&lowered(filter_value)),
        FilterOperator::StartsWith => lowered(value).starts_with(&lowered(filter_value)),
        FilterOperator::EndsWith => lowered(value).ends_with(&lowered(filter_value)),
        FilterOperator::GreaterThan => value.to_number() > filter_value.to_number(),
        FilterOperator::LessThan => value.to_number() < filter_value.to_number(),
        FilterOperator::GreaterThanOrEqual => value.to_number() >= filter_value.to_number(),
        FilterOperator::LessThanOrEqual => value.to_number() <= filter_value.to_number(),
        FilterOperator::Between => match filter_value.as_list() {
            Some([low, high]) => {
                let n = value.to_number();
                n >= low.to_number() && n <= high.to_number()
            }
            _ => true,
        },
        FilterOperator::IsEmpty => value.is_blank(),
        FilterOperator::IsNotEmpty => !value.is_blank(),
    }
}

/// Apply one filter entry to a row through its column.
///
/// A column predicate, when present, sees every filter value (inactive
/// ones included) and has the final say.
#[must_use]
pub fn matches_entry(column: &ColumnDef, row: &Row, entry: &FilterEntry) -> bool {
    let value = column.value(row);
    match &column.filter_fn {
        Some(predicate) => predicate(&value, &entry.value, entry.operator),
        None => evaluate(&value, &entry.value, entry.operator),
    }
}

fn lowered(value: &CellValue) -> String {
    value.to_display_string().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn inactive_filter_passes_everything() {
        for op in FilterOperator::ALL {
            assert!(evaluate(&text("anything"), &CellValue::Null, op));
            assert!(evaluate(&CellValue::Null, &text(""), op));
        }
    }

    #[test]
    fn text_operators_ignore_case() {
        let v = text("Alice Smith");
        assert!(evaluate(&v, &text("alice smith"), FilterOperator::Equals));
        assert!(evaluate(&v, &text("bob"), FilterOperator::NotEquals));
        assert!(evaluate(&v, &text("SMI"), FilterOperator::Contains));
        assert!(evaluate(&v, &text("jones"), FilterOperator::NotContains));
        assert!(evaluate(&v, &text("ali"), FilterOperator::StartsWith));
        assert!(evaluate(&v, &text("ITH"), FilterOperator::EndsWith));
        assert!(!evaluate(&v, &text("smith"), FilterOperator::StartsWith));
    }

    #[test]
    fn text_operators_coerce_non_text() {
        assert!(evaluate(&CellValue::Int(42), &text("4"), FilterOperator::Contains));
        assert!(evaluate(&CellValue::Bool(true), &text("TRUE"), FilterOperator::Equals));
        assert!(evaluate(&CellValue::Null, &text("x"), FilterOperator::NotContains));
        assert!(!evaluate(&CellValue::Null, &text("null"), FilterOperator::Contains));
    }

    #[test]
    fn numeric_operators() {
        let v = CellValue::Int(30);
        assert!(evaluate(&v, &text("25"), FilterOperator::GreaterThan));
        assert!(evaluate(&v, &CellValue::Float(30.0), FilterOperator::GreaterThanOrEqual));
        assert!(evaluate(&v, &CellValue::Int(30), FilterOperator::LessThanOrEqual));
        assert!(!evaluate(&v, &CellValue::Int(30), FilterOperator::LessThan));
        assert!(evaluate(&text("3.5"), &CellValue::Int(3), FilterOperator::GreaterThan));
    }

    #[test]
    fn nan_comparisons_are_false() {
        let garbage = text("abc");
        assert!(!evaluate(&garbage, &CellValue::Int(1), FilterOperator::GreaterThan));
        assert!(!evaluate(&garbage, &CellValue::Int(1), FilterOperator::LessThanOrEqual));
        assert!(!evaluate(
            &CellValue::Null,
            &CellValue::Int(0),
            FilterOperator::GreaterThanOrEqual
        ));
    }

    #[test]
    fn between_is_inclusive() {
        let range = CellValue::from(vec![10, 20]);
        assert!(evaluate(&CellValue::Int(10), &range, FilterOperator::Between));
        assert!(evaluate(&CellValue::Int(20), &range, FilterOperator::Between));
        assert!(evaluate(&CellValue::Float(15.5), &range, FilterOperator::Between));
        assert!(!evaluate(&CellValue::Int(21), &range, FilterOperator::Between));
    }

    #[test]
    fn between_fails_open_on_bad_shape() {
        let v = CellValue::Int(1000);
        assert!(evaluate(&v, &CellValue::from(vec![1, 2, 3]), FilterOperator::Between));
        assert!(evaluate(&v, &CellValue::Int(5), FilterOperator::Between));
        assert!(evaluate(&v, &text("10-20"), FilterOperator::Between));
    }

    #[test]
    fn emptiness_operators() {
        let active = text("x");
        assert!(evaluate(&CellValue::Null, &active, FilterOperator::IsEmpty));
        assert!(evaluate(&text(""), &active, FilterOperator::IsEmpty));
        assert!(!evaluate(&CellValue::Int(0), &active, FilterOperator::IsEmpty));
        assert!(evaluate(&CellValue::Bool(false), &active, FilterOperator::IsNotEmpty));
        assert!(!evaluate(&CellValue::Null, &active, FilterOperator::IsNotEmpty));
    }

    #[test]
    fn column_predicate_overrides_builtin() {
        let col = ColumnDef::new("tags").filter_fn(|value, filter, _| {
            value
                .as_list()
                .is_some_and(|items| items.iter().any(|item| item == filter))
        });
        let row = Row::new().with("tags", vec!["red", "blue"]);

        let blue = FilterEntry::new("tags", "blue", FilterOperator::Equals);
        let re = FilterEntry::new("tags", "re", FilterOperator::Contains);
        assert!(matches_entry(&col, &row, &blue));
        assert!(!matches_entry(&col, &row, &re));
    }
}
