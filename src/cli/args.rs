//! Parsing of `--sort` and `--filter` command-line specs.

use crate::error::{GridError, ParseErrorKind, Result};
use crate::model::{CellValue, FilterEntry, FilterOperator, SortDirection, SortEntry};

/// Parse `column[:asc|desc]`. The direction defaults to ascending.
pub fn parse_sort_spec(spec: &str) -> Result<SortEntry> {
    let (column, direction) = match spec.split_once(':') {
        Some((column, direction)) => {
            let direction: SortDirection = direction
                .parse()
                .map_err(|reason: String| GridError::invalid_sort_spec(spec, reason))?;
            (column, direction)
        }
        None => (spec, SortDirection::Asc),
    };
    let column = column.trim();
    if column.is_empty() {
        return Err(GridError::invalid_sort_spec(spec, "missing column id"));
    }
    Ok(SortEntry::new(column, direction))
}

/// Parse `column:operator:value` or `column:value` (contains).
///
/// `between` takes `low,high`; `isEmpty` and `isNotEmpty` take no value.
pub fn parse_filter_spec(spec: &str) -> Result<FilterEntry> {
    let mut parts = spec.splitn(3, ':');
    let column = parts.next().unwrap_or_default().trim();
    if column.is_empty() {
        return Err(GridError::invalid_filter_spec(spec, "missing column id"));
    }

    let (operator, raw) = match (parts.next(), parts.next()) {
        (Some(op), Some(value)) => (parse_operator(op)?, value),
        (Some(op), None) => match op.parse::<FilterOperator>() {
            Ok(op @ (FilterOperator::IsEmpty | FilterOperator::IsNotEmpty)) => (op, ""),
            _ => (FilterOperator::Contains, op),
        },
        (None, _) => return Err(GridError::invalid_filter_spec(spec, "missing value")),
    };

    let value = if operator == FilterOperator::Between {
        let Some((low, high)) = raw.split_once(',') else {
            return Err(GridError::invalid_filter_spec(spec, "between needs 'low,high'"));
        };
        CellValue::List(vec![low.trim().into(), high.trim().into()])
    } else {
        CellValue::from(raw)
    };

    let needs_value = !matches!(operator, FilterOperator::IsEmpty | FilterOperator::IsNotEmpty);
    if value.is_blank() && needs_value {
        tracing::warn!("Filter '{spec}' has an empty value and will match every row");
    }

    Ok(FilterEntry::new(column, value, operator))
}

fn parse_operator(name: &str) -> Result<FilterOperator> {
    name.parse().map_err(|_| {
        GridError::parse(
            "filter spec",
            ParseErrorKind::UnknownOperator(name.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_spec_defaults_to_ascending() {
        assert_eq!(parse_sort_spec("name").ok(), Some(SortEntry::asc("name")));
        assert_eq!(parse_sort_spec("age:DESC").ok(), Some(SortEntry::desc("age")));
        assert!(parse_sort_spec("age:up").is_err());
        assert!(parse_sort_spec(":asc").is_err());
    }

    #[test]
    fn filter_spec_forms() {
        let entry = parse_filter_spec("name:startsWith:an").expect("valid");
        assert_eq!(entry.operator, FilterOperator::StartsWith);
        assert_eq!(entry.value, CellValue::from("an"));

        let entry = parse_filter_spec("name:bo").expect("valid");
        assert_eq!(entry.operator, FilterOperator::Contains);

        let entry = parse_filter_spec("email:isEmpty").expect("valid");
        assert_eq!(entry.operator, FilterOperator::IsEmpty);

        let entry = parse_filter_spec("note:a:b").expect_err("unknown op");
        assert!(matches!(
            entry,
            GridError::Parse {
                source: ParseErrorKind::UnknownOperator(_),
                ..
            }
        ));
    }

    #[test]
    fn filter_spec_keeps_colons_in_value() {
        let entry = parse_filter_spec("time:equals:10:30").expect("valid");
        assert_eq!(entry.value, CellValue::from("10:30"));
    }

    #[test]
    fn between_needs_two_bounds() {
        let entry = parse_filter_spec("age:between:20, 35").expect("valid");
        assert_eq!(
            entry.value,
            CellValue::List(vec!["20".into(), "35".into()])
        );
        assert!(parse_filter_spec("age:between:20").is_err());
        assert!(parse_filter_spec("age").is_err());
    }
}
