//! Filter list entries and operators.

use super::value::CellValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    #[default]
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    IsEmpty,
    IsNotEmpty,
}

impl FilterOperator {
    /// Every operator, in menu order.
    pub const ALL: [Self; 13] = [
        Self::Equals,
        Self::NotEquals,
        Self::Contains,
        Self::NotContains,
        Self::StartsWith,
        Self::EndsWith,
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterThanOrEqual,
        Self::LessThanOrEqual,
        Self::Between,
        Self::IsEmpty,
        Self::IsNotEmpty,
    ];

    /// Wire name of the operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::LessThanOrEqual => "lessThanOrEqual",
            Self::Between => "between",
            Self::IsEmpty => "isEmpty",
            Self::IsNotEmpty => "isNotEmpty",
        }
    }

    /// Parse an operator name, falling back to `Contains` for unknown names.
    #[must_use]
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown filter operator '{name}', using contains");
            Self::Contains
        })
    }

    /// Whether the operator compares numerically.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::GreaterThan
                | Self::LessThan
                | Self::GreaterThanOrEqual
                | Self::LessThanOrEqual
                | Self::Between
        )
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown filter operator '{s}'"))
    }
}

/// One column's active constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEntry {
    pub column_id: String,
    pub value: CellValue,
    #[serde(default)]
    pub operator: FilterOperator,
}

impl FilterEntry {
    pub fn new(
        column_id: impl Into<String>,
        value: impl Into<CellValue>,
        operator: FilterOperator,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            value: value.into(),
            operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for op in FilterOperator::ALL {
            assert_eq!(op.name().parse::<FilterOperator>(), Ok(op));
        }
    }

    #[test]
    fn lenient_parse_falls_back_to_contains() {
        assert_eq!(
            FilterOperator::from_name_lenient("fuzzy"),
            FilterOperator::Contains
        );
        assert_eq!(
            FilterOperator::from_name_lenient("STARTSWITH"),
            FilterOperator::StartsWith
        );
    }

    #[test]
    fn entry_defaults_to_contains() {
        let entry: FilterEntry =
            serde_json::from_str(r#"{"columnId": "name", "value": "a"}"#).unwrap();
        assert_eq!(entry.operator, FilterOperator::Contains);
        assert_eq!(entry.value, CellValue::from("a"));
    }
}
