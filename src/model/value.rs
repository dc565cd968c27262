//! Dynamically typed cell values.
//!
//! Rows are opaque records, so every field is carried as a [`CellValue`].
//! The coercions here define how filters and comparators see a value when
//! the two sides of a comparison have different types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single field value.
///
/// `Null` stands for both an explicit null and a missing field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(DateTime<Utc>),
    List(Vec<CellValue>),
}

impl CellValue {
    /// Whether the value is null or missing.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is null or coerces to the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::List(_) => self.to_display_string().is_empty(),
            _ => false,
        }
    }

    /// String coercion used by text filters, the global filter and
    /// fallback comparisons.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::List(items) => items
                .iter()
                .map(Self::to_display_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Numeric coercion used by the comparison filter operators.
    ///
    /// Anything that has no sensible numeric reading becomes `NaN`, which
    /// makes every ordered comparison against it false.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => f64::NAN,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Text(s) => parse_number(s),
            Self::Date(d) => d.timestamp_millis() as f64,
            Self::List(items) => match items.as_slice() {
                [] => 0.0,
                [single] => parse_number(&single.to_display_string()),
                _ => f64::NAN,
            },
        }
    }

    /// Borrow the text content if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the items if this is a `List` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[CellValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short type label, used in debug logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::List(_) => "list",
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf"/"nan" spellings that should stay non-numeric here
        _ if trimmed.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) => {
            f64::NAN
        }
        _ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            // Nested objects have no cell semantics; keep their JSON text
            obj @ serde_json::Value::Object(_) => Self::Text(obj.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<CellValue>> From<Vec<T>> for CellValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_string_coercion() {
        assert_eq!(CellValue::Null.to_display_string(), "");
        assert_eq!(CellValue::Bool(true).to_display_string(), "true");
        assert_eq!(CellValue::Float(3.0).to_display_string(), "3");
        assert_eq!(CellValue::Float(2.5).to_display_string(), "2.5");
        assert_eq!(
            CellValue::from(vec![1, 2, 3]).to_display_string(),
            "1,2,3"
        );

        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            CellValue::Date(date).to_display_string(),
            "2024-03-01T12:00:00.000Z"
        );
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(CellValue::from("  42 ").to_number(), 42.0);
        assert_eq!(CellValue::from("").to_number(), 0.0);
        assert_eq!(CellValue::Bool(true).to_number(), 1.0);
        assert_eq!(CellValue::from("1e3").to_number(), 1000.0);
        assert!(CellValue::from("abc").to_number().is_nan());
        assert!(CellValue::from("inf").to_number().is_nan());
        assert!(CellValue::Null.to_number().is_nan());
        assert_eq!(CellValue::from(vec![7]).to_number(), 7.0);
        assert!(CellValue::from(vec![1, 2]).to_number().is_nan());
    }

    #[test]
    fn blank_detection() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::from("").is_blank());
        assert!(!CellValue::from(" ").is_blank());
        assert!(!CellValue::Int(0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn deserializes_from_json() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 3, 1.5, "x", [1, "a"]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Null,
                CellValue::Bool(true),
                CellValue::Int(3),
                CellValue::Float(1.5),
                CellValue::from("x"),
                CellValue::List(vec![CellValue::Int(1), CellValue::from("a")]),
            ]
        );
    }

    #[test]
    fn date_like_strings_stay_text() {
        let value: CellValue = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        assert_eq!(value.kind(), "text");
    }
}
