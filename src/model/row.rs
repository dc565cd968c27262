//! Rows and row identity.

use super::value::CellValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One record of the dataset: an insertion-ordered map of named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Option<CellValue> {
        self.fields.insert(name.into(), value.into())
    }

    /// Borrow a field if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Read a field, treating a missing field as `Null`.
    #[must_use]
    pub fn value(&self, name: &str) -> CellValue {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Iterate over all fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The row's own `id` field as a [`RowId`], if it has a usable one.
    #[must_use]
    pub fn id_field(&self) -> Option<RowId> {
        match self.fields.get("id")? {
            CellValue::Null => None,
            CellValue::Int(i) => Some(RowId::Int(*i)),
            CellValue::Text(s) => Some(RowId::Text(s.clone())),
            CellValue::Float(f) if f.fract() == 0.0 && f.is_finite() => {
                Some(RowId::Int(*f as i64))
            }
            other => Some(RowId::Text(other.to_display_string())),
        }
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Caller-assigned row identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for RowId {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Caller-supplied row identity function.
pub type RowIdFn = Arc<dyn Fn(&Row) -> RowId + Send + Sync>;

/// Resolves the identity of a row.
///
/// Resolution order: the caller's function, then the row's `id` field, then
/// the row's position in the working data. The positional fallback does not
/// survive reordering or replacement of the data; selection and expansion
/// sets keyed by positional ids silently point at different rows afterwards.
#[derive(Clone, Default)]
pub struct RowIdResolver {
    custom: Option<RowIdFn>,
}

impl RowIdResolver {
    /// Resolver that only uses the `id` field and positional fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver backed by a caller function.
    pub fn with_fn(f: impl Fn(&Row) -> RowId + Send + Sync + 'static) -> Self {
        Self {
            custom: Some(Arc::new(f)),
        }
    }

    /// Whether a caller function is installed.
    #[must_use]
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Resolve without positional fallback.
    #[must_use]
    pub fn explicit_id(&self, row: &Row) -> Option<RowId> {
        match &self.custom {
            Some(f) => Some(f(row)),
            None => row.id_field(),
        }
    }

    /// Resolve the id of the row at `index` in the working data.
    #[must_use]
    pub fn resolve(&self, row: &Row, index: usize) -> RowId {
        self.explicit_id(row)
            .unwrap_or_else(|| RowId::Int(i64::try_from(index).unwrap_or(i64::MAX)))
    }

    /// Ids of every row in `rows`, in order.
    #[must_use]
    pub fn resolve_all(&self, rows: &[Row]) -> Vec<RowId> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| self.resolve(row, index))
            .collect()
    }
}

impl fmt::Debug for RowIdResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowIdResolver")
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_as_null() {
        let row = Row::new().with("name", "a");
        assert_eq!(row.value("name"), CellValue::from("a"));
        assert!(row.value("age").is_null());
    }

    #[test]
    fn id_field_resolution() {
        assert_eq!(Row::new().with("id", 7).id_field(), Some(RowId::Int(7)));
        assert_eq!(
            Row::new().with("id", "abc").id_field(),
            Some(RowId::from("abc"))
        );
        assert_eq!(Row::new().with("id", 3.0).id_field(), Some(RowId::Int(3)));
        assert_eq!(Row::new().with("id", CellValue::Null).id_field(), None);
        assert_eq!(Row::new().with("name", "x").id_field(), None);
    }

    #[test]
    fn resolver_order() {
        let row = Row::new().with("id", 1).with("code", "A-1");

        let default = RowIdResolver::new();
        assert_eq!(default.resolve(&row, 5), RowId::Int(1));

        let custom = RowIdResolver::with_fn(|r| RowId::Text(r.value("code").to_display_string()));
        assert_eq!(custom.resolve(&row, 5), RowId::from("A-1"));

        let anonymous = Row::new().with("name", "x");
        assert_eq!(default.resolve(&anonymous, 5), RowId::Int(5));
        assert_eq!(default.explicit_id(&anonymous), None);
    }

    #[test]
    fn rows_keep_field_order() {
        let row: Row = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let names: Vec<_> = row.field_names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
