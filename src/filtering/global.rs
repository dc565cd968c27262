//! Free-text search across a row.

use crate::model::{ColumnDef, Row};

/// Which values of a row the global search looks at.
#[derive(Debug, Clone, Copy)]
pub enum SearchScope<'a> {
    /// Every stored field of the row
    AllFields,
    /// The accessor values of these columns only
    Columns(&'a [&'a ColumnDef]),
}

/// A case-insensitive substring search over rows.
#[derive(Debug, Clone)]
pub struct GlobalSearch<'a> {
    needle: String,
    scope: SearchScope<'a>,
}

impl<'a> GlobalSearch<'a> {
    /// Build a search for `query`, or `None` when the query is empty and
    /// therefore matches everything.
    #[must_use]
    pub fn new(query: &str, scope: SearchScope<'a>) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
            scope,
        })
    }

    /// Whether any searched value of `row` contains the query.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        match self.scope {
            // Nulls display as "" and never match a non-empty query
            SearchScope::AllFields => row
                .fields()
                .any(|(_, value)| self.hit(&value.to_display_string())),
            SearchScope::Columns(columns) => columns
                .iter()
                .any(|col| self.hit(&col.value(row).to_display_string())),
        }
    }

    fn hit(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn person() -> Row {
        Row::new()
            .with("id", 7)
            .with("name", "Grace Hopper")
            .with("email", "grace@navy.mil")
            .with("manager", CellValue::Null)
    }

    #[test]
    fn empty_query_builds_nothing() {
        assert!(GlobalSearch::new("", SearchScope::AllFields).is_none());
    }

    #[test]
    fn searches_every_field_case_insensitively() {
        let row = person();
        let hit = |q: &str| {
            GlobalSearch::new(q, SearchScope::AllFields).is_some_and(|s| s.matches(&row))
        };
        assert!(hit("HOPPER"));
        assert!(hit("navy"));
        assert!(hit("7"));
        assert!(!hit("null"));
        assert!(!hit("lovelace"));
    }

    #[test]
    fn column_scope_limits_search() {
        let name = ColumnDef::new("name");
        let columns = [&name];
        let search = GlobalSearch::new("navy", SearchScope::Columns(&columns));
        assert!(search.is_some_and(|s| !s.matches(&person())));
    }
}
