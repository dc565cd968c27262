//! Canonical table state.

use crate::model::{
    Breakpoint, ColumnState, FilterEntry, FilterOperator, Row, RowId, SortDirection, SortEntry,
};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque error carried for display. The store never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorValue {
    Message(String),
    Structured(serde_json::Value),
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.write_str(msg),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ErrorValue {
    fn from(msg: &str) -> Self {
        Self::Message(msg.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(msg: String) -> Self {
        Self::Message(msg)
    }
}

/// Panel shown in the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerContent {
    Filter,
    Sort,
    Columns,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileDrawer {
    pub open: bool,
    pub content: Option<DrawerContent>,
}

/// Everything a table store owns, as one snapshot.
///
/// Fields are public for reading; mutation goes through
/// [`TableStore::dispatch`](super::TableStore::dispatch).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    /// Working rows
    pub data: Vec<Row>,
    /// Snapshot restored by a refresh
    #[serde(skip)]
    pub original_data: Vec<Row>,
    pub loading: bool,
    pub error: Option<ErrorValue>,
    /// Column layout, kept sorted by `order`
    pub column_states: Vec<ColumnState>,
    pub sorting: Vec<SortEntry>,
    pub filters: Vec<FilterEntry>,
    pub global_filter: String,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub selected_ids: IndexSet<RowId>,
    pub expanded_ids: IndexSet<RowId>,
    pub dragging_column: Option<String>,
    pub resizing_column: Option<String>,
    pub active_filter_column: Option<String>,
    pub mobile_drawer: MobileDrawer,
    pub breakpoint: Breakpoint,
    pub viewport_width: Option<u32>,
}

impl TableState {
    /// Fresh state over `data` with the given layout.
    #[must_use]
    pub fn new(
        data: Vec<Row>,
        column_states: Vec<ColumnState>,
        page: usize,
        page_size: usize,
    ) -> Self {
        Self {
            original_data: data.clone(),
            data,
            loading: false,
            error: None,
            column_states,
            sorting: Vec::new(),
            filters: Vec::new(),
            global_filter: String::new(),
            page: page.max(1),
            page_size,
            selected_ids: IndexSet::new(),
            expanded_ids: IndexSet::new(),
            dragging_column: None,
            resizing_column: None,
            active_filter_column: None,
            mobile_drawer: MobileDrawer::default(),
            breakpoint: Breakpoint::default(),
            viewport_width: None,
        }
    }

    /// Direction of `column_id` in the sort list, if it is sorted.
    #[must_use]
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }

    /// Position of `column_id` in the sort list (0 is the primary key).
    #[must_use]
    pub fn sort_index(&self, column_id: &str) -> Option<usize> {
        self.sorting.iter().position(|s| s.column_id == column_id)
    }

    #[must_use]
    pub fn filter(&self, column_id: &str) -> Option<&FilterEntry> {
        self.filters.iter().find(|f| f.column_id == column_id)
    }

    /// Operator of the active filter on `column_id`.
    #[must_use]
    pub fn filter_operator(&self, column_id: &str) -> Option<FilterOperator> {
        self.filter(column_id).map(|f| f.operator)
    }

    #[must_use]
    pub fn column_state(&self, column_id: &str) -> Option<&ColumnState> {
        self.column_states.iter().find(|c| c.id == column_id)
    }

    /// Whether any column filter or the global filter is active.
    #[must_use]
    pub fn has_any_filter(&self) -> bool {
        !self.filters.is_empty() || !self.global_filter.is_empty()
    }
}
