//! Column definitions and per-column layout state.

use super::breakpoint::ResponsiveValue;
use super::filter::FilterOperator;
use super::row::Row;
use super::sort::SortDirection;
use super::value::CellValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Derives a cell value from a whole row.
pub type AccessorFn = Arc<dyn Fn(&Row) -> CellValue + Send + Sync>;
/// Produces header text on demand.
pub type HeaderFn = Arc<dyn Fn() -> String + Send + Sync>;
/// Renders a cell as text: `(value, row, row_index)`.
pub type RenderFn = Arc<dyn Fn(&CellValue, &Row, usize) -> String + Send + Sync>;
/// Column-specific comparator. The direction is passed through untouched;
/// the comparator decides what it means.
pub type SortFn = Arc<dyn Fn(&CellValue, &CellValue, SortDirection) -> Ordering + Send + Sync>;
/// Column-specific filter predicate: `(value, filter_value, operator)`.
pub type FilterFn = Arc<dyn Fn(&CellValue, &CellValue, FilterOperator) -> bool + Send + Sync>;

/// How a column reads its value from a row.
#[derive(Clone)]
pub enum Accessor {
    /// Named field of the row
    Field(String),
    /// Computed from the whole row
    Derived(AccessorFn),
}

impl Accessor {
    /// Read the column value out of `row`.
    #[must_use]
    pub fn get(&self, row: &Row) -> CellValue {
        match self {
            Self::Field(name) => row.value(name),
            Self::Derived(f) => f(row),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Header content of a column.
#[derive(Clone)]
pub enum Header {
    Text(String),
    Derived(HeaderFn),
}

impl Header {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Derived(f) => f(),
        }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

/// Kind of filter editor a column offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Text,
    Number,
    Date,
    Select,
    Boolean,
    Custom,
}

/// One choice of a select-style filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: CellValue,
    pub label: String,
}

/// Static, caller-provided description of one column.
#[derive(Clone)]
pub struct ColumnDef {
    pub id: String,
    pub accessor: Accessor,
    pub header: Header,
    pub width: Option<ResponsiveValue<u32>>,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub align: Alignment,
    pub sortable: bool,
    pub filterable: bool,
    pub resizable: bool,
    pub draggable: bool,
    pub hidden: bool,
    pub hidden_on_mobile: bool,
    pub sticky: Option<PinSide>,
    pub render: Option<RenderFn>,
    pub sort_fn: Option<SortFn>,
    pub filter_fn: Option<FilterFn>,
    pub filter_type: FilterType,
    pub filter_options: Vec<FilterOption>,
    pub filter_operators: Vec<FilterOperator>,
    pub default_filter_operator: Option<FilterOperator>,
}

impl ColumnDef {
    /// A sortable, filterable, resizable, draggable column reading the
    /// field named `id`, with `id` as its header.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            accessor: Accessor::Field(id.clone()),
            header: Header::Text(id.clone()),
            id,
            width: None,
            min_width: None,
            max_width: None,
            align: Alignment::Left,
            sortable: true,
            filterable: true,
            resizable: true,
            draggable: true,
            hidden: false,
            hidden_on_mobile: false,
            sticky: None,
            render: None,
            sort_fn: None,
            filter_fn: None,
            filter_type: FilterType::Text,
            filter_options: Vec::new(),
            filter_operators: Vec::new(),
            default_filter_operator: None,
        }
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Header::Text(header.into());
        self
    }

    #[must_use]
    pub fn header_fn(mut self, f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.header = Header::Derived(Arc::new(f));
        self
    }

    /// Read a different field than the column id.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(name.into());
        self
    }

    /// Compute the value from the whole row.
    #[must_use]
    pub fn accessor_fn(mut self, f: impl Fn(&Row) -> CellValue + Send + Sync + 'static) -> Self {
        self.accessor = Accessor::Derived(Arc::new(f));
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<ResponsiveValue<u32>>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub const fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    #[must_use]
    pub const fn max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[must_use]
    pub const fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    #[must_use]
    pub const fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    #[must_use]
    pub const fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    #[must_use]
    pub const fn hidden_on_mobile(mut self, hidden: bool) -> Self {
        self.hidden_on_mobile = hidden;
        self
    }

    #[must_use]
    pub const fn sticky(mut self, side: PinSide) -> Self {
        self.sticky = Some(side);
        self
    }

    #[must_use]
    pub fn render_fn(
        mut self,
        f: impl Fn(&CellValue, &Row, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn sort_fn(
        mut self,
        f: impl Fn(&CellValue, &CellValue, SortDirection) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort_fn = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn filter_fn(
        mut self,
        f: impl Fn(&CellValue, &CellValue, FilterOperator) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter_fn = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn filter_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = filter_type;
        self
    }

    #[must_use]
    pub fn filter_options(mut self, options: Vec<FilterOption>) -> Self {
        self.filter_options = options;
        self
    }

    #[must_use]
    pub fn filter_operators(mut self, operators: Vec<FilterOperator>) -> Self {
        self.filter_operators = operators;
        self
    }

    #[must_use]
    pub const fn default_filter_operator(mut self, operator: FilterOperator) -> Self {
        self.default_filter_operator = Some(operator);
        self
    }

    /// Read this column's value out of `row`.
    #[must_use]
    pub fn value(&self, row: &Row) -> CellValue {
        self.accessor.get(row)
    }

    /// Cell text: the custom renderer if any, else the value's string form.
    #[must_use]
    pub fn render_cell(&self, row: &Row, row_index: usize) -> String {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row, row_index),
            None => value.to_display_string(),
        }
    }

    /// Operator used when a filter is applied without naming one.
    #[must_use]
    pub fn preferred_operator(&self) -> FilterOperator {
        self.default_filter_operator
            .or_else(|| self.filter_operators.first().copied())
            .unwrap_or_default()
    }

    /// Width bounds for resizing, intersected with the global bounds.
    #[must_use]
    pub fn width_bounds(&self, global_min: u32, global_max: u32) -> (u32, u32) {
        let min = self.min_width.map_or(global_min, |w| w.max(global_min));
        let max = self.max_width.map_or(global_max, |w| w.min(global_max));
        (min, max.max(min))
    }

    /// Layout state this column starts with at position `order`.
    #[must_use]
    pub fn initial_state(&self, order: usize, default_width: u32) -> ColumnState {
        ColumnState {
            id: self.id.clone(),
            visible: !self.hidden,
            width: self
                .width
                .as_ref()
                .and_then(ResponsiveValue::fixed)
                .copied()
                .unwrap_or(default_width),
            order,
            pinned: self.sticky,
        }
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("hidden", &self.hidden)
            .field("sticky", &self.sticky)
            .field("custom_sort", &self.sort_fn.is_some())
            .field("custom_filter", &self.filter_fn.is_some())
            .finish_non_exhaustive()
    }
}

/// Mutable per-session layout of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnState {
    pub id: String,
    pub visible: bool,
    pub width: u32,
    /// Left-to-right position
    pub order: usize,
    pub pinned: Option<PinSide>,
}

/// Initial layout for a set of definitions, in definition order.
#[must_use]
pub fn initial_column_states(columns: &[ColumnDef], default_width: u32) -> Vec<ColumnState> {
    columns
        .iter()
        .enumerate()
        .map(|(order, col)| col.initial_state(order, default_width))
        .collect()
}
