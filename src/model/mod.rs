//! Table data model.
//!
//! Rows are opaque field maps identified by a [`RowId`]; columns are static
//! [`ColumnDef`]s paired with mutable [`ColumnState`] layout. Sort and filter
//! lists are made of [`SortEntry`] and [`FilterEntry`] values.

mod breakpoint;
mod column;
mod filter;
mod row;
mod sort;
mod value;

pub use breakpoint::{
    Breakpoint, ResponsiveValue, DESKTOP_BREAKPOINT, MOBILE_BREAKPOINT, TABLET_BREAKPOINT,
};
pub use column::{
    initial_column_states, Accessor, AccessorFn, Alignment, ColumnDef, ColumnState, FilterFn,
    FilterOption, FilterType, Header, HeaderFn, PinSide, RenderFn, SortFn,
};
pub use filter::{FilterEntry, FilterOperator};
pub use row::{Row, RowId, RowIdFn, RowIdResolver};
pub use sort::{SortDirection, SortEntry};
pub use value::CellValue;
