//! The full mutation surface of a table store.

use super::state::{DrawerContent, ErrorValue};
use crate::model::{Breakpoint, CellValue, FilterOperator, Row, RowId, SortDirection};

/// A named state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    // Data
    SetData(Vec<Row>),
    SetLoading(bool),
    SetError(Option<ErrorValue>),
    Refresh,
    Reset,

    // Sorting
    SetSorting {
        column_id: String,
        direction: Option<SortDirection>,
    },
    ToggleSorting(String),
    ClearSorting,
    ClearColumnSorting(String),

    // Filtering
    SetFilter {
        column_id: String,
        value: CellValue,
        operator: FilterOperator,
    },
    RemoveFilter(String),
    ClearFilters,
    SetGlobalFilter(String),

    // Pagination
    SetPage(usize),
    SetPageSize(usize),

    // Selection
    SelectRow(RowId),
    DeselectRow(RowId),
    ToggleRow(RowId),
    SelectAll,
    DeselectAll,
    ToggleAll,

    // Expansion
    ExpandRow(RowId),
    CollapseRow(RowId),
    ToggleRowExpansion(RowId),
    ExpandAll,
    CollapseAll,

    // Columns
    ReorderColumn {
        source_id: String,
        target_id: String,
    },
    ResizeColumn {
        column_id: String,
        width: u32,
    },
    ToggleColumnVisibility(String),
    SetColumnVisibility {
        column_id: String,
        visible: bool,
    },
    ResetColumns,

    // Transient UI
    SetDraggingColumn(Option<String>),
    SetResizingColumn(Option<String>),
    SetActiveFilterColumn(Option<String>),
    OpenMobileDrawer(DrawerContent),
    CloseMobileDrawer,
    SetViewportWidth(u32),
    SetBreakpoint(Breakpoint),
}

impl TableAction {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetData(_) => "set_data",
            Self::SetLoading(_) => "set_loading",
            Self::SetError(_) => "set_error",
            Self::Refresh => "refresh",
            Self::Reset => "reset",
            Self::SetSorting { .. } => "set_sorting",
            Self::ToggleSorting(_) => "toggle_sorting",
            Self::ClearSorting => "clear_sorting",
            Self::ClearColumnSorting(_) => "clear_column_sorting",
            Self::SetFilter { .. } => "set_filter",
            Self::RemoveFilter(_) => "remove_filter",
            Self::ClearFilters => "clear_filters",
            Self::SetGlobalFilter(_) => "set_global_filter",
            Self::SetPage(_) => "set_page",
            Self::SetPageSize(_) => "set_page_size",
            Self::SelectRow(_) => "select_row",
            Self::DeselectRow(_) => "deselect_row",
            Self::ToggleRow(_) => "toggle_row",
            Self::SelectAll => "select_all",
            Self::DeselectAll => "deselect_all",
            Self::ToggleAll => "toggle_all",
            Self::ExpandRow(_) => "expand_row",
            Self::CollapseRow(_) => "collapse_row",
            Self::ToggleRowExpansion(_) => "toggle_row_expansion",
            Self::ExpandAll => "expand_all",
            Self::CollapseAll => "collapse_all",
            Self::ReorderColumn { .. } => "reorder_column",
            Self::ResizeColumn { .. } => "resize_column",
            Self::ToggleColumnVisibility(_) => "toggle_column_visibility",
            Self::SetColumnVisibility { .. } => "set_column_visibility",
            Self::ResetColumns => "reset_columns",
            Self::SetDraggingColumn(_) => "set_dragging_column",
            Self::SetResizingColumn(_) => "set_resizing_column",
            Self::SetActiveFilterColumn(_) => "set_active_filter_column",
            Self::OpenMobileDrawer(_) => "open_mobile_drawer",
            Self::CloseMobileDrawer => "close_mobile_drawer",
            Self::SetViewportWidth(_) => "set_viewport_width",
            Self::SetBreakpoint(_) => "set_breakpoint",
        }
    }
}
