//! Table reducer.
//!
//! All state mutations happen here. The store calls `reduce(state, ctx,
//! action)` and forwards the returned events to listeners. An empty event
//! list means the action changed nothing.

use super::action::TableAction;
use super::events::TableEvent;
use super::state::{MobileDrawer, TableState};
use crate::config::TableConfig;
use crate::model::{
    Breakpoint, CellValue, ColumnDef, ColumnState, FilterEntry, FilterOperator, Row, RowId,
    RowIdResolver, SortDirection, SortEntry,
};
use indexmap::IndexSet;

/// Read-only inputs the reducer needs besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'a> {
    pub columns: &'a [ColumnDef],
    pub initial_column_states: &'a [ColumnState],
    pub resolver: &'a RowIdResolver,
    pub config: &'a TableConfig,
}

impl ReduceContext<'_> {
    fn column(&self, column_id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn row_ids(&self, rows: &[Row]) -> IndexSet<RowId> {
        self.resolver.resolve_all(rows).into_iter().collect()
    }
}

/// The main reducer function.
///
/// Mutates `state` for `action` and returns what changed.
pub fn reduce(
    state: &mut TableState,
    ctx: &ReduceContext<'_>,
    action: TableAction,
) -> Vec<TableEvent> {
    match action {
        TableAction::SetData(rows) => set_data(state, ctx, rows),
        TableAction::SetLoading(loading) => {
            if state.loading == loading {
                return vec![];
            }
            state.loading = loading;
            vec![TableEvent::LoadingChanged(loading)]
        }
        TableAction::SetError(error) => {
            if state.error == error {
                return vec![];
            }
            state.error = error;
            vec![TableEvent::ErrorChanged]
        }
        TableAction::Refresh => {
            state.data = state.original_data.clone();
            vec![TableEvent::DataChanged {
                rows: state.data.len(),
            }]
        }
        TableAction::Reset => reset(state, ctx),

        TableAction::SetSorting {
            column_id,
            direction,
        } => set_sorting(state, ctx, &column_id, direction),
        TableAction::ToggleSorting(column_id) => {
            let next = SortDirection::cycle(
                state.sort_direction(&column_id),
                ctx.config.sorting.sort_desc_first,
            );
            set_sorting(state, ctx, &column_id, next)
        }
        TableAction::ClearSorting => {
            if state.sorting.is_empty() {
                return vec![];
            }
            state.sorting.clear();
            vec![TableEvent::SortingChanged(Vec::new())]
        }
        TableAction::ClearColumnSorting(column_id) => {
            let before = state.sorting.len();
            state.sorting.retain(|s| s.column_id != column_id);
            if state.sorting.len() == before {
                return vec![];
            }
            vec![TableEvent::SortingChanged(state.sorting.clone())]
        }

        TableAction::SetFilter {
            column_id,
            value,
            operator,
        } => set_filter(state, ctx, column_id, value, operator),
        TableAction::RemoveFilter(column_id) => {
            let before = state.filters.len();
            state.filters.retain(|f| f.column_id != column_id);
            if state.filters.len() == before {
                tracing::trace!("No filter on column '{column_id}' to remove");
                return vec![];
            }
            let mut events = vec![TableEvent::FiltersChanged];
            events.extend(reset_page_after_removal(state, ctx));
            events
        }
        TableAction::ClearFilters => {
            let mut events = Vec::new();
            if !state.filters.is_empty() {
                state.filters.clear();
                events.push(TableEvent::FiltersChanged);
            }
            if !state.global_filter.is_empty() {
                state.global_filter.clear();
                events.push(TableEvent::GlobalFilterChanged(String::new()));
            }
            if !events.is_empty() {
                events.extend(reset_page_after_removal(state, ctx));
            }
            events
        }
        TableAction::SetGlobalFilter(value) => {
            let mut events = Vec::new();
            if state.global_filter != value {
                state.global_filter.clone_from(&value);
                events.push(TableEvent::GlobalFilterChanged(value));
            }
            events.extend(set_page(state, 1));
            events
        }

        TableAction::SetPage(page) => set_page(state, page),
        TableAction::SetPageSize(size) => {
            if size == 0 {
                tracing::warn!("Ignoring page size 0");
                return vec![];
            }
            if state.page_size == size && state.page == 1 {
                return vec![];
            }
            state.page_size = size;
            state.page = 1;
            vec![page_changed(state)]
        }

        TableAction::SelectRow(id) => {
            if !ctx.row_ids(&state.data).contains(&id) {
                tracing::trace!("Ignoring selection of unknown row {id}");
                return vec![];
            }
            if !state.selected_ids.insert(id) {
                return vec![];
            }
            vec![selection_changed(state)]
        }
        TableAction::DeselectRow(id) => {
            if !state.selected_ids.shift_remove(&id) {
                return vec![];
            }
            vec![selection_changed(state)]
        }
        TableAction::ToggleRow(id) => {
            let action = if state.selected_ids.contains(&id) {
                TableAction::DeselectRow(id)
            } else {
                TableAction::SelectRow(id)
            };
            reduce(state, ctx, action)
        }
        TableAction::SelectAll => {
            let all = ctx.row_ids(&state.data);
            if state.selected_ids == all {
                return vec![];
            }
            state.selected_ids = all;
            vec![selection_changed(state)]
        }
        TableAction::DeselectAll => {
            if state.selected_ids.is_empty() {
                return vec![];
            }
            state.selected_ids.clear();
            vec![selection_changed(state)]
        }
        TableAction::ToggleAll => {
            let all_selected =
                !state.data.is_empty() && state.selected_ids.len() == state.data.len();
            let action = if all_selected {
                TableAction::DeselectAll
            } else {
                TableAction::SelectAll
            };
            reduce(state, ctx, action)
        }

        TableAction::ExpandRow(id) => {
            if !ctx.row_ids(&state.data).contains(&id) {
                tracing::trace!("Ignoring expansion of unknown row {id}");
                return vec![];
            }
            if !state.expanded_ids.insert(id) {
                return vec![];
            }
            vec![expansion_changed(state)]
        }
        TableAction::CollapseRow(id) => {
            if !state.expanded_ids.shift_remove(&id) {
                return vec![];
            }
            vec![expansion_changed(state)]
        }
        TableAction::ToggleRowExpansion(id) => {
            let action = if state.expanded_ids.contains(&id) {
                TableAction::CollapseRow(id)
            } else {
                TableAction::ExpandRow(id)
            };
            reduce(state, ctx, action)
        }
        TableAction::ExpandAll => {
            let all = ctx.row_ids(&state.data);
            if state.expanded_ids == all {
                return vec![];
            }
            state.expanded_ids = all;
            vec![expansion_changed(state)]
        }
        TableAction::CollapseAll => {
            if state.expanded_ids.is_empty() {
                return vec![];
            }
            state.expanded_ids.clear();
            vec![expansion_changed(state)]
        }

        TableAction::ReorderColumn {
            source_id,
            target_id,
        } => reorder_column(state, source_id, target_id),
        TableAction::ResizeColumn { column_id, width } => {
            resize_column(state, ctx, column_id, width)
        }
        TableAction::ToggleColumnVisibility(column_id) => {
            let visible = state.column_state(&column_id).map(|c| !c.visible);
            match visible {
                Some(visible) => set_column_visibility(state, column_id, visible),
                None => {
                    tracing::trace!("Ignoring visibility toggle of unknown column '{column_id}'");
                    vec![]
                }
            }
        }
        TableAction::SetColumnVisibility { column_id, visible } => {
            set_column_visibility(state, column_id, visible)
        }
        TableAction::ResetColumns => {
            if state.column_states == ctx.initial_column_states {
                return vec![];
            }
            state.column_states = ctx.initial_column_states.to_vec();
            vec![TableEvent::ColumnsReset]
        }

        TableAction::SetDraggingColumn(column_id) => {
            replace_marker(&mut state.dragging_column, column_id)
        }
        TableAction::SetResizingColumn(column_id) => {
            replace_marker(&mut state.resizing_column, column_id)
        }
        TableAction::SetActiveFilterColumn(column_id) => {
            replace_marker(&mut state.active_filter_column, column_id)
        }
        TableAction::OpenMobileDrawer(content) => set_drawer(
            state,
            MobileDrawer {
                open: true,
                content: Some(content),
            },
        ),
        TableAction::CloseMobileDrawer => set_drawer(state, MobileDrawer::default()),
        TableAction::SetViewportWidth(width) => {
            let mut events = Vec::new();
            if state.viewport_width != Some(width) {
                state.viewport_width = Some(width);
                events.push(TableEvent::UiChanged);
            }
            events.extend(set_breakpoint(state, Breakpoint::from_width(width)));
            events
        }
        TableAction::SetBreakpoint(breakpoint) => set_breakpoint(state, breakpoint),
    }
}

// ============================================================================
// Data
// ============================================================================

fn set_data(state: &mut TableState, ctx: &ReduceContext<'_>, rows: Vec<Row>) -> Vec<TableEvent> {
    state.original_data.clone_from(&rows);
    state.data = rows;
    let mut events = vec![TableEvent::DataChanged {
        rows: state.data.len(),
    }];

    if ctx.config.selection.prune_on_data_change {
        let live = ctx.row_ids(&state.data);
        let (selected, expanded) = (state.selected_ids.len(), state.expanded_ids.len());
        state.selected_ids.retain(|id| live.contains(id));
        state.expanded_ids.retain(|id| live.contains(id));
        if state.selected_ids.len() != selected {
            events.push(selection_changed(state));
        }
        if state.expanded_ids.len() != expanded {
            events.push(expansion_changed(state));
        }
    }
    events
}

fn reset(state: &mut TableState, ctx: &ReduceContext<'_>) -> Vec<TableEvent> {
    state.sorting.clear();
    state.filters.clear();
    state.global_filter.clear();
    state.page = 1;
    state.selected_ids.clear();
    state.expanded_ids.clear();
    state.column_states = ctx.initial_column_states.to_vec();
    vec![TableEvent::Reset]
}

// ============================================================================
// Sorting
// ============================================================================

fn set_sorting(
    state: &mut TableState,
    ctx: &ReduceContext<'_>,
    column_id: &str,
    direction: Option<SortDirection>,
) -> Vec<TableEvent> {
    match ctx.column(column_id) {
        None => {
            tracing::trace!("Ignoring sort on unknown column '{column_id}'");
            return vec![];
        }
        Some(column) if !column.sortable && direction.is_some() => {
            tracing::trace!("Ignoring sort on non-sortable column '{column_id}'");
            return vec![];
        }
        Some(_) => {}
    }

    let sorting = &ctx.config.sorting;
    let next = if sorting.multi_sort {
        let mut next: Vec<SortEntry> = state
            .sorting
            .iter()
            .filter(|s| s.column_id != column_id)
            .cloned()
            .collect();
        if let Some(direction) = direction {
            next.push(SortEntry::new(column_id, direction));
        }
        if let Some(max) = sorting.max_multi_sort_columns {
            let excess = next.len().saturating_sub(max.max(1));
            next.drain(..excess);
        }
        next
    } else {
        direction
            .map(|direction| vec![SortEntry::new(column_id, direction)])
            .unwrap_or_default()
    };

    if next == state.sorting {
        return vec![];
    }
    state.sorting = next;
    vec![TableEvent::SortingChanged(state.sorting.clone())]
}

// ============================================================================
// Filtering and Pagination
// ============================================================================

fn set_filter(
    state: &mut TableState,
    ctx: &ReduceContext<'_>,
    column_id: String,
    value: CellValue,
    operator: FilterOperator,
) -> Vec<TableEvent> {
    if ctx.column(&column_id).is_none() {
        tracing::trace!("Ignoring filter on unknown column '{column_id}'");
        return vec![];
    }

    let entry = FilterEntry {
        column_id,
        value,
        operator,
    };
    let mut events = Vec::new();
    if state.filter(&entry.column_id) != Some(&entry) {
        state.filters.retain(|f| f.column_id != entry.column_id);
        state.filters.push(entry);
        events.push(TableEvent::FiltersChanged);
    }
    events.extend(set_page(state, 1));
    events
}

fn reset_page_after_removal(state: &mut TableState, ctx: &ReduceContext<'_>) -> Vec<TableEvent> {
    if ctx.config.filtering.reset_page_on_filter_removal {
        set_page(state, 1)
    } else {
        vec![]
    }
}

fn set_page(state: &mut TableState, page: usize) -> Vec<TableEvent> {
    let page = page.max(1);
    if state.page == page {
        return vec![];
    }
    state.page = page;
    vec![page_changed(state)]
}

fn page_changed(state: &TableState) -> TableEvent {
    TableEvent::PageChanged {
        page: state.page,
        page_size: state.page_size,
    }
}

fn selection_changed(state: &TableState) -> TableEvent {
    TableEvent::SelectionChanged {
        selected: state.selected_ids.iter().cloned().collect(),
    }
}

fn expansion_changed(state: &TableState) -> TableEvent {
    TableEvent::ExpansionChanged {
        expanded: state.expanded_ids.iter().cloned().collect(),
    }
}

// ============================================================================
// Columns
// ============================================================================

fn reorder_column(state: &mut TableState, source_id: String, target_id: String) -> Vec<TableEvent> {
    let source_index = state.column_states.iter().position(|c| c.id == source_id);
    let target_index = state.column_states.iter().position(|c| c.id == target_id);
    let (Some(source_index), Some(target_index)) = (source_index, target_index) else {
        tracing::trace!("Ignoring reorder of '{source_id}' onto '{target_id}'");
        return vec![];
    };
    if source_index == target_index {
        return vec![];
    }

    let moved = state.column_states.remove(source_index);
    state.column_states.insert(target_index, moved);
    for (order, column) in state.column_states.iter_mut().enumerate() {
        column.order = order;
    }

    vec![TableEvent::ColumnReordered {
        source_id,
        target_id,
        source_index,
        target_index,
    }]
}

fn resize_column(
    state: &mut TableState,
    ctx: &ReduceContext<'_>,
    column_id: String,
    width: u32,
) -> Vec<TableEvent> {
    let layout = &ctx.config.layout;
    let (min, max) = ctx.column(&column_id).map_or(
        (layout.min_column_width, layout.max_column_width),
        |col| col.width_bounds(layout.min_column_width, layout.max_column_width),
    );
    let Some(column) = state.column_states.iter_mut().find(|c| c.id == column_id) else {
        tracing::trace!("Ignoring resize of unknown column '{column_id}'");
        return vec![];
    };

    let clamped = width.clamp(min, max);
    if clamped != width {
        tracing::debug!("Clamped width of '{column_id}' from {width} to {clamped}");
    }
    let previous_width = column.width;
    if previous_width == clamped {
        return vec![];
    }
    column.width = clamped;
    vec![TableEvent::ColumnResized {
        column_id,
        width: clamped,
        previous_width,
    }]
}

fn set_column_visibility(
    state: &mut TableState,
    column_id: String,
    visible: bool,
) -> Vec<TableEvent> {
    let Some(column) = state.column_states.iter_mut().find(|c| c.id == column_id) else {
        tracing::trace!("Ignoring visibility change of unknown column '{column_id}'");
        return vec![];
    };
    if column.visible == visible {
        return vec![];
    }
    column.visible = visible;
    vec![TableEvent::ColumnVisibilityChanged { column_id, visible }]
}

// ============================================================================
// Transient UI
// ============================================================================

fn replace_marker(slot: &mut Option<String>, value: Option<String>) -> Vec<TableEvent> {
    if *slot == value {
        return vec![];
    }
    *slot = value;
    vec![TableEvent::UiChanged]
}

fn set_drawer(state: &mut TableState, drawer: MobileDrawer) -> Vec<TableEvent> {
    if state.mobile_drawer == drawer {
        return vec![];
    }
    state.mobile_drawer = drawer;
    vec![TableEvent::UiChanged]
}

fn set_breakpoint(state: &mut TableState, breakpoint: Breakpoint) -> Vec<TableEvent> {
    if state.breakpoint == breakpoint {
        return vec![];
    }
    state.breakpoint = breakpoint;
    vec![TableEvent::BreakpointChanged(breakpoint)]
}
