//! The owned table store: state, dispatch, cached view and listeners.

use super::action::TableAction;
use super::events::{Listener, ListenerId, ListenerRegistry, TableEvent};
use super::reducer::{reduce, ReduceContext};
use super::state::{DrawerContent, ErrorValue, TableState};
use crate::config::{RowIdPolicy, TableConfig, Theme, Translations, Validatable};
use crate::error::{GridError, Result};
use crate::filtering::GlobalFilterDebouncer;
use crate::model::{
    initial_column_states, Breakpoint, CellValue, ColumnDef, ColumnState, FilterEntry,
    FilterOperator, Row, RowId, RowIdResolver, SortDirection,
};
use crate::view::{compute_view, page_numbers, DerivedView, PageItem, TableView};
use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Instant;

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`TableStore`].
#[derive(Debug, Default)]
pub struct TableStoreBuilder {
    data: Vec<Row>,
    columns: Vec<ColumnDef>,
    resolver: RowIdResolver,
    config: TableConfig,
}

impl TableStoreBuilder {
    #[must_use]
    pub fn data(mut self, rows: Vec<Row>) -> Self {
        self.data = rows;
        self
    }

    #[must_use]
    pub fn columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Stable row identity. Without it rows are identified by their `id`
    /// field, then by position.
    #[must_use]
    pub fn row_id_fn(mut self, f: impl Fn(&Row) -> RowId + Send + Sync + 'static) -> Self {
        self.resolver = RowIdResolver::with_fn(f);
        self
    }

    #[must_use]
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and columns, then build the store.
    pub fn build(self) -> Result<TableStore> {
        let errors = self.config.validate();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GridError::validation(joined));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id.as_str()) {
                return Err(GridError::DuplicateColumn(column.id.clone()));
            }
        }

        check_row_ids(&self.resolver, &self.config, &self.data)?;

        let initial = initial_column_states(&self.columns, self.config.layout.default_column_width);
        let state = TableState::new(
            self.data,
            initial.clone(),
            self.config.pagination.initial_page,
            self.config.pagination.initial_page_size,
        );

        tracing::debug!(
            "Built table store with {} rows and {} columns",
            state.data.len(),
            self.columns.len()
        );

        Ok(TableStore {
            debouncer: GlobalFilterDebouncer::from_millis(self.config.filtering.debounce_ms),
            state,
            columns: self.columns,
            initial_column_states: initial,
            resolver: self.resolver,
            config: self.config,
            version: 0,
            view_cache: OnceLock::new(),
            listeners: ListenerRegistry::default(),
        })
    }
}

fn check_row_ids(resolver: &RowIdResolver, config: &TableConfig, rows: &[Row]) -> Result<()> {
    if config.row_ids != RowIdPolicy::Strict {
        return Ok(());
    }
    match rows.iter().position(|row| resolver.explicit_id(row).is_none()) {
        Some(index) => Err(GridError::MissingRowId { index }),
        None => Ok(()),
    }
}

// ============================================================================
// Store
// ============================================================================

/// Owned state container for one table.
///
/// Every mutation goes through [`dispatch`](Self::dispatch); the typed
/// methods below are thin wrappers. The derived view is computed lazily and
/// cached until the next action that changes state.
#[derive(Debug)]
pub struct TableStore {
    state: TableState,
    columns: Vec<ColumnDef>,
    initial_column_states: Vec<ColumnState>,
    resolver: RowIdResolver,
    config: TableConfig,
    version: u64,
    view_cache: OnceLock<DerivedView>,
    listeners: ListenerRegistry,
    debouncer: GlobalFilterDebouncer,
}

impl TableStore {
    #[must_use]
    pub fn builder() -> TableStoreBuilder {
        TableStoreBuilder::default()
    }

    /// Apply `action` and return what changed.
    ///
    /// Actions that change nothing leave the version, the cached view and
    /// listeners untouched.
    pub fn dispatch(&mut self, action: TableAction) -> Vec<TableEvent> {
        let name = action.name();
        // Explicit search changes supersede pending typed input
        if matches!(
            action,
            TableAction::SetGlobalFilter(_) | TableAction::ClearFilters | TableAction::Reset
        ) {
            self.debouncer.cancel();
        }
        let ctx = ReduceContext {
            columns: &self.columns,
            initial_column_states: &self.initial_column_states,
            resolver: &self.resolver,
            config: &self.config,
        };
        let events = reduce(&mut self.state, &ctx, action);

        if events.is_empty() {
            tracing::trace!("Action {name} changed nothing");
            return events;
        }

        self.version += 1;
        self.view_cache = OnceLock::new();
        tracing::debug!("Applied {name} (version {})", self.version);
        self.listeners.notify(&events, &self.state);
        events
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Incremented by every action that changed state.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn data(&self) -> &[Row] {
        &self.state.data
    }

    /// Derived view of the current state, computed on first use after a change.
    pub fn view(&self) -> TableView<'_> {
        let derived = self
            .view_cache
            .get_or_init(|| compute_view(&self.state, &self.columns, &self.config));
        TableView::new(derived, &self.state, &self.columns)
    }

    /// Page-number buttons for the current page.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<PageItem> {
        let pagination = self.view().pagination();
        page_numbers(
            pagination.page,
            pagination.total_pages,
            self.config.pagination.max_page_buttons,
        )
    }

    /// Identity of `row` at `index` in the working data.
    #[must_use]
    pub fn row_id(&self, row: &Row, index: usize) -> RowId {
        self.resolver.resolve(row, index)
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.config.theme
    }

    #[must_use]
    pub const fn translations(&self) -> &Translations {
        &self.config.translations
    }

    // ========================================================================
    // Data
    // ========================================================================

    pub fn set_data(&mut self, rows: Vec<Row>) {
        self.dispatch(TableAction::SetData(rows));
    }

    /// Replace the data, rejecting rows without an identifier under the
    /// strict row-id policy.
    pub fn try_set_data(&mut self, rows: Vec<Row>) -> Result<()> {
        check_row_ids(&self.resolver, &self.config, &rows)?;
        self.set_data(rows);
        Ok(())
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(TableAction::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<ErrorValue>) {
        self.dispatch(TableAction::SetError(error));
    }

    /// Restore the working data from the last `set_data` snapshot.
    pub fn refresh(&mut self) {
        self.dispatch(TableAction::Refresh);
    }

    /// Clear sorting, filters, selection and expansion, go to page 1 and
    /// restore the initial column layout. Data is kept.
    pub fn reset(&mut self) {
        self.dispatch(TableAction::Reset);
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    pub fn set_sorting(&mut self, column_id: impl Into<String>, direction: Option<SortDirection>) {
        self.dispatch(TableAction::SetSorting {
            column_id: column_id.into(),
            direction,
        });
    }

    pub fn toggle_sorting(&mut self, column_id: impl Into<String>) {
        self.dispatch(TableAction::ToggleSorting(column_id.into()));
    }

    pub fn clear_sorting(&mut self) {
        self.dispatch(TableAction::ClearSorting);
    }

    pub fn clear_column_sorting(&mut self, column_id: impl Into<String>) {
        self.dispatch(TableAction::ClearColumnSorting(column_id.into()));
    }

    #[must_use]
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.state.sort_direction(column_id)
    }

    #[must_use]
    pub fn sort_index(&self, column_id: &str) -> Option<usize> {
        self.state.sort_index(column_id)
    }

    #[must_use]
    pub fn is_sorted(&self, column_id: &str) -> bool {
        self.state.sort_index(column_id).is_some()
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    pub fn set_filter(
        &mut self,
        column_id: impl Into<String>,
        value: impl Into<CellValue>,
        operator: FilterOperator,
    ) {
        self.dispatch(TableAction::SetFilter {
            column_id: column_id.into(),
            value: value.into(),
            operator,
        });
    }

    pub fn remove_filter(&mut self, column_id: impl Into<String>) {
        self.dispatch(TableAction::RemoveFilter(column_id.into()));
    }

    /// Remove every column filter and the global filter.
    pub fn clear_filters(&mut self) {
        self.dispatch(TableAction::ClearFilters);
    }

    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        self.dispatch(TableAction::SetGlobalFilter(value.into()));
    }

    pub fn clear_global_filter(&mut self) {
        self.set_global_filter(String::new());
    }

    #[must_use]
    pub fn has_filter(&self, column_id: &str) -> bool {
        self.state.filter(column_id).is_some()
    }

    #[must_use]
    pub fn has_any_filter(&self) -> bool {
        self.state.has_any_filter()
    }

    #[must_use]
    pub fn filter(&self, column_id: &str) -> Option<&FilterEntry> {
        self.state.filter(column_id)
    }

    /// Record keystroke input for the global filter. The value is committed
    /// by [`tick`](Self::tick) once input has been quiet for the configured
    /// debounce delay.
    pub fn input_global_filter(&mut self, value: impl Into<String>, now: Instant) {
        self.debouncer.input(value, now);
    }

    /// Commit pending global-filter input whose quiet period has passed.
    pub fn tick(&mut self, now: Instant) -> Vec<TableEvent> {
        match self.debouncer.poll(now) {
            Some(value) => self.dispatch(TableAction::SetGlobalFilter(value)),
            None => Vec::new(),
        }
    }

    /// Commit pending global-filter input immediately.
    pub fn flush_global_filter(&mut self) -> Vec<TableEvent> {
        match self.debouncer.flush() {
            Some(value) => self.dispatch(TableAction::SetGlobalFilter(value)),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn pending_global_filter(&self) -> Option<&str> {
        self.debouncer.pending()
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Set the page as given. Out-of-range pages show an empty slice; use
    /// [`go_to_page`](Self::go_to_page) for clamped navigation.
    pub fn set_page(&mut self, page: usize) {
        self.dispatch(TableAction::SetPage(page));
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.dispatch(TableAction::SetPageSize(size));
    }

    /// Go to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        let page = self.view().pagination().clamp_page(page);
        self.set_page(page);
    }

    pub fn go_to_first_page(&mut self) {
        self.set_page(1);
    }

    pub fn go_to_last_page(&mut self) {
        let last = self.view().pagination().total_pages;
        self.set_page(last);
    }

    pub fn go_to_next_page(&mut self) {
        let pagination = *self.view().pagination();
        if pagination.can_go_next {
            self.set_page(pagination.page + 1);
        }
    }

    pub fn go_to_previous_page(&mut self) {
        let pagination = *self.view().pagination();
        if pagination.can_go_previous {
            self.go_to_page(pagination.page - 1);
        }
    }

    // ========================================================================
    // Selection and expansion
    // ========================================================================

    pub fn select_row(&mut self, id: impl Into<RowId>) {
        self.dispatch(TableAction::SelectRow(id.into()));
    }

    pub fn deselect_row(&mut self, id: impl Into<RowId>) {
        self.dispatch(TableAction::DeselectRow(id.into()));
    }

    pub fn toggle_row(&mut self, id: impl Into<RowId>) {
        self.dispatch(TableAction::ToggleRow(id.into()));
    }

    /// Select every row of the working data, not just the filtered view.
    pub fn select_all(&mut self) {
        self.dispatch(TableAction::SelectAll);
    }

    pub fn deselect_all(&mut self) {
        self.dispatch(TableAction::DeselectAll);
    }

    pub fn toggle_all(&mut self) {
        self.dispatch(TableAction::ToggleAll);
    }

    #[must_use]
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.state.selected_ids.contains(id)
    }

    /// Rows of the working data whose id is selected, in data order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<&Row> {
        self.state
            .data
            .iter()
            .enumerate()
            .filter(|(index, row)| self.is_selected(&self.resolver.resolve(row, *index)))
            .map(|(_, row)| row)
            .collect()
    }

    pub fn expand_row(&mut self, id: impl Into<RowId>) {
        self.dispatch(TableAction::ExpandRow(id.into()));
    }

    pub fn collapse_row(&mut self, id: impl Into<RowId>) {
        self.dispatch(TableAction::CollapseRow(id.into()));
    }

    pub fn toggle_row_expansion(&mut self, id: impl Into<RowId>) {
        self.dispatch(TableAction::ToggleRowExpansion(id.into()));
    }

    pub fn expand_all(&mut self) {
        self.dispatch(TableAction::ExpandAll);
    }

    pub fn collapse_all(&mut self) {
        self.dispatch(TableAction::CollapseAll);
    }

    #[must_use]
    pub fn is_expanded(&self, id: &RowId) -> bool {
        self.state.expanded_ids.contains(id)
    }

    // ========================================================================
    // Columns
    // ========================================================================

    pub fn reorder_column(&mut self, source_id: impl Into<String>, target_id: impl Into<String>) {
        self.dispatch(TableAction::ReorderColumn {
            source_id: source_id.into(),
            target_id: target_id.into(),
        });
    }

    /// Resize a column. The width is clamped to the column's bounds.
    pub fn resize_column(&mut self, column_id: impl Into<String>, width: u32) {
        self.dispatch(TableAction::ResizeColumn {
            column_id: column_id.into(),
            width,
        });
    }

    pub fn toggle_column_visibility(&mut self, column_id: impl Into<String>) {
        self.dispatch(TableAction::ToggleColumnVisibility(column_id.into()));
    }

    pub fn set_column_visibility(&mut self, column_id: impl Into<String>, visible: bool) {
        self.dispatch(TableAction::SetColumnVisibility {
            column_id: column_id.into(),
            visible,
        });
    }

    pub fn reset_columns(&mut self) {
        self.dispatch(TableAction::ResetColumns);
    }

    /// Current width of a column; the configured default for unknown ids.
    #[must_use]
    pub fn column_width(&self, column_id: &str) -> u32 {
        self.state
            .column_state(column_id)
            .map_or(self.config.layout.default_column_width, |c| c.width)
    }

    #[must_use]
    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.state.column_state(column_id).is_some_and(|c| c.visible)
    }

    // ========================================================================
    // Transient UI
    // ========================================================================

    pub fn set_dragging_column(&mut self, column_id: Option<String>) {
        self.dispatch(TableAction::SetDraggingColumn(column_id));
    }

    pub fn set_resizing_column(&mut self, column_id: Option<String>) {
        self.dispatch(TableAction::SetResizingColumn(column_id));
    }

    pub fn set_active_filter_column(&mut self, column_id: Option<String>) {
        self.dispatch(TableAction::SetActiveFilterColumn(column_id));
    }

    pub fn open_mobile_drawer(&mut self, content: DrawerContent) {
        self.dispatch(TableAction::OpenMobileDrawer(content));
    }

    pub fn close_mobile_drawer(&mut self) {
        self.dispatch(TableAction::CloseMobileDrawer);
    }

    /// Record the viewport width and derive the breakpoint from it.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.dispatch(TableAction::SetViewportWidth(width));
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.dispatch(TableAction::SetBreakpoint(breakpoint));
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Register a callback invoked with every event and the state after
    /// the action that produced it.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&TableEvent, &TableState) + Send + 'static,
    ) -> ListenerId {
        let listener: Listener = Box::new(listener);
        self.listeners.add(listener)
    }

    /// Remove a listener; the closure is dropped before this returns.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
