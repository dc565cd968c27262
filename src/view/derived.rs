//! Filtered, sorted and paginated view of a table state.
//!
//! The pipeline order is fixed: global search, then column filters, then
//! the multi-key sort, then the page slice. Every stage works on row
//! indices into the working data, so computing a view never clones rows.

use super::pagination::{page_bounds, PaginationInfo};
use crate::config::TableConfig;
use crate::filtering::{matches_entry, GlobalSearch, SearchScope};
use crate::model::{Breakpoint, ColumnDef, Row};
use crate::sorting::{sort_indices, SortKey};
use crate::store::TableState;
use serde::Serialize;
use std::ops::Range;

/// Selection flags relative to the working data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub all_selected: bool,
    pub some_selected: bool,
    pub selected_count: usize,
}

impl SelectionSummary {
    #[must_use]
    pub const fn new(selected_count: usize, total_rows: usize) -> Self {
        let all_selected = total_rows > 0 && selected_count == total_rows;
        Self {
            all_selected,
            some_selected: selected_count > 0 && !all_selected,
            selected_count,
        }
    }
}

/// Layout flags for the current breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointFlags {
    pub breakpoint: Breakpoint,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_mobile_or_tablet: bool,
    pub is_tablet_or_desktop: bool,
    pub show_mobile_view: bool,
}

impl BreakpointFlags {
    #[must_use]
    pub const fn new(current: Breakpoint, mobile_threshold: Breakpoint) -> Self {
        let is_mobile = matches!(current, Breakpoint::Mobile);
        let is_tablet = matches!(current, Breakpoint::Tablet);
        let is_desktop = matches!(current, Breakpoint::Desktop);
        Self {
            breakpoint: current,
            is_mobile,
            is_tablet,
            is_desktop,
            is_mobile_or_tablet: is_mobile || is_tablet,
            is_tablet_or_desktop: is_tablet || is_desktop,
            show_mobile_view: current.shows_mobile_view(mobile_threshold),
        }
    }
}

/// Result of the derived-view pipeline.
///
/// Row positions index into the working data the view was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Rows passing the global search and every column filter, in data order
    pub filtered: Vec<usize>,
    /// `filtered` in sort order
    pub sorted: Vec<usize>,
    /// Range of `sorted` on the current page
    pub page_range: Range<usize>,
    /// Visible column ids, left to right
    pub visible_columns: Vec<String>,
    /// `visible_columns` minus those hidden on mobile, when the mobile
    /// layout is active
    pub rendered_columns: Vec<String>,
    pub pagination: PaginationInfo,
    pub selection: SelectionSummary,
    pub breakpoint: BreakpointFlags,
}

impl DerivedView {
    /// Positions of the rows on the current page.
    #[must_use]
    pub fn page(&self) -> &[usize] {
        &self.sorted[self.page_range.clone()]
    }
}

/// Run the pipeline over `state`.
#[must_use]
pub fn compute_view(
    state: &TableState,
    columns: &[ColumnDef],
    config: &TableConfig,
) -> DerivedView {
    let filtered = filter_rows(state, columns, config);
    let sorted = sort_rows(state, columns, filtered.clone());

    let pagination = PaginationInfo::new(state.page, state.page_size, sorted.len());
    let page_range = page_bounds(state.page, state.page_size, sorted.len());

    let breakpoint = BreakpointFlags::new(state.breakpoint, config.layout.mobile_breakpoint);
    let visible_columns = visible_column_ids(state, columns);
    let rendered_columns = if breakpoint.show_mobile_view {
        visible_columns
            .iter()
            .filter(|id| {
                columns
                    .iter()
                    .find(|c| &c.id == *id)
                    .map_or(true, |c| !c.hidden_on_mobile)
            })
            .cloned()
            .collect()
    } else {
        visible_columns.clone()
    };

    DerivedView {
        filtered,
        sorted,
        page_range,
        visible_columns,
        rendered_columns,
        pagination,
        selection: SelectionSummary::new(state.selected_ids.len(), state.data.len()),
        breakpoint,
    }
}

fn filter_rows(state: &TableState, columns: &[ColumnDef], config: &TableConfig) -> Vec<usize> {
    let scoped: Option<Vec<&ColumnDef>> = config
        .filtering
        .global_filter_columns
        .as_ref()
        .map(|ids| columns.iter().filter(|c| ids.contains(&c.id)).collect());
    let scope = scoped
        .as_deref()
        .map_or(SearchScope::AllFields, SearchScope::Columns);
    let search = GlobalSearch::new(&state.global_filter, scope);

    let active: Vec<_> = state
        .filters
        .iter()
        .filter_map(|entry| {
            let column = columns.iter().find(|c| c.id == entry.column_id);
            if column.is_none() {
                tracing::trace!("Skipping filter on unknown column '{}'", entry.column_id);
            }
            column.map(|c| (c, entry))
        })
        .collect();

    state
        .data
        .iter()
        .enumerate()
        .filter(|(_, row)| search.as_ref().map_or(true, |s| s.matches(row)))
        .filter(|(_, row)| active.iter().all(|(col, entry)| matches_entry(col, row, entry)))
        .map(|(idx, _)| idx)
        .collect()
}

fn sort_rows(state: &TableState, columns: &[ColumnDef], filtered: Vec<usize>) -> Vec<usize> {
    let keys: Vec<SortKey<'_>> = state
        .sorting
        .iter()
        .filter_map(|entry| {
            columns
                .iter()
                .find(|c| c.id == entry.column_id)
                .map(|c| SortKey::new(c, entry.direction))
        })
        .collect();
    sort_indices(&state.data, filtered, &keys)
}

/// Visible columns ordered by layout position. Definitions without a
/// layout entry come last in definition order.
fn visible_column_ids(state: &TableState, columns: &[ColumnDef]) -> Vec<String> {
    let mut placed: Vec<(usize, usize, &str)> = columns
        .iter()
        .enumerate()
        .filter_map(|(def_idx, col)| match state.column_state(&col.id) {
            Some(cs) if !cs.visible => None,
            Some(cs) => Some((cs.order, def_idx, col.id.as_str())),
            None => Some((usize::MAX, def_idx, col.id.as_str())),
        })
        .collect();
    placed.sort_unstable();
    placed.into_iter().map(|(_, _, id)| id.to_string()).collect()
}

/// A derived view paired with the state it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    derived: &'a DerivedView,
    state: &'a TableState,
    columns: &'a [ColumnDef],
}

impl<'a> TableView<'a> {
    #[must_use]
    pub const fn new(
        derived: &'a DerivedView,
        state: &'a TableState,
        columns: &'a [ColumnDef],
    ) -> Self {
        Self {
            derived,
            state,
            columns,
        }
    }

    #[must_use]
    pub const fn derived(&self) -> &'a DerivedView {
        self.derived
    }

    /// Rows passing all filters, in data order.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &'a Row> + 'a {
        let (data, derived) = (&self.state.data, self.derived);
        derived.filtered.iter().map(move |&i| &data[i])
    }

    /// Filtered rows in sort order.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &'a Row> + 'a {
        let (data, derived) = (&self.state.data, self.derived);
        derived.sorted.iter().map(move |&i| &data[i])
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> impl Iterator<Item = &'a Row> + 'a {
        let (data, derived) = (&self.state.data, self.derived);
        derived.page().iter().map(move |&i| &data[i])
    }

    /// Visible column definitions, left to right.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<&'a ColumnDef> {
        self.lookup(&self.derived.visible_columns)
    }

    /// Columns to render at the current breakpoint.
    #[must_use]
    pub fn rendered_columns(&self) -> Vec<&'a ColumnDef> {
        self.lookup(&self.derived.rendered_columns)
    }

    fn lookup(&self, ids: &[String]) -> Vec<&'a ColumnDef> {
        let columns = self.columns;
        ids.iter()
            .filter_map(|id| columns.iter().find(|c| &c.id == id))
            .collect()
    }

    #[must_use]
    pub const fn pagination(&self) -> &'a PaginationInfo {
        &self.derived.pagination
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.derived.pagination.total_pages
    }

    #[must_use]
    pub const fn selection(&self) -> SelectionSummary {
        self.derived.selection
    }

    #[must_use]
    pub const fn breakpoint(&self) -> BreakpointFlags {
        self.derived.breakpoint
    }

    /// Number of rows passing the filters.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.derived.filtered.len()
    }

    /// Whether no row passes the filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.derived.filtered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{initial_column_states, FilterEntry, FilterOperator, RowId, SortEntry};

    fn setup() -> (TableState, Vec<ColumnDef>) {
        let columns = vec![ColumnDef::new("id"), ColumnDef::new("name")];
        let rows = vec![
            Row::new().with("id", 1).with("name", "b"),
            Row::new().with("id", 2).with("name", "a"),
            Row::new().with("id", 3).with("name", "a"),
        ];
        let state = TableState::new(rows, initial_column_states(&columns, 150), 1, 10);
        (state, columns)
    }

    #[test]
    fn sort_keeps_ties_in_input_order() {
        let (mut state, columns) = setup();
        state.sorting = vec![SortEntry::asc("name")];
        let view = compute_view(&state, &columns, &TableConfig::default());
        assert_eq!(view.sorted, vec![1, 2, 0]);
    }

    #[test]
    fn filter_then_paginate() {
        let (mut state, columns) = setup();
        state.filters = vec![FilterEntry::new("name", "a", FilterOperator::Contains)];
        state.page_size = 1;
        let view = compute_view(&state, &columns, &TableConfig::default());
        assert_eq!(view.filtered, vec![1, 2]);
        assert_eq!(view.page(), &[1]);
        assert_eq!(view.pagination.total_pages, 2);
    }

    #[test]
    fn unknown_filter_and_sort_columns_are_skipped() {
        let (mut state, columns) = setup();
        state.filters = vec![FilterEntry::new("ghost", "zzz", FilterOperator::Equals)];
        state.sorting = vec![SortEntry::desc("ghost")];
        let view = compute_view(&state, &columns, &TableConfig::default());
        assert_eq!(view.sorted, vec![0, 1, 2]);
    }

    #[test]
    fn global_search_scope_from_config() {
        let (mut state, columns) = setup();
        state.global_filter = "1".into();
        let all = compute_view(&state, &columns, &TableConfig::default());
        assert_eq!(all.filtered, vec![0]);

        let scoped = TableConfig::builder()
            .global_filter_columns(vec!["name".into()])
            .build();
        assert!(compute_view(&state, &columns, &scoped).filtered.is_empty());
    }

    #[test]
    fn visible_columns_follow_order_and_visibility() {
        let (mut state, mut columns) = setup();
        columns.push(ColumnDef::new("email").hidden_on_mobile(true));
        state.column_states[0].order = 1;
        state.column_states[1].order = 0;
        let view = compute_view(&state, &columns, &TableConfig::default());
        assert_eq!(view.visible_columns, vec!["name", "id", "email"]);

        state.column_states[0].visible = false;
        state.breakpoint = Breakpoint::Mobile;
        let view = compute_view(&state, &columns, &TableConfig::default());
        assert_eq!(view.visible_columns, vec!["name", "email"]);
        assert_eq!(view.rendered_columns, vec!["name"]);
    }

    #[test]
    fn selection_summary_counts() {
        let (mut state, columns) = setup();
        state.selected_ids.insert(RowId::Int(1));
        let view = compute_view(&state, &columns, &TableConfig::default());
        assert!(view.selection.some_selected && !view.selection.all_selected);

        assert_eq!(SelectionSummary::new(0, 0), SelectionSummary::default());
        assert!(SelectionSummary::new(3, 3).all_selected);
    }

    #[test]
    fn breakpoint_flags() {
        let flags = BreakpointFlags::new(Breakpoint::Tablet, Breakpoint::Tablet);
        assert!(flags.is_tablet && flags.is_mobile_or_tablet && flags.show_mobile_view);
        let flags = BreakpointFlags::new(Breakpoint::Tablet, Breakpoint::Mobile);
        assert!(!flags.show_mobile_view && flags.is_tablet_or_desktop);
    }
}
