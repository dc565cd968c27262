//! View command handler.
//!
//! Implements the `view` subcommand: load rows from a JSON file, apply
//! sort, filter and paging actions to a store and print the current page.

use super::args::{parse_filter_spec, parse_sort_spec};
use crate::config::{load_config_file, load_or_default, TableConfig};
use crate::error::{ErrorContext, GridError};
use crate::model::{Alignment, ColumnDef, Row};
use crate::store::TableStore;
use crate::view::PageItem;
use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// Output format for the `view` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON document with the page rows and pagination info
    Json,
}

/// Options for the `view` command
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub rows_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub sorts: Vec<String>,
    pub filters: Vec<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub columns: Option<Vec<String>>,
    pub multi_sort: bool,
    pub output: OutputFormat,
}

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(options: ViewOptions) -> Result<()> {
    let rows = load_rows(&options.rows_path)?;
    let config = resolve_config(&options)?;
    let store = build_view_store(rows, config, &options)?;

    let rendered = match options.output {
        OutputFormat::Table => render_table(&store),
        OutputFormat::Json => serde_json::to_string_pretty(&render_json(&store))?,
    };
    println!("{rendered}");
    Ok(())
}

/// Read a JSON array of row objects.
pub fn load_rows(path: &Path) -> crate::error::Result<Vec<Row>> {
    let content = std::fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
    serde_json::from_str(&content).with_context(|| format!("parsing rows from {}", path.display()))
}

fn resolve_config(options: &ViewOptions) -> crate::error::Result<TableConfig> {
    let mut config = match &options.config_path {
        Some(path) => load_config_file(path).map_err(|e| GridError::config(e.to_string()))?,
        None => load_or_default(None).0,
    };
    if options.multi_sort || options.sorts.len() > 1 {
        config.sorting.multi_sort = true;
    }
    if let Some(size) = options.page_size {
        config.pagination.initial_page_size = size;
    }
    Ok(config)
}

/// Build a store over `rows` and apply the command-line actions in order:
/// search, filters, sorts, then the page.
pub fn build_view_store(
    rows: Vec<Row>,
    config: TableConfig,
    options: &ViewOptions,
) -> crate::error::Result<TableStore> {
    let columns = match &options.columns {
        Some(ids) => ids.iter().map(ColumnDef::new).collect(),
        None => infer_columns(&rows),
    };

    let mut store = TableStore::builder()
        .data(rows)
        .columns(columns)
        .config(config)
        .build()?;

    if let Some(search) = &options.search {
        store.set_global_filter(search.clone());
    }
    for spec in &options.filters {
        let entry = parse_filter_spec(spec)?;
        if store.column(&entry.column_id).is_none() {
            tracing::warn!("Filter on unknown column '{}' ignored", entry.column_id);
        }
        store.set_filter(entry.column_id, entry.value, entry.operator);
    }
    for spec in &options.sorts {
        let entry = parse_sort_spec(spec)?;
        if store.column(&entry.column_id).is_none() {
            tracing::warn!("Sort on unknown column '{}' ignored", entry.column_id);
        }
        store.set_sorting(entry.column_id, Some(entry.direction));
    }
    if let Some(page) = options.page {
        store.go_to_page(page);
    }
    Ok(store)
}

/// One column per distinct field name, in order of first appearance.
fn infer_columns(rows: &[Row]) -> Vec<ColumnDef> {
    let mut names: Vec<&str> = Vec::new();
    for name in rows.iter().flat_map(Row::field_names) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names.into_iter().map(ColumnDef::new).collect()
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the current page as an aligned text table with a status line.
#[must_use]
pub fn render_table(store: &TableStore) -> String {
    let view = store.view();
    let columns = view.rendered_columns();
    let pagination = view.pagination();

    let offset = pagination.start_index.saturating_sub(1);
    let body: Vec<Vec<String>> = view
        .page_rows()
        .enumerate()
        .map(|(i, row)| columns.iter().map(|c| c.render_cell(row, offset + i)).collect())
        .collect();
    let headers: Vec<String> = columns.iter().map(|c| header_label(store, c)).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .map(|cells| cells[i].width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths, &columns);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths, &columns);
    for cells in &body {
        push_line(&mut out, cells, &widths, &columns);
    }

    if view.is_empty() {
        let _ = writeln!(out, "{}", store.translations().empty);
    }
    let _ = write!(
        out,
        "{}-{} of {} | page {}/{}",
        pagination.start_index,
        pagination.end_index,
        pagination.total_items,
        pagination.page,
        pagination.total_pages,
    );
    let pages = page_label(&store.page_numbers());
    if !pages.is_empty() {
        let _ = write!(out, " | {pages}");
    }
    out
}

fn header_label(store: &TableStore, column: &ColumnDef) -> String {
    let text = column.header.text();
    let marker = match (store.sort_direction(&column.id), store.sort_index(&column.id)) {
        (Some(direction), Some(index)) if store.state().sorting.len() > 1 => {
            format!(" {}{}", direction.arrow(), index + 1)
        }
        (Some(direction), _) => format!(" {}", direction.arrow()),
        _ => String::new(),
    };
    format!("{text}{marker}")
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], columns: &[&ColumnDef]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(columns)
        .map(|((cell, &width), column)| pad(cell, width, column.align))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

fn pad(cell: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(cell.width());
    match align {
        Alignment::Left => format!("{cell}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{cell}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

fn page_label(items: &[PageItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the current page, pagination info and active sort/filter lists
/// as JSON.
#[must_use]
pub fn render_json(store: &TableStore) -> serde_json::Value {
    let view = store.view();
    let columns = view.rendered_columns();
    let rows: Vec<serde_json::Value> = view
        .page_rows()
        .map(|row| {
            let fields: serde_json::Map<String, serde_json::Value> = columns
                .iter()
                .map(|c| (c.id.clone(), serde_json::to_value(c.value(row)).unwrap_or_default()))
                .collect();
            serde_json::Value::Object(fields)
        })
        .collect();

    json!({
        "columns": columns.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        "rows": rows,
        "pagination": view.pagination(),
        "pageNumbers": store.page_numbers(),
        "sorting": store.state().sorting,
        "filters": store.state().filters,
        "globalFilter": store.state().global_filter,
    })
}
