//! **A headless state engine for interactive data tables.**
//!
//! `gridstate` owns everything a data grid needs besides pixels: the working
//! rows, column layout, multi-column sorting, per-column and global filters,
//! pagination, row selection and expansion, and responsive breakpoints. A
//! rendering layer reads a derived view from the store and calls its actions;
//! the store never draws anything.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: rows of dynamically typed [`CellValue`]s, column
//!   definitions built with [`ColumnDef::new`], and the sort/filter list entries.
//! - **[`filtering`]**: the filter evaluator shared by column filters and the
//!   global search, plus a clock-injected debouncer for search input.
//! - **[`sorting`]**: the null-last value comparator and the stable
//!   multi-key sort.
//! - **[`store`]**: [`TableStore`], the single owner of a table's state. All
//!   mutations are [`TableAction`]s applied by a pure reducer; listeners receive
//!   a [`TableEvent`] for each change.
//! - **[`view`]**: the derived view (filter, then sort, then page), cached by
//!   the store until the next effective action.
//! - **[`config`]**: [`TableConfig`], validation, theme and translation
//!   defaults, and YAML config file discovery.
//!
//! ## Getting Started
//!
//! ```no_run
//! use gridstate::model::{ColumnDef, FilterOperator, Row, SortDirection};
//! use gridstate::TableStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rows = vec![
//!         Row::new().with("id", 1).with("name", "Ann").with("age", 31),
//!         Row::new().with("id", 2).with("name", "Bob").with("age", 25),
//!     ];
//!
//!     let mut store = TableStore::builder()
//!         .data(rows)
//!         .column(ColumnDef::new("name").header("Name"))
//!         .column(ColumnDef::new("age").header("Age"))
//!         .build()?;
//!
//!     store.set_filter("age", 20, FilterOperator::GreaterThan);
//!     store.set_sorting("age", Some(SortDirection::Desc));
//!
//!     let view = store.view();
//!     for row in view.page_rows() {
//!         println!("{} ({})", row.value("name"), row.value("age"));
//!     }
//!     println!("page {} of {}", view.pagination().page, view.total_pages());
//!     Ok(())
//! }
//! ```
//!
//! ## Listening for Changes
//!
//! ```no_run
//! use gridstate::{TableEvent, TableStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = TableStore::builder().build()?;
//! let id = store.subscribe(|event, state| {
//!     if let TableEvent::PageChanged { page, .. } = event {
//!         println!("now on page {page} of {} rows", state.data.len());
//!     }
//! });
//! store.set_page(2);
//! store.unsubscribe(id);
//! # Ok(())
//! # }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Column widths and row counts cross between u32/usize/i64/f64
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // The reducer is one large match over the action set
    clippy::too_many_lines,
    // Config sections legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod model;
pub mod sorting;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use config::{ConfigError, TableConfig, TableConfigBuilder, Validatable};
pub use error::{ErrorContext, GridError, Result};
pub use model::{
    Breakpoint, CellValue, ColumnDef, ColumnState, FilterEntry, FilterOperator, Row, RowId,
    SortDirection, SortEntry,
};
pub use store::{TableAction, TableEvent, TableState, TableStore, TableStoreBuilder};
pub use view::{DerivedView, PaginationInfo, TableView};
