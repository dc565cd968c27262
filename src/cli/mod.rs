//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic for a specific CLI subcommand.

mod args;
mod view;

pub use args::{parse_filter_spec, parse_sort_spec};
pub use view::{
    build_view_store, load_rows, render_json, render_table, run_view, OutputFormat, ViewOptions,
};
