//! Configuration for table stores.
//!
//! This module provides:
//! - Type-safe configuration structures with per-field defaults
//! - Validation for all configuration values
//! - Theme presets and default UI strings
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gridstate::config::TableConfig;
//!
//! let config = TableConfig::builder()
//!     .page_size(25)
//!     .multi_sort(true)
//!     .build();
//!
//! use gridstate::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.gridstate.yaml` file in your project root or `~/.config/gridstate/`:
//!
//! ```yaml
//! pagination:
//!   initial_page_size: 25
//! sorting:
//!   multi_sort: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEBOUNCE_DELAY_MS, DEFAULT_COLUMN_WIDTH, DEFAULT_MAX_PAGE_BUTTONS, DEFAULT_PAGE_SIZE,
    DEFAULT_PAGE_SIZES, MAX_COLUMN_WIDTH, MAX_DEBOUNCE_MS, MIN_COLUMN_WIDTH,
};
pub use types::{
    AccentColors, BackgroundColors, BorderColors, FilteringConfig, LayoutConfig,
    PaginationConfig, RowIdPolicy, SelectionConfig, SortingConfig, TableConfig,
    TableConfigBuilder, TextColors, Theme, ThemeColors, ThemeMode, Translations,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `TableConfig` configuration format.
///
/// Editors can use it to validate and complete `.gridstate.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(TableConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
