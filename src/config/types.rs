//! Configuration types for table stores.
//!
//! Every section defaults field by field, so a partial YAML file only needs
//! to name the values it changes.

use super::defaults;
use crate::model::Breakpoint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Table Configuration
// ============================================================================

/// Configuration accepted when a table store is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TableConfig {
    /// Page size, initial page and page-number window
    pub pagination: PaginationConfig,
    /// Single or multi-column sorting
    pub sorting: SortingConfig,
    /// Global search and filter page-reset behavior
    pub filtering: FilteringConfig,
    /// Column widths and mobile threshold
    pub layout: LayoutConfig,
    /// Row selection behavior across data changes
    pub selection: SelectionConfig,
    /// How rows without an explicit id are handled
    pub row_ids: RowIdPolicy,
    /// Colors handed to renderers
    pub theme: Theme,
    /// UI strings handed to renderers
    pub translations: Translations,
}

impl TableConfig {
    /// Create a new `TableConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `TableConfig` builder.
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }
}

// ============================================================================
// Builder for TableConfig
// ============================================================================

/// Builder for constructing `TableConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct TableConfigBuilder {
    config: TableConfig,
}

impl TableConfigBuilder {
    pub const fn page_size(mut self, size: usize) -> Self {
        self.config.pagination.initial_page_size = size;
        self
    }

    pub const fn initial_page(mut self, page: usize) -> Self {
        self.config.pagination.initial_page = page;
        self
    }

    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.config.pagination.page_size_options = options;
        self
    }

    pub const fn multi_sort(mut self, enabled: bool) -> Self {
        self.config.sorting.multi_sort = enabled;
        self
    }

    /// Cap the multi-sort list; the oldest entries are dropped past the cap.
    pub const fn max_multi_sort_columns(mut self, max: usize) -> Self {
        self.config.sorting.max_multi_sort_columns = Some(max);
        self
    }

    pub const fn sort_desc_first(mut self, enabled: bool) -> Self {
        self.config.sorting.sort_desc_first = enabled;
        self
    }

    pub const fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.filtering.debounce_ms = ms;
        self
    }

    /// Limit the global search to these column ids.
    pub fn global_filter_columns(mut self, columns: Vec<String>) -> Self {
        self.config.filtering.global_filter_columns = Some(columns);
        self
    }

    /// Reset to page 1 when filters are removed, not only when they are set.
    pub const fn reset_page_on_filter_removal(mut self, enabled: bool) -> Self {
        self.config.filtering.reset_page_on_filter_removal = enabled;
        self
    }

    pub const fn mobile_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.config.layout.mobile_breakpoint = breakpoint;
        self
    }

    pub const fn column_widths(mut self, min: u32, default: u32, max: u32) -> Self {
        self.config.layout.min_column_width = min;
        self.config.layout.default_column_width = default;
        self.config.layout.max_column_width = max;
        self
    }

    /// Drop selected and expanded ids that no longer resolve after new data.
    pub const fn prune_on_data_change(mut self, enabled: bool) -> Self {
        self.config.selection.prune_on_data_change = enabled;
        self
    }

    pub const fn row_ids(mut self, policy: RowIdPolicy) -> Self {
        self.config.row_ids = policy;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn translations(mut self, translations: Translations) -> Self {
        self.config.translations = translations;
        self
    }

    /// Build the `TableConfig`.
    #[must_use]
    pub fn build(self) -> TableConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PaginationConfig {
    /// 1-based page shown first
    pub initial_page: usize,
    /// Rows per page at start
    pub initial_page_size: usize,
    /// Page sizes offered to the user
    pub page_size_options: Vec<usize>,
    /// Most page-number buttons shown at once
    pub max_page_buttons: usize,
    /// Show first/last page buttons
    pub show_first_last: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page: 1,
            initial_page_size: defaults::DEFAULT_PAGE_SIZE,
            page_size_options: defaults::DEFAULT_PAGE_SIZES.to_vec(),
            max_page_buttons: defaults::DEFAULT_MAX_PAGE_BUTTONS,
            show_first_last: true,
        }
    }
}

/// Sorting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SortingConfig {
    /// Keep one sort entry per column instead of a single entry
    pub multi_sort: bool,
    /// Cap on multi-sort entries (unbounded when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_multi_sort_columns: Option<usize>,
    /// Toggle cycles descending first
    pub sort_desc_first: bool,
}

/// Filtering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilteringConfig {
    /// Quiet period before typed search text is committed
    pub debounce_ms: u64,
    /// Columns searched by the global filter (every row field when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_filter_columns: Option<Vec<String>>,
    /// Also reset to page 1 when filters are removed or cleared
    pub reset_page_on_filter_removal: bool,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::DEBOUNCE_DELAY_MS,
            global_filter_columns: None,
            reset_page_on_filter_removal: false,
        }
    }
}

/// Column layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LayoutConfig {
    /// Largest tier that still gets the mobile layout
    pub mobile_breakpoint: Breakpoint,
    /// Width of columns that do not set one
    pub default_column_width: u32,
    /// Narrowest a column can be resized to
    pub min_column_width: u32,
    /// Widest a column can be resized to
    pub max_column_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: Breakpoint::Tablet,
            default_column_width: defaults::DEFAULT_COLUMN_WIDTH,
            min_column_width: defaults::MIN_COLUMN_WIDTH,
            max_column_width: defaults::MAX_COLUMN_WIDTH,
        }
    }
}

/// Selection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SelectionConfig {
    /// Drop selected and expanded ids missing from newly set data
    pub prune_on_data_change: bool,
}

/// What happens when a row has neither a resolver id nor an `id` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RowIdPolicy {
    /// Use the row's position in the data
    #[default]
    PositionalFallback,
    /// Reject the data
    Strict,
}

// ============================================================================
// Presentation Configuration
// ============================================================================

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Renderer colors. Not interpreted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ThemeColors {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub accent: AccentColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BackgroundColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BorderColors {
    pub default: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccentColors {
    pub primary: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Theme::dark().colors
    }
}

/// UI strings handed to renderers. Missing keys keep their English default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Translations {
    pub empty: String,
    pub loading: String,
    pub search: String,
    pub filter: String,
    pub sort: String,
    pub sort_asc: String,
    pub sort_desc: String,
    pub clear_sort: String,
    pub clear_filter: String,
    pub clear_all: String,
    pub apply: String,
    pub cancel: String,
    pub columns: String,
    pub show_columns: String,
    pub hide_column: String,
    pub reset_columns: String,
    pub rows_per_page: String,
    pub of: String,
    pub page: String,
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
    pub selected: String,
    pub drag_to_reorder: String,
    pub no_results: String,
    pub error_loading: String,
    pub retry: String,
}
