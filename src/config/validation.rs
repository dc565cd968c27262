//! Configuration validation.

use super::defaults::MAX_DEBOUNCE_MS;
use super::types::{FilteringConfig, LayoutConfig, PaginationConfig, SortingConfig, TableConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for TableConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.pagination.validate());
        errors.extend(self.sorting.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.layout.validate());
        errors
    }
}

impl Validatable for PaginationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.initial_page == 0 {
            errors.push(ConfigError::new(
                "pagination.initial_page",
                "Pages are 1-based, got 0",
            ));
        }
        if self.initial_page_size == 0 {
            errors.push(ConfigError::new(
                "pagination.initial_page_size",
                "Page size must be greater than 0",
            ));
        }
        if self.page_size_options.is_empty() {
            errors.push(ConfigError::new(
                "pagination.page_size_options",
                "At least one page size option is required",
            ));
        } else if self.page_size_options.contains(&0) {
            errors.push(ConfigError::new(
                "pagination.page_size_options",
                "Page size options must be greater than 0",
            ));
        }
        if self.max_page_buttons == 0 {
            errors.push(ConfigError::new(
                "pagination.max_page_buttons",
                "At least one page button is required",
            ));
        }
        errors
    }
}

impl Validatable for SortingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_multi_sort_columns == Some(0) {
            errors.push(ConfigError::new(
                "sorting.max_multi_sort_columns",
                "Multi-sort cap must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for FilteringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            errors.push(ConfigError::new(
                "filtering.debounce_ms",
                format!(
                    "Debounce must be at most {MAX_DEBOUNCE_MS}ms, got {}",
                    self.debounce_ms
                ),
            ));
        }
        if let Some(columns) = &self.global_filter_columns {
            if columns.iter().any(String::is_empty) {
                errors.push(ConfigError::new(
                    "filtering.global_filter_columns",
                    "Column ids must not be empty",
                ));
            }
        }
        errors
    }
}

impl Validatable for LayoutConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.min_column_width > self.max_column_width {
            errors.push(ConfigError::new(
                "layout.min_column_width",
                format!(
                    "Minimum width {} exceeds maximum width {}",
                    self.min_column_width, self.max_column_width
                ),
            ));
        } else if !(self.min_column_width..=self.max_column_width)
            .contains(&self.default_column_width)
        {
            errors.push(ConfigError::new(
                "layout.default_column_width",
                format!(
                    "Default width {} must be between {} and {}",
                    self.default_column_width, self.min_column_width, self.max_column_width
                ),
            ));
        }
        errors
    }
}
