//! Unified error types for gridstate.
//!
//! Table actions never fail: unknown ids are ignored. Errors only come out of
//! store construction, strict row-id checks, configuration loading and CLI
//! input parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gridstate operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GridError {
    /// Errors while parsing rows, configuration or command-line specs
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A row has no resolvable identifier under the strict row-id policy
    #[error("Row at index {index} has no identifier (no resolver and no 'id' field)")]
    MissingRowId { index: usize },

    /// Two column definitions share the same id
    #[error("Duplicate column id: {0}")]
    DuplicateColumn(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid sort spec '{spec}': {reason}")]
    InvalidSortSpec { spec: String, reason: String },

    #[error("Invalid filter spec '{spec}': {reason}")]
    InvalidFilterSpec { spec: String, reason: String },

    #[error("Unknown filter operator: {0}")]
    UnknownOperator(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for gridstate operations
pub type Result<T> = std::result::Result<T, GridError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GridError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a malformed `--sort` spec
    pub fn invalid_sort_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::parse(
            "sort spec",
            ParseErrorKind::InvalidSortSpec {
                spec: spec.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create a parse error for a malformed `--filter` spec
    pub fn invalid_filter_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::parse(
            "filter spec",
            ParseErrorKind::InvalidFilterSpec {
                spec: spec.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for GridError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error raised three calls deep reads
/// `"outer: middle: inner"`.
///
/// # Example
///
/// ```ignore
/// use gridstate::error::ErrorContext;
///
/// fn load_rows(path: &Path) -> Result<Vec<Row>> {
///     let content = std::fs::read_to_string(path).context("reading rows file")?;
///     serde_json::from_str(&content)
///         .with_context(|| format!("parsing rows from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GridError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: GridError, new_ctx: &str) -> GridError {
    match err {
        GridError::Parse {
            context: existing,
            source,
        } => GridError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GridError::Io {
            path,
            message,
            source,
        } => GridError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        GridError::Config(msg) => GridError::Config(chain_context(new_ctx, &msg)),
        GridError::Validation(msg) => GridError::Validation(chain_context(new_ctx, &msg)),
        other @ (GridError::MissingRowId { .. } | GridError::DuplicateColumn(_)) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::invalid_sort_spec("name:up", "direction must be asc or desc");
        let display = err.to_string();
        assert!(display.contains("parse"), "unexpected message: {display}");

        let err = GridError::MissingRowId { index: 3 };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = GridError::io("/path/to/rows.json", io_err);

        assert!(err.to_string().contains("/path/to/rows.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(GridError::parse(
                "base",
                ParseErrorKind::InvalidJson("eof".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(GridError::Parse { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_leaves_structural_errors_alone() {
        let err: Result<()> = Err(GridError::DuplicateColumn("name".to_string()));
        match err.context("building store") {
            Err(GridError::DuplicateColumn(id)) => assert_eq!(id, "name"),
            other => panic!("Expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(GridError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
