//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::TableConfig;
use super::validation::{ConfigError, Validatable};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".gridstate.yaml",
    ".gridstate.yml",
    "gridstate.yaml",
    "gridstate.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/gridstate/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    let config_dir = dirs::config_dir().map(|dir| dir.join("gridstate"));
    let home = dirs::home_dir();

    [cwd, config_dir, home]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
    /// The file parsed but holds invalid values
    Invalid(Vec<ConfigError>),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
            Self::Invalid(errors) => {
                let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Invalid config file: {}", listed.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::Invalid(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load and validate a `TableConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<TableConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: TableConfig = serde_yaml::from_str(&content)?;
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigFileError::Invalid(errors));
    }
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (TableConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (TableConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (TableConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    r"# gridstate configuration
# Place this file at .gridstate.yaml in your project root or ~/.config/gridstate/

pagination:
  initial_page: 1
  initial_page_size: 10
  page_size_options: [10, 20, 50, 100]
  # Most page-number buttons shown at once
  max_page_buttons: 5
  show_first_last: true

sorting:
  # One entry per column instead of a single sort column
  multi_sort: false
  # Drop the oldest entries past this many columns
  # max_multi_sort_columns: 3
  # Toggle cycles descending -> ascending -> none
  sort_desc_first: false

filtering:
  # Quiet period before typed search text is committed
  debounce_ms: 300
  # Only search these columns (default: every field)
  # global_filter_columns: [name, email]
  # Also go back to page 1 when filters are removed
  reset_page_on_filter_removal: false

layout:
  # mobile, tablet or desktop
  mobile_breakpoint: tablet
  default_column_width: 150
  min_column_width: 50
  max_column_width: 500

selection:
  # Drop selected/expanded ids missing from new data
  prune_on_data_change: false

# positional-fallback or strict
row_ids: positional-fallback

theme:
  # dark or light
  mode: dark

# translations:
#   noResults: No matching rows
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowIdPolicy;
    use crate::model::Breakpoint;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".gridstate.yaml");
        std::fs::write(&config_path, "sorting:\n  multi_sort: true\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_find_config_prefers_hidden_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("gridstate.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".gridstate.yaml"), "").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(tmp.path().join(".gridstate.yaml")));
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
pagination:
  initial_page_size: 25
sorting:
  multi_sort: true
  max_multi_sort_columns: 2
layout:
  mobile_breakpoint: mobile
row_ids: strict
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.pagination.initial_page_size, 25);
        assert_eq!(config.pagination.page_size_options, vec![10, 20, 50, 100]);
        assert!(config.sorting.multi_sort);
        assert_eq!(config.sorting.max_multi_sort_columns, Some(2));
        assert_eq!(config.layout.mobile_breakpoint, Breakpoint::Mobile);
        assert_eq!(config.row_ids, RowIdPolicy::Strict);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/gridstate.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_values() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "pagination:\n  initial_page_size: 0\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Invalid(ref errors)) if errors.len() == 1));
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "pagination: [not, a, map]\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, TableConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.yaml");
        std::fs::write(&config_path, "").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        let config: TableConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(config, TableConfig::default());
    }
}
