//! Integration tests for YAML configuration driving a table store.

use gridstate::config::{
    generate_example_config, generate_json_schema, load_config_file, load_or_default,
    ConfigFileError, RowIdPolicy, Theme, ThemeMode, DEFAULT_PAGE_SIZE,
};
use gridstate::model::{ColumnDef, Row, SortDirection};
use gridstate::{GridError, TableConfig, TableStore, Validatable};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".gridstate.yaml");
    fs::write(&path, content).expect("write config");
    path
}

fn rows() -> Vec<Row> {
    (1..=30)
        .map(|i| {
            Row::new()
                .with("id", i)
                .with("group", if i % 2 == 0 { "even" } else { "odd" })
                .with("n", 30 - i)
        })
        .collect()
}

fn store_with(config: TableConfig) -> gridstate::Result<TableStore> {
    TableStore::builder()
        .data(rows())
        .column(ColumnDef::new("group"))
        .column(ColumnDef::new("n"))
        .config(config)
        .build()
}

// ============================================================================
// File Configuration Driving a Store
// ============================================================================

mod file_driven {
    use super::*;

    #[test]
    fn yaml_sets_page_size_and_multi_sort() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(
            &dir,
            "pagination:\n  initial_page_size: 7\nsorting:\n  multi_sort: true\n",
        );
        let config = load_config_file(&path).expect("load");
        let mut store = store_with(config).expect("store");

        assert_eq!(store.state().page_size, 7);
        assert_eq!(store.view().total_pages(), 5);

        store.set_sorting("group", Some(SortDirection::Asc));
        store.set_sorting("n", Some(SortDirection::Asc));
        assert_eq!(store.state().sorting.len(), 2);
        assert_eq!(store.sort_index("n"), Some(1));
    }

    #[test]
    fn strict_row_ids_reject_rows_without_id() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, "row_ids: strict\n");
        let config = load_config_file(&path).expect("load");
        assert_eq!(config.row_ids, RowIdPolicy::Strict);

        let result = TableStore::builder()
            .data(vec![Row::new().with("id", 1), Row::new().with("name", "anon")])
            .config(config)
            .build();
        assert!(matches!(result, Err(GridError::MissingRowId { index: 1 })));
    }

    #[test]
    fn load_or_default_falls_back_on_invalid_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, "pagination:\n  initial_page_size: 0\n");

        let (config, loaded_from) = load_or_default(Some(&path));
        assert!(loaded_from.is_none());
        assert_eq!(config.pagination.initial_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn invalid_file_lists_the_failing_fields() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(
            &dir,
            "pagination:\n  initial_page: 0\nsorting:\n  max_multi_sort_columns: 0\n",
        );
        match load_config_file(&path) {
            Err(ConfigFileError::Invalid(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(
                    fields,
                    vec!["pagination.initial_page", "sorting.max_multi_sort_columns"]
                );
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("absent.yaml");
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigFileError::NotFound(_))
        ));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let config = TableConfig::builder().page_size(0).build();
        assert!(!config.is_valid());
        assert!(matches!(store_with(config), Err(GridError::Validation(_))));
    }
}

// ============================================================================
// Theme and Translations
// ============================================================================

mod presentation {
    use super::*;

    #[test]
    fn dark_theme_is_the_default() {
        let store = store_with(TableConfig::default()).expect("store");
        assert_eq!(store.theme(), &Theme::dark());
        assert_eq!(store.theme().mode, ThemeMode::Dark);
    }

    #[test]
    fn light_mode_selects_light_preset() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, "theme:\n  mode: light\n");
        let config = load_config_file(&path).expect("load");
        assert_eq!(config.theme.mode, ThemeMode::Light);

        let preset = Theme::for_mode(config.theme.mode);
        assert_eq!(preset, Theme::light());
        assert_ne!(preset.colors, Theme::dark().colors);
    }

    #[test]
    fn partial_translations_keep_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(
            &dir,
            "translations:\n  noResults: Nichts gefunden\n  rowsPerPage: Zeilen\n",
        );
        let config = load_config_file(&path).expect("load");
        let store = store_with(config).expect("store");

        let strings = store.translations();
        assert_eq!(strings.no_results, "Nichts gefunden");
        assert_eq!(strings.rows_per_page, "Zeilen");
        assert_eq!(strings.empty, "No data available");
    }
}

// ============================================================================
// Schema and Example Config
// ============================================================================

mod schema {
    use super::*;

    #[test]
    fn schema_is_valid_json_with_sections() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_json_schema()).expect("schema json");
        let properties = &schema["properties"];
        for section in ["pagination", "sorting", "filtering", "translations"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }

    #[test]
    fn example_config_loads_cleanly() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, &generate_example_config());
        let config = load_config_file(&path).expect("example config must load");
        assert!(config.is_valid());
    }

    #[test]
    fn yaml_round_trip_preserves_config() {
        let config = TableConfig::builder()
            .page_size(25)
            .multi_sort(true)
            .max_multi_sort_columns(3)
            .debounce_ms(150)
            .global_filter_columns(vec!["group".to_string()])
            .row_ids(RowIdPolicy::Strict)
            .theme(Theme::light())
            .build();

        let yaml = serde_yaml::to_string(&config).expect("serialize");
        let parsed: TableConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(parsed, config);
    }
}
