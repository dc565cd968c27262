//! Default values and presentation presets.

use super::types::{
    AccentColors, BackgroundColors, BorderColors, TextColors, Theme, ThemeColors, ThemeMode,
    Translations,
};

// ============================================================================
// Numeric Defaults
// ============================================================================

/// Narrowest width a column can be resized to.
pub const MIN_COLUMN_WIDTH: u32 = 50;
/// Width of a column that sets none.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;
/// Widest width a column can be resized to.
pub const MAX_COLUMN_WIDTH: u32 = 500;

/// Rows per page at start.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page sizes offered to the user.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];
/// Most page-number buttons in the pagination window.
pub const DEFAULT_MAX_PAGE_BUTTONS: usize = 5;

/// Quiet period before typed search text is committed.
pub const DEBOUNCE_DELAY_MS: u64 = 300;
/// Longest accepted debounce period.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

// ============================================================================
// Theme Presets
// ============================================================================

fn colors(
    background: [&str; 4],
    text: [&str; 3],
    border: [&str; 2],
) -> ThemeColors {
    let [bg_primary, bg_secondary, bg_tertiary, bg_hover] = background;
    let [text_primary, text_secondary, text_muted] = text;
    let [border_default, border_hover] = border;
    ThemeColors {
        background: BackgroundColors {
            primary: bg_primary.to_string(),
            secondary: bg_secondary.to_string(),
            tertiary: bg_tertiary.to_string(),
            hover: bg_hover.to_string(),
        },
        text: TextColors {
            primary: text_primary.to_string(),
            secondary: text_secondary.to_string(),
            muted: text_muted.to_string(),
        },
        border: BorderColors {
            default: border_default.to_string(),
            hover: border_hover.to_string(),
        },
        accent: AccentColors {
            primary: "#1890ff".to_string(),
            success: "#52c41a".to_string(),
            warning: "#faad14".to_string(),
            error: "#ff4d4f".to_string(),
        },
    }
}

impl Theme {
    /// Dark scheme (the default).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: colors(
                ["#1e1e1e", "#2b2b2b", "#3c3c3c", "#4e4e4e"],
                ["#a9b7c6", "#808080", "#606060"],
                ["rgba(255, 255, 255, 0.08)", "rgba(255, 255, 255, 0.15)"],
            ),
        }
    }

    /// Light scheme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: colors(
                ["#ffffff", "#f5f5f5", "#ebebeb", "#e0e0e0"],
                ["#262626", "#595959", "#8c8c8c"],
                ["rgba(0, 0, 0, 0.06)", "rgba(0, 0, 0, 0.1)"],
            ),
        }
    }

    /// Preset by mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

impl Default for BackgroundColors {
    fn default() -> Self {
        Theme::dark().colors.background
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Theme::dark().colors.text
    }
}

impl Default for BorderColors {
    fn default() -> Self {
        Theme::dark().colors.border
    }
}

impl Default for AccentColors {
    fn default() -> Self {
        Theme::dark().colors.accent
    }
}

// ============================================================================
// Translations
// ============================================================================

impl Default for Translations {
    fn default() -> Self {
        Self {
            empty: "No data available".to_string(),
            loading: "Loading...".to_string(),
            search: "Search...".to_string(),
            filter: "Filter".to_string(),
            sort: "Sort".to_string(),
            sort_asc: "Sort ascending".to_string(),
            sort_desc: "Sort descending".to_string(),
            clear_sort: "Clear sort".to_string(),
            clear_filter: "Clear filter".to_string(),
            clear_all: "Clear all".to_string(),
            apply: "Apply".to_string(),
            cancel: "Cancel".to_string(),
            columns: "Columns".to_string(),
            show_columns: "Show columns".to_string(),
            hide_column: "Hide column".to_string(),
            reset_columns: "Reset columns".to_string(),
            rows_per_page: "Rows per page".to_string(),
            of: "of".to_string(),
            page: "Page".to_string(),
            first: "First".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            last: "Last".to_string(),
            selected: "selected".to_string(),
            drag_to_reorder: "Drag to reorder".to_string(),
            no_results: "No results found".to_string(),
            error_loading: "Error loading data".to_string(),
            retry: "Retry".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_defaults_are_ordered() {
        assert!(MIN_COLUMN_WIDTH <= DEFAULT_COLUMN_WIDTH);
        assert!(DEFAULT_COLUMN_WIDTH <= MAX_COLUMN_WIDTH);
        assert!(DEFAULT_PAGE_SIZES.contains(&DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn theme_presets() {
        assert_eq!(Theme::default(), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light).colors.background.primary, "#ffffff");
        assert_eq!(Theme::dark().colors.accent, Theme::light().colors.accent);
    }

    #[test]
    fn partial_translations_keep_defaults() {
        let t: Translations = serde_yaml::from_str("noResults: Nichts gefunden\n").unwrap();
        assert_eq!(t.no_results, "Nichts gefunden");
        assert_eq!(t.retry, "Retry");
    }
}
