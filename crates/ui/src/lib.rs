//! # Sqlpad UI
//!
//! Dioxus Desktop UI for Sqlpad.
//!
//! ## Features
//!
//! - SQL editor with Ctrl+Enter to run and a sample query
//! - Result grid and error banner
//! - Interactive schema diagram with pan, zoom and table selection
//! - Open any SQLite database file, export the diagram as SVG or JSON
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod hooks;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use sqlpad_core;
pub use sqlpad_diagram;
pub use sqlpad_schema;

pub use app::App;
pub use components::{
    Legend, QueryEditor, RelationshipLine, ResultsTable, SchemaViewer, TableCard, ZoomControls,
};
pub use file_ops::{
    export_schema_json, export_svg, is_database_file, show_open_database_dialog, write_svg_file,
};
pub use hooks::{ViewportHandle, use_viewport};
pub use state::{APP_STATE, AppState, DatabaseSource, StatusLevel, StatusMessage};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Sqlpad";

/// Application display title
pub const TITLE: &str = "Sqlpad - SQL Practice";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Sqlpad desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     sqlpad_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_config(TITLE, 1400.0, 900.0);
}

/// Launch with custom window title and size
pub fn launch_with_config(title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config(title, width, height))
        .launch(App);
}

/// Window and page setup for the desktop renderer
fn desktop_config(title: &str, width: f64, height: f64) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(title)
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(width, height))
        .with_min_inner_size(LogicalSize::new(900.0, 600.0));

    // No native menu; every action lives in the toolbar
    Config::new()
        .with_window(window)
        .with_menu(None)
        .with_custom_head(format!(r#"<style type="text/css">{}</style>"#, STYLES))
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.starts_with(NAME));
    }

    #[test]
    fn test_styles_cover_viewer_classes() {
        let styles = get_styles();
        for class in [
            ".schema-container",
            ".table-box",
            ".table-box.selected",
            ".relationship-line",
            ".zoom-controls",
            ".badge-pk",
            ".badge-fk",
        ] {
            assert!(styles.contains(class), "missing {}", class);
        }
    }
}
