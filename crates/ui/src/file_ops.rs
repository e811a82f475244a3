//! File operations for Sqlpad
//!
//! Native dialogs for picking a database and for exporting the schema
//! diagram, plus the export writers themselves.

use rfd::AsyncFileDialog;
use sqlpad_core::{DiagramConfig, SqlpadError, SqlpadResult};
use sqlpad_diagram::{SelectionState, ViewportState, render_scene, render_svg};
use sqlpad_schema::{SCHEMA_EXTENSION, Schema, save_schema};
use std::path::{Path, PathBuf};

// ============================================================================
// File Filter Constants
// ============================================================================

/// Extensions offered in the open dialog
pub const DATABASE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3"];

/// Display name for the database filter
pub const DATABASE_TYPE_NAME: &str = "SQLite Database";

/// Extension for exported diagrams
pub const SVG_EXTENSION: &str = "svg";

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a file dialog to select a database
///
/// Returns the selected file path, or None if the dialog was cancelled.
pub async fn show_open_database_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Open Database")
        .add_filter(DATABASE_TYPE_NAME, DATABASE_EXTENSIONS)
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Open a save dialog for an export with the given extension
async fn show_export_dialog(title: &str, filter: &str, extension: &str) -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter, &[extension])
        .set_file_name(format!("schema.{}", extension))
        .save_file()
        .await?;

    Some(ensure_extension(file.path().to_path_buf(), extension))
}

// ============================================================================
// Exports
// ============================================================================

/// Ask for a destination and write the diagram as SVG
///
/// The export uses the default viewport so the whole canvas is visible.
pub async fn export_svg(
    schema: &Schema,
    selected: Option<String>,
    config: &DiagramConfig,
) -> SqlpadResult<PathBuf> {
    let path = show_export_dialog("Export Diagram", "SVG Image", SVG_EXTENSION)
        .await
        .ok_or(SqlpadError::Cancelled)?;
    write_svg_file(schema, selected, config, &path)?;
    Ok(path)
}

/// Ask for a destination and write the schema as JSON
pub async fn export_schema_json(schema: &Schema) -> SqlpadResult<PathBuf> {
    let path = show_export_dialog("Export Schema", "Schema JSON", SCHEMA_EXTENSION)
        .await
        .ok_or(SqlpadError::Cancelled)?;
    save_schema(schema, &path)?;
    Ok(path)
}

/// Render the schema and write it to `path` as SVG
pub fn write_svg_file(
    schema: &Schema,
    selected: Option<String>,
    config: &DiagramConfig,
    path: &Path,
) -> SqlpadResult<()> {
    let scene = render_scene(
        schema,
        &ViewportState::new(),
        &SelectionState::new(selected),
        config,
    );
    let svg = render_svg(&scene, config).map_err(|e| SqlpadError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, svg).map_err(|e| SqlpadError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!("Diagram exported to {}", path.display());
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check if a path looks like a database file
pub fn is_database_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DATABASE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Append `extension` unless the path already has it
pub fn ensure_extension(path: PathBuf, extension: &str) -> PathBuf {
    let has = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false);
    if has {
        path
    } else {
        path.with_extension(extension)
    }
}

// ============================================================================
// Tests
// ============================================================================
