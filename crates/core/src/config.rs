//! Diagram configuration
//!
//! Every pixel constant used by layout and by drawing lives in
//! [`DiagramConfig`]. Geometry, scene building, the desktop viewer and the
//! SVG exporter all read the same instance, so a card is always drawn with
//! exactly the height the canvas-size computation assumed for it.
//!
//! Configuration files are TOML. Every key is optional:
//!
//! ```toml
//! table_width = 240.0
//! row_height = 30.0
//! max_zoom = 3.0
//! ```

use crate::error::{SqlpadError, SqlpadResult};
use crate::types::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Defaults
// ============================================================================

/// Default table card width
pub const DEFAULT_TABLE_WIDTH: f32 = 220.0;

/// Default table header height
pub const DEFAULT_HEADER_HEIGHT: f32 = 40.0;

/// Default column row height
pub const DEFAULT_ROW_HEIGHT: f32 = 28.0;

/// Default padding added to the right and bottom of the canvas
pub const DEFAULT_CANVAS_PADDING: f32 = 50.0;

/// Canvas size used when there is nothing to lay out
pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// Auto-placement grid
pub const DEFAULT_GRID_COLUMNS: usize = 3;
pub const DEFAULT_GRID_SPACING_X: f32 = 320.0;
pub const DEFAULT_GRID_SPACING_Y: f32 = 250.0;

/// Zoom range and step
pub const DEFAULT_MIN_ZOOM: f32 = 0.5;
pub const DEFAULT_MAX_ZOOM: f32 = 2.0;
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

// ============================================================================
// DiagramConfig
// ============================================================================

/// Layout and interaction constants shared by geometry and rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Width of every table card
    pub table_width: f32,
    /// Height of the card header (icon + table name)
    pub header_height: f32,
    /// Height of one column row
    pub row_height: f32,
    /// Margin added after the furthest right and bottom card edges
    pub canvas_padding: f32,
    /// Canvas size for a schema with no tables
    pub default_canvas: Size,
    /// Number of columns in the auto-placement grid
    pub grid_columns: usize,
    /// Horizontal distance between grid cells
    pub grid_spacing_x: f32,
    /// Vertical distance between grid cells
    pub grid_spacing_y: f32,
    /// Lowest zoom factor
    pub min_zoom: f32,
    /// Highest zoom factor
    pub max_zoom: f32,
    /// Zoom change per zoom-in / zoom-out action
    pub zoom_step: f32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            table_width: DEFAULT_TABLE_WIDTH,
            header_height: DEFAULT_HEADER_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
            canvas_padding: DEFAULT_CANVAS_PADDING,
            default_canvas: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            grid_columns: DEFAULT_GRID_COLUMNS,
            grid_spacing_x: DEFAULT_GRID_SPACING_X,
            grid_spacing_y: DEFAULT_GRID_SPACING_Y,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl DiagramConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the table card width
    pub fn with_table_width(mut self, width: f32) -> Self {
        self.table_width = width;
        self
    }

    /// Override header and row heights
    pub fn with_row_metrics(mut self, header_height: f32, row_height: f32) -> Self {
        self.header_height = header_height;
        self.row_height = row_height;
        self
    }

    /// Override the canvas padding
    pub fn with_canvas_padding(mut self, padding: f32) -> Self {
        self.canvas_padding = padding;
        self
    }

    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(text: &str) -> SqlpadResult<Self> {
        let config: DiagramConfig =
            toml::from_str(text).map_err(|e| SqlpadError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> SqlpadResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SqlpadError::FileNotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path).map_err(|e| SqlpadError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&text)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> SqlpadResult<String> {
        toml::to_string_pretty(self).map_err(|e| SqlpadError::InvalidConfig(e.to_string()))
    }

    /// Check that every constant is usable
    pub fn validate(&self) -> SqlpadResult<()> {
        let positive = [
            ("table_width", self.table_width),
            ("header_height", self.header_height),
            ("row_height", self.row_height),
            ("default_canvas.width", self.default_canvas.width),
            ("default_canvas.height", self.default_canvas.height),
            ("min_zoom", self.min_zoom),
            ("zoom_step", self.zoom_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SqlpadError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !(self.canvas_padding.is_finite() && self.canvas_padding >= 0.0) {
            return Err(SqlpadError::InvalidConfig(format!(
                "canvas_padding must not be negative, got {}",
                self.canvas_padding
            )));
        }

        if self.min_zoom > self.max_zoom {
            return Err(SqlpadError::InvalidConfig(format!(
                "min_zoom ({}) is greater than max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }

        if self.grid_columns == 0 {
            return Err(SqlpadError::InvalidConfig(
                "grid_columns must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = DiagramConfig::default();
        assert_eq!(config.default_canvas, Size::new(800.0, 600.0));
        assert_eq!(config.grid_columns, 3);
        assert_eq!(config.grid_spacing_x, 320.0);
        assert_eq!(config.grid_spacing_y, 250.0);
        assert_eq!(config.min_zoom, 0.5);
        assert_eq!(config.max_zoom, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_keys() {
        let config = DiagramConfig::from_toml_str("table_width = 160.0\nrow_height = 30.0\n")
            .expect("valid config");
        assert_eq!(config.table_width, 160.0);
        assert_eq!(config.row_height, 30.0);
        assert_eq!(config.header_height, DEFAULT_HEADER_HEIGHT);
        assert_eq!(config.zoom_step, DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn test_nested_canvas_size() {
        let config = DiagramConfig::from_toml_str(
            "[default_canvas]\nwidth = 1024.0\nheight = 768.0\n",
        )
        .expect("valid config");
        assert_eq!(config.default_canvas, Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DiagramConfig::from_toml_str("table_width = \"wide\"").unwrap_err();
        assert!(matches!(err, SqlpadError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_inverted_zoom_range() {
        let config = DiagramConfig {
            min_zoom: 3.0,
            ..DiagramConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_grid_columns() {
        let err = DiagramConfig::from_toml_str("grid_columns = 0").unwrap_err();
        assert!(err.to_string().contains("grid_columns"));
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagram.toml");
        let config = DiagramConfig::default().with_table_width(180.0);
        std::fs::write(&path, config.to_toml_string().expect("serialize")).expect("write");

        let loaded = DiagramConfig::load(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DiagramConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.is_not_found());
    }
}
