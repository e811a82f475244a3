//! # Diagram Renderer
//!
//! Composes the schema, its layout, the viewport and the selection into a
//! [`Scene`]: a flat, framework-free description of everything drawn on the
//! canvas. The desktop viewer and the SVG exporter both draw from a scene,
//! so they always agree on geometry.

use crate::layout::{Layout, column_center_offset};
use crate::selection::SelectionState;
use crate::viewport::{ViewportState, ViewportTransform};
use sqlpad_core::{DiagramConfig, Position, Rect, Size};
use sqlpad_schema::{Column, Schema};

/// Icon shown in every table header
pub const TABLE_ICON: &str = "📊";

// ============================================================================
// Type Labels
// ============================================================================

/// Normalize a raw engine type for display
///
/// Types containing `varchar` (in any case) are shown exactly as declared;
/// every other type is upper-cased.
pub fn format_type(raw: &str) -> String {
    if raw.to_lowercase().contains("varchar") {
        raw.to_string()
    } else {
        raw.to_uppercase()
    }
}

// ============================================================================
// Key Badges
// ============================================================================

/// Badge shown in front of a key column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBadge {
    PrimaryKey,
    ForeignKey,
}

impl KeyBadge {
    /// Short label drawn in the badge
    pub fn label(&self) -> &'static str {
        match self {
            KeyBadge::PrimaryKey => "PK",
            KeyBadge::ForeignKey => "FK",
        }
    }

    /// Legend text
    pub fn description(&self) -> &'static str {
        match self {
            KeyBadge::PrimaryKey => "Primary key",
            KeyBadge::ForeignKey => "Foreign key",
        }
    }

    /// CSS class for the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            KeyBadge::PrimaryKey => "badge-pk",
            KeyBadge::ForeignKey => "badge-fk",
        }
    }

    /// Badges for a column, primary key first
    pub fn for_column(column: &Column) -> Vec<KeyBadge> {
        let mut badges = Vec::with_capacity(2);
        if column.is_primary_key {
            badges.push(KeyBadge::PrimaryKey);
        }
        if column.is_foreign_key {
            badges.push(KeyBadge::ForeignKey);
        }
        badges
    }
}

/// One legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub badge: KeyBadge,
    pub label: &'static str,
}

/// The fixed badge legend
pub fn legend() -> Vec<LegendEntry> {
    [KeyBadge::PrimaryKey, KeyBadge::ForeignKey]
        .into_iter()
        .map(|badge| LegendEntry {
            badge,
            label: badge.description(),
        })
        .collect()
}

// ============================================================================
// Scene Elements
// ============================================================================

/// One column row inside a table box
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRow {
    pub name: String,
    pub type_label: String,
    pub badges: Vec<KeyBadge>,
    /// Vertical centre of the row, relative to the top of the box
    pub center_y: f32,
}

/// A drawn table card
#[derive(Debug, Clone, PartialEq)]
pub struct TableBox {
    pub name: String,
    pub icon: &'static str,
    pub bounds: Rect,
    pub rows: Vec<ColumnRow>,
    pub selected: bool,
    /// Accessible name for the activatable card
    pub aria_label: String,
}

impl TableBox {
    /// Top-left corner on the canvas
    pub fn position(&self) -> Position {
        self.bounds.position
    }
}

/// A drawn relationship line, anchored at `start` and rotated by `angle`
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Stable key, `from.col->to.col`
    pub key: String,
    pub start: Position,
    pub end: Position,
    pub length: f32,
    /// Rotation in degrees
    pub angle: f32,
}

impl Connector {
    /// CSS `transform` that rotates a horizontal line of `length` into place
    pub fn css_transform(&self) -> String {
        format!("rotate({}deg)", self.angle)
    }
}

/// Everything drawn for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub canvas: Size,
    pub transform: ViewportTransform,
    pub zoom_percent: u32,
    pub tables: Vec<TableBox>,
    pub connectors: Vec<Connector>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    /// The highlighted table, if the selection matches one
    pub fn selected_table(&self) -> Option<&TableBox> {
        self.tables.iter().find(|t| t.selected)
    }

    /// A table box by name
    pub fn table(&self, name: &str) -> Option<&TableBox> {
        self.tables.iter().find(|t| t.name == name)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Accessible name of a table card
pub fn table_aria_label(name: &str) -> String {
    format!("Table {}. Click to select", name)
}

/// Build the scene for the current state
pub fn render_scene(
    schema: &Schema,
    viewport: &ViewportState,
    selection: &SelectionState,
    config: &DiagramConfig,
) -> Scene {
    let layout = Layout::compute(schema, config);

    let tables = schema
        .tables
        .iter()
        .filter_map(|table| {
            let bounds = layout.table_bounds(&table.name)?;
            let rows = table
                .columns
                .iter()
                .enumerate()
                .map(|(index, column)| ColumnRow {
                    name: column.name.clone(),
                    type_label: format_type(&column.data_type),
                    badges: KeyBadge::for_column(column),
                    center_y: column_center_offset(index, config),
                })
                .collect();
            Some(TableBox {
                name: table.name.clone(),
                icon: TABLE_ICON,
                bounds,
                rows,
                selected: selection.is_selected(&table.name),
                aria_label: table_aria_label(&table.name),
            })
        })
        .collect();

    let connectors = layout
        .connectors
        .into_iter()
        .map(|c| Connector {
            length: c.geometry.length(),
            angle: c.geometry.angle_degrees(),
            start: c.geometry.start,
            end: c.geometry.end,
            key: c.key,
        })
        .collect();

    Scene {
        canvas: layout.canvas,
        transform: viewport.transform(),
        zoom_percent: viewport.zoom_percent(),
        tables,
        connectors,
        legend: legend(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlpad_schema::{Relationship, Table};

    fn shop() -> Schema {
        Schema::new()
            .with_table(
                Table::new("users")
                    .with_column(Column::new("id", "integer").primary_key())
                    .with_column(Column::new("email", "varchar(255)"))
                    .at(0.0, 0.0),
            )
            .with_table(
                Table::new("orders")
                    .with_column(Column::new("id", "INTEGER").primary_key())
                    .with_column(Column::new("user_id", "integer").primary_key().foreign_key())
                    .at(320.0, 0.0),
            )
            .with_relationship(Relationship::new("orders", "user_id", "users", "id"))
            .with_relationship(Relationship::new("orders", "user_id", "accounts", "id"))
    }

    #[test]
    fn test_format_type() {
        assert_eq!(format_type("varchar(255)"), "varchar(255)");
        assert_eq!(format_type("VarChar(10)"), "VarChar(10)");
        assert_eq!(format_type("nvarchar"), "nvarchar");
        assert_eq!(format_type("integer"), "INTEGER");
        assert_eq!(format_type("text"), "TEXT");
        assert_eq!(format_type(""), "");
    }

    #[test]
    fn test_badges() {
        let both = Column::new("id", "INTEGER").primary_key().foreign_key();
        assert_eq!(
            KeyBadge::for_column(&both),
            vec![KeyBadge::PrimaryKey, KeyBadge::ForeignKey]
        );
        assert!(KeyBadge::for_column(&Column::new("x", "TEXT")).is_empty());
        assert_eq!(KeyBadge::ForeignKey.label(), "FK");
    }

    #[test]
    fn test_legend() {
        let entries = legend();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].badge.label(), "PK");
        assert_eq!(entries[0].label, "Primary key");
        assert_eq!(entries[1].label, "Foreign key");
    }

    #[test]
    fn test_scene_tables_and_rows() {
        let config = DiagramConfig::default();
        let scene = render_scene(
            &shop(),
            &ViewportState::new(),
            &SelectionState::default(),
            &config,
        );

        assert_eq!(scene.tables.len(), 2);
        let users = scene.table("users").unwrap();
        assert_eq!(users.icon, TABLE_ICON);
        assert_eq!(users.aria_label, "Table users. Click to select");
        assert_eq!(users.rows[0].type_label, "INTEGER");
        assert_eq!(users.rows[1].type_label, "varchar(255)");
        assert_eq!(users.rows[1].center_y, 40.0 + 28.0 + 14.0);
        assert_eq!(users.bounds, Rect::from_xywh(0.0, 0.0, 220.0, 96.0));
        assert!(scene.selected_table().is_none());
    }

    #[test]
    fn test_scene_connectors_skip_dangling() {
        let config = DiagramConfig::default();
        let scene = render_scene(
            &shop(),
            &ViewportState::new(),
            &SelectionState::default(),
            &config,
        );
        assert_eq!(scene.connectors.len(), 1);
        let connector = &scene.connectors[0];
        assert_eq!(connector.key, "orders.user_id->users.id");
        // From the right edge of orders back to the left edge of users
        assert_eq!(connector.start, Position::new(540.0, 82.0));
        assert_eq!(connector.end, Position::new(0.0, 54.0));
        // Up and to the left
        assert!(connector.angle < -90.0 && connector.angle > -180.0);
    }

    #[test]
    fn test_selection_highlight() {
        let config = DiagramConfig::default();
        let selection = SelectionState::new(Some("orders".into()));
        let scene = render_scene(&shop(), &ViewportState::new(), &selection, &config);
        assert_eq!(scene.selected_table().map(|t| t.name.as_str()), Some("orders"));
        assert!(!scene.table("users").unwrap().selected);
    }

    #[test]
    fn test_selecting_unknown_table_changes_nothing() {
        let config = DiagramConfig::default();
        let plain = render_scene(&shop(), &ViewportState::new(), &SelectionState::default(), &config);
        let ghost = render_scene(
            &shop(),
            &ViewportState::new(),
            &SelectionState::new(Some("ghost".into())),
            &config,
        );
        assert_eq!(plain, ghost);
    }

    #[test]
    fn test_viewport_flows_into_scene() {
        let config = DiagramConfig::default();
        let viewport = ViewportState {
            zoom: 0.8,
            offset: Position::new(12.0, 34.0),
        };
        let scene = render_scene(&Schema::new(), &viewport, &SelectionState::default(), &config);
        assert_eq!(scene.zoom_percent, 80);
        assert_eq!(scene.transform.to_css(), "translate(12px, 34px) scale(0.8)");
        assert_eq!(scene.canvas, Size::new(800.0, 600.0));
        assert!(scene.tables.is_empty());
    }
}
