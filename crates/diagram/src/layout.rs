//! # Layout Geometry
//!
//! Derives every spatial quantity of the diagram from a [`Schema`]: card
//! heights, bounding boxes, the canvas size and the endpoints of each
//! connector. Nothing here mutates the schema, so the whole layout can be
//! recomputed on every state change.
//!
//! Unplaced tables are excluded everywhere: they get no bounds, do not grow
//! the canvas and cannot anchor a connector.

use sqlpad_core::{DiagramConfig, Position, Rect, Size};
use sqlpad_schema::{Relationship, Schema, Table};

// ============================================================================
// Table Geometry
// ============================================================================

/// Height of a table card: header plus one row per column
pub fn table_height(table: &Table, config: &DiagramConfig) -> f32 {
    config.header_height + table.column_count() as f32 * config.row_height
}

/// Bounding box of a placed table, `None` when unplaced
pub fn table_bounds(table: &Table, config: &DiagramConfig) -> Option<Rect> {
    let position = table.position?;
    Some(Rect::new(
        position,
        Size::new(config.table_width, table_height(table, config)),
    ))
}

/// Vertical centre of a column row, relative to the top of its card
pub fn column_center_offset(index: usize, config: &DiagramConfig) -> f32 {
    config.header_height + index as f32 * config.row_height + config.row_height / 2.0
}

/// Size of the canvas needed to hold every placed table plus padding
///
/// An empty table list gets the configured default canvas. A list whose
/// tables are all unplaced shrinks to just the padding.
pub fn canvas_size(tables: &[Table], config: &DiagramConfig) -> Size {
    if tables.is_empty() {
        return config.default_canvas;
    }

    let (max_x, max_y) = tables
        .iter()
        .filter_map(|t| table_bounds(t, config))
        .fold((0.0_f32, 0.0_f32), |(x, y), rect| {
            (x.max(rect.right()), y.max(rect.bottom()))
        });
    Size::new(max_x + config.canvas_padding, max_y + config.canvas_padding)
}

// ============================================================================
// Connector Geometry
// ============================================================================

/// A straight segment between two column anchors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorGeometry {
    /// Right edge of the from-table at the from-column's row
    pub start: Position,
    /// Left edge of the to-table at the to-column's row
    pub end: Position,
}

impl ConnectorGeometry {
    /// Euclidean length of the segment
    pub fn length(&self) -> f32 {
        self.start.distance_to(&self.end)
    }

    /// Direction of the segment in degrees, `atan2(dy, dx)`
    pub fn angle_degrees(&self) -> f32 {
        let delta = self.end - self.start;
        delta.y.atan2(delta.x).to_degrees()
    }
}

/// Endpoints of a relationship's connector
///
/// Returns `None` when either table is missing or unplaced, or when either
/// column is not found in its table. Such relationships are simply not drawn.
pub fn connector_geometry(
    schema: &Schema,
    relationship: &Relationship,
    config: &DiagramConfig,
) -> Option<ConnectorGeometry> {
    let from = schema.table(&relationship.from_table)?;
    let to = schema.table(&relationship.to_table)?;
    let from_pos = from.position?;
    let to_pos = to.position?;
    let from_index = from.column_index(&relationship.from_column)?;
    let to_index = to.column_index(&relationship.to_column)?;

    Some(ConnectorGeometry {
        start: Position::new(
            from_pos.x + config.table_width,
            from_pos.y + column_center_offset(from_index, config),
        ),
        end: Position::new(to_pos.x, to_pos.y + column_center_offset(to_index, config)),
    })
}

// ============================================================================
// Layout
// ============================================================================

/// A placed table and its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub name: String,
    pub bounds: Rect,
}

/// A drawable relationship
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLayout {
    /// Stable key, `from.col->to.col`
    pub key: String,
    pub geometry: ConnectorGeometry,
}

/// Everything spatial about a schema
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub canvas: Size,
    pub tables: Vec<TableLayout>,
    pub connectors: Vec<ConnectorLayout>,
}

impl Layout {
    /// Compute the layout of a schema
    pub fn compute(schema: &Schema, config: &DiagramConfig) -> Self {
        let mut tables = Vec::with_capacity(schema.table_count());
        for table in &schema.tables {
            match table_bounds(table, config) {
                Some(bounds) => tables.push(TableLayout {
                    name: table.name.clone(),
                    bounds,
                }),
                None => tracing::debug!(table = %table.name, "Skipping unplaced table"),
            }
        }

        let mut connectors = Vec::with_capacity(schema.relationships.len());
        for relationship in &schema.relationships {
            match connector_geometry(schema, relationship, config) {
                Some(geometry) => connectors.push(ConnectorLayout {
                    key: relationship.key(),
                    geometry,
                }),
                None => tracing::debug!(
                    relationship = %relationship,
                    "Skipping connector that does not resolve"
                ),
            }
        }

        Self {
            canvas: canvas_size(&schema.tables, config),
            tables,
            connectors,
        }
    }

    /// Bounds of a table by name
    pub fn table_bounds(&self, name: &str) -> Option<Rect> {
        self.tables.iter().find(|t| t.name == name).map(|t| t.bounds)
    }

    /// Name of the topmost table under a canvas point
    pub fn table_at(&self, point: Position) -> Option<&str> {
        self.tables
            .iter()
            .rev()
            .find(|t| t.bounds.contains(point))
            .map(|t| t.name.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlpad_schema::Column;

    fn narrow() -> DiagramConfig {
        DiagramConfig::default().with_table_width(160.0)
    }

    fn two_tables() -> Schema {
        Schema::new()
            .with_table(
                Table::new("A")
                    .with_column(Column::new("id", "INTEGER").primary_key())
                    .at(0.0, 0.0),
            )
            .with_table(
                Table::new("B")
                    .with_column(Column::new("id", "INTEGER").primary_key())
                    .at(320.0, 0.0),
            )
            .with_relationship(Relationship::new("A", "id", "B", "id"))
    }

    #[test]
    fn test_table_height() {
        let config = DiagramConfig::default();
        assert_eq!(table_height(&Table::new("empty"), &config), 40.0);
        let three = Table::new("t").with_columns([
            Column::new("a", "TEXT"),
            Column::new("b", "TEXT"),
            Column::new("c", "TEXT"),
        ]);
        assert_eq!(table_height(&three, &config), 40.0 + 3.0 * 28.0);
    }

    #[test]
    fn test_empty_canvas_uses_default() {
        let config = DiagramConfig::default();
        assert_eq!(canvas_size(&[], &config), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_only_unplaced_tables_leave_padding() {
        let config = DiagramConfig::default();
        let padding = config.canvas_padding;
        assert_eq!(
            canvas_size(&[Table::new("floating")], &config),
            Size::new(padding, padding)
        );
        assert_eq!(canvas_size(&[Table::new("floating")], &config), Size::new(50.0, 50.0));
    }

    #[test]
    fn test_canvas_size_covers_furthest_edges() {
        let config = DiagramConfig::default();
        let tables = vec![
            Table::new("a").with_column(Column::new("id", "INTEGER")).at(0.0, 0.0),
            Table::new("b")
                .with_columns([Column::new("id", "INTEGER"), Column::new("x", "TEXT")])
                .at(640.0, 250.0),
            Table::new("floating"),
        ];
        // b: right = 640 + 220, bottom = 250 + 40 + 2 * 28
        assert_eq!(canvas_size(&tables, &config), Size::new(910.0, 396.0));
    }

    #[test]
    fn test_connector_between_adjacent_tables() {
        let config = narrow();
        let schema = two_tables();
        let geometry = connector_geometry(&schema, &schema.relationships[0], &config).unwrap();

        let y = config.header_height + config.row_height / 2.0;
        assert_eq!(geometry.start, Position::new(160.0, y));
        assert_eq!(geometry.end, Position::new(320.0, y));
        assert_eq!(geometry.length(), 160.0);
        assert_eq!(geometry.angle_degrees(), 0.0);
    }

    #[test]
    fn test_connector_uses_column_rows() {
        let config = DiagramConfig::default();
        let schema = Schema::new()
            .with_table(
                Table::new("orders")
                    .with_columns([
                        Column::new("id", "INTEGER").primary_key(),
                        Column::new("user_id", "INTEGER").foreign_key(),
                    ])
                    .at(0.0, 0.0),
            )
            .with_table(
                Table::new("users")
                    .with_column(Column::new("id", "INTEGER").primary_key())
                    .at(320.0, 250.0),
            )
            .with_relationship(Relationship::new("orders", "user_id", "users", "id"));

        let geometry = connector_geometry(&schema, &schema.relationships[0], &config).unwrap();
        assert_eq!(geometry.start, Position::new(220.0, 40.0 + 28.0 + 14.0));
        assert_eq!(geometry.end, Position::new(320.0, 250.0 + 40.0 + 14.0));
        assert!(geometry.angle_degrees() > 0.0 && geometry.angle_degrees() < 90.0);
    }

    #[test]
    fn test_self_reference_points_back_to_own_left_edge() {
        let config = DiagramConfig::default();
        let schema = Schema::new()
            .with_table(
                Table::new("employees")
                    .with_columns([
                        Column::new("id", "INTEGER").primary_key(),
                        Column::new("manager_id", "INTEGER").foreign_key(),
                    ])
                    .at(100.0, 0.0),
            )
            .with_relationship(Relationship::new("employees", "manager_id", "employees", "id"));

        let geometry = connector_geometry(&schema, &schema.relationships[0], &config).unwrap();
        assert_eq!(geometry.start, Position::new(320.0, 82.0));
        assert_eq!(geometry.end, Position::new(100.0, 54.0));
    }

    #[test]
    fn test_dangling_relationships_are_skipped() {
        let config = narrow();
        let schema = two_tables()
            .with_relationship(Relationship::new("A", "id", "Missing", "id"))
            .with_relationship(Relationship::new("A", "nope", "B", "id"))
            .with_table(Table::new("C").with_column(Column::new("id", "INTEGER")))
            .with_relationship(Relationship::new("C", "id", "A", "id"));

        let layout = Layout::compute(&schema, &config);
        assert_eq!(layout.connectors.len(), 1);
        assert_eq!(layout.connectors[0].key, "A.id->B.id");
        assert_eq!(layout.tables.len(), 2);
        assert_eq!(layout.canvas, canvas_size(&two_tables().tables, &config));
    }

    #[test]
    fn test_table_at() {
        let config = DiagramConfig::default();
        let layout = Layout::compute(&two_tables(), &config);
        assert_eq!(layout.table_at(Position::new(10.0, 10.0)), Some("A"));
        assert_eq!(layout.table_at(Position::new(400.0, 50.0)), Some("B"));
        assert_eq!(layout.table_at(Position::new(260.0, 10.0)), None);
        assert_eq!(
            layout.table_bounds("B"),
            Some(Rect::from_xywh(320.0, 0.0, 220.0, 68.0))
        );
    }
}
