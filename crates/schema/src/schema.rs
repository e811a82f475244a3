//! The schema: tables and the relationships between them
//!
//! `Schema` is plain data. Table-name uniqueness is an invariant callers are
//! expected to uphold (see [`crate::validation`]); it is not enforced by the
//! type, and lookups return the first table with a matching name.

use crate::placement::grid_position;
use crate::relationship::Relationship;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use sqlpad_core::DiagramConfig;

/// Tables in discovery order plus foreign-key relationships
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Tables in discovery order
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Foreign-key relationships supplied by the caller
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Append a relationship
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Whether the schema has no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Whether a table with this name exists
    pub fn contains_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Table names in discovery order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Zero-based index of `column` within `table`
    pub fn column_index(&self, table: &str, column: &str) -> Option<usize> {
        self.table(table)?.column_index(column)
    }

    /// Whether both endpoints of a relationship name existing tables and columns
    pub fn resolves(&self, relationship: &Relationship) -> bool {
        self.column_index(&relationship.from_table, &relationship.from_column)
            .is_some()
            && self
                .column_index(&relationship.to_table, &relationship.to_column)
                .is_some()
    }

    /// Relationships that start or end at a table
    pub fn relationships_for<'a>(
        &'a self,
        table: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships.iter().filter(move |r| r.involves(table))
    }

    /// Tables that have no canvas position
    pub fn unplaced_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(|t| !t.is_placed())
    }

    /// Give every unplaced table its grid cell by discovery index
    ///
    /// Tables that already have a position keep it. Returns the number of
    /// tables that were placed.
    pub fn auto_place(&mut self, config: &DiagramConfig) -> usize {
        let mut placed = 0;
        for (index, table) in self.tables.iter_mut().enumerate() {
            if table.position.is_none() {
                table.position = Some(grid_position(index, config));
                placed += 1;
            }
        }
        if placed > 0 {
            tracing::debug!(placed, "Auto-placed tables on the default grid");
        }
        placed
    }

    /// Builder form of [`Schema::auto_place`]
    pub fn auto_placed(mut self, config: &DiagramConfig) -> Self {
        self.auto_place(config);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use pretty_assertions::assert_eq;
    use sqlpad_core::Position;

    fn shop() -> Schema {
        Schema::new()
            .with_table(
                Table::new("users")
                    .with_column(Column::new("id", "INTEGER").primary_key())
                    .with_column(Column::new("email", "TEXT")),
            )
            .with_table(
                Table::new("orders")
                    .with_column(Column::new("id", "INTEGER").primary_key())
                    .with_column(Column::new("user_id", "INTEGER").foreign_key()),
            )
            .with_relationship(Relationship::new("orders", "user_id", "users", "id"))
    }

    #[test]
    fn test_lookup() {
        let schema = shop();
        assert_eq!(schema.table_count(), 2);
        assert!(schema.contains_table("orders"));
        assert!(!schema.contains_table("products"));
        assert_eq!(schema.column_index("orders", "user_id"), Some(1));
        assert_eq!(schema.column_index("products", "id"), None);
        assert_eq!(schema.table_names().collect::<Vec<_>>(), vec!["users", "orders"]);
    }

    #[test]
    fn test_resolves() {
        let schema = shop();
        assert!(schema.resolves(&schema.relationships[0]));
        assert!(!schema.resolves(&Relationship::new("orders", "user_id", "customers", "id")));
        assert!(!schema.resolves(&Relationship::new("orders", "buyer_id", "users", "id")));
    }

    #[test]
    fn test_relationships_for() {
        let schema = shop();
        assert_eq!(schema.relationships_for("users").count(), 1);
        assert_eq!(schema.relationships_for("products").count(), 0);
    }

    #[test]
    fn test_auto_place_uses_discovery_index() {
        let mut schema = Schema::new();
        for name in ["t0", "t1", "t2", "t3", "t4", "t5"] {
            schema = schema.with_table(Table::new(name));
        }
        let placed = schema.auto_place(&DiagramConfig::default());
        assert_eq!(placed, 6);

        let positions: Vec<Position> = schema.tables.iter().filter_map(|t| t.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0.0, 0.0),
                Position::new(320.0, 0.0),
                Position::new(640.0, 0.0),
                Position::new(0.0, 250.0),
                Position::new(320.0, 250.0),
                Position::new(640.0, 250.0),
            ]
        );
    }

    #[test]
    fn test_auto_place_keeps_existing_positions() {
        let mut schema = Schema::new()
            .with_table(Table::new("a").at(10.0, 10.0))
            .with_table(Table::new("b"));
        assert_eq!(schema.auto_place(&DiagramConfig::default()), 1);
        assert_eq!(schema.tables[0].position, Some(Position::new(10.0, 10.0)));
        assert_eq!(schema.tables[1].position, Some(Position::new(320.0, 0.0)));
        assert_eq!(schema.unplaced_tables().count(), 0);
    }
}
