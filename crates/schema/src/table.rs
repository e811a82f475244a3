//! Table definitions

use crate::column::Column;
use serde::{Deserialize, Serialize};
use sqlpad_core::Position;

/// A table: an ordered list of columns plus an optional canvas position
///
/// Column order is display order and matches the order the engine reports.
/// A table without a position is "unplaced" and is left out of every
/// layout computation until it is given one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table name, unique within a schema
    pub name: String,

    /// Columns in display order
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Top-left corner on the canvas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Table {
    /// Create an empty, unplaced table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            position: None,
        }
    }

    /// Append a column
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append several columns
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Place the table on the canvas
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Zero-based index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether the table has a canvas position
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Names of the primary key columns, in column order
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        Table::new("users")
            .with_column(Column::new("id", "INTEGER").primary_key())
            .with_column(Column::new("name", "TEXT"))
            .with_column(Column::new("email", "TEXT"))
    }

    #[test]
    fn test_column_lookup() {
        let table = users();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column_index("id"), Some(0));
        assert_eq!(table.column_index("email"), Some(2));
        assert_eq!(table.column_index("missing"), None);
        assert_eq!(table.column("name").map(|c| c.data_type.as_str()), Some("TEXT"));
    }

    #[test]
    fn test_placement() {
        let table = users();
        assert!(!table.is_placed());
        let placed = table.at(320.0, 0.0);
        assert_eq!(placed.position, Some(Position::new(320.0, 0.0)));
    }

    #[test]
    fn test_primary_key_columns() {
        let table = Table::new("order_items").with_columns([
            Column::new("order_id", "INTEGER").primary_key().foreign_key(),
            Column::new("product_id", "INTEGER").primary_key().foreign_key(),
            Column::new("quantity", "INTEGER"),
        ]);
        assert_eq!(table.primary_key_columns(), vec!["order_id", "product_id"]);
    }

    #[test]
    fn test_unplaced_table_omits_position_in_json() {
        let json = serde_json::to_string(&Table::new("empty")).unwrap();
        assert_eq!(json, r#"{"name":"empty","columns":[]}"#);
    }
}
