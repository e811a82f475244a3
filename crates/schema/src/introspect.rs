//! Deriving a schema from a live database
//!
//! Only table names, column names, declared types and primary-key flags are
//! discovered. Foreign keys are never inferred here; a schema loaded from an
//! engine has no relationships until the caller supplies them.

use crate::{Column, Schema, Table};
use sqlpad_core::{DiagramConfig, ResultExt, SqlpadError, SqlpadResult};

/// Something that can enumerate tables and their columns
pub trait SchemaSource {
    /// User table names in discovery order
    fn table_names(&self) -> SqlpadResult<Vec<String>>;

    /// Columns of one table in engine order
    fn table_columns(&self, table: &str) -> SqlpadResult<Vec<Column>>;

    /// Build a schema and lay it out on the grid described by `config`
    fn load_schema_with(&self, config: &DiagramConfig) -> SqlpadResult<Schema> {
        let mut schema = Schema::new();
        for name in self.table_names()? {
            let columns = self
                .table_columns(&name)
                .with_context(format!("Reading columns of '{}'", name))?;
            schema.tables.push(Table::new(name).with_columns(columns));
        }
        schema.auto_place(config);

        tracing::info!(tables = schema.table_count(), "Introspected schema");
        Ok(schema)
    }

    /// Build a schema laid out on the default grid
    fn load_schema(&self) -> SqlpadResult<Schema> {
        self.load_schema_with(&DiagramConfig::default())
    }
}

impl SchemaSource for rusqlite::Connection {
    fn table_names(&self) -> SqlpadResult<Vec<String>> {
        let mut stmt = self
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                 ORDER BY rowid",
            )
            .map_err(database_error)?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(database_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(database_error)?;
        Ok(names)
    }

    fn table_columns(&self, table: &str) -> SqlpadResult<Vec<Column>> {
        // PRAGMA table_info: cid, name, type, notnull, dflt_value, pk
        let sql = format!("PRAGMA table_info({})", quote_identifier(table));
        let mut stmt = self.prepare(&sql).map_err(database_error)?;

        let columns = stmt
            .query_map([], |row| {
                let name: String = row.get(1)?;
                let data_type: String = row.get::<_, Option<String>>(2)?.unwrap_or_default();
                let pk: i64 = row.get(5)?;
                let mut column = Column::new(name, data_type);
                column.is_primary_key = pk != 0;
                Ok(column)
            })
            .map_err(database_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(database_error)?;

        if columns.is_empty() {
            return Err(SqlpadError::TableNotFound(table.to_string()));
        }
        Ok(columns)
    }
}

/// Quote an identifier for use in SQL text
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Convert an engine error into a [`SqlpadError::Database`]
pub(crate) fn database_error(err: rusqlite::Error) -> SqlpadError {
    SqlpadError::database(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rusqlite::Connection;
    use sqlpad_core::Position;

    fn shop() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             CREATE TABLE orders (id INTEGER PRIMARY KEY, user_id INTEGER REFERENCES users(id), total REAL);
             CREATE TABLE order_items (order_id INTEGER, sku varchar(32), PRIMARY KEY (order_id, sku));
             CREATE TABLE notes (body);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_table_names_in_creation_order() {
        let conn = shop();
        assert_eq!(
            conn.table_names().unwrap(),
            vec!["users", "orders", "order_items", "notes"]
        );
    }

    #[test]
    fn test_internal_tables_are_skipped() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT);")
            .unwrap();
        // AUTOINCREMENT creates sqlite_sequence
        assert_eq!(conn.table_names().unwrap(), vec!["t"]);
    }

    #[test]
    fn test_columns_and_primary_keys() {
        let conn = shop();
        let columns = conn.table_columns("order_items").unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].name, "sku");
        assert_eq!(columns[1].data_type, "varchar(32)");
        assert!(columns.iter().all(|c| c.is_primary_key));
        assert!(columns.iter().all(|c| !c.is_foreign_key));

        let untyped = conn.table_columns("notes").unwrap();
        assert_eq!(untyped[0].data_type, "");
    }

    #[test]
    fn test_unknown_table() {
        let conn = shop();
        let err = conn.table_columns("missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_schema_places_on_grid_without_relationships() {
        let conn = shop();
        let schema = conn.load_schema().unwrap();

        assert_eq!(schema.table_count(), 4);
        assert!(schema.relationships.is_empty());
        assert_eq!(schema.tables[2].position, Some(Position::new(640.0, 0.0)));
        assert_eq!(schema.tables[3].position, Some(Position::new(0.0, 250.0)));
        assert_eq!(schema.tables[1].primary_key_columns(), vec!["id"]);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
