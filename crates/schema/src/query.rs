//! Running user SQL against the embedded engine
//!
//! Results mirror what the query editor shows: the column names and rows of
//! the first statement that produced rows. Statements that produce nothing
//! collapse into a single informational `Result` row.

use crate::introspect::{database_error, quote_identifier};
use rusqlite::types::ValueRef;
use rusqlite::{Batch, Connection};
use sqlpad_core::{SqlpadError, SqlpadResult};

/// Column header used when a query yields no rows
pub const EMPTY_RESULT_COLUMN: &str = "Result";

/// Message shown when a query yields no rows
pub const EMPTY_RESULT_MESSAGE: &str = "Query executed successfully (no results)";

// ============================================================================
// CellValue
// ============================================================================

/// A single value in a result row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Integer(i) => CellValue::Integer(i),
            ValueRef::Real(f) => CellValue::Real(f),
            ValueRef::Text(t) => CellValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => CellValue::Blob(b.to_vec()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Real(r) => write!(f, "{}", r),
            CellValue::Text(t) => write!(f, "{}", t),
            CellValue::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

// ============================================================================
// QueryResult
// ============================================================================

/// Column names plus rows of values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryResult {
    /// The informational result for statements that return nothing
    pub fn no_results() -> Self {
        Self {
            columns: vec![EMPTY_RESULT_COLUMN.to_string()],
            rows: vec![vec![CellValue::from(EMPTY_RESULT_MESSAGE)]],
        }
    }

    /// Whether there are no columns at all
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render as an aligned plain-text table
    pub fn to_text_table(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let line = |values: &[String]| -> String {
            values
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:<width$}", v, width = *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&line(&self.columns));
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        out.push('\n');
        for row in &cells {
            out.push_str(&line(row));
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Execute every statement in `sql` and return the first row-producing result
///
/// A blank query does nothing and returns an empty result. When no statement
/// produced a row, the informational [`QueryResult::no_results`] is returned.
pub fn execute_query(conn: &Connection, sql: &str) -> SqlpadResult<QueryResult> {
    if sql.trim().is_empty() {
        return Ok(QueryResult::default());
    }

    let mut first: Option<QueryResult> = None;
    let mut batch = Batch::new(conn, sql);

    while let Some(mut stmt) = batch.next().map_err(query_error)? {
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        if columns.is_empty() {
            stmt.execute([]).map_err(query_error)?;
            continue;
        }

        let mut rows = stmt.query([]).map_err(query_error)?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            if first.is_some() {
                continue;
            }
            let values = (0..columns.len())
                .map(|i| row.get_ref(i).map(CellValue::from))
                .collect::<Result<Vec<_>, _>>()
                .map_err(query_error)?;
            collected.push(values);
        }

        if first.is_none() && !collected.is_empty() {
            first = Some(QueryResult {
                columns,
                rows: collected,
            });
        }
    }

    let result = first.unwrap_or_else(QueryResult::no_results);
    tracing::info!(
        columns = result.columns.len(),
        rows = result.row_count(),
        "Executed query"
    );
    Ok(result)
}

/// The query the host runs when a table is activated in the diagram
pub fn default_table_query(table: &str) -> String {
    format!("SELECT * FROM {};", quote_identifier(table))
}

/// SQL that seeds the sample database
pub const SAMPLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

INSERT OR IGNORE INTO users (name, email) VALUES
    ('John Doe', 'john@example.com'),
    ('Jane Smith', 'jane@example.com'),
    ('Bob Johnson', 'bob@example.com');
";

/// Open an in-memory database seeded with a small `users` table
pub fn open_sample_database() -> SqlpadResult<Connection> {
    let conn = Connection::open_in_memory().map_err(database_error)?;
    conn.execute_batch(SAMPLE_SQL).map_err(database_error)?;
    tracing::debug!("Opened sample database");
    Ok(conn)
}

/// Open a database file read-write
pub fn open_database(path: impl AsRef<std::path::Path>) -> SqlpadResult<Connection> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SqlpadError::FileNotFound(path.to_path_buf()));
    }
    let conn = Connection::open(path).map_err(database_error)?;
    tracing::info!(path = %path.display(), "Opened database");
    Ok(conn)
}

fn query_error(err: rusqlite::Error) -> SqlpadError {
    SqlpadError::query(err.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_database() {
        let conn = open_sample_database().unwrap();
        let result = execute_query(&conn, "SELECT id, name, email FROM users ORDER BY id").unwrap();
        assert_eq!(result.columns, vec!["id", "name", "email"]);
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.rows[0][0], CellValue::Integer(1));
        assert_eq!(result.rows[1][1], CellValue::from("Jane Smith"));

        let schema = conn.load_schema().unwrap();
        assert_eq!(schema.table_names().collect::<Vec<_>>(), vec!["users"]);
        assert_eq!(schema.tables[0].column_count(), 4);
    }

    #[test]
    fn test_statement_without_rows() {
        let conn = open_sample_database().unwrap();
        let result = execute_query(&conn, "CREATE TABLE t (x INTEGER)").unwrap();
        assert_eq!(result, QueryResult::no_results());
        assert_eq!(result.rows[0][0].to_string(), EMPTY_RESULT_MESSAGE);

        let empty_select = execute_query(&conn, "SELECT * FROM t").unwrap();
        assert_eq!(empty_select, QueryResult::no_results());
    }

    #[test]
    fn test_multiple_statements_return_first_rows() {
        let conn = open_sample_database().unwrap();
        let result = execute_query(
            &conn,
            "INSERT INTO users (name, email) VALUES ('Ann', 'ann@example.com');
             SELECT count(*) AS n FROM users;
             SELECT 1;",
        )
        .unwrap();
        assert_eq!(result.columns, vec!["n"]);
        assert_eq!(result.rows, vec![vec![CellValue::Integer(4)]]);
    }

    #[test]
    fn test_blank_query() {
        let conn = open_sample_database().unwrap();
        assert!(execute_query(&conn, "   \n").unwrap().is_empty());
    }

    #[test]
    fn test_query_error() {
        let conn = open_sample_database().unwrap();
        let err = execute_query(&conn, "SELECT * FROM nope").unwrap_err();
        assert!(matches!(err, SqlpadError::Query(_)));
        assert!(err.to_string().starts_with("Error executing query:"));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::Real(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Blob(vec![1, 2, 3]).to_string(), "<blob 3 bytes>");
    }

    #[test]
    fn test_default_table_query() {
        assert_eq!(default_table_query("users"), "SELECT * FROM \"users\";");
    }

    #[test]
    fn test_text_table() {
        let result = QueryResult {
            columns: vec!["id".into(), "name".into()],
            rows: vec![
                vec![CellValue::Integer(1), CellValue::from("Ann")],
                vec![CellValue::Integer(10), CellValue::Null],
            ],
        };
        assert_eq!(
            result.to_text_table(),
            "id | name\n---+-----\n1  | Ann\n10 | NULL\n"
        );
    }

    #[test]
    fn test_open_missing_database() {
        let err = open_database("/no/such/file.db").unwrap_err();
        assert!(err.is_not_found());
    }
}
