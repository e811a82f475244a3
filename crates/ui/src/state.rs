//! Application State Management for Sqlpad
//!
//! Centralized state using a Dioxus 0.7 global signal: the open database,
//! the schema derived from it, the query editor contents, the last result
//! and the selected table.

use dioxus::prelude::*;
use rusqlite::Connection;
use sqlpad_core::{DiagramConfig, SqlpadResult};
use sqlpad_diagram::SelectionState;
use sqlpad_schema::{
    QueryResult, Schema, SchemaSource, default_table_query, execute_query, open_database,
    open_sample_database,
};
use std::path::PathBuf;

/// Query the editor starts with
pub const SAMPLE_QUERY: &str = "SELECT * FROM users;";

// ============================================================================
// Database
// ============================================================================

/// Where the open database came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    /// The in-memory demo database
    Sample,
    /// A database file on disk
    File(PathBuf),
}

impl DatabaseSource {
    /// Short label for the toolbar
    pub fn label(&self) -> String {
        match self {
            DatabaseSource::Sample => "Sample database".to_string(),
            DatabaseSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// An open connection and its origin
#[derive(Debug)]
pub struct Database {
    pub conn: Connection,
    pub source: DatabaseSource,
}

// ============================================================================
// UI State
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    /// CSS modifier class
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Error => "status-error",
        }
    }
}

// ============================================================================
// Main Application State
// ============================================================================

/// Main application state container
#[derive(Debug)]
pub struct AppState {
    /// Open database (None until initialized)
    pub database: Option<Database>,
    /// Schema of the open database, auto-placed on the grid
    pub schema: Schema,
    /// Layout constants for the schema viewer
    pub config: DiagramConfig,
    /// Query editor contents
    pub query: String,
    /// Last successful result
    pub result: Option<QueryResult>,
    /// Last error, shown in the error banner
    pub error: Option<String>,
    /// Table selected in the schema viewer
    pub selection: SelectionState,
    /// Status bar message
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            database: None,
            schema: Schema::new(),
            config: DiagramConfig::default(),
            query: SAMPLE_QUERY.to_string(),
            result: None,
            error: None,
            selection: SelectionState::default(),
            status: None,
        }
    }
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a database is open
    pub fn has_database(&self) -> bool {
        self.database.is_some()
    }

    /// Label for the open database
    pub fn database_label(&self) -> String {
        self.database
            .as_ref()
            .map(|db| db.source.label())
            .unwrap_or_else(|| "No database".to_string())
    }

    /// Replace the database with the in-memory sample
    pub fn load_sample(&mut self) {
        match open_sample_database() {
            Ok(conn) => self.attach(conn, DatabaseSource::Sample),
            Err(e) => self.fail(format!("Failed to initialize database: {}", e)),
        }
    }

    /// Replace the database with a file on disk
    pub fn open_file(&mut self, path: PathBuf) {
        match open_database(&path) {
            Ok(conn) => self.attach(conn, DatabaseSource::File(path)),
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn attach(&mut self, conn: Connection, source: DatabaseSource) {
        tracing::info!(source = %source.label(), "Database attached");
        self.database = Some(Database { conn, source });
        self.result = None;
        self.error = None;
        self.selection.clear();
        self.refresh_schema();
        self.set_status(format!("Opened {}", self.database_label()), StatusLevel::Success);
    }

    /// Re-read the schema from the open database
    pub fn refresh_schema(&mut self) {
        let loaded: SqlpadResult<Schema> = match &self.database {
            Some(db) => db.conn.load_schema_with(&self.config),
            None => Ok(Schema::new()),
        };
        match loaded {
            Ok(schema) => self.schema = schema,
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Execute the editor contents
    ///
    /// The schema is re-read afterwards so tables created or dropped by the
    /// query show up in the viewer.
    pub fn run_query(&mut self) {
        let Some(db) = &self.database else {
            return;
        };
        if self.query.trim().is_empty() {
            return;
        }

        match execute_query(&db.conn, &self.query) {
            Ok(result) => {
                self.error = None;
                let message = if result == QueryResult::no_results() {
                    "Query executed".to_string()
                } else {
                    format!("{} row(s) returned", result.row_count())
                };
                self.set_status(message, StatusLevel::Info);
                self.result = Some(result);
            }
            Err(e) => {
                self.result = None;
                self.fail(e.to_string());
            }
        }
        self.refresh_schema();
    }

    /// Host reaction to a table activated in the viewer
    pub fn select_table(&mut self, table: &str) {
        self.selection.set(table);
        self.query = default_table_query(table);
        self.run_query();
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    fn fail(&mut self, message: String) {
        tracing::warn!(error = %message, "Operation failed");
        self.set_status(message.clone(), StatusLevel::Error);
        self.error = Some(message);
    }

    /// Get window title
    pub fn window_title(&self) -> String {
        format!("{} - Sqlpad", self.database_label())
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlpad_core::Position;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(!state.has_database());
        assert_eq!(state.query, SAMPLE_QUERY);
        assert_eq!(state.window_title(), "No database - Sqlpad");
    }

    #[test]
    fn test_load_sample() {
        let mut state = AppState::new();
        state.load_sample();
        assert!(state.has_database());
        assert_eq!(state.database_label(), "Sample database");
        assert_eq!(state.schema.table_names().collect::<Vec<_>>(), vec!["users"]);
        assert_eq!(state.schema.tables[0].position, Some(Position::zero()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_run_query() {
        let mut state = AppState::new();
        state.load_sample();
        state.run_query();
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.columns, vec!["id", "name", "email", "created_at"]);
    }

    #[test]
    fn test_query_error_is_reported() {
        let mut state = AppState::new();
        state.load_sample();
        state.query = "SELECT * FROM nope".into();
        state.run_query();
        assert!(state.result.is_none());
        assert!(state.error.as_deref().unwrap().starts_with("Error executing query:"));
        assert_eq!(state.status.as_ref().map(|s| s.level), Some(StatusLevel::Error));
    }

    #[test]
    fn test_ddl_refreshes_schema() {
        let mut state = AppState::new();
        state.load_sample();
        state.query = "CREATE TABLE posts (id INTEGER PRIMARY KEY, title TEXT)".into();
        state.run_query();
        assert_eq!(state.schema.table_count(), 2);
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("Query executed"));
        assert_eq!(
            state.schema.tables[1].position,
            Some(Position::new(320.0, 0.0))
        );
    }

    #[test]
    fn test_select_table_fills_editor_and_runs() {
        let mut state = AppState::new();
        state.load_sample();
        state.select_table("users");
        assert!(state.selection.is_selected("users"));
        assert_eq!(state.query, "SELECT * FROM \"users\";");
        assert_eq!(state.result.as_ref().map(|r| r.row_count()), Some(3));
    }

    #[test]
    fn test_open_missing_file() {
        let mut state = AppState::new();
        state.open_file(PathBuf::from("/no/such/db.sqlite"));
        assert!(!state.has_database());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("CREATE TABLE products (sku TEXT PRIMARY KEY);")
                .unwrap();
        }
        let mut state = AppState::new();
        state.open_file(path);
        assert_eq!(state.database_label(), "shop.db");
        assert_eq!(state.schema.tables[0].name, "products");
    }
}
