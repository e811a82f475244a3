//! Error types for Sqlpad
//!
//! The diagram engine itself never fails; these errors come from the
//! boundaries around it: loading schema files and configuration, talking to
//! the embedded database, and executing user queries.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Sqlpad
#[derive(Debug, Error)]
pub enum SqlpadError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Table not found
    #[error("Table not found: {0}")]
    TableNotFound(String),

    // ========================================================================
    // Database Errors
    // ========================================================================
    /// The embedded engine rejected an operation
    #[error("Database error: {0}")]
    Database(String),

    /// A user query failed to execute
    #[error("Error executing query: {0}")]
    Query(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// File does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid schema file format
    #[error("Invalid schema file format: {0}")]
    InvalidSchemaFormat(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl SqlpadError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        SqlpadError::Validation(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        SqlpadError::Database(msg.into())
    }

    /// Create a query error
    pub fn query(msg: impl Into<String>) -> Self {
        SqlpadError::Query(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        SqlpadError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SqlpadError::Validation(_) | SqlpadError::InvalidConfig(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SqlpadError::TableNotFound(_) | SqlpadError::FileNotFound(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            SqlpadError::Io(_) | SqlpadError::FileRead { .. } | SqlpadError::FileWrite { .. }
        )
    }
}

/// Result type alias using SqlpadError
pub type SqlpadResult<T> = Result<T, SqlpadError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> SqlpadResult<T>;
}

impl<T, E: Into<SqlpadError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> SqlpadResult<T> {
        self.map_err(|e| {
            let err: SqlpadError = e.into();
            SqlpadError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = SqlpadError::validation("Table name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Table name is required");
    }

    #[test]
    fn test_not_found_errors() {
        let err = SqlpadError::TableNotFound("orders".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Table not found: orders");

        let err = SqlpadError::FileNotFound(PathBuf::from("shop.db"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File not found: shop.db");
    }

    #[test]
    fn test_invalid_config_is_validation() {
        let err = SqlpadError::InvalidConfig("min_zoom must be a positive number".into());
        assert!(err.is_validation());
    }

    #[test]
    fn test_query_error() {
        let err = SqlpadError::query("no such table: userz");
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Error executing query: no such table: userz"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = SqlpadError::with_context("Loading schema", "Permission denied");
        assert_eq!(err.to_string(), "Loading schema: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_io_error() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.with_context("Opening database").unwrap_err();
        assert_eq!(err.to_string(), "Opening database: IO error: missing");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SqlpadError = io_err.into();
        assert!(err.is_io());
    }
}
