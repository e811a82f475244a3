//! Loading and saving schema JSON files
//!
//! The file format is the schema object itself with camelCase keys:
//!
//! ```json
//! {
//!   "tables": [
//!     { "name": "users",
//!       "columns": [{ "name": "id", "type": "INTEGER", "isPrimaryKey": true }],
//!       "position": { "x": 0, "y": 0 } }
//!   ],
//!   "relationships": [
//!     { "fromTable": "orders", "fromColumn": "user_id", "toTable": "users", "toColumn": "id" }
//!   ]
//! }
//! ```

use crate::Schema;
use sqlpad_core::{SqlpadError, SqlpadResult};
use std::path::Path;

/// File extension for schema files
pub const SCHEMA_EXTENSION: &str = "json";

// ============================================================================
// Save Functions
// ============================================================================

/// Serialize a schema to pretty-printed JSON
pub fn schema_to_json(schema: &Schema) -> SqlpadResult<String> {
    Ok(serde_json::to_string_pretty(schema)?)
}

/// Serialize a schema to compact JSON
pub fn schema_to_compact_json(schema: &Schema) -> SqlpadResult<String> {
    Ok(serde_json::to_string(schema)?)
}

/// Save a schema to a file, creating parent directories as needed
pub fn save_schema(schema: &Schema, path: impl AsRef<Path>) -> SqlpadResult<()> {
    let path = path.as_ref();
    let json = schema_to_json(schema)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| SqlpadError::FileWrite {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| SqlpadError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "Saved schema");
    Ok(())
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a schema from a JSON file
pub fn load_schema(path: impl AsRef<Path>) -> SqlpadResult<Schema> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SqlpadError::FileNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| SqlpadError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let schema = load_schema_from_str(&json).map_err(|e| match e {
        SqlpadError::JsonSerialization(je) => SqlpadError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid schema file format: {}", je),
        },
        other => other,
    })?;

    tracing::info!(
        path = %path.display(),
        tables = schema.table_count(),
        relationships = schema.relationships.len(),
        "Loaded schema"
    );
    Ok(schema)
}

/// Parse a schema from a JSON string
pub fn load_schema_from_str(json: &str) -> SqlpadResult<Schema> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a schema from raw bytes
pub fn load_schema_from_bytes(bytes: &[u8]) -> SqlpadResult<Schema> {
    let json = std::str::from_utf8(bytes)
        .map_err(|e| SqlpadError::InvalidSchemaFormat(format!("Invalid UTF-8: {}", e)))?;
    load_schema_from_str(json)
}

// ============================================================================
// Tests
// ============================================================================
