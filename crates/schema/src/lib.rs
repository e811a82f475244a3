//! # Sqlpad Schema
//!
//! The schema model that the diagram visualizes, plus the boundary code that
//! produces it and the query runner the host application sits on.
//!
//! ## Core Concepts
//!
//! - **Column**: name, raw engine type, primary/foreign key flags
//! - **Table**: ordered columns and an optional canvas position
//! - **Relationship**: a foreign key from one column to another, by name
//! - **Schema**: tables in discovery order plus relationships
//!
//! Schemas come from JSON files ([`load_schema`]) or from a live SQLite
//! connection ([`SchemaSource`]); engine-derived schemas are auto-placed on
//! a fixed grid.

// Module declarations
pub mod column;
pub mod introspect;
pub mod placement;
pub mod query;
pub mod relationship;
pub mod schema;
pub mod serialization;
pub mod table;
pub mod validation;

// Re-export commonly used types at crate root
pub use column::Column;
pub use introspect::{SchemaSource, quote_identifier};
pub use placement::grid_position;
pub use query::{
    CellValue, QueryResult, default_table_query, execute_query, open_database,
    open_sample_database,
};
pub use relationship::Relationship;
pub use schema::Schema;
pub use serialization::{
    SCHEMA_EXTENSION, load_schema, load_schema_from_str, save_schema, schema_to_json,
};
pub use table::Table;
pub use validation::{ValidationResult, ValidationRule, Validator, validate_schema};

// Re-export core types that are commonly used with schemas
pub use sqlpad_core::{DiagramConfig, Position, SqlpadError, SqlpadResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
