//! Column definitions
//!
//! A column is identified by its name within the owning table. The type is
//! kept exactly as the engine reported it; display normalization happens at
//! render time.

use serde::{Deserialize, Serialize};

/// A single column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,

    /// Raw engine type name (e.g. "INTEGER", "varchar(255)")
    #[serde(rename = "type")]
    pub data_type: String,

    /// Whether this column is part of the primary key
    #[serde(default)]
    pub is_primary_key: bool,

    /// Whether this column references another table
    #[serde(default)]
    pub is_foreign_key: bool,
}

impl Column {
    /// Create a plain column
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_primary_key: false,
            is_foreign_key: false,
        }
    }

    /// Mark as primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark as foreign key
    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }

    /// True when the column carries any key badge
    pub fn is_key(&self) -> bool {
        self.is_primary_key || self.is_foreign_key
    }
}
