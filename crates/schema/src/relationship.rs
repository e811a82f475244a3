//! Foreign-key relationships between tables
//!
//! Relationships reference tables and columns by name only. Nothing stops a
//! relationship from naming a table or column that is not in the schema;
//! consumers must treat such references as "not drawable" rather than as
//! errors, since schemas routinely arrive from partial introspection.

use serde::{Deserialize, Serialize};

/// Directed edge: `from_table.from_column` references `to_table.to_column`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
}

impl Relationship {
    /// Create a relationship
    pub fn new(
        from_table: impl Into<String>,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self {
            from_table: from_table.into(),
            from_column: from_column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
        }
    }

    /// Stable identifier, e.g. `orders.user_id->users.id`
    pub fn key(&self) -> String {
        format!(
            "{}.{}->{}.{}",
            self.from_table, self.from_column, self.to_table, self.to_column
        )
    }

    /// Whether both ends are in the same table
    pub fn is_self_referencing(&self) -> bool {
        self.from_table == self.to_table
    }

    /// Whether this relationship touches the given table
    pub fn involves(&self, table: &str) -> bool {
        self.from_table == table || self.to_table == table
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} → {}.{}",
            self.from_table, self.from_column, self.to_table, self.to_column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_display() {
        let rel = Relationship::new("orders", "user_id", "users", "id");
        assert_eq!(rel.key(), "orders.user_id->users.id");
        assert_eq!(rel.to_string(), "orders.user_id → users.id");
    }

    #[test]
    fn test_involves() {
        let rel = Relationship::new("orders", "user_id", "users", "id");
        assert!(rel.involves("orders"));
        assert!(rel.involves("users"));
        assert!(!rel.involves("products"));
        assert!(!rel.is_self_referencing());
        assert!(Relationship::new("employees", "manager_id", "employees", "id").is_self_referencing());
    }

    #[test]
    fn test_json_field_names() {
        let rel: Relationship = serde_json::from_str(
            r#"{"fromTable":"a","fromColumn":"b_id","toTable":"b","toColumn":"id"}"#,
        )
        .unwrap();
        assert_eq!(rel, Relationship::new("a", "b_id", "b", "id"));
    }
}
