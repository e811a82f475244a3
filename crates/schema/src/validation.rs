//! Validation rules for schemas
//!
//! Structural problems that make a schema ambiguous (empty or duplicate
//! names) are errors. Problems the diagram already tolerates (dangling
//! relationships, unplaced tables) are warnings: they are reported here and
//! silently skipped at render time.

use crate::Schema;
use sqlpad_core::{SqlpadError, SqlpadResult, Validatable};
use std::collections::HashSet;

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of a validation operation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// List of errors (empty if valid)
    pub errors: Vec<ValidationError>,

    /// List of warnings (non-fatal issues)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the result
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Convert to SqlpadResult (fails if any errors)
    pub fn to_result(self) -> SqlpadResult<()> {
        if self.valid {
            Ok(())
        } else {
            let msg = self
                .errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join("; ");
            Err(SqlpadError::validation(msg))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling
    pub code: ValidationErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Path to the problematic element (e.g., "tables.users.columns.email")
    pub path: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path to the error
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error codes for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    EmptyTableName,
    DuplicateTableName,
    EmptyColumnName,
    DuplicateColumnName,
}

// ============================================================================
// ValidationWarning
// ============================================================================

/// A validation warning (non-fatal issue)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning code
    pub code: ValidationWarningCode,

    /// Human-readable warning message
    pub message: String,

    /// Path to the element
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Create a new warning
    pub fn new(code: ValidationWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] Warning: {}", path, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    NoColumns,
    DanglingRelationship,
    UnplacedTable,
}

// ============================================================================
// ValidationRule Trait
// ============================================================================

/// Trait for validation rules
pub trait ValidationRule {
    /// Get the rule name
    fn name(&self) -> &'static str;

    /// Validate a schema and return the result
    fn validate(&self, schema: &Schema) -> ValidationResult;
}

// ============================================================================
// Validator
// ============================================================================

/// Schema validator that runs multiple validation rules
#[derive(Default)]
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Create a validator with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a validator with the built-in rules
    pub fn with_default_rules() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(TableNamesRule));
        validator.add_rule(Box::new(TableColumnsRule));
        validator.add_rule(Box::new(RelationshipsRule));
        validator.add_rule(Box::new(PlacementRule));
        validator
    }

    /// Add a validation rule
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Validate a schema with all rules
    pub fn validate(&self, schema: &Schema) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for rule in &self.rules {
            let rule_result = rule.validate(schema);
            if rule_result.has_errors() || rule_result.has_warnings() {
                tracing::debug!(
                    rule = rule.name(),
                    errors = rule_result.errors.len(),
                    warnings = rule_result.warnings.len(),
                    "Validation rule reported issues"
                );
            }
            result.merge(rule_result);
        }
        result
    }
}

/// Validate a schema with the built-in rules
pub fn validate_schema(schema: &Schema) -> ValidationResult {
    Validator::with_default_rules().validate(schema)
}

impl Validatable for Schema {
    fn validate(&self) -> SqlpadResult<()> {
        validate_schema(self).to_result()
    }

    fn validation_errors(&self) -> Vec<String> {
        validate_schema(self)
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect()
    }
}

// ============================================================================
// Built-in Validation Rules
// ============================================================================

/// Rule: table names are non-empty and unique
pub struct TableNamesRule;

impl ValidationRule for TableNamesRule {
    fn name(&self) -> &'static str {
        "table_names"
    }

    fn validate(&self, schema: &Schema) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let mut seen: HashSet<&str> = HashSet::new();

        for (index, table) in schema.tables.iter().enumerate() {
            if table.name.is_empty() {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::EmptyTableName,
                        "Table name cannot be empty",
                    )
                    .with_path(format!("tables[{}]", index)),
                );
                continue;
            }

            if !seen.insert(table.name.as_str()) {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::DuplicateTableName,
                        format!("Duplicate table name: '{}'", table.name),
                    )
                    .with_path(format!("tables.{}", table.name)),
                );
            }
        }

        result
    }
}

/// Rule: column names are non-empty and unique within each table
pub struct TableColumnsRule;

impl ValidationRule for TableColumnsRule {
    fn name(&self) -> &'static str {
        "table_columns"
    }

    fn validate(&self, schema: &Schema) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for table in &schema.tables {
            let table_path = format!("tables.{}", table.name);

            if table.columns.is_empty() {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::NoColumns,
                        format!("Table '{}' has no columns", table.name),
                    )
                    .with_path(&table_path),
                );
                continue;
            }

            let mut seen: HashSet<&str> = HashSet::new();
            for (index, column) in table.columns.iter().enumerate() {
                if column.name.is_empty() {
                    result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::EmptyColumnName,
                            format!("Column {} of table '{}' has no name", index, table.name),
                        )
                        .with_path(format!("{}.columns[{}]", table_path, index)),
                    );
                    continue;
                }

                if !seen.insert(column.name.as_str()) {
                    result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::DuplicateColumnName,
                            format!(
                                "Duplicate column name '{}' in table '{}'",
                                column.name, table.name
                            ),
                        )
                        .with_path(format!("{}.columns.{}", table_path, column.name)),
                    );
                }
            }
        }

        result
    }
}

/// Rule: relationships point at existing tables and columns
pub struct RelationshipsRule;

impl ValidationRule for RelationshipsRule {
    fn name(&self) -> &'static str {
        "relationships"
    }

    fn validate(&self, schema: &Schema) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for relationship in &schema.relationships {
            let ends = [
                (&relationship.from_table, &relationship.from_column),
                (&relationship.to_table, &relationship.to_column),
            ];
            for (table, column) in ends {
                let message = match schema.table(table) {
                    None => format!("references unknown table '{}'", table),
                    Some(t) if t.column_index(column).is_none() => {
                        format!("references unknown column '{}.{}'", table, column)
                    }
                    Some(_) => continue,
                };
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::DanglingRelationship,
                        format!("Relationship {} {}; it will not be drawn", relationship, message),
                    )
                    .with_path(format!("relationships.{}", relationship.key())),
                );
            }
        }

        result
    }
}

/// Rule: every table has a canvas position
pub struct PlacementRule;

impl ValidationRule for PlacementRule {
    fn name(&self) -> &'static str {
        "placement"
    }

    fn validate(&self, schema: &Schema) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for table in schema.unplaced_tables() {
            result.add_warning(
                ValidationWarning::new(
                    ValidationWarningCode::UnplacedTable,
                    format!("Table '{}' has no position and will not be drawn", table.name),
                )
                .with_path(format!("tables.{}", table.name)),
            );
        }
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
