//! Core traits for Sqlpad
//!
//! This module defines the seams between the diagram engine and whatever
//! hosts it: consistency checks on loaded data, and the callback used to
//! tell the host that a table was activated.

use crate::error::SqlpadResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use sqlpad_core::{Validatable, SqlpadResult, SqlpadError};
///
/// struct Column {
///     name: String,
/// }
///
/// impl Validatable for Column {
///     fn validate(&self) -> SqlpadResult<()> {
///         if self.name.is_empty() {
///             return Err(SqlpadError::validation("Column name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `SqlpadError` describing the problem.
    fn validate(&self) -> SqlpadResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// TableSelectHandler Trait
// ============================================================================

/// Host callback invoked when a table is activated in the diagram.
///
/// The diagram only reports the activation; what happens next (typically
/// loading `SELECT * FROM <table>` into the query editor) belongs to the host.
/// Any `FnMut(&str)` closure is a handler.
pub trait TableSelectHandler {
    /// Called with the name of the activated table
    fn on_table_select(&mut self, table_name: &str);
}

impl<F> TableSelectHandler for F
where
    F: FnMut(&str),
{
    fn on_table_select(&mut self, table_name: &str) {
        self(table_name)
    }
}

/// A handler that ignores every activation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSelectHandler;

impl TableSelectHandler for NoopSelectHandler {
    fn on_table_select(&mut self, _table_name: &str) {}
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlpadError;

    struct Named(&'static str);

    impl Validatable for Named {
        fn validate(&self) -> SqlpadResult<()> {
            if self.0.is_empty() {
                Err(SqlpadError::validation("empty"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_validatable_defaults() {
        assert!(Named("users").is_valid());
        assert!(Named("users").validation_errors().is_empty());
        assert!(!Named("").is_valid());
        assert_eq!(Named("").validation_errors(), vec!["Validation error: empty"]);
    }

    #[test]
    fn test_closure_is_select_handler() {
        let mut seen = Vec::new();
        {
            let mut handler = |name: &str| seen.push(name.to_string());
            handler.on_table_select("users");
            handler.on_table_select("orders");
        }
        assert_eq!(seen, vec!["users", "orders"]);
    }

    #[test]
    fn test_noop_handler() {
        let mut handler = NoopSelectHandler;
        handler.on_table_select("anything");
    }
}
