//! # Selection Controller
//!
//! Tracks which table is selected and tells the host when a table is
//! activated. The selected name is not checked against the schema; a name
//! that matches no table simply highlights nothing.

use sqlpad_core::{NoopSelectHandler, TableSelectHandler};

/// The currently selected table, by name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    /// Create a selection with an optional initial table
    pub fn new(initial: Option<String>) -> Self {
        Self { selected: initial }
    }

    /// Name of the selected table
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `table` is the selected table
    pub fn is_selected(&self, table: &str) -> bool {
        self.selected.as_deref() == Some(table)
    }

    /// Replace the selection
    pub fn set(&mut self, table: impl Into<String>) {
        self.selected = Some(table.into());
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Selection state plus the host callback
pub struct SelectionController<H = NoopSelectHandler> {
    state: SelectionState,
    handler: H,
}

impl<H: TableSelectHandler> SelectionController<H> {
    /// Create a controller that reports activations to `handler`
    pub fn new(initial: Option<String>, handler: H) -> Self {
        Self {
            state: SelectionState::new(initial),
            handler,
        }
    }

    /// Current selection
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Select a table and notify the host
    pub fn select(&mut self, table: &str) {
        tracing::debug!(table, "Table selected");
        self.state.set(table);
        self.handler.on_table_select(table);
    }

    /// Clear the selection without notifying the host
    pub fn clear(&mut self) {
        self.state.clear();
    }
}

impl<H> std::fmt::Debug for SelectionController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
