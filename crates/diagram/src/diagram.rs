//! # Schema Diagram
//!
//! Ties the controllers together behind a single event entry point. A host
//! mounts a schema, feeds it discrete input events and asks for a fresh
//! [`Scene`] whenever an event reports a visual change.

use crate::scene::{Scene, render_scene};
use crate::selection::{SelectionController, SelectionState};
use crate::viewport::{ViewportController, ViewportState};
use sqlpad_core::{DiagramConfig, NoopSelectHandler, Position, TableSelectHandler};
use sqlpad_schema::Schema;

/// Keys that activate a focused table card
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Input events understood by the diagram
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramEvent {
    /// Pointer pressed over the canvas, in screen coordinates
    PointerDown(Position),
    /// Pointer moved over the canvas
    PointerMove(Position),
    /// Pointer released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
    ZoomIn,
    ZoomOut,
    ResetView,
    /// A table card was clicked
    TableClick(String),
    /// A key was pressed while a table card had focus
    TableKey { table: String, key: String },
}

/// An interactive diagram over one schema
#[derive(Debug)]
pub struct SchemaDiagram<H = NoopSelectHandler> {
    schema: Schema,
    config: DiagramConfig,
    viewport: ViewportController,
    selection: SelectionController<H>,
}

impl SchemaDiagram<NoopSelectHandler> {
    /// Mount a schema with no host callback
    pub fn new(schema: Schema) -> Self {
        Self::with_handler(schema, DiagramConfig::default(), None, NoopSelectHandler)
    }
}

impl<H: TableSelectHandler> SchemaDiagram<H> {
    /// Mount a schema with a configuration, an initial selection and a host callback
    pub fn with_handler(
        schema: Schema,
        config: DiagramConfig,
        selected: Option<String>,
        handler: H,
    ) -> Self {
        tracing::debug!(
            tables = schema.table_count(),
            relationships = schema.relationships.len(),
            "Mounted schema diagram"
        );
        Self {
            viewport: ViewportController::new(&config),
            selection: SelectionController::new(selected, handler),
            schema,
            config,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Replace the schema, keeping viewport and selection
    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = schema;
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Jump to a zoom level, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f32) {
        self.viewport.set_zoom(zoom);
    }

    /// Apply one input event
    ///
    /// Returns whether the scene needs to be redrawn.
    pub fn handle(&mut self, event: DiagramEvent) -> bool {
        match event {
            DiagramEvent::PointerDown(pointer) => {
                self.viewport.begin_pan(pointer);
                false
            }
            DiagramEvent::PointerMove(pointer) => self.viewport.continue_pan(pointer),
            DiagramEvent::PointerUp | DiagramEvent::PointerLeave => {
                self.viewport.end_pan();
                false
            }
            DiagramEvent::ZoomIn => {
                let before = self.viewport.state();
                self.viewport.zoom_in();
                before != self.viewport.state()
            }
            DiagramEvent::ZoomOut => {
                let before = self.viewport.state();
                self.viewport.zoom_out();
                before != self.viewport.state()
            }
            DiagramEvent::ResetView => {
                let before = self.viewport.state();
                self.viewport.reset();
                before != self.viewport.state()
            }
            DiagramEvent::TableClick(table) => {
                self.selection.select(&table);
                true
            }
            DiagramEvent::TableKey { table, key } => {
                if is_activation_key(&key) {
                    self.selection.select(&table);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Build the scene for the current state
    pub fn scene(&self) -> Scene {
        render_scene(
            &self.schema,
            &self.viewport.state(),
            self.selection.state(),
            &self.config,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
