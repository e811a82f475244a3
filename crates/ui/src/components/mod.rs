//! # UI Components
//!
//! Dioxus components for the Sqlpad desktop window.
//!
//! ## Component Hierarchy
//!
//! ```text
//! SchemaViewer
//! ├── ZoomControls
//! ├── Legend
//! └── canvas (transformed by the viewport)
//!     ├── RelationshipLine (multiple)
//!     └── TableCard (multiple)
//!
//! QueryEditor
//! ResultsTable
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod connector;
pub mod query_editor;
pub mod results_table;
pub mod schema_viewer;
pub mod table_card;

// ============================================================================
// Re-exports
// ============================================================================

pub use connector::RelationshipLine;
pub use query_editor::{QueryEditor, is_run_shortcut};
pub use results_table::ResultsTable;
pub use schema_viewer::{Legend, SchemaViewer, ZoomControls};
pub use table_card::TableCard;
