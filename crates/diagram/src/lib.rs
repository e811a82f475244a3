//! # Sqlpad Diagram
//!
//! The interactive schema diagram, independent of any UI framework.
//!
//! - **Layout**: card heights, bounding boxes, canvas size, connector endpoints
//! - **Viewport**: zoom in/out/reset and pointer panning as a small state machine
//! - **Selection**: the selected table and the host activation callback
//! - **Scene**: everything to draw for one frame
//! - **SVG**: a standalone export of a scene
//!
//! [`SchemaDiagram`] wires these together behind one event entry point.
//!
//! ```rust,ignore
//! use sqlpad_diagram::{DiagramEvent, SchemaDiagram};
//!
//! let mut diagram = SchemaDiagram::new(schema);
//! diagram.handle(DiagramEvent::ZoomIn);
//! let scene = diagram.scene();
//! ```

pub mod diagram;
pub mod layout;
pub mod scene;
pub mod selection;
pub mod svg;
pub mod viewport;

pub use diagram::{DiagramEvent, SchemaDiagram, is_activation_key};
pub use layout::{
    ConnectorGeometry, Layout, canvas_size, column_center_offset, connector_geometry,
    table_bounds, table_height,
};
pub use scene::{
    ColumnRow, Connector, KeyBadge, LegendEntry, Scene, TABLE_ICON, TableBox, format_type,
    legend, render_scene, table_aria_label,
};
pub use selection::{SelectionController, SelectionState};
pub use svg::{escape_xml, render_svg, write_svg};
pub use viewport::{PanState, ViewportController, ViewportState, ViewportTransform};

// Grid placement lives with the schema model so loaders can apply it
pub use sqlpad_schema::grid_position;
