//! # Schema Viewer
//!
//! The interactive schema diagram: table cards and relationship lines on a
//! pannable, zoomable canvas, with zoom controls and a key legend.
//!
//! ## Interaction
//!
//! - **Pan**: press and drag anywhere on the background
//! - **Zoom**: `+` / `-` buttons, `↺` resets zoom and pan
//! - **Select**: click a table card, or focus it and press Enter or Space
//!
//! Selection is owned by the host: the viewer highlights `selected_table`
//! and reports activations through `on_table_select`. Activations pass
//! through a [`SelectionController`] held for the life of the viewer.

use dioxus::prelude::*;
use sqlpad_core::{DiagramConfig, TableSelectHandler};
use sqlpad_diagram::{LegendEntry, SelectionController, SelectionState, render_scene};
use sqlpad_schema::Schema;

use crate::components::connector::RelationshipLine;
use crate::components::table_card::TableCard;
use crate::hooks::{position_from_mouse_event, use_viewport};

/// Properties for the SchemaViewer component
#[derive(Props, Clone, PartialEq)]
pub struct SchemaViewerProps {
    /// Schema to draw
    pub schema: Schema,

    /// Name of the highlighted table
    #[props(default)]
    pub selected_table: Option<String>,

    /// Layout constants
    #[props(default)]
    pub config: DiagramConfig,

    /// Called with the table name when a card is activated
    #[props(default)]
    pub on_table_select: EventHandler<String>,
}

/// Interactive schema diagram
#[component]
pub fn SchemaViewer(props: SchemaViewerProps) -> Element {
    let viewport = use_viewport(&props.config);
    let on_table_select = props.on_table_select;
    let initial = props.selected_table.clone();
    let mut controller =
        use_signal(move || table_selection(initial, move |name| on_table_select.call(name)));

    let selection = SelectionState::new(props.selected_table.clone());
    let scene = render_scene(&props.schema, &viewport.state(), &selection, &props.config);

    let cursor_class = if viewport.is_panning() {
        "panning"
    } else {
        ""
    };
    let canvas_style = format!(
        "width: {}px; height: {}px; transform: {}; transform-origin: 0 0;",
        scene.canvas.width,
        scene.canvas.height,
        scene.transform.to_css()
    );

    rsx! {
        div {
            class: "schema-container {cursor_class}",
            role: "application",
            aria_label: "Database schema viewer",

            onmousedown: move |e| viewport.begin_pan(position_from_mouse_event(&e)),
            onmousemove: move |e| viewport.continue_pan(position_from_mouse_event(&e)),
            onmouseup: move |_| viewport.end_pan(),
            onmouseleave: move |_| viewport.end_pan(),

            ZoomControls {
                zoom_percent: scene.zoom_percent,
                on_zoom_in: move |_| viewport.zoom_in(),
                on_zoom_out: move |_| viewport.zoom_out(),
                on_reset: move |_| viewport.reset(),
            }

            div {
                class: "schema-canvas",
                style: "{canvas_style}",

                for connector in scene.connectors.iter() {
                    RelationshipLine {
                        key: "{connector.key}",
                        connector: connector.clone(),
                    }
                }

                for table in scene.tables.iter() {
                    TableCard {
                        key: "{table.name}",
                        table: table.clone(),
                        on_select: move |name: String| controller.write().select(&name),
                    }
                }
            }

            Legend { entries: scene.legend.clone() }
        }
    }
}

/// Selection controller that hands each activated name to `on_select`
pub fn table_selection(
    initial: Option<String>,
    mut on_select: impl FnMut(String),
) -> SelectionController<impl TableSelectHandler> {
    SelectionController::new(initial, move |name: &str| on_select(name.to_string()))
}

// ============================================================================
// Zoom Controls Component
// ============================================================================

/// Properties for ZoomControls component
#[derive(Props, Clone, PartialEq)]
pub struct ZoomControlsProps {
    /// Current zoom as a whole percentage
    pub zoom_percent: u32,
    pub on_zoom_in: EventHandler<()>,
    pub on_zoom_out: EventHandler<()>,
    /// Reset zoom and pan
    pub on_reset: EventHandler<()>,
}

/// Zoom buttons overlay
#[component]
pub fn ZoomControls(props: ZoomControlsProps) -> Element {
    rsx! {
        div {
            class: "zoom-controls",
            // Keep button presses from starting a pan
            onmousedown: move |e| e.stop_propagation(),

            button {
                class: "zoom-button",
                title: "Zoom in",
                aria_label: "Zoom in",
                onclick: move |_| props.on_zoom_in.call(()),
                "+"
            }
            button {
                class: "zoom-button",
                title: "Zoom out",
                aria_label: "Zoom out",
                onclick: move |_| props.on_zoom_out.call(()),
                "-"
            }
            button {
                class: "zoom-button",
                title: "Reset view",
                aria_label: "Reset view",
                onclick: move |_| props.on_reset.call(()),
                "↺"
            }
            span { class: "zoom-level", "{props.zoom_percent}%" }
        }
    }
}

// ============================================================================
// Legend Component
// ============================================================================

/// Key badge legend
#[component]
pub fn Legend(entries: Vec<LegendEntry>) -> Element {
    rsx! {
        div {
            class: "schema-legend",
            onmousedown: move |e| e.stop_propagation(),
            for entry in entries.iter() {
                div {
                    class: "legend-item",
                    span { class: "badge {entry.badge.css_class()}", "{entry.badge.label()}" }
                    span { "{entry.label}" }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
