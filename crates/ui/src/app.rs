//! Main Application Component for Sqlpad
//!
//! Root Dioxus component: toolbar on top, the schema viewer beside the
//! query editor and results, and a status bar at the bottom.

use dioxus::prelude::*;
use sqlpad_core::SqlpadError;

use crate::components::{QueryEditor, ResultsTable, SchemaViewer};
use crate::file_ops;
use crate::state::{APP_STATE, SAMPLE_QUERY, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // Start on the sample database
    use_effect(|| {
        if !APP_STATE.peek().has_database() {
            APP_STATE.write().load_sample();
        }
        tracing::info!("Sqlpad UI initialized");
    });

    rsx! {
        div {
            class: "app-container",

            Toolbar {}

            main {
                class: "workspace",
                SchemaPanel {}
                QueryPanel {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top toolbar with database actions
#[component]
fn Toolbar() -> Element {
    let state = APP_STATE.read();
    let label = state.database_label();
    let has_database = state.has_database();
    drop(state);
    let name = crate::NAME;

    rsx! {
        header {
            class: "toolbar",

            div {
                class: "app-title",
                span { "🗄️" }
                span { "{name}" }
            }

            ToolbarButton {
                icon: "📂",
                label: "Open Database",
                onclick: move |_| {
                    spawn(async move {
                        let Some(path) = file_ops::show_open_database_dialog().await else {
                            tracing::debug!("Open cancelled by user");
                            return;
                        };
                        APP_STATE.write().open_file(path);
                    });
                }
            }

            ToolbarButton {
                icon: "🧪",
                label: "Load Sample",
                onclick: move |_| APP_STATE.write().load_sample(),
            }

            div { class: "toolbar-separator" }

            ToolbarButton {
                icon: "🖼️",
                label: "Export SVG",
                disabled: !has_database,
                onclick: move |_| {
                    spawn(async move {
                        let state = APP_STATE.read();
                        let schema = state.schema.clone();
                        let selected = state.selection.selected().map(String::from);
                        let config = state.config.clone();
                        drop(state);

                        let result = file_ops::export_svg(&schema, selected, &config).await;
                        report_export(result);
                    });
                }
            }

            ToolbarButton {
                icon: "💾",
                label: "Export JSON",
                disabled: !has_database,
                onclick: move |_| {
                    spawn(async move {
                        let schema = APP_STATE.read().schema.clone();
                        let result = file_ops::export_schema_json(&schema).await;
                        report_export(result);
                    });
                }
            }

            div { class: "toolbar-spacer" }

            span { class: "database-label", "{label}" }
        }
    }
}

/// Put the outcome of an export into the status bar
fn report_export(result: Result<std::path::PathBuf, SqlpadError>) {
    match result {
        Ok(path) => APP_STATE.write().set_status(
            format!("Exported to {}", path.display()),
            StatusLevel::Success,
        ),
        Err(SqlpadError::Cancelled) => tracing::debug!("Export cancelled by user"),
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            APP_STATE
                .write()
                .set_status(format!("Export failed: {}", e), StatusLevel::Error);
        }
    }
}

/// Toolbar button component
#[component]
fn ToolbarButton(
    icon: &'static str,
    label: &'static str,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "toolbar-button",
            disabled: disabled,
            title: "{label}",
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            span { "{icon}" }
            span { "{label}" }
        }
    }
}

// ============================================================================
// Schema Panel
// ============================================================================

/// Left panel: the interactive schema diagram
#[component]
fn SchemaPanel() -> Element {
    let state = APP_STATE.read();
    let schema = state.schema.clone();
    let selected = state.selection.selected().map(String::from);
    let config = state.config.clone();
    drop(state);

    rsx! {
        section {
            class: "schema-panel",
            div {
                class: "panel-header",
                h2 { "Schema" }
                span { class: "panel-meta", "{schema.table_count()} table(s)" }
            }
            if schema.is_empty() {
                div { class: "schema-empty", "No tables in this database" }
            } else {
                SchemaViewer {
                    schema: schema,
                    selected_table: selected,
                    config: config,
                    on_table_select: move |name: String| {
                        APP_STATE.write().select_table(&name);
                    },
                }
            }
        }
    }
}

// ============================================================================
// Query Panel
// ============================================================================

/// Right panel: editor, error banner and results
#[component]
fn QueryPanel() -> Element {
    let state = APP_STATE.read();
    let query = state.query.clone();
    let result = state.result.clone();
    let error = state.error.clone();
    let has_database = state.has_database();
    drop(state);

    rsx! {
        div {
            class: "query-panel",

            QueryEditor {
                value: query,
                enabled: has_database,
                on_change: move |text: String| APP_STATE.write().query = text,
                on_execute: move |_| APP_STATE.write().run_query(),
                on_sample: move |_| APP_STATE.write().query = SAMPLE_QUERY.to_string(),
            }

            if let Some(message) = error {
                div {
                    class: "error-banner",
                    role: "alert",
                    "{message}"
                }
            }

            section {
                class: "results-panel",
                div {
                    class: "panel-header",
                    h2 { "Results" }
                }
                if let Some(result) = result {
                    ResultsTable { result: result }
                } else {
                    div { class: "results-empty", "Run a query to see results" }
                }
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.status.clone();
    let table_count = state.schema.table_count();
    let row_count = state.result.as_ref().map(|r| r.row_count());
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span { class: msg.level.css_class(), "{msg.text}" }
            } else {
                span { "Ready" }
            }

            div { class: "toolbar-spacer" }

            span { "Tables: {table_count}" }
            if let Some(rows) = row_count {
                span { "Rows: {rows}" }
            }
        }
    }
}
