//! # Query Editor
//!
//! SQL text area with an execute button and a sample query shortcut.
//! Ctrl+Enter (Cmd+Enter on macOS) runs the query.

use dioxus::prelude::*;

/// Whether a key press in the editor should run the query
pub fn is_run_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key == "Enter" && (ctrl || meta)
}

/// Properties for QueryEditor
#[derive(Props, Clone, PartialEq)]
pub struct QueryEditorProps {
    /// Current editor contents
    pub value: String,

    /// Whether there is a database to run against
    #[props(default = true)]
    pub enabled: bool,

    pub on_change: EventHandler<String>,
    pub on_execute: EventHandler<()>,
    pub on_sample: EventHandler<()>,
}

/// SQL editor panel
#[component]
pub fn QueryEditor(props: QueryEditorProps) -> Element {
    let enabled = props.enabled;

    rsx! {
        section {
            class: "query-editor",

            div {
                class: "panel-header",
                h2 { "SQL Query" }
                button {
                    class: "secondary-button",
                    onclick: move |_| props.on_sample.call(()),
                    "Sample Query"
                }
            }

            textarea {
                class: "query-input",
                spellcheck: false,
                placeholder: "Enter SQL here...",
                aria_label: "SQL query",
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    let modifiers = e.modifiers();
                    if is_run_shortcut(&e.key().to_string(), modifiers.ctrl(), modifiers.meta()) {
                        e.prevent_default();
                        if enabled {
                            props.on_execute.call(());
                        }
                    }
                },
            }

            div {
                class: "editor-actions",
                button {
                    class: "primary-button",
                    disabled: !enabled,
                    onclick: move |_| props.on_execute.call(()),
                    "Execute (Ctrl+Enter)"
                }
            }
        }
    }
}
