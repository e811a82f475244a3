//! # Table Card
//!
//! An activatable card for one table: a header with the table icon and
//! name, then one row per column with its key badges, name and type.
//! Clicking the card, or pressing Enter or Space while it has focus,
//! selects the table.

use dioxus::prelude::*;
use sqlpad_diagram::{ColumnRow, TableBox, is_activation_key};

/// Properties for TableCard
#[derive(Props, Clone, PartialEq)]
pub struct TableCardProps {
    /// Rendered table box
    pub table: TableBox,

    /// Called with the table name when activated
    pub on_select: EventHandler<String>,
}

/// A table drawn on the schema canvas
#[component]
pub fn TableCard(props: TableCardProps) -> Element {
    let table = &props.table;
    let style = card_style(table);
    let class = card_class(table.selected);
    let name = table.name.clone();
    let key_name = table.name.clone();

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            r#type: "button",
            aria_label: "{table.aria_label}",
            aria_pressed: "{table.selected}",

            // Panning is driven by the container; a press on a card is not a pan
            onmousedown: move |e| e.stop_propagation(),

            onclick: move |e| {
                e.stop_propagation();
                props.on_select.call(name.clone());
            },

            onkeydown: move |e| {
                if is_activation_key(&e.key().to_string()) {
                    e.prevent_default();
                    props.on_select.call(key_name.clone());
                }
            },

            div {
                class: "table-header",
                span { class: "table-icon", "{table.icon}" }
                span { class: "table-name", "{table.name}" }
            }

            div {
                class: "table-columns",
                for row in table.rows.iter() {
                    ColumnLine { key: "{row.name}", row: row.clone() }
                }
            }
        }
    }
}

/// One column line inside a card
#[component]
fn ColumnLine(row: ColumnRow) -> Element {
    rsx! {
        div {
            class: "column-row",
            span {
                class: "column-badges",
                for badge in row.badges.iter() {
                    span {
                        class: "badge {badge.css_class()}",
                        title: "{badge.description()}",
                        "{badge.label()}"
                    }
                }
            }
            span { class: "column-name", "{row.name}" }
            span { class: "column-type", "{row.type_label}" }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// CSS class list for a card
pub fn card_class(selected: bool) -> &'static str {
    if selected {
        "table-box selected"
    } else {
        "table-box"
    }
}

/// Absolute placement of a card on the canvas
pub fn card_style(table: &TableBox) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        table.bounds.left(),
        table.bounds.top(),
        table.bounds.size.width,
        table.bounds.size.height
    )
}
