//! # Results Table
//!
//! Shows the last query result as an HTML table. NULL cells are rendered
//! dimmed so they can be told apart from the text `NULL`.

use dioxus::prelude::*;
use sqlpad_schema::{CellValue, QueryResult};

/// Properties for ResultsTable
#[derive(Props, Clone, PartialEq)]
pub struct ResultsTableProps {
    pub result: QueryResult,
}

/// Query result grid
#[component]
pub fn ResultsTable(props: ResultsTableProps) -> Element {
    let result = &props.result;

    if result.is_empty() {
        return rsx! {
            div { class: "results-empty", "No results" }
        };
    }

    rsx! {
        div {
            class: "results-wrapper",
            table {
                class: "results-table",
                thead {
                    tr {
                        for column in result.columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    for row in result.rows.iter() {
                        tr {
                            for cell in row.iter() {
                                td { class: cell_class(cell), "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a result cell
pub fn cell_class(cell: &CellValue) -> &'static str {
    match cell {
        CellValue::Null => "cell-null",
        CellValue::Integer(_) | CellValue::Real(_) => "cell-number",
        CellValue::Text(_) => "cell-text",
        CellValue::Blob(_) => "cell-blob",
    }
}
