//! # Relationship Line
//!
//! A relationship drawn as a thin horizontal div of the connector's length,
//! anchored at its start point and rotated into place.

use dioxus::prelude::*;
use sqlpad_diagram::Connector;

/// Properties for RelationshipLine
#[derive(Props, Clone, PartialEq)]
pub struct RelationshipLineProps {
    pub connector: Connector,
}

/// One relationship connector
#[component]
pub fn RelationshipLine(props: RelationshipLineProps) -> Element {
    let style = line_style(&props.connector);

    rsx! {
        div {
            class: "relationship-line",
            "data-key": "{props.connector.key}",
            style: "{style}",
        }
    }
}

/// Inline style placing the line on the canvas
pub fn line_style(connector: &Connector) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; transform: {}; transform-origin: 0 0;",
        connector.start.x,
        connector.start.y,
        connector.length,
        connector.css_transform()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlpad_core::Position;

    #[test]
    fn test_line_style() {
        let connector = Connector {
            key: "orders.user_id->users.id".into(),
            start: Position::new(220.0, 82.0),
            end: Position::new(320.0, 82.0),
            length: 100.0,
            angle: 0.0,
        };
        assert_eq!(
            line_style(&connector),
            "left: 220px; top: 82px; width: 100px; transform: rotate(0deg); transform-origin: 0 0;"
        );
    }
}
