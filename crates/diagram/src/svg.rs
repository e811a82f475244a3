//! SVG export of a rendered scene
//!
//! Produces a standalone SVG document with the same geometry the desktop
//! viewer draws: cards with a header and badge/name/type rows, connectors as
//! horizontal lines rotated about their start point, and the current
//! viewport transform on the root group.

use crate::scene::{Connector, Scene, TableBox};
use sqlpad_core::DiagramConfig;
use std::fmt::{self, Write};

const STYLE: &str = r#"<style>
  .canvas { fill: #f8fafc; }
  .table-bg { fill: #ffffff; stroke: #cbd5e1; stroke-width: 1; }
  .table-bg.selected { stroke: #2563eb; stroke-width: 2.5; }
  .table-header { fill: #e2e8f0; }
  .table-name { font-family: sans-serif; font-size: 14px; font-weight: bold; fill: #0f172a; }
  .column-name { font-family: monospace; font-size: 12px; fill: #1e293b; }
  .column-type { font-family: monospace; font-size: 11px; fill: #64748b; }
  .badge { font-family: sans-serif; font-size: 10px; font-weight: bold; }
  .badge-pk { fill: #b45309; }
  .badge-fk { fill: #1d4ed8; }
  .connector { stroke: #64748b; stroke-width: 2; }
</style>"#;

/// Render a scene as an SVG document
pub fn render_svg(scene: &Scene, config: &DiagramConfig) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_svg(&mut svg, scene, config)?;
    Ok(svg)
}

/// Write a scene as an SVG document into any `fmt::Write`
pub fn write_svg(out: &mut impl Write, scene: &Scene, config: &DiagramConfig) -> fmt::Result {
    let width = scene.canvas.width;
    let height = scene.canvas.height;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    )?;
    writeln!(out, "{}", STYLE)?;
    writeln!(
        out,
        r#"<rect class="canvas" x="0" y="0" width="{}" height="{}" />"#,
        width, height
    )?;
    writeln!(out, r#"<g transform="{}">"#, scene.transform.to_svg())?;

    // Connectors first so cards draw over their ends
    for connector in &scene.connectors {
        write_connector(out, connector)?;
    }
    for table in &scene.tables {
        write_table(out, table, config)?;
    }

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_connector(out: &mut impl Write, connector: &Connector) -> fmt::Result {
    let x = connector.start.x;
    let y = connector.start.y;
    writeln!(
        out,
        r#"<line class="connector" data-key="{}" x1="{}" y1="{}" x2="{}" y2="{}" transform="rotate({} {} {})" />"#,
        escape_xml(&connector.key),
        x,
        y,
        x + connector.length,
        y,
        connector.angle,
        x,
        y
    )
}

fn write_table(out: &mut impl Write, table: &TableBox, config: &DiagramConfig) -> fmt::Result {
    let x = table.bounds.left();
    let y = table.bounds.top();
    let w = table.bounds.size.width;
    let class = if table.selected {
        "table-bg selected"
    } else {
        "table-bg"
    };

    writeln!(
        out,
        r#"<g class="table" aria-label="{}">"#,
        escape_xml(&table.aria_label)
    )?;
    writeln!(
        out,
        r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="6" />"#,
        class, x, y, w, table.bounds.size.height
    )?;
    writeln!(
        out,
        r#"<rect class="table-header" x="{}" y="{}" width="{}" height="{}" rx="6" />"#,
        x, y, w, config.header_height
    )?;
    writeln!(
        out,
        r#"<text class="table-name" x="{}" y="{}" dominant-baseline="middle">{} {}</text>"#,
        x + 10.0,
        y + config.header_height / 2.0,
        table.icon,
        escape_xml(&table.name)
    )?;

    for row in &table.rows {
        let row_y = y + row.center_y;
        let mut text_x = x + 8.0;
        for badge in &row.badges {
            writeln!(
                out,
                r#"<text class="badge {}" x="{}" y="{}" dominant-baseline="middle">{}</text>"#,
                badge.css_class(),
                text_x,
                row_y,
                badge.label()
            )?;
            text_x += 20.0;
        }
        writeln!(
            out,
            r#"<text class="column-name" x="{}" y="{}" dominant-baseline="middle">{}</text>"#,
            x + 50.0,
            row_y,
            escape_xml(&row.name)
        )?;
        writeln!(
            out,
            r#"<text class="column-type" x="{}" y="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            x + w - 8.0,
            row_y,
            escape_xml(&row.type_label)
        )?;
    }

    writeln!(out, "</g>")
}

/// Escape text for use in XML content and attributes
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
