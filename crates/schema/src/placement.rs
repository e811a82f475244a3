//! Default grid placement
//!
//! Schemas derived from a live engine carry no positions. They are laid out
//! on a fixed-column grid purely from discovery order, so the same database
//! always produces the same diagram.

use sqlpad_core::{DiagramConfig, Position};

/// Grid cell for the table at `index` in discovery order
///
/// Column is `index % grid_columns`, row is `index / grid_columns`; the cell
/// origin is the column/row multiplied by the configured spacing.
pub fn grid_position(index: usize, config: &DiagramConfig) -> Position {
    let columns = config.grid_columns.max(1);
    let col = index % columns;
    let row = index / columns;
    Position::new(
        col as f32 * config.grid_spacing_x,
        row as f32 * config.grid_spacing_y,
    )
}
