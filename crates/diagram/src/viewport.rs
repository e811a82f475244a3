//! # Viewport Controller
//!
//! Zoom and pan over the diagram canvas.
//!
//! The canvas transform is translate-then-scale: a canvas point `p` appears
//! on screen at `offset + zoom * p`. Panning therefore moves the canvas by
//! exactly the distance the pointer travelled, whatever the zoom level.
//!
//! ```text
//!            pointer down              pointer up / leave
//!   Idle ─────────────────▶ Panning ─────────────────────▶ Idle
//!                            │   ▲
//!                            └───┘ pointer move: offset = pointer - anchor
//! ```

use sqlpad_core::{DiagramConfig, Position};

// ============================================================================
// Viewport State
// ============================================================================

/// Current zoom factor and pan offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Scale factor, kept within the configured zoom range
    pub zoom: f32,
    /// Pan offset in screen pixels, unbounded
    pub offset: Position,
}

impl ViewportState {
    /// Zoom 1.0 at the origin
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            offset: Position::zero(),
        }
    }

    /// Zoom as a whole percentage, for the zoom label
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// The transform applied to the canvas
    pub fn transform(&self) -> ViewportTransform {
        ViewportTransform {
            translate: self.offset,
            scale: self.zoom,
        }
    }

    /// Map a screen point to canvas coordinates
    pub fn screen_to_canvas(&self, screen: Position) -> Position {
        Position::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    /// Map a canvas point to screen coordinates
    pub fn canvas_to_screen(&self, canvas: Position) -> Position {
        Position::new(
            canvas.x * self.zoom + self.offset.x,
            canvas.y * self.zoom + self.offset.y,
        )
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate-then-scale transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub translate: Position,
    pub scale: f32,
}

impl ViewportTransform {
    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }

    /// SVG `transform` attribute value
    pub fn to_svg(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

// ============================================================================
// Pan State
// ============================================================================

/// Whether a pan gesture is in progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    #[default]
    Idle,
    /// Panning; `anchor` is the pointer position minus the offset at pan start
    Panning { anchor: Position },
}

impl PanState {
    pub fn is_panning(&self) -> bool {
        matches!(self, PanState::Panning { .. })
    }
}

// ============================================================================
// Viewport Controller
// ============================================================================

/// Tolerance for snapping zoom onto the step grid or a bound
const ZOOM_SNAP: f32 = f32::EPSILON * 4.0;

/// Owns the viewport state and applies zoom and pan transitions
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    state: ViewportState,
    pan: PanState,
    min_zoom: f32,
    max_zoom: f32,
    zoom_step: f32,
}

impl ViewportController {
    /// Create a controller at zoom 1.0 using the configured zoom range
    pub fn new(config: &DiagramConfig) -> Self {
        Self {
            state: ViewportState::new(),
            pan: PanState::Idle,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    /// Current zoom and offset
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current pan state
    pub fn pan_state(&self) -> PanState {
        self.pan
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    // ========================================================================
    // Zoom
    // ========================================================================

    /// Zoom in by one step, stopping at the maximum
    pub fn zoom_in(&mut self) {
        self.step_zoom(1.0);
    }

    /// Zoom out by one step, stopping at the minimum
    pub fn zoom_out(&mut self) {
        self.step_zoom(-1.0);
    }

    /// Move `steps` zoom steps away from the current zoom
    ///
    /// Results that land within float error of `1.0 + n * zoom_step` snap
    /// onto that value, so a run of steps never drifts off the step grid.
    fn step_zoom(&mut self, steps: f32) {
        let target = self.state.zoom + steps * self.zoom_step;
        let n = ((target - 1.0) / self.zoom_step).round();
        let on_grid = 1.0 + n * self.zoom_step;
        let zoom = if (on_grid - target).abs() <= ZOOM_SNAP {
            on_grid
        } else {
            target
        };
        self.set_zoom(zoom);
    }

    /// Set the zoom factor, clamped to the configured range
    ///
    /// Values within float error of a bound snap to the bound.
    pub fn set_zoom(&mut self, zoom: f32) {
        let zoom = if (zoom - self.min_zoom).abs() <= ZOOM_SNAP {
            self.min_zoom
        } else if (zoom - self.max_zoom).abs() <= ZOOM_SNAP {
            self.max_zoom
        } else {
            zoom
        };
        self.state.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.state.zoom < self.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.state.zoom > self.min_zoom
    }

    /// Back to zoom 1.0 at the origin
    pub fn reset(&mut self) {
        self.state = ViewportState::new();
    }

    // ========================================================================
    // Pan
    // ========================================================================

    /// Start a pan gesture at the given pointer position
    pub fn begin_pan(&mut self, pointer: Position) {
        self.pan = PanState::Panning {
            anchor: pointer - self.state.offset,
        };
    }

    /// Follow the pointer while panning
    ///
    /// Returns whether the offset changed. Has no effect when idle.
    pub fn continue_pan(&mut self, pointer: Position) -> bool {
        match self.pan {
            PanState::Panning { anchor } => {
                let offset = pointer - anchor;
                let changed = offset != self.state.offset;
                self.state.offset = offset;
                changed
            }
            PanState::Idle => false,
        }
    }

    /// Finish the pan gesture; safe to call when idle
    pub fn end_pan(&mut self) {
        self.pan = PanState::Idle;
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&DiagramConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let viewport = ViewportController::default();
        assert_eq!(viewport.state(), ViewportState::new());
        assert_eq!(viewport.pan_state(), PanState::Idle);
        assert_eq!(viewport.state().zoom_percent(), 100);
    }

    #[test]
    fn test_zoom_in_stops_at_max() {
        let mut viewport = ViewportController::default();
        for _ in 0..10 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.state().zoom, 2.0);
        assert!(!viewport.can_zoom_in());
        viewport.zoom_in();
        assert_eq!(viewport.state().zoom, 2.0);
    }

    #[test]
    fn test_zoom_out_stops_at_min() {
        let mut viewport = ViewportController::default();
        for _ in 0..10 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.state().zoom, 0.5);
        assert!(!viewport.can_zoom_out());
        assert_eq!(viewport.state().zoom_percent(), 50);
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut viewport = ViewportController::default();
        viewport.set_zoom(7.0);
        assert_eq!(viewport.state().zoom, 2.0);
        viewport.set_zoom(0.01);
        assert_eq!(viewport.state().zoom, 0.5);
        viewport.set_zoom(1.234);
        assert_eq!(viewport.state().zoom_percent(), 123);
    }

    #[test]
    fn test_zoom_step_is_not_rounded() {
        let config = DiagramConfig {
            zoom_step: 0.125,
            ..DiagramConfig::default()
        };
        let mut viewport = ViewportController::new(&config);

        viewport.zoom_in();
        assert_eq!(viewport.state().zoom, 1.125);

        for _ in 0..7 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.state().zoom, 2.0);

        viewport.reset();
        viewport.zoom_out();
        viewport.zoom_out();
        viewport.zoom_out();
        assert_eq!(viewport.state().zoom, 0.625);
    }

    #[test]
    fn test_decimal_steps_stay_on_grid() {
        let mut viewport = ViewportController::default();
        for _ in 0..3 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.state().zoom_percent(), 130);
        for _ in 0..5 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.state().zoom_percent(), 80);
        for _ in 0..3 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.state().zoom, 0.5);
    }

    #[test]
    fn test_reset() {
        let mut viewport = ViewportController::default();
        viewport.zoom_in();
        viewport.begin_pan(Position::new(10.0, 10.0));
        viewport.continue_pan(Position::new(90.0, 40.0));
        viewport.end_pan();

        viewport.reset();
        assert_eq!(viewport.state(), ViewportState::new());
    }

    #[test]
    fn test_pan_reentry_does_not_jump() {
        let mut viewport = ViewportController::default();

        viewport.begin_pan(Position::new(100.0, 100.0));
        assert!(viewport.is_panning());
        assert!(viewport.continue_pan(Position::new(150.0, 120.0)));
        assert_eq!(viewport.state().offset, Position::new(50.0, 20.0));
        viewport.end_pan();

        viewport.begin_pan(Position::new(150.0, 120.0));
        assert!(!viewport.continue_pan(Position::new(150.0, 120.0)));
        assert_eq!(viewport.state().offset, Position::new(50.0, 20.0));
    }

    #[test]
    fn test_move_without_pan_is_ignored() {
        let mut viewport = ViewportController::default();
        assert!(!viewport.continue_pan(Position::new(300.0, 300.0)));
        assert_eq!(viewport.state().offset, Position::zero());

        viewport.end_pan();
        viewport.end_pan();
        assert_eq!(viewport.pan_state(), PanState::Idle);
    }

    #[test]
    fn test_pan_is_independent_of_zoom() {
        let mut viewport = ViewportController::default();
        viewport.set_zoom(2.0);
        viewport.begin_pan(Position::new(0.0, 0.0));
        viewport.continue_pan(Position::new(30.0, -40.0));
        assert_eq!(viewport.state().offset, Position::new(30.0, -40.0));
    }

    #[test]
    fn test_coordinate_conversion() {
        let state = ViewportState {
            zoom: 2.0,
            offset: Position::new(10.0, 20.0),
        };
        let canvas = Position::new(5.0, 5.0);
        let screen = state.canvas_to_screen(canvas);
        assert_eq!(screen, Position::new(20.0, 30.0));
        assert_eq!(state.screen_to_canvas(screen), canvas);
    }

    #[test]
    fn test_transform_strings() {
        let state = ViewportState {
            zoom: 1.5,
            offset: Position::new(50.0, -20.0),
        };
        assert_eq!(state.transform().to_css(), "translate(50px, -20px) scale(1.5)");
        assert_eq!(state.transform().to_svg(), "translate(50 -20) scale(1.5)");
    }
}
