//! # Viewport Hook
//!
//! Holds a [`ViewportController`] in a component-local signal so pan and
//! zoom live exactly as long as the schema viewer is mounted.

use dioxus::prelude::*;
use sqlpad_core::{DiagramConfig, Position};
use sqlpad_diagram::{ViewportController, ViewportState};

/// Copyable handle to the viewer's viewport controller
#[derive(Clone, Copy, PartialEq)]
pub struct ViewportHandle {
    controller: Signal<ViewportController>,
}

impl ViewportHandle {
    /// Current zoom and offset
    pub fn state(&self) -> ViewportState {
        self.controller.read().state()
    }

    /// Whether a pan gesture is in progress
    pub fn is_panning(&self) -> bool {
        self.controller.read().is_panning()
    }

    // ========================================================================
    // Zoom
    // ========================================================================

    pub fn zoom_in(&self) {
        let mut controller = self.controller;
        controller.write().zoom_in();
    }

    pub fn zoom_out(&self) {
        let mut controller = self.controller;
        controller.write().zoom_out();
    }

    pub fn reset(&self) {
        let mut controller = self.controller;
        controller.write().reset();
    }

    // ========================================================================
    // Pan
    // ========================================================================

    /// Start panning at the pointer (screen coordinates)
    pub fn begin_pan(&self, pointer: Position) {
        let mut controller = self.controller;
        controller.write().begin_pan(pointer);
    }

    /// Follow the pointer; idle moves do not trigger a re-render
    pub fn continue_pan(&self, pointer: Position) {
        let mut controller = self.controller;
        if controller.peek().is_panning() {
            controller.write().continue_pan(pointer);
        }
    }

    /// Stop panning; safe to call when idle
    pub fn end_pan(&self) {
        let mut controller = self.controller;
        if controller.peek().is_panning() {
            controller.write().end_pan();
        }
    }
}

/// Create the viewport for a viewer using the configured zoom range
pub fn use_viewport(config: &DiagramConfig) -> ViewportHandle {
    let config = config.clone();
    let controller = use_signal(move || ViewportController::new(&config));
    ViewportHandle { controller }
}

/// Extract the client position from a mouse event (converts f64 to f32)
pub fn position_from_mouse_event(e: &MouseEvent) -> Position {
    let coords = e.client_coordinates();
    Position::new(coords.x as f32, coords.y as f32)
}
