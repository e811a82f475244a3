//! # UI Hooks
//!
//! Custom Dioxus hooks for the Sqlpad UI.

pub mod use_viewport;

pub use use_viewport::{ViewportHandle, position_from_mouse_event, use_viewport};
