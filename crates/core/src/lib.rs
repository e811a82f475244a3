//! # Sqlpad Core
//!
//! Core types, configuration, traits, and error handling for Sqlpad.
//!
//! This crate provides the foundational building blocks shared by the
//! schema model, the diagram engine and the user interfaces:
//!
//! - **Types**: Geometric primitives (Position, Size, Rect)
//! - **Config**: `DiagramConfig`, the single source of layout constants
//! - **Traits**: Common behaviors like `Validatable` and `TableSelectHandler`
//! - **Errors**: Unified error handling with `SqlpadError` and `SqlpadResult`
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::DiagramConfig;
pub use error::{ResultExt, SqlpadError, SqlpadResult};
pub use traits::{NoopSelectHandler, TableSelectHandler, Validatable};
pub use types::{Position, Rect, Size};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
