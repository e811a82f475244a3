//! Sqlpad
//!
//! SQL practice desktop app with an interactive schema diagram.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    sqlpad_ui::launch();
}
