// src/telemetry.rs
//! Optional subscriber setup for hosts that don't install their own.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact fmt subscriber filtered by `RUST_LOG`
/// (default `shmap=info`). Does nothing if one is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shmap=info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
