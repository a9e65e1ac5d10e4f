//! Logging setup for dictfix.
//!
//! Diagnostics go through `tracing` to stderr so that stdout carries only
//! the user-facing lines (skip diagnostics and the run summary). The filter
//! defaults to `warn` and can be overridden with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=dictfix=debug dictfix fix
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
