//! Command-line front end for the identifier classifier.
//!
//! The binary in `main.rs` only collects arguments and picks an exit code.
//! Argument parsing lives in [`config`] and every command writes to a
//! caller-supplied sink, so both are testable without spawning a process.

pub mod commands;
pub mod config;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Filtering follows `RUST_LOG`, e.g. `RUST_LOG=lexid_escape=debug`. Nothing
/// is installed when the variable is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
