//! Observability helpers.
//!
//! The library itself only emits `tracing` events at its storage and
//! mutation seams; installing a subscriber is the embedding application's
//! decision. This module provides the standard stderr setup for callers
//! that don't bring their own.

use tracing_subscriber::EnvFilter;

/// Install a global stderr `tracing` subscriber.
///
/// Honors `RUST_LOG` when set, otherwise falls back to `default_level`
/// (typically [`Config::log_level`](crate::Config)). Calling this when a
/// subscriber is already installed is a no-op, so tests can call it freely.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
