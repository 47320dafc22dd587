//! Structured logging setup using `tracing-subscriber`.
//!
//! One-shot CLI mode only: human-readable output to stderr, controlled by
//! the `RUST_LOG` environment variable with a configurable fallback filter.

use tracing_subscriber::EnvFilter;

/// Initialise logging for CLI runs.
///
/// Emits human-readable output to stderr. Controlled by `RUST_LOG`; falls
/// back to `default_filter` (normally from `[log] filter` in the config
/// file) when the variable is unset or invalid.
pub fn init_cli(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
