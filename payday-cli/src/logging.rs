//! Tracing initialization for the CLI

use tracing_subscriber::EnvFilter;

/// Filter used when the configured one does not parse
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Logs go to stderr so they never mix with
/// menu output or JSON on stdout.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
