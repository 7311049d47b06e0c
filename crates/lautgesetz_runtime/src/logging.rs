//! Log output for the binary.
//!
//! Library crates only emit `tracing` events; installing a subscriber is
//! left to the process entry point.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "LAUTGESETZ_LOG";

/// Directive used when neither the environment nor the caller sets one.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs a stderr `fmt` subscriber.
///
/// Directives come from `LAUTGESETZ_LOG`, then `RUST_LOG`, then `fallback`.
/// Calling this twice is harmless; the second call does nothing.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
