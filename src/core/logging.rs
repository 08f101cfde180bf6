//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`.
//! Calling it more than once is harmless: later calls leave the first
//! subscriber in place.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber with [`DEFAULT_FILTER`]
pub fn init_logging() -> bool {
    init_logging_with(DEFAULT_FILTER)
}

/// Install the global subscriber, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid. Returns `false` if a subscriber was
/// already installed.
pub fn init_logging_with(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
