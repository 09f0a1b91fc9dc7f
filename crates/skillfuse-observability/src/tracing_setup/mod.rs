//! Tracing setup: structured JSON logging.

pub mod events;

use skillfuse_core::config::defaults::{DEFAULT_LOG_ENV_VAR, DEFAULT_LOG_LEVEL};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `SKILLFUSE_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_LEVEL);
}

/// Like [`init_tracing`], with `default_level` used when `SKILLFUSE_LOG` is unset.
pub fn init_tracing_with_default(default_level: &str) {
    let filter = EnvFilter::try_from_env(DEFAULT_LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}
