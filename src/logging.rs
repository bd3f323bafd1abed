//! Logging setup
//!
//! Structured logs go to stderr so stdout stays free for `--json`.
//! `RUST_LOG` overrides the configured level when set.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Filter for `level`, unless `RUST_LOG` provides one
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
