//! Tracing setup: structured logging, span definitions, and event helpers.

pub mod events;
pub mod spans;

use skepesis_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "SKEPESIS_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `SKEPESIS_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for the CLI or tests).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str, json: bool) -> bool {
    let filter = EnvFilter::new(filter);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

/// Initialize from config. `SKEPESIS_LOG` still wins over `log_level`.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| config.log_level.clone());
    init_tracing_with_filter(&filter, config.json_logs)
}
