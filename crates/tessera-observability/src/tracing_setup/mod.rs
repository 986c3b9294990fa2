//! Tracing setup: structured JSON logging and event definitions.

pub mod events;

use tessera_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "TESSERA_LOG";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global subscriber with structured JSON output.
///
/// Respects `TESSERA_LOG`; defaults to `info`. Panics if a global subscriber
/// is already installed, use [`try_init_tracing`] where that can happen.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Like [`init_tracing`] but returns an error instead of panicking when a
/// subscriber is already set. `default_level` applies when `TESSERA_LOG` is
/// unset.
pub fn try_init_tracing(
    default_level: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// [`try_init_tracing`] driven by `[observability]`: `log_level` is the
/// default level and `json` picks the output format.
pub fn try_init_from_config(
    config: &ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    try_init_tracing(&config.log_level, config.json)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .init();
}
