//! Tracing initialization: plain or JSON formatted output.

pub mod spans;

use std::sync::Once;

use mailscout_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the configured filter,
/// e.g. `MAILSCOUT_LOG=mailscout_engine=debug`.
pub const LOG_ENV_VAR: &str = "MAILSCOUT_LOG";

static INIT: Once = Once::new();

/// Filter from `MAILSCOUT_LOG` when set and valid, else the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()))
}

/// Install the global subscriber.
///
/// Idempotent: later calls are no-ops, and a subscriber installed by the host
/// beforehand is left in place.
pub fn init(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let registry = tracing_subscriber::registry().with(filter);
        // try_init: the host may already own the global dispatcher.
        let _ = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .try_init()
        };
    });
}
