//! MailscoutRuntime: the configured engine, shared for the process lifetime.
//!
//! Stored behind `OnceLock`. Set once via `initialize()`, read via `get()`.

use std::sync::{Arc, OnceLock};

use mailscout_core::{MailscoutConfig, MailscoutResult};
use mailscout_engine::FinderEngine;

use crate::conversions::error_types;

static RUNTIME: OnceLock<Arc<MailscoutRuntime>> = OnceLock::new();

/// Immutable after construction; requests only read from it.
pub struct MailscoutRuntime {
    pub engine: FinderEngine,
}

impl MailscoutRuntime {
    fn new(config_toml: Option<&str>) -> MailscoutResult<Self> {
        let config = match config_toml {
            Some(toml_str) => MailscoutConfig::from_toml(toml_str)?,
            None => MailscoutConfig::default(),
        };
        mailscout_observability::init(&config.observability);
        Ok(Self {
            engine: FinderEngine::new(&config),
        })
    }
}

/// Initialize the global runtime.
///
/// Returns an error if already initialized or if the configuration is invalid.
pub fn initialize(config_toml: Option<&str>) -> napi::Result<()> {
    let runtime = MailscoutRuntime::new(config_toml).map_err(error_types::to_napi_error)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| napi::Error::from_reason("MailscoutRuntime already initialized"))
}

/// Get the global runtime. Errors if `initialize()` has not run.
pub fn get() -> napi::Result<Arc<MailscoutRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(error_types::runtime_not_initialized)
}
