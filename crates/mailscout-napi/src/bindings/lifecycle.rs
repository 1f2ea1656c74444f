//! Lifecycle bindings: initialize, version.

use napi_derive::napi;

use crate::runtime;

/// Initialize the mailscout runtime.
///
/// Must be called before `mailscoutFind`.
/// `config_toml`: optional TOML configuration string; defaults otherwise.
#[napi]
pub fn mailscout_initialize(config_toml: Option<String>) -> napi::Result<()> {
    let _span = mailscout_observability::initialize_span!(config_toml.is_some()).entered();
    runtime::initialize(config_toml.as_deref())?;
    tracing::info!(version = mailscout_core::constants::VERSION, "mailscout runtime initialized");
    Ok(())
}

/// Crate version string.
#[napi]
pub fn mailscout_version() -> String {
    mailscout_core::constants::VERSION.to_string()
}
