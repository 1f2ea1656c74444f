//! # mailscout-observability
//!
//! Subscriber setup and span definitions. The engine only emits `tracing`
//! events; hosts decide where they go by calling [`tracing_setup::init`].

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init, LOG_ENV_VAR};
