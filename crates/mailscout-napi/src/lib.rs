//! # mailscout-napi
//!
//! NAPI bindings for the Next.js caller.
//!
//! - `runtime.rs`: global `MailscoutRuntime` singleton holding the configured engine
//! - `bindings/`: exported functions (`mailscoutInitialize`, `mailscoutFind`, `mailscoutVersion`)
//! - `conversions/`: error mapping into `napi::Error`

pub mod bindings;
pub mod conversions;
pub mod runtime;
