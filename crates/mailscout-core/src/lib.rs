//! # mailscout-core
//!
//! Foundation crate for mailscout.
//! Defines the request/response model, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::MailscoutConfig;
pub use errors::{MailscoutError, MailscoutResult};
pub use models::{Confidence, EmailGuess, FinderInput, FinderResponse, PatternLabel};
