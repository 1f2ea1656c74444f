//! Error handling for mailscout.
//! One error enum per concern, `thiserror` only. The engine itself is total;
//! errors only exist at the config and request edges.

pub mod config_error;
pub mod request_error;

pub use config_error::ConfigError;
pub use request_error::RequestError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum MailscoutError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("request error: {0}")]
    Request(#[from] RequestError),

    #[error("runtime not initialized")]
    NotInitialized,
}

/// Convenience result alias.
pub type MailscoutResult<T> = Result<T, MailscoutError>;
