/// Caller-side request validation errors, raised before the engine runs.
///
/// The `Display` text is what ends up in the `{ ok: false, error }` envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Invalid payload")]
    InvalidPayload,

    #[error("{message}")]
    InvalidJson { message: String },
}

impl RequestError {
    /// HTTP status for this failure. Always 400-class.
    pub fn status(&self) -> u16 {
        400
    }
}
