//! MailscoutError → napi::Error.

use mailscout_core::MailscoutError;

/// Map a core error onto a JS exception carrying its display text.
pub fn to_napi_error(err: MailscoutError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

pub fn runtime_not_initialized() -> napi::Error {
    to_napi_error(MailscoutError::NotInitialized)
}
