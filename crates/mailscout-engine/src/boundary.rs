//! Request boundary: loose JSON payload → `FinderInput` → status + envelope.
//!
//! The only place the engine path can reject anything. The engine itself
//! is total.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use mailscout_core::errors::RequestError;
use mailscout_core::models::{FinderEnvelope, FinderInput};

use crate::engine::FinderEngine;

pub const STATUS_OK: u16 = 200;

/// HTTP-shaped result of handling one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryResponse {
    pub status: u16,
    pub body: FinderEnvelope,
}

impl BoundaryResponse {
    fn rejected(err: &RequestError) -> Self {
        warn!(error = %err, "request rejected");
        Self {
            status: err.status(),
            body: FinderEnvelope::failure(err.to_string()),
        }
    }
}

/// Extract a `FinderInput` from a JSON value. Non-objects are rejected;
/// missing or null fields become `""`.
pub fn parse_request(payload: &Value) -> Result<FinderInput, RequestError> {
    let Value::Object(map) = payload else {
        return Err(RequestError::InvalidPayload);
    };
    let field = |key: &str| map.get(key).map(coerce_field).unwrap_or_default();
    Ok(FinderInput {
        first_name: field("firstName"),
        last_name: field("lastName"),
        domain: field("domain"),
        company: field("company"),
        clues: field("clues"),
    })
}

/// Strings verbatim, scalars stringified, everything else empty.
fn coerce_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Validate the payload and run the engine.
pub fn handle_request(engine: &FinderEngine, payload: &Value) -> BoundaryResponse {
    match parse_request(payload) {
        Ok(input) => BoundaryResponse {
            status: STATUS_OK,
            body: FinderEnvelope::success(engine.run(&input)),
        },
        Err(err) => BoundaryResponse::rejected(&err),
    }
}

/// Same as [`handle_request`] for a raw request body.
pub fn handle_request_str(engine: &FinderEngine, body: &str) -> BoundaryResponse {
    match serde_json::from_str::<Value>(body) {
        Ok(payload) => handle_request(engine, &payload),
        Err(e) => BoundaryResponse::rejected(&RequestError::InvalidJson {
            message: e.to_string(),
        }),
    }
}
