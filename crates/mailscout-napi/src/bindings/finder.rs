//! Finder binding: request body in, `{ status, body }` out.

use napi_derive::napi;
use serde_json::json;

use mailscout_engine::boundary;

use crate::runtime;

/// Run one finder request.
///
/// Accepts the parsed JSON request body and returns `{ status, body }` where
/// `body` is `{ ok: true, result }` or `{ ok: false, error }`. Payload
/// problems come back as status 400, never as a thrown error.
#[napi]
pub fn mailscout_find(body: serde_json::Value) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let _span = mailscout_observability::finder_span!(body.as_object().map_or(0, |o| o.len())).entered();
    let response = boundary::handle_request(&rt.engine, &body);
    let envelope = serde_json::to_value(&response.body)
        .map_err(|e| napi::Error::from_reason(format!("Response serialization failed: {e}")))?;
    Ok(json!({
        "status": response.status,
        "body": envelope,
    }))
}
