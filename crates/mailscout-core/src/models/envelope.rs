use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::finder_response::FinderResponse;

/// JSON body returned across the request boundary:
/// `{ ok: true, result }` on success, `{ ok: false, error }` on rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinderEnvelope {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub result: Option<FinderResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl FinderEnvelope {
    pub fn success(result: FinderResponse) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error_field() {
        let json = serde_json::to_value(FinderEnvelope::success(FinderResponse::EMPTY)).unwrap();
        assert_eq!(json["ok"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["result"]["normalizedDomain"], "");
    }

    #[test]
    fn failure_omits_result_field() {
        let json = serde_json::to_value(FinderEnvelope::failure("Invalid payload")).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "Invalid payload");
        assert!(json.get("result").is_none());
    }
}
