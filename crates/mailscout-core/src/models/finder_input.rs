use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw identity fields as submitted by the caller.
///
/// Every field is optional on the wire; a missing field deserializes to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct FinderInput {
    pub first_name: String,
    pub last_name: String,
    pub domain: String,
    pub company: String,
    pub clues: String,
}

impl FinderInput {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            domain: domain.into(),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_clues(mut self, clues: impl Into<String>) -> Self {
        self.clues = clues.into();
        self
    }
}
