use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::email_guess::EmailGuess;

/// Everything the engine returns for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FinderResponse {
    /// Validated lowercase domain, or `""` when none could be recovered.
    pub normalized_domain: String,
    /// Sorted by score descending, then pattern priority, then address.
    pub guesses: Vec<EmailGuess>,
    pub search_queries: Vec<String>,
    pub action_plan: Vec<String>,
}

impl FinderResponse {
    /// The "no results" value shared by the engine and the UI reset state.
    pub const EMPTY: FinderResponse = FinderResponse {
        normalized_domain: String::new(),
        guesses: Vec::new(),
        search_queries: Vec::new(),
        action_plan: Vec::new(),
    };

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty() && self.search_queries.is_empty() && self.action_plan.is_empty()
    }

    /// Highest-ranked guess, if any.
    pub fn top(&self) -> Option<&EmailGuess> {
        self.guesses.first()
    }
}

impl Default for FinderResponse {
    fn default() -> Self {
        Self::EMPTY
    }
}
