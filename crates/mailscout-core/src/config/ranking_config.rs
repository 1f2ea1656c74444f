use serde::{Deserialize, Serialize};

use super::defaults;

/// Deduplicator/ranker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Hard cap on guesses returned per response.
    pub max_guesses: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_guesses: defaults::DEFAULT_MAX_GUESSES,
        }
    }
}
