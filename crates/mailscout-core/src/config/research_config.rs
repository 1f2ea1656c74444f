use serde::{Deserialize, Serialize};

use super::defaults;

/// Research synthesizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Maximum number of search queries emitted.
    pub max_search_queries: usize,
    /// Emit the `site:linkedin.com` query.
    pub include_linkedin: bool,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            max_search_queries: defaults::DEFAULT_MAX_SEARCH_QUERIES,
            include_linkedin: true,
        }
    }
}
