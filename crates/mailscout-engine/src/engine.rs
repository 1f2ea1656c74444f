//! FinderEngine: the single entry point from raw input to response.

use mailscout_core::config::ResearchConfig;
use mailscout_core::models::{FinderInput, FinderResponse};
use mailscout_core::MailscoutConfig;
use tracing::{debug, info};

use crate::normalize::normalize;
use crate::patterns;
use crate::ranking::RankingPipeline;
use crate::research;

/// Configured, immutable engine. Holds no per-call state, so one instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct FinderEngine {
    ranking: RankingPipeline,
    research: ResearchConfig,
}

impl FinderEngine {
    pub fn new(config: &MailscoutConfig) -> Self {
        Self {
            ranking: RankingPipeline::new(config.scoring.clone(), config.ranking.max_guesses),
            research: config.research.clone(),
        }
    }

    /// Run the full pipeline. Total: every input yields a response.
    pub fn run(&self, input: &FinderInput) -> FinderResponse {
        let n = normalize(input);
        if n.is_blank() {
            debug!("blank input, returning empty response");
            return FinderResponse::EMPTY;
        }

        let candidates = patterns::generate(&n);
        let guesses = self.ranking.rank(&candidates, &n);
        let research = research::synthesize(&n, &guesses, &self.research);

        info!(
            domain_valid = n.has_domain(),
            candidates = candidates.len(),
            guesses = guesses.len(),
            top_confidence = guesses.first().map(|g| g.confidence.label()),
            "finder run complete"
        );

        FinderResponse {
            normalized_domain: n.domain,
            guesses,
            search_queries: research.search_queries,
            action_plan: research.action_plan,
        }
    }
}

impl Default for FinderEngine {
    fn default() -> Self {
        Self::new(&MailscoutConfig::default())
    }
}

/// Run with the default configuration.
pub fn run(input: &FinderInput) -> FinderResponse {
    FinderEngine::default().run(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_shareable() {
        assert_send_sync::<FinderEngine>();
    }

    #[test]
    fn blank_input_is_the_empty_response() {
        assert_eq!(run(&FinderInput::default()), FinderResponse::EMPTY);
        let spaces = FinderInput::new("  ", "\t", " ");
        assert_eq!(run(&spaces), FinderResponse::EMPTY);
    }
}
