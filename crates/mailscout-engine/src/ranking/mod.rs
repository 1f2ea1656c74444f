//! RankingPipeline: score → deduplicate → sort → cap.

pub mod deduplication;
pub mod reasons;
pub mod scorer;

use mailscout_core::config::ScoringWeights;
use mailscout_core::models::{EmailGuess, NormalizedInput};

use crate::patterns::RawCandidate;

/// Full ranking pipeline: per-candidate scoring → address dedup → ordering.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    weights: ScoringWeights,
    max_guesses: usize,
}

impl RankingPipeline {
    pub fn new(weights: ScoringWeights, max_guesses: usize) -> Self {
        Self {
            weights,
            max_guesses,
        }
    }

    /// Score every raw candidate and rank the realizable ones.
    pub fn rank(&self, candidates: &[RawCandidate], n: &NormalizedInput) -> Vec<EmailGuess> {
        // Stage 1: score in generation order.
        let scored: Vec<scorer::ScoredCandidate> = candidates
            .iter()
            .map(|c| scorer::score(c, n, &self.weights))
            .collect();

        // Stage 2: merge by address, order, cap.
        deduplication::rank(scored, self.max_guesses)
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(
            ScoringWeights::default(),
            mailscout_core::config::defaults::DEFAULT_MAX_GUESSES,
        )
    }
}
