//! Research synthesizer: search queries and an outreach action plan derived
//! from the normalized input and the final guesses.

pub mod action_plan;
pub mod queries;
pub mod templates;

use mailscout_core::config::ResearchConfig;
use mailscout_core::models::{EmailGuess, NormalizedInput};
use tracing::debug;

/// Auxiliary research content for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Research {
    pub search_queries: Vec<String>,
    pub action_plan: Vec<String>,
}

/// Build queries and the action plan. Never fails; thin input yields thin output.
pub fn synthesize(n: &NormalizedInput, guesses: &[EmailGuess], cfg: &ResearchConfig) -> Research {
    let search_queries = queries::build_queries(n, guesses, cfg);
    let action_plan = action_plan::build_action_plan(n, guesses, !search_queries.is_empty());
    debug!(
        queries = search_queries.len(),
        actions = action_plan.len(),
        "research synthesized"
    );
    Research {
        search_queries,
        action_plan,
    }
}
