//! Configuration for mailscout.
//! TOML-based; every section falls back to compiled defaults.

pub mod defaults;
pub mod mailscout_config;
pub mod observability_config;
pub mod ranking_config;
pub mod research_config;
pub mod scoring_config;

pub use mailscout_config::MailscoutConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use research_config::ResearchConfig;
pub use scoring_config::{PatternPriors, ScoringWeights};
