//! Top-level mailscout configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, RankingConfig, ResearchConfig, ScoringWeights};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Confidence tier thresholds are fixed constants and intentionally absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MailscoutConfig {
    pub scoring: ScoringWeights,
    pub ranking: RankingConfig,
    pub research: ResearchConfig,
    pub observability: ObservabilityConfig,
}

impl MailscoutConfig {
    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.scoring.entries() {
            if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "must be a finite number between -1.0 and 1.0".to_string(),
                });
            }
        }
        if self.ranking.max_guesses == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.max_guesses".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.research.max_search_queries == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "research.max_search_queries".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !ObservabilityConfig::LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level '{}'", self.observability.log_level),
            });
        }
        Ok(())
    }
}
