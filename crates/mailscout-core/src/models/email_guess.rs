use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::pattern_label::PatternLabel;
use crate::constants::{HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD};

/// Discrete confidence tier derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Map a score onto its tier using the fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_CONFIDENCE_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Display copy used by the result card.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// One ranked address hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmailGuess {
    pub address: String,
    pub pattern_label: PatternLabel,
    /// Score in [0.0, 1.0].
    pub score: f64,
    pub confidence: Confidence,
    /// Reasons in the order they contributed. Never empty.
    pub rationale: Vec<String>,
}

impl EmailGuess {
    /// Score as a whole percentage, the way the result card shows it.
    pub fn score_percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.address.split('@').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_fixed_thresholds() {
        assert_eq!(Confidence::from_score(1.0), Confidence::High);
        assert_eq!(Confidence::from_score(0.7), Confidence::High);
        assert_eq!(Confidence::from_score(0.699), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.4), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.399), Confidence::Low);
        assert_eq!(Confidence::from_score(0.0), Confidence::Low);
    }

    #[test]
    fn display_label_is_capitalized_wire_name() {
        assert_eq!(Confidence::High.label(), "High");
        assert_eq!(Confidence::Medium.label(), "Medium");
        assert_eq!(Confidence::Low.label(), "Low");
        assert_eq!(Confidence::Low.as_str(), "low");
    }

    #[test]
    fn guess_serializes_camel_case() {
        let guess = EmailGuess {
            address: "jane.doe@acme.com".into(),
            pattern_label: PatternLabel::FirstDotLast,
            score: 0.72,
            confidence: Confidence::High,
            rationale: vec!["prior".into()],
        };
        let json = serde_json::to_value(&guess).unwrap();
        assert_eq!(json["patternLabel"], "first.last");
        assert_eq!(json["confidence"], "high");
        assert_eq!(guess.score_percent(), 72);
        assert_eq!(guess.local_part(), "jane.doe");
    }
}
