use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PatternLabel;

/// Base prior per pattern label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternPriors {
    pub first_dot_last: f64,
    pub firstlast: f64,
    pub first_underscore_last: f64,
    pub f_dot_last: f64,
    pub flast: f64,
    pub first_dot_l: f64,
    pub firstl: f64,
    pub last_dot_first: f64,
    pub lastfirst: f64,
    pub first: f64,
    pub last: f64,
    pub last_underscore_first: f64,
    pub f: f64,
    pub l: f64,
    pub clue_derived: f64,
    pub clue_handle: f64,
}

impl PatternPriors {
    pub fn get(&self, label: PatternLabel) -> f64 {
        match label {
            PatternLabel::FirstDotLast => self.first_dot_last,
            PatternLabel::FirstLast => self.firstlast,
            PatternLabel::FirstUnderscoreLast => self.first_underscore_last,
            PatternLabel::InitialDotLast => self.f_dot_last,
            PatternLabel::InitialLast => self.flast,
            PatternLabel::FirstDotInitial => self.first_dot_l,
            PatternLabel::FirstInitial => self.firstl,
            PatternLabel::LastDotFirst => self.last_dot_first,
            PatternLabel::LastFirst => self.lastfirst,
            PatternLabel::First => self.first,
            PatternLabel::Last => self.last,
            PatternLabel::LastUnderscoreFirst => self.last_underscore_first,
            PatternLabel::FirstInitialOnly => self.f,
            PatternLabel::LastInitialOnly => self.l,
            PatternLabel::ClueDerived => self.clue_derived,
            PatternLabel::ClueHandle => self.clue_handle,
        }
    }

    /// `(field name, value)` pairs, for validation.
    pub(crate) fn entries(&self) -> [(&'static str, f64); 16] {
        [
            ("first_dot_last", self.first_dot_last),
            ("firstlast", self.firstlast),
            ("first_underscore_last", self.first_underscore_last),
            ("f_dot_last", self.f_dot_last),
            ("flast", self.flast),
            ("first_dot_l", self.first_dot_l),
            ("firstl", self.firstl),
            ("last_dot_first", self.last_dot_first),
            ("lastfirst", self.lastfirst),
            ("first", self.first),
            ("last", self.last),
            ("last_underscore_first", self.last_underscore_first),
            ("f", self.f),
            ("l", self.l),
            ("clue_derived", self.clue_derived),
            ("clue_handle", self.clue_handle),
        ]
    }
}

impl Default for PatternPriors {
    fn default() -> Self {
        Self {
            first_dot_last: defaults::PRIOR_FIRST_DOT_LAST,
            firstlast: defaults::PRIOR_FIRSTLAST,
            first_underscore_last: defaults::PRIOR_FIRST_UNDERSCORE_LAST,
            f_dot_last: defaults::PRIOR_F_DOT_LAST,
            flast: defaults::PRIOR_FLAST,
            first_dot_l: defaults::PRIOR_FIRST_DOT_L,
            firstl: defaults::PRIOR_FIRSTL,
            last_dot_first: defaults::PRIOR_LAST_DOT_FIRST,
            lastfirst: defaults::PRIOR_LASTFIRST,
            first: defaults::PRIOR_FIRST,
            last: defaults::PRIOR_LAST,
            last_underscore_first: defaults::PRIOR_LAST_UNDERSCORE_FIRST,
            f: defaults::PRIOR_F,
            l: defaults::PRIOR_L,
            clue_derived: defaults::PRIOR_CLUE_DERIVED,
            clue_handle: defaults::PRIOR_CLUE_HANDLE,
        }
    }
}

/// Weights for every prior, boost and penalty the scorer applies.
///
/// Penalties are stored as positive magnitudes and subtracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub priors: PatternPriors,
    pub company_domain_match: f64,
    pub separator_match: f64,
    pub initial_style_match: f64,
    pub named_pattern_match: f64,
    pub clue_token_match: f64,
    pub clue_on_target_domain: f64,
    /// A colleague address on the target domain shares this pattern's shape.
    pub colleague_format_match: f64,
    pub single_name_penalty: f64,
    pub short_name_initial_penalty: f64,
}

impl ScoringWeights {
    /// `(field name, value)` pairs, for validation.
    pub(crate) fn entries(&self) -> Vec<(String, f64)> {
        let mut out: Vec<(String, f64)> = self
            .priors
            .entries()
            .iter()
            .map(|(name, v)| (format!("scoring.priors.{name}"), *v))
            .collect();
        out.extend([
            ("scoring.company_domain_match".to_string(), self.company_domain_match),
            ("scoring.separator_match".to_string(), self.separator_match),
            ("scoring.initial_style_match".to_string(), self.initial_style_match),
            ("scoring.named_pattern_match".to_string(), self.named_pattern_match),
            ("scoring.clue_token_match".to_string(), self.clue_token_match),
            ("scoring.clue_on_target_domain".to_string(), self.clue_on_target_domain),
            ("scoring.colleague_format_match".to_string(), self.colleague_format_match),
            ("scoring.single_name_penalty".to_string(), self.single_name_penalty),
            (
                "scoring.short_name_initial_penalty".to_string(),
                self.short_name_initial_penalty,
            ),
        ]);
        out
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            priors: PatternPriors::default(),
            company_domain_match: defaults::BOOST_COMPANY_DOMAIN_MATCH,
            separator_match: defaults::BOOST_SEPARATOR_MATCH,
            initial_style_match: defaults::BOOST_INITIAL_STYLE_MATCH,
            named_pattern_match: defaults::BOOST_NAMED_PATTERN_MATCH,
            clue_token_match: defaults::BOOST_CLUE_TOKEN_MATCH,
            clue_on_target_domain: defaults::BOOST_CLUE_ON_TARGET_DOMAIN,
            colleague_format_match: defaults::BOOST_COLLEAGUE_FORMAT_MATCH,
            single_name_penalty: defaults::PENALTY_SINGLE_NAME,
            short_name_initial_penalty: defaults::PENALTY_SHORT_NAME_INITIAL,
        }
    }
}
