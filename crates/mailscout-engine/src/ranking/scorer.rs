//! Per-candidate scorer: prior → boosts → penalties.
//!
//! Every contribution with a non-zero effect adds one rationale line, in
//! evaluation order. The final score is clamped to [0, 1] and rounded.

use mailscout_core::config::ScoringWeights;
use mailscout_core::constants::{SCORE_PRECISION, SHORT_NAME_LEN};
use mailscout_core::models::{Confidence, NormalizedInput, PatternLabel};

use super::reasons;
use crate::normalize::clues::format_label;
use crate::normalize::company::company_matches_domain;
use crate::patterns::RawCandidate;

/// A candidate after scoring. `address` is `None` when no domain is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub local_part: String,
    pub address: Option<String>,
    pub label: PatternLabel,
    /// Final score in [0.0, 1.0], rounded to 3 decimals.
    pub score: f64,
    pub confidence: Confidence,
    pub rationale: Vec<String>,
}

/// Accumulates weighted contributions and their reasons.
struct Tally {
    total: f64,
    rationale: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            total: 0.0,
            rationale: Vec::new(),
        }
    }

    fn add(&mut self, weight: f64, reason: impl FnOnce() -> String) {
        if weight != 0.0 {
            self.total += weight;
            self.rationale.push(reason());
        }
    }
}

/// Clamp to [0, 1] and round to the fixed precision.
pub fn finalize_score(raw: f64) -> f64 {
    (raw.clamp(0.0, 1.0) * SCORE_PRECISION).round() / SCORE_PRECISION
}

/// Score one candidate against the normalized input.
pub fn score(candidate: &RawCandidate, n: &NormalizedInput, weights: &ScoringWeights) -> ScoredCandidate {
    let label = candidate.label;
    let mut tally = Tally::new();

    // Prior.
    tally.add(weights.priors.get(label), || reasons::prior(label));

    // Boosts.
    if company_matches_domain(&n.company_tokens, &n.domain) {
        tally.add(weights.company_domain_match, || {
            reasons::company_domain_match(&n.company, &n.domain)
        });
    }
    if let Some(style) = n.clues.separator.filter(|s| label.separator() == Some(*s)) {
        tally.add(weights.separator_match, || reasons::separator_match(style));
    }
    if let Some(style) = n.clues.initial_style.filter(|s| label.initial_style() == Some(*s)) {
        tally.add(weights.initial_style_match, || reasons::initial_style_match(style));
    }
    if n.clues.named_patterns.contains(&label) {
        tally.add(weights.named_pattern_match, || reasons::named_pattern_match(label));
    }
    if let Some(colleague) = colleague_with_shape(label, n) {
        tally.add(weights.colleague_format_match, || {
            reasons::colleague_format_match(colleague, label)
        });
    }
    if let Some(token) = n.clues.tokens().find(|t| *t == candidate.local_part) {
        tally.add(weights.clue_token_match, || reasons::clue_token_match(token));
    }
    if label == PatternLabel::ClueDerived
        && n.has_domain()
        && candidate.clue_domain.as_deref() == Some(n.domain.as_str())
    {
        tally.add(weights.clue_on_target_domain, || reasons::clue_on_target_domain(&n.domain));
    }

    // Penalties.
    if !label.is_clue_seed() && !n.has_full_name() {
        tally.add(-weights.single_name_penalty, reasons::single_name);
    }
    if let Some(key) = initial_source_key(label, n).filter(|k| k.chars().count() < SHORT_NAME_LEN) {
        tally.add(-weights.short_name_initial_penalty, || reasons::short_name_initial(key));
    }

    if tally.rationale.is_empty() {
        tally.rationale.push(reasons::no_signal(label));
    }

    let score = finalize_score(tally.total);
    ScoredCandidate {
        local_part: candidate.local_part.clone(),
        address: candidate.address(&n.domain),
        label,
        score,
        confidence: Confidence::from_score(score),
        rationale: tally.rationale,
    }
}

/// First colleague address on the target domain whose local-part has this
/// label's shape.
fn colleague_with_shape(label: PatternLabel, n: &NormalizedInput) -> Option<&str> {
    if !n.has_domain() || label.is_clue_seed() {
        return None;
    }
    n.clues.colleague_emails.iter().map(String::as_str).find(|email| {
        email
            .split_once('@')
            .is_some_and(|(local, domain)| domain == n.domain && format_label(local) == Some(label))
    })
}

/// For initial-based labels, the name key whose initial is taken.
fn initial_source_key(label: PatternLabel, n: &NormalizedInput) -> Option<&str> {
    if !label.uses_initial() {
        return None;
    }
    match label {
        PatternLabel::InitialDotLast | PatternLabel::InitialLast | PatternLabel::FirstInitialOnly => {
            Some(n.first_key.as_str())
        }
        PatternLabel::FirstDotInitial | PatternLabel::FirstInitial | PatternLabel::LastInitialOnly => {
            Some(n.last_key.as_str())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_clamps_and_rounds() {
        assert_eq!(finalize_score(1.4), 1.0);
        assert_eq!(finalize_score(-0.2), 0.0);
        assert_eq!(finalize_score(0.62 + 0.10), 0.72);
        assert_eq!(finalize_score(0.30 + 0.10), 0.4);
    }

    #[test]
    fn zero_weights_leave_no_trace() {
        let mut weights = ScoringWeights::default();
        weights.priors.first = 0.0;
        weights.single_name_penalty = 0.0;
        let n = NormalizedInput {
            first_name: "Sam".into(),
            first_key: "sam".into(),
            domain: "startup.io".into(),
            ..Default::default()
        };
        let c = RawCandidate::new("sam", PatternLabel::First);
        let scored = score(&c, &n, &weights);
        assert_eq!(scored.score, 0.0);
        assert_eq!(scored.rationale, vec!["Generated by the first rule".to_string()]);
    }
}
