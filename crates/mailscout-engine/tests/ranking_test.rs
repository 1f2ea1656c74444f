use std::collections::HashSet;

use mailscout_core::config::ScoringWeights;
use mailscout_core::models::{FinderInput, PatternLabel};
use mailscout_engine::normalize;
use mailscout_engine::patterns::generate;
use mailscout_engine::ranking::RankingPipeline;

fn rank(input: &FinderInput) -> Vec<mailscout_core::EmailGuess> {
    let n = normalize(input);
    RankingPipeline::default().rank(&generate(&n), &n)
}

#[test]
fn duplicate_addresses_merge_into_the_best_candidate() {
    let guesses = rank(
        &FinderInput::new("Jane", "Doe", "acme.com")
            .with_clues("goes by jdoe, format is first initial + last name"),
    );
    let jdoe: Vec<_> = guesses.iter().filter(|g| g.address == "jdoe@acme.com").collect();
    assert_eq!(jdoe.len(), 1);
    assert_eq!(jdoe[0].pattern_label, PatternLabel::InitialLast);
    assert_eq!(
        jdoe[0].rationale,
        vec![
            "flast (first initial + last name) is a very common corporate convention",
            "Clues describe a first-initial + last-name format",
            "Local part matches clue token \"jdoe\"",
            "Handle appears in the clues",
        ]
    );
}

#[test]
fn off_domain_clue_email_is_rehomed_and_merged() {
    let guesses = rank(&FinderInput::new("Jane", "Doe", "acme.com").with_clues("used to be jane@oldco.com"));
    let jane = guesses.iter().find(|g| g.address == "jane@acme.com").unwrap();
    assert_eq!(jane.pattern_label, PatternLabel::ClueDerived);
    assert_eq!(jane.score, 0.85);
    assert_eq!(
        jane.rationale,
        vec![
            "Single-name address (first) is a less common convention",
            "Local part matches clue token \"jane\"",
            "Address appears in the clues",
        ]
    );
    assert!(guesses.iter().all(|g| !g.address.ends_with("@oldco.com")));
}

#[test]
fn addresses_are_unique_case_insensitively() {
    let guesses = rank(
        &FinderInput::new("Jane", "Doe", "acme.com").with_clues("JDoe@ACME.com jdoe@acme.com j.doe jane_doe"),
    );
    let mut seen = HashSet::new();
    for g in &guesses {
        assert!(seen.insert(g.address.to_lowercase()), "duplicate {}", g.address);
    }
}

#[test]
fn ordering_is_score_then_priority_then_address() {
    let guesses = rank(&FinderInput::new("Jane", "Doe", "acme.com").with_company("Acme"));
    for pair in guesses.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score >= b.score);
        if a.score == b.score {
            let (pa, pb) = (a.pattern_label.priority(), b.pattern_label.priority());
            assert!(pa < pb || (pa == pb && a.address < b.address));
        }
    }
}

#[test]
fn ties_break_on_pattern_priority() {
    let mut weights = ScoringWeights::default();
    weights.priors.flast = weights.priors.first_dot_last;
    let n = normalize(&FinderInput::new("Jane", "Doe", "acme.com"));
    let guesses = RankingPipeline::new(weights, 25).rank(&generate(&n), &n);
    assert_eq!(guesses[0].address, "jane.doe@acme.com");
    assert_eq!(guesses[1].address, "jdoe@acme.com");
    assert_eq!(guesses[0].score, guesses[1].score);
}

#[test]
fn cap_limits_the_guess_count() {
    let n = normalize(&FinderInput::new("Jane", "Doe", "acme.com"));
    let guesses = RankingPipeline::new(ScoringWeights::default(), 3).rank(&generate(&n), &n);
    assert_eq!(guesses.len(), 3);
    assert_eq!(guesses[0].pattern_label, PatternLabel::FirstDotLast);
}

#[test]
fn no_domain_means_no_guesses() {
    assert!(rank(&FinderInput::new("Jane", "Doe", "")).is_empty());
    assert!(rank(&FinderInput::new("Jane", "Doe", "acme")).is_empty());
}
