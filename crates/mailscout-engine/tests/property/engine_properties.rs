use std::collections::HashSet;

use mailscout_core::models::{Confidence, FinderInput};
use mailscout_engine::normalize::domain::normalize_domain;
use mailscout_engine::normalize::fold::name_key;
use mailscout_engine::{normalize, run};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z]{1,12}",
        "[A-Za-zÀ-ÿ' -]{1,16}",
        ".{0,16}",
    ]
}

fn domain() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{2,10}\\.(com|io|org|co\\.uk)",
        "(https?://)?(www\\.)?[A-Za-z0-9-]{1,10}\\.[a-z]{2,4}(/[a-z]{0,6})?",
        ".{0,24}",
    ]
}

fn clues() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,8}\\.[a-z]{1,8}@[a-z]{2,8}\\.com",
        "(goes by|handle|format is) [a-z._]{2,12}( no dots| underscore| first initial)?",
        ".{0,60}",
    ]
}

fn input() -> impl Strategy<Value = FinderInput> {
    (name(), name(), domain(), name(), clues()).prop_map(|(first, last, domain, company, clues)| {
        FinderInput::new(first, last, domain)
            .with_company(company)
            .with_clues(clues)
    })
}

proptest! {
    #[test]
    fn run_is_total_and_deterministic(input in input()) {
        let a = run(&input);
        let b = run(&input);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn guesses_uphold_invariants(input in input()) {
        let response = run(&input);
        let mut seen = HashSet::new();
        for g in &response.guesses {
            prop_assert!(seen.insert(g.address.to_lowercase()));
            prop_assert!((0.0..=1.0).contains(&g.score));
            prop_assert_eq!(g.confidence, Confidence::from_score(g.score));
            prop_assert!(!g.rationale.is_empty());
        }
        for pair in response.guesses.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn no_domain_means_no_guesses(first in name(), last in name(), clues in clues()) {
        let response = run(&FinderInput::new(first, last, "").with_clues(clues));
        prop_assert!(response.guesses.is_empty());
        prop_assert_eq!(response.normalized_domain, "");
    }

    #[test]
    fn domain_normalization_is_idempotent(raw in domain()) {
        let once = normalize_domain(&raw);
        prop_assert_eq!(normalize_domain(&once), once.clone());
    }

    #[test]
    fn name_keys_are_ascii_and_idempotent(raw in name()) {
        let key = name_key(&raw);
        prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        prop_assert_eq!(name_key(&key), key.clone());
    }

    #[test]
    fn normalize_never_panics(input in input()) {
        let n = normalize(&input);
        prop_assert!(n.domain.is_empty() || n.domain.contains('.'));
    }
}
