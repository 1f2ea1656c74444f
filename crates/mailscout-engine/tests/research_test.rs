use mailscout_core::config::ResearchConfig;
use mailscout_core::models::{Confidence, EmailGuess, FinderInput, PatternLabel};
use mailscout_engine::normalize;
use mailscout_engine::research::{synthesize, templates};

fn guess(address: &str, score: f64) -> EmailGuess {
    EmailGuess {
        address: address.to_string(),
        pattern_label: PatternLabel::FirstDotLast,
        score,
        confidence: Confidence::from_score(score),
        rationale: vec!["x".to_string()],
    }
}

#[test]
fn queries_need_company_or_domain() {
    let n = normalize(&FinderInput::new("Jane", "Doe", ""));
    let research = synthesize(&n, &[], &ResearchConfig::default());
    assert!(research.search_queries.is_empty());
    assert!(!research.action_plan.is_empty());
}

#[test]
fn company_only_queries_use_the_company() {
    let n = normalize(&FinderInput::new("Jane", "Doe", "").with_company("Acme Robotics"));
    let research = synthesize(&n, &[], &ResearchConfig::default());
    assert_eq!(
        research.search_queries,
        vec![
            "\"Jane Doe\" \"Acme Robotics\" email",
            "site:linkedin.com \"Jane Doe\" Acme Robotics",
            "\"Acme Robotics\" email format",
        ]
    );
}

#[test]
fn linkedin_toggle_and_cap() {
    let n = normalize(&FinderInput::new("Jane", "Doe", "acme.com").with_company("Acme"));
    let cfg = ResearchConfig {
        max_search_queries: 2,
        include_linkedin: false,
    };
    let research = synthesize(&n, &[], &cfg);
    assert_eq!(
        research.search_queries,
        vec!["\"Jane Doe\" \"Acme\" email", "\"Jane Doe\" \"@acme.com\""]
    );
}

#[test]
fn queries_are_unique() {
    let n = normalize(&FinderInput::new("", "", "acme.com").with_company("acme.com"));
    let research = synthesize(&n, &[], &ResearchConfig::default());
    let mut sorted = research.search_queries.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), research.search_queries.len());
}

#[test]
fn high_confidence_top_guess_gets_direct_outreach() {
    let n = normalize(&FinderInput::new("Jane", "Doe", "acme.com").with_company("Acme"));
    let guesses = [guess("jane.doe@acme.com", 0.9), guess("jdoe@acme.com", 0.6)];
    let plan = synthesize(&n, &guesses, &ResearchConfig::default()).action_plan;
    assert_eq!(plan[0], templates::send_first("jane.doe@acme.com"));
    assert_eq!(plan[1], templates::fallback("jdoe@acme.com"));
    assert!(!plan.iter().any(|p| p == templates::ALL_UNVERIFIED));
}

#[test]
fn medium_confidence_top_guess_gets_verification() {
    let n = normalize(&FinderInput::new("Jane", "Doe", "acme.com"));
    let plan = synthesize(&n, &[guess("jane.doe@acme.com", 0.5)], &ResearchConfig::default()).action_plan;
    assert_eq!(plan[0], templates::verify_top("jane.doe@acme.com"));
}

#[test]
fn all_low_guesses_get_triangulation_steps() {
    let n = normalize(&FinderInput::new("Sam", "", "startup.io"));
    let guesses = [guess("sam@startup.io", 0.16), guess("s@startup.io", 0.0)];
    let plan = synthesize(&n, &guesses, &ResearchConfig::default()).action_plan;
    assert_eq!(plan[0], templates::ALL_UNVERIFIED);
    assert_eq!(plan[1], templates::FIND_COLLEAGUE);
    assert_eq!(plan.iter().filter(|p| *p == templates::FIND_COLLEAGUE).count(), 1);
}

#[test]
fn missing_and_invalid_domains_are_called_out_differently() {
    let missing = normalize(&FinderInput::new("Jane", "Doe", ""));
    let invalid = normalize(&FinderInput::new("Jane", "Doe", "acme"));
    let cfg = ResearchConfig::default();
    assert_eq!(synthesize(&missing, &[], &cfg).action_plan[0], templates::DOMAIN_MISSING);
    assert_eq!(synthesize(&invalid, &[], &cfg).action_plan[0], templates::DOMAIN_INVALID);
}

#[test]
fn plan_is_deterministic() {
    let n = normalize(&FinderInput::new("Jane", "Doe", "acme.com").with_clues("jdoe"));
    let guesses = [guess("jdoe@acme.com", 0.98)];
    let cfg = ResearchConfig::default();
    assert_eq!(synthesize(&n, &guesses, &cfg), synthesize(&n, &guesses, &cfg));
}
