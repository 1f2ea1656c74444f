use mailscout_core::models::{FinderInput, PatternLabel};
use mailscout_engine::normalize;
use mailscout_engine::patterns::generate;

fn labels(input: &FinderInput) -> Vec<PatternLabel> {
    generate(&normalize(input)).into_iter().map(|c| c.label).collect()
}

#[test]
fn full_name_generates_the_catalog_in_order() {
    let got = labels(&FinderInput::new("Jane", "Doe", "acme.com"));
    assert_eq!(got, PatternLabel::CATALOG.to_vec());
}

#[test]
fn first_name_only_generates_token_and_initial() {
    let got = labels(&FinderInput::new("Sam", "", "startup.io"));
    assert_eq!(got, vec![PatternLabel::First, PatternLabel::FirstInitialOnly]);
}

#[test]
fn last_name_only_generates_token_and_initial() {
    let candidates = generate(&normalize(&FinderInput::new("", "Nguyen", "acme.com")));
    let parts: Vec<&str> = candidates.iter().map(|c| c.local_part.as_str()).collect();
    assert_eq!(parts, vec!["nguyen", "n"]);
}

#[test]
fn seeds_follow_the_catalog() {
    let input = FinderInput::new("Jane", "Doe", "acme.com")
        .with_clues("wrote to jane.doe@oldco.com, handle jdoe");
    let candidates = generate(&normalize(&input));
    assert_eq!(candidates.len(), 14);
    assert_eq!(candidates[12].label, PatternLabel::ClueDerived);
    assert_eq!(candidates[12].local_part, "jane.doe");
    assert_eq!(candidates[12].clue_domain.as_deref(), Some("oldco.com"));
    assert_eq!(candidates[13].label, PatternLabel::ClueHandle);
    assert_eq!(candidates[13].local_part, "jdoe");
}

#[test]
fn empty_domain_still_generates_local_parts() {
    let n = normalize(&FinderInput::new("Jane", "Doe", ""));
    let candidates = generate(&n);
    assert_eq!(candidates.len(), 12);
    assert!(candidates.iter().all(|c| c.address(&n.domain).is_none()));
}

#[test]
fn generation_is_reproducible() {
    let input = FinderInput::new("Élodie", "Martin-Roux", "exemple.fr").with_clues("goes by emartin");
    assert_eq!(generate(&normalize(&input)), generate(&normalize(&input)));
}
