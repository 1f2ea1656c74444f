//! Rationale phrasing. Kept apart from the scoring logic so wording can be
//! tuned without touching the algorithm.

use mailscout_core::models::{InitialStyle, PatternLabel, SeparatorStyle};

pub fn prior(label: PatternLabel) -> String {
    match label {
        PatternLabel::FirstDotLast => {
            "first.last is the most common corporate convention".to_string()
        }
        PatternLabel::InitialLast => {
            "flast (first initial + last name) is a very common corporate convention".to_string()
        }
        PatternLabel::First | PatternLabel::Last => {
            format!("Single-name address ({label}) is a less common convention")
        }
        PatternLabel::FirstInitialOnly | PatternLabel::LastInitialOnly => {
            format!("Initial-only address ({label}) is a rare convention")
        }
        PatternLabel::ClueDerived => "Address appears in the clues".to_string(),
        PatternLabel::ClueHandle => "Handle appears in the clues".to_string(),
        _ => format!("{label} is a known corporate convention"),
    }
}

pub fn company_domain_match(company: &str, domain: &str) -> String {
    format!("Company name \"{company}\" matches domain {domain}")
}

pub fn separator_match(style: SeparatorStyle) -> String {
    format!("Clues mention the {} separator style", style.as_str())
}

pub fn initial_style_match(style: InitialStyle) -> String {
    match style {
        InitialStyle::FirstInitialLast => "Clues describe a first-initial + last-name format",
        InitialStyle::FirstLastInitial => "Clues describe a first-name + last-initial format",
    }
    .to_string()
}

pub fn named_pattern_match(label: PatternLabel) -> String {
    format!("Clues name the {label} format")
}

pub fn colleague_format_match(address: &str, label: PatternLabel) -> String {
    format!("Colleague address {address} in the clues follows the {label} format")
}

pub fn clue_token_match(token: &str) -> String {
    format!("Local part matches clue token \"{token}\"")
}

pub fn clue_on_target_domain(domain: &str) -> String {
    format!("Clue address is already on {domain}")
}

pub fn single_name() -> String {
    "Only one name part was provided".to_string()
}

pub fn short_name_initial(key: &str) -> String {
    format!("Initial-based pattern with short name \"{key}\" is ambiguous")
}

pub fn no_signal(label: PatternLabel) -> String {
    format!("Generated by the {label} rule")
}
