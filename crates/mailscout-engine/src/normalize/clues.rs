//! Clue parsing: free text → `ClueSignals`.
//!
//! Extracts email-shaped substrings, handle-like tokens, separator and
//! initial-style keywords, and spelled-out pattern templates. Emails that do
//! not belong to the person are kept apart as format hints. Unrecognized
//! text is ignored; parsing never fails.

use std::sync::LazyLock;

use regex::Regex;

use mailscout_core::constants::{HANDLE_MAX_LEN, HANDLE_MIN_LEN, MAX_CLUE_SEEDS};
use mailscout_core::models::{ClueSignals, InitialStyle, PatternLabel, SeparatorStyle};

use super::fold::fold_ascii;
use crate::patterns::catalog_local_parts;

macro_rules! clue_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
clue_pattern!(RE_EMAIL, r"[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}");

// ── Separator keywords ─────────────────────────────────────────────────────
clue_pattern!(
    RE_NO_SEPARATOR,
    r"\b(?:no|without(?:\s+an?|\s+any)?)\s+(?:dots?|periods?|separators?)\b|\bno-separator\b"
);
clue_pattern!(RE_UNDERSCORE, r"\bunderscores?\b");
clue_pattern!(RE_DOT, r"\b(?:dots?|periods?)\b");

// ── Initial-style keywords ─────────────────────────────────────────────────
clue_pattern!(
    RE_FIRST_INITIAL,
    r"\bfirst\s+initial\b|\binitial\s+of\s+(?:the\s+)?first\b"
);
clue_pattern!(
    RE_LAST_INITIAL,
    r"\blast\s+initial\b|\binitial\s+of\s+(?:the\s+)?last\b|\bsurname\s+initial\b"
);

/// Words that describe a format rather than identify a person.
const VOCABULARY: &[&str] = &[
    "first", "last", "name", "names", "firstname", "lastname", "surname", "initial",
    "initials", "full", "dot", "dots", "period", "underscore", "underscores", "hyphen",
    "dash", "email", "emails", "mail", "address", "format", "pattern", "separator",
    "without", "plus", "and", "the", "is", "by", "at", "uses", "goes", "e.g", "i.e", "etc",
];

/// TLDs that mark a dotted token as a domain rather than a handle.
const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "net", "org", "io", "co", "ai", "dev", "app", "edu", "gov", "us", "uk", "de",
    "fr", "ca", "au",
];

/// Parse the clue text. Name keys drive handle recognition.
pub fn parse_clues(text: &str, first_key: &str, last_key: &str) -> ClueSignals {
    let folded = fold_ascii(text);
    if folded.trim().is_empty() {
        return ClueSignals::default();
    }

    let own_parts = catalog_local_parts(first_key, last_key);
    let (emails, colleague_emails) = extract_emails(&folded, first_key, last_key, &own_parts);
    let remainder = match RE_EMAIL.as_ref() {
        Some(re) => re.replace_all(&folded, " ").into_owned(),
        None => folded.clone(),
    };

    let mut signals = ClueSignals {
        emails,
        colleague_emails,
        separator: detect_separator(&remainder),
        initial_style: detect_initial_style(&remainder),
        ..Default::default()
    };

    for token in tokenize(&remainder) {
        if let Some(label) = template_label(token) {
            if !signals.named_patterns.contains(&label) {
                signals.named_patterns.push(label);
            }
            continue;
        }
        if signals.handles.len() < MAX_CLUE_SEEDS
            && is_handle(token, first_key, last_key, &own_parts)
            && !signals.handles.iter().any(|h| h == token)
        {
            signals.handles.push(token.to_string());
        }
    }

    signals
}

/// Split clue emails into the person's own addresses and everyone else's.
///
/// Without any name to compare against, every address counts as the person's.
fn extract_emails(
    folded: &str,
    first_key: &str,
    last_key: &str,
    own_parts: &[String],
) -> (Vec<String>, Vec<String>) {
    let mut own: Vec<String> = Vec::new();
    let mut others: Vec<String> = Vec::new();
    let Some(re) = RE_EMAIL.as_ref() else {
        return (own, others);
    };
    let anonymous = first_key.is_empty() && last_key.is_empty();
    for m in re.find_iter(folded) {
        let email = m.as_str().trim_matches('.').to_string();
        let Some((local, _)) = email.split_once('@') else {
            continue;
        };
        if local.is_empty() || local.starts_with('.') {
            continue;
        }
        let bucket = if anonymous || belongs_to_person(local, first_key, last_key, own_parts) {
            &mut own
        } else {
            &mut others
        };
        if bucket.len() < MAX_CLUE_SEEDS && !bucket.contains(&email) {
            bucket.push(email);
        }
    }
    (own, others)
}

/// A local-part that is one of the person's catalog forms or contains a
/// name key long enough to be distinctive.
fn belongs_to_person(local: &str, first_key: &str, last_key: &str, own_parts: &[String]) -> bool {
    if own_parts.iter().any(|p| p == local) {
        return true;
    }
    let compact: String = local.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let mentions = |key: &str| key.len() >= 3 && compact.contains(key);
    mentions(first_key) || mentions(last_key)
}

/// Catalog label whose shape a foreign local-part follows, e.g.
/// `bob.smith` → `first.last`, `b.smith` → `f.last`.
///
/// Unseparated local-parts are ambiguous (`bsmith` could be `flast` or
/// `firstlast`) and yield `None`.
pub fn format_label(local: &str) -> Option<PatternLabel> {
    let (sep, (a, b)) = if let Some(parts) = local.split_once('.') {
        ('.', parts)
    } else {
        ('_', local.split_once('_')?)
    };
    let alphabetic = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase());
    if !alphabetic(a) || !alphabetic(b) {
        return None;
    }
    match (sep, a.len(), b.len()) {
        ('.', 1, 1) | ('_', 1, _) | ('_', _, 1) => None,
        ('.', 1, _) => Some(PatternLabel::InitialDotLast),
        ('.', _, 1) => Some(PatternLabel::FirstDotInitial),
        ('.', _, _) => Some(PatternLabel::FirstDotLast),
        _ => Some(PatternLabel::FirstUnderscoreLast),
    }
}

fn is_match(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(text))
}

/// Precedence: "no dot" beats "underscore" beats "dot".
fn detect_separator(text: &str) -> Option<SeparatorStyle> {
    if is_match(&RE_NO_SEPARATOR, text) {
        Some(SeparatorStyle::NoSeparator)
    } else if is_match(&RE_UNDERSCORE, text) {
        Some(SeparatorStyle::Underscore)
    } else if is_match(&RE_DOT, text) {
        Some(SeparatorStyle::Dot)
    } else {
        None
    }
}

fn detect_initial_style(text: &str) -> Option<InitialStyle> {
    if is_match(&RE_FIRST_INITIAL, text) {
        Some(InitialStyle::FirstInitialLast)
    } else if is_match(&RE_LAST_INITIAL, text) {
        Some(InitialStyle::FirstLastInitial)
    } else {
        None
    }
}

/// Split on anything that cannot appear in a local-part, then trim edge
/// punctuation left over from sentences.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        .map(|t| t.trim_matches(|c: char| matches!(c, '.' | '_' | '-')))
        .filter(|t| !t.is_empty())
}

/// A token that spells out a catalog pattern, e.g. `firstname.lastname`.
fn template_label(token: &str) -> Option<PatternLabel> {
    let canonical = token
        .replace("firstname", "first")
        .replace("lastname", "last")
        .replace("surname", "last");
    if canonical == "first" || canonical == "last" {
        return None;
    }
    PatternLabel::from_catalog_name(&canonical)
}

fn is_handle(token: &str, first_key: &str, last_key: &str, own_parts: &[String]) -> bool {
    let len = token.chars().count();
    if !(HANDLE_MIN_LEN..=HANDLE_MAX_LEN).contains(&len) || !token.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let compact: String = token.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let anonymous = first_key.is_empty() && last_key.is_empty();

    // A bare mention of the person's own name is not a handle.
    if !anonymous && (compact == first_key || compact == last_key) {
        return false;
    }
    // The person's own catalog form wins even when it reads like a domain (`jane.dev`).
    if own_parts.iter().any(|p| p == token) {
        return true;
    }
    if VOCABULARY.contains(&token) || looks_like_domain(token) {
        return false;
    }

    if anonymous {
        // No name to anchor on: only separator-bearing tokens look like handles.
        return compact.len() >= 3 && token.contains(|c: char| matches!(c, '.' | '_'));
    }

    let mentions = |key: &str| key.len() >= 3 && compact.contains(key);
    mentions(first_key) || mentions(last_key)
}

fn looks_like_domain(token: &str) -> bool {
    token
        .rsplit_once('.')
        .is_some_and(|(_, suffix)| DOMAIN_SUFFIXES.contains(&suffix))
}
