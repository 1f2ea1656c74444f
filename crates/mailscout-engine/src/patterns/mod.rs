//! Pattern generator: normalized name/domain → raw local-part candidates.
//!
//! Candidates come out in a fixed rule order (catalog, then clue seeds) so the
//! pre-scoring order is reproducible for identical input.

pub mod seeds;

use mailscout_core::models::{NormalizedInput, PatternLabel};
use tracing::debug;

/// A local-part hypothesis before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    pub local_part: String,
    pub label: PatternLabel,
    /// Domain of the clue email this candidate was seeded from.
    pub clue_domain: Option<String>,
}

impl RawCandidate {
    pub fn new(local_part: impl Into<String>, label: PatternLabel) -> Self {
        Self {
            local_part: local_part.into(),
            label,
            clue_domain: None,
        }
    }

    /// `local_part@domain`, or `None` when there is no domain to attach.
    pub fn address(&self, domain: &str) -> Option<String> {
        assemble_address(&self.local_part, domain)
    }
}

/// Build the local-part for one rule. `None` when a required key is missing.
pub fn catalog_local_part(label: PatternLabel, first: &str, last: &str) -> Option<String> {
    let f = first.chars().next();
    let l = last.chars().next();
    let both = f.is_some() && l.is_some();

    let local = match label {
        PatternLabel::FirstDotLast if both => format!("{first}.{last}"),
        PatternLabel::FirstLast if both => format!("{first}{last}"),
        PatternLabel::FirstUnderscoreLast if both => format!("{first}_{last}"),
        PatternLabel::InitialDotLast if both => format!("{}.{last}", f?),
        PatternLabel::InitialLast if both => format!("{}{last}", f?),
        PatternLabel::FirstDotInitial if both => format!("{first}.{}", l?),
        PatternLabel::FirstInitial if both => format!("{first}{}", l?),
        PatternLabel::LastDotFirst if both => format!("{last}.{first}"),
        PatternLabel::LastFirst if both => format!("{last}{first}"),
        PatternLabel::LastUnderscoreFirst if both => format!("{last}_{first}"),
        PatternLabel::First if f.is_some() => first.to_string(),
        PatternLabel::Last if l.is_some() => last.to_string(),
        PatternLabel::FirstInitialOnly => f?.to_string(),
        PatternLabel::LastInitialOnly => l?.to_string(),
        _ => return None,
    };
    Some(local)
}

/// Every catalog local-part for a full name, in catalog order.
pub fn catalog_local_parts(first: &str, last: &str) -> Vec<String> {
    PatternLabel::CATALOG
        .into_iter()
        .filter_map(|label| catalog_local_part(label, first, last))
        .collect()
}

/// Join a local-part and a domain. Empty domain → no address.
pub fn assemble_address(local_part: &str, domain: &str) -> Option<String> {
    if domain.is_empty() || local_part.is_empty() {
        return None;
    }
    Some(format!("{local_part}@{domain}"))
}

/// Generate every raw candidate for the input, in fixed rule order.
pub fn generate(n: &NormalizedInput) -> Vec<RawCandidate> {
    let labels: &[PatternLabel] = if n.has_full_name() {
        &PatternLabel::CATALOG
    } else if n.has_first() {
        &[PatternLabel::First, PatternLabel::FirstInitialOnly]
    } else if n.has_last() {
        &[PatternLabel::Last, PatternLabel::LastInitialOnly]
    } else {
        &[]
    };

    let mut candidates: Vec<RawCandidate> = labels
        .iter()
        .filter_map(|&label| {
            catalog_local_part(label, &n.first_key, &n.last_key)
                .map(|local| RawCandidate::new(local, label))
        })
        .collect();

    let name_count = candidates.len();
    seeds::append_seeds(&n.clues, &mut candidates);

    debug!(
        name_candidates = name_count,
        seed_candidates = candidates.len() - name_count,
        "generated raw candidates"
    );
    candidates
}
