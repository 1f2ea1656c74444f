use serde::{Deserialize, Serialize};

use super::pattern_label::{InitialStyle, PatternLabel, SeparatorStyle};

/// Structured signals pulled out of the free-text clues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSignals {
    /// Email-shaped substrings that look like the person's own address,
    /// lowercased, in order of appearance.
    pub emails: Vec<String>,
    /// Other addresses in the clues (colleagues, shared inboxes). Only their
    /// shape is used, as a format hint.
    pub colleague_emails: Vec<String>,
    /// Handle-like tokens (`jdoe`, `j.doe`), lowercased.
    pub handles: Vec<String>,
    /// Separator style named by a keyword ("dot", "underscore", "no dot").
    pub separator: Option<SeparatorStyle>,
    /// Initial style named by a keyword ("first initial", "last initial").
    pub initial_style: Option<InitialStyle>,
    /// Catalog patterns spelled out as templates (`first.last`, `flast`).
    pub named_patterns: Vec<PatternLabel>,
}

impl ClueSignals {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.colleague_emails.is_empty()
            && self.handles.is_empty()
            && self.separator.is_none()
            && self.initial_style.is_none()
            && self.named_patterns.is_empty()
    }

    /// Local parts of the person's clue emails plus every handle.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.emails
            .iter()
            .filter_map(|e| e.split('@').next())
            .chain(self.handles.iter().map(String::as_str))
    }
}

/// Canonical form of a `FinderInput`. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedInput {
    /// Trimmed, whitespace-collapsed, original casing.
    pub first_name: String,
    pub last_name: String,
    /// ASCII-folded lowercase `[a-z0-9]` keys used to build local-parts.
    pub first_key: String,
    pub last_key: String,
    /// Validated lowercase host, or `""` when the raw domain was unusable.
    pub domain: String,
    /// Whether the caller supplied any non-blank domain at all.
    pub domain_supplied: bool,
    pub company: String,
    /// Folded company tokens with legal suffixes removed.
    pub company_tokens: Vec<String>,
    pub clues: ClueSignals,
}

impl NormalizedInput {
    pub fn has_first(&self) -> bool {
        !self.first_key.is_empty()
    }

    pub fn has_last(&self) -> bool {
        !self.last_key.is_empty()
    }

    pub fn has_full_name(&self) -> bool {
        self.has_first() && self.has_last()
    }

    pub fn has_any_name(&self) -> bool {
        self.has_first() || self.has_last()
    }

    pub fn has_domain(&self) -> bool {
        !self.domain.is_empty()
    }

    /// Display name: first and last joined by a space, blanks skipped.
    pub fn display_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when there is nothing at all to work with.
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && !self.domain_supplied
            && self.company.is_empty()
            && self.clues.is_empty()
    }
}
