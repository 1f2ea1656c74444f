use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The generation rule that produced a local-part.
///
/// Serialized as the human-facing label (`"first.last"`, `"flast"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PatternLabel {
    #[serde(rename = "first.last")]
    FirstDotLast,
    #[serde(rename = "firstlast")]
    FirstLast,
    #[serde(rename = "first_last")]
    FirstUnderscoreLast,
    #[serde(rename = "f.last")]
    InitialDotLast,
    #[serde(rename = "flast")]
    InitialLast,
    #[serde(rename = "first.l")]
    FirstDotInitial,
    #[serde(rename = "firstl")]
    FirstInitial,
    #[serde(rename = "last.first")]
    LastDotFirst,
    #[serde(rename = "lastfirst")]
    LastFirst,
    #[serde(rename = "first")]
    First,
    #[serde(rename = "last")]
    Last,
    #[serde(rename = "last_first")]
    LastUnderscoreFirst,
    #[serde(rename = "f")]
    FirstInitialOnly,
    #[serde(rename = "l")]
    LastInitialOnly,
    #[serde(rename = "clue-derived")]
    ClueDerived,
    #[serde(rename = "clue-handle")]
    ClueHandle,
}

/// Which separator a two-part pattern joins its parts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorStyle {
    Dot,
    Underscore,
    NoSeparator,
}

impl SeparatorStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Underscore => "underscore",
            Self::NoSeparator => "no separator",
        }
    }
}

/// Which name part a clue says is abbreviated to its initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialStyle {
    /// `jdoe`, `j.doe`
    FirstInitialLast,
    /// `janed`, `jane.d`
    FirstLastInitial,
}

impl PatternLabel {
    /// The two-name catalog in generation order.
    pub const CATALOG: [PatternLabel; 12] = [
        Self::FirstDotLast,
        Self::FirstLast,
        Self::FirstUnderscoreLast,
        Self::InitialDotLast,
        Self::InitialLast,
        Self::FirstDotInitial,
        Self::FirstInitial,
        Self::LastDotFirst,
        Self::LastFirst,
        Self::First,
        Self::Last,
        Self::LastUnderscoreFirst,
    ];

    /// Tie-break order used by the ranker. Lower sorts first.
    const PRIORITY: [PatternLabel; 16] = [
        Self::ClueDerived,
        Self::FirstDotLast,
        Self::InitialLast,
        Self::InitialDotLast,
        Self::FirstLast,
        Self::FirstUnderscoreLast,
        Self::FirstDotInitial,
        Self::FirstInitial,
        Self::LastDotFirst,
        Self::LastFirst,
        Self::LastUnderscoreFirst,
        Self::ClueHandle,
        Self::First,
        Self::Last,
        Self::FirstInitialOnly,
        Self::LastInitialOnly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstDotLast => "first.last",
            Self::FirstLast => "firstlast",
            Self::FirstUnderscoreLast => "first_last",
            Self::InitialDotLast => "f.last",
            Self::InitialLast => "flast",
            Self::FirstDotInitial => "first.l",
            Self::FirstInitial => "firstl",
            Self::LastDotFirst => "last.first",
            Self::LastFirst => "lastfirst",
            Self::First => "first",
            Self::Last => "last",
            Self::LastUnderscoreFirst => "last_first",
            Self::FirstInitialOnly => "f",
            Self::LastInitialOnly => "l",
            Self::ClueDerived => "clue-derived",
            Self::ClueHandle => "clue-handle",
        }
    }

    /// Look up a catalog label by its wire name.
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        Self::CATALOG.into_iter().find(|l| l.as_str() == name)
    }

    /// Position in the fixed tie-break order.
    pub fn priority(self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|l| *l == self)
            .unwrap_or(Self::PRIORITY.len())
    }

    /// Whether the label was seeded from free-text clues.
    pub fn is_clue_seed(self) -> bool {
        matches!(self, Self::ClueDerived | Self::ClueHandle)
    }

    /// Separator joining the two name parts, for two-part patterns.
    pub fn separator(self) -> Option<SeparatorStyle> {
        match self {
            Self::FirstDotLast | Self::InitialDotLast | Self::FirstDotInitial | Self::LastDotFirst => {
                Some(SeparatorStyle::Dot)
            }
            Self::FirstUnderscoreLast | Self::LastUnderscoreFirst => {
                Some(SeparatorStyle::Underscore)
            }
            Self::FirstLast | Self::InitialLast | Self::FirstInitial | Self::LastFirst => {
                Some(SeparatorStyle::NoSeparator)
            }
            _ => None,
        }
    }

    /// Initial style this pattern follows, if it abbreviates a name part.
    pub fn initial_style(self) -> Option<InitialStyle> {
        match self {
            Self::InitialDotLast | Self::InitialLast => Some(InitialStyle::FirstInitialLast),
            Self::FirstDotInitial | Self::FirstInitial => Some(InitialStyle::FirstLastInitial),
            _ => None,
        }
    }

    /// Whether the local-part contains a bare initial.
    pub fn uses_initial(self) -> bool {
        self.initial_style().is_some()
            || matches!(self, Self::FirstInitialOnly | Self::LastInitialOnly)
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&PatternLabel::InitialLast).unwrap();
        assert_eq!(json, "\"flast\"");
        let back: PatternLabel = serde_json::from_str("\"clue-handle\"").unwrap();
        assert_eq!(back, PatternLabel::ClueHandle);
    }

    #[test]
    fn as_str_matches_serde_for_every_label() {
        for label in PatternLabel::PRIORITY {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }

    #[test]
    fn priority_is_total_and_unique() {
        let mut seen: Vec<usize> = PatternLabel::PRIORITY.iter().map(|l| l.priority()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn initial_patterns_are_flagged() {
        let flagged: Vec<PatternLabel> = PatternLabel::PRIORITY
            .into_iter()
            .filter(|l| l.uses_initial())
            .collect();
        assert_eq!(
            flagged,
            vec![
                PatternLabel::InitialLast,
                PatternLabel::InitialDotLast,
                PatternLabel::FirstDotInitial,
                PatternLabel::FirstInitial,
                PatternLabel::FirstInitialOnly,
                PatternLabel::LastInitialOnly,
            ]
        );
    }

    #[test]
    fn catalog_names_round_trip() {
        for label in PatternLabel::CATALOG {
            assert_eq!(PatternLabel::from_catalog_name(label.as_str()), Some(label));
        }
        assert_eq!(PatternLabel::from_catalog_name("clue-derived"), None);
    }
}
