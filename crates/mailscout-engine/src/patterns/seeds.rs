//! Seed candidates injected from parsed clues.

use mailscout_core::models::{ClueSignals, PatternLabel};

use super::RawCandidate;

/// Append clue emails (`clue-derived`) then handles (`clue-handle`).
pub fn append_seeds(clues: &ClueSignals, out: &mut Vec<RawCandidate>) {
    for email in &clues.emails {
        let Some((local, domain)) = email.split_once('@') else {
            continue;
        };
        if local.is_empty() {
            continue;
        }
        out.push(RawCandidate {
            local_part: local.to_string(),
            label: PatternLabel::ClueDerived,
            clue_domain: Some(domain.to_string()),
        });
    }
    for handle in &clues.handles {
        out.push(RawCandidate::new(handle.clone(), PatternLabel::ClueHandle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_come_before_handles() {
        let clues = ClueSignals {
            emails: vec!["jane@old.io".into()],
            handles: vec!["jdoe".into()],
            ..Default::default()
        };
        let mut out = Vec::new();
        append_seeds(&clues, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].label, PatternLabel::ClueDerived);
        assert_eq!(out[0].local_part, "jane");
        assert_eq!(out[0].clue_domain.as_deref(), Some("old.io"));
        assert_eq!(out[1].label, PatternLabel::ClueHandle);
        assert_eq!(out[1].clue_domain, None);
    }
}
