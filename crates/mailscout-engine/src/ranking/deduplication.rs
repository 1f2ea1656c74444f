//! Address-level deduplication and final ordering.
//!
//! Candidates that realize the same address merge into one guess: the
//! highest-scoring candidate supplies the label and score, and the merged
//! rationale is the union of every contributor's lines in generation order.

use std::cmp::Ordering;
use std::collections::HashMap;

use mailscout_core::models::{Confidence, EmailGuess};

use super::scorer::ScoredCandidate;

struct Group {
    address: String,
    winner: ScoredCandidate,
    /// Generation index of the current winner.
    winner_order: usize,
    rationale: Vec<String>,
}

impl Group {
    fn absorb(&mut self, candidate: ScoredCandidate, order: usize) {
        for line in &candidate.rationale {
            if !self.rationale.contains(line) {
                self.rationale.push(line.clone());
            }
        }
        if beats(&candidate, &self.winner) {
            self.winner = candidate;
            self.winner_order = order;
        }
    }
}

/// Higher score wins; on a tie the lower tie-break priority wins. Equal on
/// both, the earlier candidate is kept.
fn beats(challenger: &ScoredCandidate, incumbent: &ScoredCandidate) -> bool {
    match challenger.score.total_cmp(&incumbent.score) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => challenger.label.priority() < incumbent.label.priority(),
    }
}

/// Merge scored candidates by address, sort, and cap at `max_guesses`.
///
/// Candidates without an address (no usable domain) are dropped.
pub fn rank(scored: Vec<ScoredCandidate>, max_guesses: usize) -> Vec<EmailGuess> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (order, candidate) in scored.into_iter().enumerate() {
        let Some(address) = candidate.address.as_ref().map(|a| a.to_ascii_lowercase()) else {
            continue;
        };
        match index.get(&address) {
            Some(&slot) => groups[slot].absorb(candidate, order),
            None => {
                index.insert(address.clone(), groups.len());
                groups.push(Group {
                    address,
                    rationale: candidate.rationale.clone(),
                    winner: candidate,
                    winner_order: order,
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        b.winner
            .score
            .total_cmp(&a.winner.score)
            .then_with(|| a.winner.label.priority().cmp(&b.winner.label.priority()))
            .then_with(|| a.address.cmp(&b.address))
            .then_with(|| a.winner_order.cmp(&b.winner_order))
    });
    groups.truncate(max_guesses);

    groups
        .into_iter()
        .map(|g| EmailGuess {
            address: g.address,
            pattern_label: g.winner.label,
            score: g.winner.score,
            confidence: Confidence::from_score(g.winner.score),
            rationale: g.rationale,
        })
        .collect()
}
