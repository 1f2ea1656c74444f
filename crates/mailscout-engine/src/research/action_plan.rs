//! Outreach checklist keyed on what the guesses look like.

use mailscout_core::models::{Confidence, EmailGuess, NormalizedInput};

use super::templates;

/// Deterministic checklist of next steps, unique items in order.
pub fn build_action_plan(n: &NormalizedInput, guesses: &[EmailGuess], has_queries: bool) -> Vec<String> {
    let mut plan = Plan::default();

    if !n.has_domain() {
        if n.domain_supplied {
            plan.push(templates::DOMAIN_INVALID);
        } else {
            plan.push(templates::DOMAIN_MISSING);
        }
    }
    if !n.has_any_name() {
        plan.push(templates::NAME_MISSING);
    }

    if let Some(top) = guesses.first() {
        match top.confidence {
            Confidence::High => plan.push(templates::send_first(&top.address)),
            Confidence::Medium => plan.push(templates::verify_top(&top.address)),
            Confidence::Low => {
                plan.push(templates::ALL_UNVERIFIED);
                plan.push(templates::FIND_COLLEAGUE);
            }
        }
        if let Some(second) = guesses.get(1) {
            plan.push(templates::fallback(&second.address));
        }
    }

    if n.clues.is_empty() {
        plan.push(templates::FIND_COLLEAGUE);
    }
    if has_queries {
        plan.push(templates::RUN_QUERIES);
    }
    if n.company.is_empty() {
        plan.push(templates::ADD_COMPANY);
    }
    if !guesses.is_empty() {
        plan.push(templates::ONE_AT_A_TIME);
    }

    plan.items
}

#[derive(Default)]
struct Plan {
    items: Vec<String>,
}

impl Plan {
    fn push(&mut self, item: impl Into<String>) {
        let item = item.into();
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }
}
