//! Search-engine queries built from the name and the company/domain.

use mailscout_core::config::ResearchConfig;
use mailscout_core::models::{EmailGuess, NormalizedInput};

use super::templates;

/// Distinct queries in fixed order, capped at `max_search_queries`. Empty
/// when neither company nor domain is known.
pub fn build_queries(n: &NormalizedInput, guesses: &[EmailGuess], cfg: &ResearchConfig) -> Vec<String> {
    if n.company.is_empty() && !n.has_domain() {
        return Vec::new();
    }

    let name = n.display_name();
    let org = if n.company.is_empty() {
        n.domain.as_str()
    } else {
        n.company.as_str()
    };

    let mut out: Vec<String> = Vec::new();
    if !name.is_empty() {
        out.push(templates::name_org_email(&name, org));
        if cfg.include_linkedin {
            out.push(templates::linkedin(&name, org));
        }
        if n.has_domain() {
            out.push(templates::name_at_domain(&name, &n.domain));
            out.push(templates::site_name(&name, &n.domain));
        }
    }
    if n.has_domain() {
        out.push(templates::domain_email_format(&n.domain));
    }
    if !n.company.is_empty() {
        out.push(templates::company_email_format(&n.company));
    }
    if let Some(top) = guesses.first() {
        out.push(templates::exact_address(&top.address));
    }

    let mut unique: Vec<String> = Vec::with_capacity(out.len());
    for q in out {
        if !unique.contains(&q) {
            unique.push(q);
        }
    }
    unique.truncate(cfg.max_search_queries);
    unique
}
