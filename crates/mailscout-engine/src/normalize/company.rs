//! Company name tokenization and domain corroboration.

use mailscout_core::constants::{MIN_COMPANY_TOKEN_LEN, PARTIAL_COMPANY_MATCH_LEN};

use super::domain::org_labels;
use super::fold::fold_ascii;

/// Legal suffixes and filler words that say nothing about the brand.
const COMPANY_STOPWORDS: &[&str] = &[
    "the", "and", "of", "inc", "incorporated", "llc", "llp", "ltd", "limited", "corp",
    "corporation", "co", "company", "gmbh", "ag", "sa", "sarl", "bv", "plc", "pty", "lp",
    "holdings", "group",
];

/// Folded brand tokens of a company name, in order, unique.
pub fn company_tokens(company: &str) -> Vec<String> {
    let folded = fold_ascii(company);
    let mut tokens: Vec<String> = Vec::new();
    for token in folded.split(|c: char| !c.is_ascii_alphanumeric()) {
        if token.len() < MIN_COMPANY_TOKEN_LEN || COMPANY_STOPWORDS.contains(&token) {
            continue;
        }
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Whether any company token corroborates the domain.
///
/// Matches a whole org label, the tokens joined (`acmerobotics`), or a long
/// token contained in a label (`acme` in `acme-robotics`).
pub fn company_matches_domain(tokens: &[String], domain: &str) -> bool {
    if tokens.is_empty() || domain.is_empty() {
        return false;
    }
    let labels = org_labels(domain);
    let joined = tokens.concat();
    labels.iter().any(|label| {
        let compact: String = label.chars().filter(|c| *c != '-').collect();
        compact == joined
            || tokens.iter().any(|t| {
                label == t || (t.len() >= PARTIAL_COMPANY_MATCH_LEN && compact.contains(t.as_str()))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_drop_legal_suffixes() {
        assert_eq!(company_tokens("Acme Robotics, Inc."), vec!["acme", "robotics"]);
        assert_eq!(company_tokens("The Widget Co"), vec!["widget"]);
        assert!(company_tokens("").is_empty());
    }

    #[test]
    fn matches_label_joined_and_partial() {
        let acme = company_tokens("Acme Robotics");
        assert!(company_matches_domain(&acme, "acme.com"));
        assert!(company_matches_domain(&acme, "acmerobotics.io"));
        assert!(company_matches_domain(&acme, "acme-robotics.com"));
        assert!(!company_matches_domain(&acme, "globex.com"));
        assert!(!company_matches_domain(&acme, ""));
    }

    #[test]
    fn short_tokens_need_exact_label() {
        let ibm = company_tokens("IBM");
        assert!(company_matches_domain(&ibm, "ibm.com"));
        assert!(!company_matches_domain(&ibm, "ibmx.com"));
    }
}
