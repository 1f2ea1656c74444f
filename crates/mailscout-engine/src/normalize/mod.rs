//! Normalizer: raw `FinderInput` → immutable `NormalizedInput`.
//!
//! Never fails. Absent or malformed fields degrade to empty values.

pub mod clues;
pub mod company;
pub mod domain;
pub mod fold;

use mailscout_core::models::{FinderInput, NormalizedInput};

/// Canonicalize every field of the input.
pub fn normalize(input: &FinderInput) -> NormalizedInput {
    let first_name = fold::collapse_whitespace(&input.first_name);
    let last_name = fold::collapse_whitespace(&input.last_name);
    let first_key = fold::name_key(&first_name);
    let last_key = fold::name_key(&last_name);

    let company = fold::collapse_whitespace(&input.company);
    let company_tokens = company::company_tokens(&company);

    let domain = domain::normalize_domain(&input.domain);
    let domain_supplied = !input.domain.trim().is_empty();

    let clues = clues::parse_clues(&input.clues, &first_key, &last_key);

    NormalizedInput {
        first_name,
        last_name,
        first_key,
        last_key,
        domain,
        domain_supplied,
        company,
        company_tokens,
        clues,
    }
}
