//! Domain cleanup and validation.

/// Suffix labels that never identify an organization on their own.
const NON_ORG_LABELS: [&str; 7] = ["co", "com", "org", "net", "ac", "gov", "edu"];

/// Reduce a user-entered domain or URL to a bare lowercase host.
///
/// Returns `""` when nothing valid remains. Normalizing a normalized domain
/// is a no-op.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut d = lowered.as_str();

    if let Some(idx) = d.find("://") {
        d = &d[idx + 3..];
    }
    if let Some(idx) = d.find(|c: char| matches!(c, '/' | '?' | '#')) {
        d = &d[..idx];
    }
    // An address pasted into the domain field.
    if let Some(idx) = d.rfind('@') {
        d = &d[idx + 1..];
    }
    if let Some(idx) = d.find(':') {
        d = &d[..idx];
    }
    while let Some(rest) = d.strip_prefix("www.") {
        if !rest.contains('.') {
            break;
        }
        d = rest;
    }
    let d = d.trim_end_matches('.');

    if is_valid_host(d) {
        d.to_string()
    } else {
        String::new()
    }
}

/// Hostname check: dotted labels of `[a-z0-9-]`, no edge hyphens, alphabetic TLD.
pub fn is_valid_host(d: &str) -> bool {
    if d.is_empty() || !d.contains('.') || d.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = d.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_lowercase()));
    labels_ok && tld_ok
}

/// Labels that may carry the organization name: everything left of the TLD,
/// minus generic second-level labels like `co` in `acme.co.uk`.
pub fn org_labels(domain: &str) -> Vec<&str> {
    let mut labels: Vec<&str> = domain.split('.').collect();
    labels.pop();
    labels
        .into_iter()
        .filter(|l| !l.is_empty() && !NON_ORG_LABELS.contains(l))
        .collect()
}
