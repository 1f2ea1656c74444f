//! Query and checklist wording.

pub fn name_org_email(name: &str, org: &str) -> String {
    format!("\"{name}\" \"{org}\" email")
}

pub fn linkedin(name: &str, org: &str) -> String {
    format!("site:linkedin.com \"{name}\" {org}")
}

pub fn name_at_domain(name: &str, domain: &str) -> String {
    format!("\"{name}\" \"@{domain}\"")
}

pub fn site_name(name: &str, domain: &str) -> String {
    format!("site:{domain} \"{name}\"")
}

pub fn domain_email_format(domain: &str) -> String {
    format!("\"@{domain}\" email format")
}

pub fn company_email_format(company: &str) -> String {
    format!("\"{company}\" email format")
}

pub fn exact_address(address: &str) -> String {
    format!("\"{address}\"")
}

pub const DOMAIN_MISSING: &str =
    "Add the company's email domain (e.g. acme.com) to turn patterns into full addresses";

pub const DOMAIN_INVALID: &str =
    "The domain could not be parsed; double-check it (e.g. acme.com) to assemble addresses";

pub const NAME_MISSING: &str =
    "Add the prospect's first and last name to unlock the common corporate patterns";

pub fn send_first(address: &str) -> String {
    format!("Send a short personalized intro to {address} first")
}

pub fn verify_top(address: &str) -> String {
    format!("Verify {address} with an email verification service before sending")
}

pub const ALL_UNVERIFIED: &str =
    "Treat every guess as unverified and triangulate before any outreach";

pub const FIND_COLLEAGUE: &str =
    "Find one confirmed colleague address at the company to confirm the house pattern";

pub fn fallback(address: &str) -> String {
    format!("If there is no reply within a few days, follow up via {address}")
}

pub const RUN_QUERIES: &str =
    "Run the research queries to spot a published address or the company's format";

pub const ADD_COMPANY: &str =
    "Add the company name to sharpen research queries and domain checks";

pub const ONE_AT_A_TIME: &str =
    "Send to one address at a time to protect sender reputation and avoid bounce spikes";
