//! Compiled defaults for every tunable value.

use crate::constants::MAX_CLUE_SEEDS;
use crate::models::PatternLabel;

// ── Pattern priors ─────────────────────────────────────────────────────────
pub const PRIOR_FIRST_DOT_LAST: f64 = 0.62;
pub const PRIOR_FLAST: f64 = 0.58;
pub const PRIOR_FIRSTLAST: f64 = 0.48;
pub const PRIOR_F_DOT_LAST: f64 = 0.45;
pub const PRIOR_FIRST_UNDERSCORE_LAST: f64 = 0.42;
pub const PRIOR_FIRST_DOT_L: f64 = 0.36;
pub const PRIOR_FIRSTL: f64 = 0.34;
pub const PRIOR_LAST_DOT_FIRST: f64 = 0.32;
pub const PRIOR_LASTFIRST: f64 = 0.30;
pub const PRIOR_LAST_UNDERSCORE_FIRST: f64 = 0.28;
pub const PRIOR_FIRST: f64 = 0.26;
pub const PRIOR_LAST: f64 = 0.22;
pub const PRIOR_F: f64 = 0.08;
pub const PRIOR_L: f64 = 0.06;
pub const PRIOR_CLUE_DERIVED: f64 = 0.60;
pub const PRIOR_CLUE_HANDLE: f64 = 0.50;

// ── Boosts ─────────────────────────────────────────────────────────────────
pub const BOOST_COMPANY_DOMAIN_MATCH: f64 = 0.10;
pub const BOOST_SEPARATOR_MATCH: f64 = 0.12;
pub const BOOST_INITIAL_STYLE_MATCH: f64 = 0.15;
pub const BOOST_NAMED_PATTERN_MATCH: f64 = 0.20;
pub const BOOST_CLUE_TOKEN_MATCH: f64 = 0.25;
pub const BOOST_CLUE_ON_TARGET_DOMAIN: f64 = 0.20;
pub const BOOST_COLLEAGUE_FORMAT_MATCH: f64 = 0.15;

// ── Penalties (subtracted) ─────────────────────────────────────────────────
pub const PENALTY_SINGLE_NAME: f64 = 0.10;
pub const PENALTY_SHORT_NAME_INITIAL: f64 = 0.10;

// ── Ranking / research ─────────────────────────────────────────────────────
/// Every catalog entry plus a full set of clue emails and handles.
pub const DEFAULT_MAX_GUESSES: usize = PatternLabel::CATALOG.len() + 2 * MAX_CLUE_SEEDS;
pub const DEFAULT_MAX_SEARCH_QUERIES: usize = 8;

// ── Observability ──────────────────────────────────────────────────────────
pub const DEFAULT_LOG_LEVEL: &str = "info";
