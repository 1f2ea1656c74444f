/// mailscout version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scores at or above this are `high` confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Scores at or above this (and below high) are `medium` confidence.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Scores are rounded to this many steps per unit (3 decimals).
pub const SCORE_PRECISION: f64 = 1000.0;

/// Name keys shorter than this make initial-based patterns ambiguous.
pub const SHORT_NAME_LEN: usize = 3;

/// Handle tokens found in clues must be within these bounds (chars).
pub const HANDLE_MIN_LEN: usize = 2;
pub const HANDLE_MAX_LEN: usize = 40;

/// Company tokens shorter than this never count as a domain match
/// unless they equal a whole domain label.
pub const MIN_COMPANY_TOKEN_LEN: usize = 2;

/// Company tokens at least this long may match as a prefix/substring of a domain label.
pub const PARTIAL_COMPANY_MATCH_LEN: usize = 4;

/// Upper bound on the number of seed candidates taken from clues.
pub const MAX_CLUE_SEEDS: usize = 10;
