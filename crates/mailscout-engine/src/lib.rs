//! # mailscout-engine
//!
//! Turns partial identity fields into ranked, explainable email address
//! hypotheses plus research queries and an outreach plan.
//!
//! Pipeline: normalize → generate → score → dedup/rank, with research
//! synthesized from the normalized input and the final guesses.
//! The engine is pure: no I/O, no clocks, no shared state.

pub mod boundary;
pub mod engine;
pub mod normalize;
pub mod patterns;
pub mod ranking;
pub mod research;

pub use engine::{run, FinderEngine};
pub use normalize::normalize;
