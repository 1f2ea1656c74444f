//! All NAPI-exported functions.

pub mod finder;
pub mod lifecycle;
