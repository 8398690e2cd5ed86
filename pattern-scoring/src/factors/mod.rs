//! The five confidence factors. Each is a pure function of the pattern
//! (and context) returning a score in [0.0, 1.0]; missing data resolves
//! to a neutral 0.5 or a configured default, never an error.

pub mod context_match;
pub mod diversity;
pub mod quality;
pub mod recency;
pub mod success;

/// Neutral score used when a factor has nothing to go on.
pub const NEUTRAL: f64 = 0.5;
