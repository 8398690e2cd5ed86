//! # pattern-scoring
//!
//! Confidence scoring for actionable patterns: five bounded factors
//! combined by a weighted sum, time-based decay for idle patterns,
//! outcome-driven adaptation, and a Monte Carlo projection helper.

pub mod decay;
pub mod factors;
pub mod formula;
pub mod outcome;
pub mod prediction;
pub mod scorer;

pub use prediction::predict_future_confidence;
pub use scorer::ConfidenceScorer;
