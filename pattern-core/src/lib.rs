//! # pattern-core
//!
//! Foundation crate for the pattern trust system.
//! Defines the pattern record, configuration, errors, result models,
//! and the traits external collaborators implement.
//! The scoring and decision crates both depend on this.

pub mod config;
pub mod context;
pub mod errors;
pub mod models;
pub mod pattern;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DecayConfig, DecisionConfig, DecisionThresholds, ScoringConfig};
pub use context::Context;
pub use errors::{PatternError, PatternResult};
pub use pattern::{Confidence, ContextMatchRules, Pattern, PatternMetadata, UsageStatistics};
