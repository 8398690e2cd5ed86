//! # pattern-decision
//!
//! Converts a confidence score plus secondary criteria into an actionable
//! decision: auto-apply, recommend, experiment, review, or reject, with
//! a risk assessment, remediation guidance, and bounded decision history
//! for analytics.

pub mod analytics;
pub mod classify;
pub mod criteria;
pub mod engine;
pub mod history;
pub mod recommendations;
pub mod risk;

pub use engine::{DecisionEngine, DecisionOptions, DecisionOutcome};
pub use history::DecisionHistory;
