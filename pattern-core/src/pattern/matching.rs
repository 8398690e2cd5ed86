use serde::{Deserialize, Serialize};

use crate::context::Context;

/// Per-pattern rules for matching against an open context map.
/// Evaluated as a small interpreter over field-name lists rather than a
/// statically-typed context schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMatchRules {
    /// Keys that must be present in any applying context.
    pub required_fields: Vec<String>,
    /// Bonus keys.
    pub optional_fields: Vec<String>,
    /// Penalty keys.
    pub excluded_fields: Vec<String>,
    /// Floor for the context-match factor: the match score is never
    /// reported below the pattern author's own stated floor.
    pub similarity_threshold: f64,
}

impl Default for ContextMatchRules {
    fn default() -> Self {
        Self {
            required_fields: Vec::new(),
            optional_fields: Vec::new(),
            excluded_fields: Vec::new(),
            similarity_threshold: 0.0,
        }
    }
}

impl ContextMatchRules {
    /// Count how many of the given field names are present in the context.
    pub fn count_present(fields: &[String], context: &Context) -> usize {
        fields.iter().filter(|f| context.contains_key(*f)).count()
    }

    /// Maximum attainable match score: every required field matched (×2),
    /// every optional field matched (×1), no excluded field present.
    pub fn max_attainable_score(&self) -> f64 {
        (self.required_fields.len() * 2 + self.optional_fields.len()) as f64
    }
}
