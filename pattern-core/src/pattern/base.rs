use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::matching::ContextMatchRules;
use super::usage::UsageStatistics;

/// A stored, reusable recommendation with historical performance data.
/// Created externally when first discovered; mutated in place by outcome
/// updates; never deleted by this core (deletion is a storage concern).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    /// Opaque unique identifier.
    pub id: String,
    /// Human-readable name (e.g. "add OAuth2 authentication").
    pub name: String,
    /// What applying this pattern does.
    pub description: String,
    /// Historical fraction of successful applications, in [0, 1].
    pub success_rate: f64,
    /// Current trust level; mutated only by the outcome-update path.
    pub confidence_score: Confidence,
    /// Rules for matching this pattern against a context.
    pub context_match: ContextMatchRules,
    /// Identifiers of quality gates this pattern expects to pass.
    pub quality_gates: Vec<String>,
    /// Category, counters, and lifecycle flags.
    pub metadata: PatternMetadata,
}

/// Category, lifecycle, and usage metadata attached to a pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternMetadata {
    /// Category tag (e.g. "security", "performance") used for risk
    /// classification.
    pub pattern_type: String,
    /// When the pattern was first discovered.
    pub created_at: DateTime<Utc>,
    /// Deprecated patterns fail the business-rule criterion.
    pub deprecated: bool,
    /// Application counters and quality history.
    pub usage_statistics: UsageStatistics,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl Default for PatternMetadata {
    fn default() -> Self {
        Self {
            pattern_type: "general".to_string(),
            created_at: Utc::now(),
            deprecated: false,
            usage_statistics: UsageStatistics::default(),
            tags: Vec::new(),
        }
    }
}

impl Pattern {
    /// Validate the identity and numeric fields a caller must supply.
    /// Sparse metadata is fine; a missing id or non-finite score is not.
    pub fn validate(&self) -> crate::errors::PatternResult<()> {
        if self.id.trim().is_empty() {
            return Err(crate::errors::PatternError::validation(
                "<unknown>",
                "pattern id is empty",
            ));
        }
        if !self.confidence_score.value().is_finite() {
            return Err(crate::errors::PatternError::validation(
                self.id.as_str(),
                "confidence_score is not finite",
            ));
        }
        if !self.success_rate.is_finite() || !(0.0..=1.0).contains(&self.success_rate) {
            return Err(crate::errors::PatternError::validation(
                self.id.as_str(),
                format!("success_rate {} outside [0, 1]", self.success_rate),
            ));
        }
        Ok(())
    }

    /// Days since the pattern was last applied, if ever.
    pub fn days_since_last_applied(&self, now: DateTime<Utc>) -> Option<f64> {
        self.metadata
            .usage_statistics
            .last_applied
            .map(|applied| (now - applied).num_seconds().max(0) as f64 / 86400.0)
    }

    /// Age of the pattern in whole days.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.metadata.created_at).num_days()
    }
}
