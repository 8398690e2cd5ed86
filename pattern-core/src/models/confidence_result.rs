use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ContextWeights;

/// Output of confidence scoring: the combined score plus the per-factor
/// breakdown it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceResult {
    /// Combined score, clamped to the configured bounds.
    pub score: f64,
    /// Individual factor scores, each in [0.0, 1.0].
    pub factors: FactorScores,
    /// Tag identifying how the score was produced.
    pub calculation_method: String,
    /// When the score was computed.
    pub timestamp: DateTime<Utc>,
}

/// Scores for each of the five confidence factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorScores {
    /// Historical success rate, with diminishing returns near 1.0.
    pub success_rate: f64,
    /// Step function of days since last application.
    pub recency: f64,
    /// Match between the pattern's field rules and the supplied context.
    pub context_match: f64,
    /// Proxy for breadth of situations the pattern has worked in.
    pub diversity: f64,
    /// Average observed quality impact, remapped from [-1, 1] to [0, 1].
    pub quality_impact: f64,
}

impl FactorScores {
    /// Combine the factors with the configured weights.
    ///
    /// The weights are tunables, not a normalized distribution; the caller
    /// clamps the result afterwards.
    pub fn weighted_sum(&self, weights: &ContextWeights) -> f64 {
        self.success_rate * weights.success_rate
            + self.recency * weights.recency
            + self.context_match * weights.context_match
            + self.diversity * weights.diversity
            + self.quality_impact * weights.quality_impact
    }

    /// True when every factor lies in [0.0, 1.0].
    pub fn all_bounded(&self) -> bool {
        [
            self.success_rate,
            self.recency,
            self.context_match,
            self.diversity,
            self.quality_impact,
        ]
        .iter()
        .all(|f| (0.0..=1.0).contains(f))
    }
}
