use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one outcome-driven confidence update. The pattern itself is
/// mutated in place; this record is what the caller persists or audits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeUpdate {
    pub pattern_id: String,
    /// Confidence before the update.
    pub previous_confidence: f64,
    /// Confidence after smoothing and clamping.
    pub new_confidence: f64,
    /// Signed raw adjustment before smoothing.
    pub adjustment: f64,
    /// The target the smoothed update moved toward
    /// (`previous + adjustment`, pre-clamp).
    pub target_confidence: f64,
    /// Whether the application succeeded.
    pub success: bool,
    /// Observed quality impact for this application, in [-1, 1].
    pub quality_impact: f64,
    pub timestamp: DateTime<Utc>,
}

impl OutcomeUpdate {
    /// Net confidence movement produced by this update.
    pub fn delta(&self) -> f64 {
        self.new_confidence - self.previous_confidence
    }
}
