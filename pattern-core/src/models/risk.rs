use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tier for acting on a decision, independent of confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

/// Secondary assessment of the danger of acting on a decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Additive risk score, clamped to [0.0, 1.0].
    pub score: f64,
    /// Tier derived from the configured risk thresholds.
    pub level: RiskLevel,
    /// Tags for each triggered risk factor.
    pub factors: Vec<String>,
    /// Suggested mitigations, one set per triggered factor.
    pub mitigation_strategies: Vec<String>,
}
