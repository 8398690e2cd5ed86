use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::decision::{ConfidenceLevel, DecisionType};
use super::risk::RiskLevel;

/// Direction of the mean confidence across the bounded history,
/// comparing the newer half against the older half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTrend {
    Improving,
    Declining,
    Stable,
}

/// Read-only summary over the decision history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionAnalytics {
    /// Total decisions currently held in history.
    pub total_decisions: usize,
    /// Count per decision type.
    pub decision_types: HashMap<DecisionType, usize>,
    /// Count per confidence level.
    pub confidence_levels: HashMap<ConfidenceLevel, usize>,
    /// Count per risk level.
    pub risk_levels: HashMap<RiskLevel, usize>,
    /// Mean confidence across all held decisions.
    pub average_confidence: f64,
    /// Trend of mean confidence, newer half vs older half.
    pub trend: ConfidenceTrend,
}
