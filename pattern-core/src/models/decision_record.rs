use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence_result::ConfidenceResult;
use super::decision::{Decision, DecisionCriteria};
use super::risk::RiskAssessment;
use crate::context::Context;

/// One historical decision, kept in the engine's bounded FIFO history
/// for analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// UUID v4 identifier.
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub pattern_id: String,
    /// The context the decision was made for.
    pub context: Context,
    pub confidence: ConfidenceResult,
    pub criteria: DecisionCriteria,
    pub decision: Decision,
    pub risk: RiskAssessment,
    pub recommendations: Vec<String>,
}
