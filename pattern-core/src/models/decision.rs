use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification assigned to a pattern-context pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    /// Apply without human review.
    AutoApply,
    /// Surface to a human as a recommendation.
    Recommend,
    /// Try in a controlled, reversible setting.
    Experiment,
    /// Falls between the defined bands; needs human judgement.
    ReviewRequired,
    /// Do not apply.
    Reject,
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AutoApply => "auto_apply",
            Self::Recommend => "recommend",
            Self::Experiment => "experiment",
            Self::ReviewRequired => "review_required",
            Self::Reject => "reject",
        };
        write!(f, "{s}")
    }
}

/// Confidence tier, derived from the configured decision thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Experimental,
    Low,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Experimental => "experimental",
            Self::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// The five independent eligibility checks behind a decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecisionCriteria {
    /// Confidence at or above the absolute 0.4 floor.
    pub confidence_met: bool,
    /// Context-match factor at or above 0.6.
    pub context_match_met: bool,
    /// No quality gates declared, external gates passed, or success rate
    /// at or above 0.5.
    pub quality_met: bool,
    /// Confidence clears the risk-tier-dependent floor.
    pub risk_tolerance_met: bool,
    /// Not deprecated, at least 7 days old, at least 3 applications.
    pub business_rules_met: bool,
}

impl DecisionCriteria {
    /// Fraction of criteria satisfied, in steps of 0.2.
    pub fn score(&self) -> f64 {
        let satisfied = [
            self.confidence_met,
            self.context_match_met,
            self.quality_met,
            self.risk_tolerance_met,
            self.business_rules_met,
        ]
        .iter()
        .filter(|c| **c)
        .count();
        satisfied as f64 / 5.0
    }
}

/// Output of classification for one pattern-context pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub decision_type: DecisionType,
    pub confidence_level: ConfidenceLevel,
    /// Human-readable explanation of the classification.
    pub rationale: String,
    /// The confidence score the classification was made from.
    pub confidence_score: f64,
    /// Fraction of eligibility criteria satisfied.
    pub criteria_score: f64,
}
