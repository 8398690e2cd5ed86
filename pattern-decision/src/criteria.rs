//! The five independent eligibility checks behind a decision.
//! Missing data always resolves conservatively; evaluation never errors.

use chrono::{DateTime, Utc};
use pattern_core::models::{ConfidenceResult, DecisionCriteria};
use pattern_core::pattern::Pattern;

use crate::classify;

/// Absolute confidence floor, independent of the tiered thresholds.
pub const CONFIDENCE_FLOOR: f64 = 0.4;
/// Context-match factor floor.
pub const CONTEXT_MATCH_FLOOR: f64 = 0.6;
/// Success rate that satisfies the quality requirement when gates exist.
pub const QUALITY_SUCCESS_FLOOR: f64 = 0.5;
/// Confidence floor for high-risk patterns.
pub const HIGH_RISK_CONFIDENCE_FLOOR: f64 = 0.7;
/// Confidence floor for medium-risk patterns.
pub const MEDIUM_RISK_CONFIDENCE_FLOOR: f64 = 0.5;
/// Confidence floor for everything else.
pub const LOW_RISK_CONFIDENCE_FLOOR: f64 = 0.3;
/// Minimum pattern age in days.
pub const MIN_AGE_DAYS: i64 = 7;
/// Minimum recorded applications.
pub const MIN_APPLICATIONS: u64 = 3;

/// Pattern types that carry medium inherent risk.
const MEDIUM_RISK_TYPES: &[&str] = &["architecture", "database", "infrastructure"];

/// Evaluate the five decision criteria for a scored pattern.
///
/// `gates_passed` is the opaque verdict from the external quality-gate
/// collaborator; `None` falls back to the internal heuristic (no gates
/// declared, or a success rate at or above 0.5).
pub fn evaluate(
    pattern: &Pattern,
    confidence: &ConfidenceResult,
    gates_passed: Option<bool>,
    now: DateTime<Utc>,
) -> DecisionCriteria {
    DecisionCriteria {
        confidence_met: confidence.score >= CONFIDENCE_FLOOR,
        context_match_met: confidence.factors.context_match >= CONTEXT_MATCH_FLOOR,
        quality_met: quality_requirement_met(pattern, gates_passed),
        risk_tolerance_met: risk_tolerance_met(pattern, confidence.score),
        business_rules_met: business_rules_met(pattern, now),
    }
}

fn quality_requirement_met(pattern: &Pattern, gates_passed: Option<bool>) -> bool {
    match gates_passed {
        Some(verdict) => verdict,
        None => pattern.quality_gates.is_empty() || pattern.success_rate >= QUALITY_SUCCESS_FLOOR,
    }
}

/// Risk-tier-dependent confidence floor: high-risk patterns need more
/// confidence before any action is eligible.
fn risk_tolerance_met(pattern: &Pattern, confidence: f64) -> bool {
    let floor = if classify::is_high_risk(pattern) {
        HIGH_RISK_CONFIDENCE_FLOOR
    } else if MEDIUM_RISK_TYPES
        .iter()
        .any(|t| pattern.metadata.pattern_type.eq_ignore_ascii_case(t))
    {
        MEDIUM_RISK_CONFIDENCE_FLOOR
    } else {
        LOW_RISK_CONFIDENCE_FLOOR
    };
    confidence >= floor
}

fn business_rules_met(pattern: &Pattern, now: DateTime<Utc>) -> bool {
    !pattern.metadata.deprecated
        && pattern.age_days(now) >= MIN_AGE_DAYS
        && pattern.metadata.usage_statistics.total_applications >= MIN_APPLICATIONS
}
