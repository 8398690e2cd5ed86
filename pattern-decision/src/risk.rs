//! Additive risk assessment, independent of confidence.

use pattern_core::config::RiskThresholds;
use pattern_core::context::{self, Context};
use pattern_core::models::{DecisionType, RiskAssessment, RiskLevel};
use pattern_core::pattern::Pattern;

/// Confidence below which the low-confidence factor triggers.
const LOW_CONFIDENCE_CEILING: f64 = 0.6;
/// Context complexity above which the complexity factor triggers.
const COMPLEXITY_CEILING: f64 = 0.7;
/// Historical failure rate above which the failure factor triggers.
const FAILURE_RATE_CEILING: f64 = 0.2;
/// Field count at which the complexity proxy saturates.
const COMPLEXITY_SATURATION_FIELDS: f64 = 10.0;

/// Assess the risk of acting on a decision. Never errors: missing data
/// contributes no risk rather than failing the call.
pub fn assess(
    pattern: &Pattern,
    context: &Context,
    confidence: f64,
    decision_type: DecisionType,
    thresholds: &RiskThresholds,
) -> RiskAssessment {
    let mut score: f64 = 0.0;
    let mut factors = Vec::new();
    let mut mitigations = Vec::new();

    if confidence < LOW_CONFIDENCE_CEILING {
        score += 0.3;
        factors.push("low_confidence".to_string());
        mitigations.push("validate the pattern manually before applying".to_string());
    }

    if pattern
        .metadata
        .pattern_type
        .eq_ignore_ascii_case("security")
    {
        score += 0.2;
        factors.push("security_pattern".to_string());
        mitigations.push("request a security review of the change".to_string());
    }

    if context_complexity(context) > COMPLEXITY_CEILING {
        score += 0.2;
        factors.push("high_context_complexity".to_string());
        mitigations.push("stage the rollout and monitor each step".to_string());
    }

    if failure_rate(pattern) > FAILURE_RATE_CEILING {
        score += 0.2;
        factors.push("high_failure_rate".to_string());
        mitigations.push("review recent failures before reusing this pattern".to_string());
    }

    // Automatic application is inherently riskier than a reviewed
    // recommendation.
    if decision_type == DecisionType::AutoApply {
        score += 0.1;
        factors.push("automated_application".to_string());
        mitigations.push("keep a rollback path ready".to_string());
    }

    let score = score.clamp(0.0, 1.0);
    RiskAssessment {
        score,
        level: tier(score, thresholds),
        factors,
        mitigation_strategies: mitigations,
    }
}

/// Context complexity proxy: normalized field count, bumped when any key
/// looks sensitive.
pub fn context_complexity(context: &Context) -> f64 {
    if context.is_empty() {
        return 0.0;
    }
    let field_component = (context.len() as f64 / COMPLEXITY_SATURATION_FIELDS).min(0.7);
    let sensitive_bump = if context.keys().any(|k| context::is_sensitive_key(k)) {
        0.3
    } else {
        0.0
    };
    (field_component + sensitive_bump).min(1.0)
}

/// Historical failure rate from usage counters; falls back to the stored
/// success rate for patterns with no counters.
fn failure_rate(pattern: &Pattern) -> f64 {
    let stats = &pattern.metadata.usage_statistics;
    if stats.total_applications == 0 {
        1.0 - pattern.success_rate
    } else {
        stats.failed_applications as f64 / stats.total_applications as f64
    }
}

fn tier(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score >= thresholds.high {
        RiskLevel::High
    } else if score >= thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
