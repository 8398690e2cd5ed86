//! Rule-based operational guidance attached to every decision.

use pattern_core::models::{ConfidenceLevel, DecisionType, RiskAssessment, RiskLevel};
use pattern_core::pattern::Pattern;

/// Success rate below which a quality nudge is added.
const QUALITY_NUDGE_CEILING: f64 = 0.8;

/// Build the additive recommendation list for a decision.
pub fn generate(
    pattern: &Pattern,
    decision_type: DecisionType,
    confidence_level: ConfidenceLevel,
    risk: &RiskAssessment,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match confidence_level {
        ConfidenceLevel::High => {
            recommendations.push("confidence is high; prior applications support reuse".to_string())
        }
        ConfidenceLevel::Medium => recommendations
            .push("confidence is moderate; verify the outcome after applying".to_string()),
        ConfidenceLevel::Experimental => recommendations
            .push("confidence is experimental; restrict use to low-stakes changes".to_string()),
        ConfidenceLevel::Low => recommendations
            .push("confidence is low; gather more evidence before relying on this pattern".to_string()),
    }

    match risk.level {
        RiskLevel::High => recommendations
            .push("risk is high; require sign-off and apply the listed mitigations".to_string()),
        RiskLevel::Medium => recommendations
            .push("risk is moderate; review the listed mitigations before applying".to_string()),
        RiskLevel::Low => {}
    }

    match decision_type {
        DecisionType::AutoApply => {
            recommendations.push("set up automated monitoring for the applied change".to_string())
        }
        DecisionType::Recommend => {
            recommendations.push("present the recommendation with its rationale for approval".to_string())
        }
        DecisionType::Experiment => {
            recommendations.push("run the experiment behind a toggle with a defined exit criterion".to_string())
        }
        DecisionType::ReviewRequired => {
            recommendations.push("route to a reviewer; scores fall between the defined bands".to_string())
        }
        DecisionType::Reject => {
            recommendations.push("do not apply; revisit once the pattern earns more successful outcomes".to_string())
        }
    }

    if pattern.success_rate < QUALITY_NUDGE_CEILING {
        recommendations.push(format!(
            "success rate {:.2} is below 0.80; investigate recent failures",
            pattern.success_rate
        ));
    }

    recommendations
}
