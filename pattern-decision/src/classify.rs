//! Threshold-based classification of a scored pattern into a decision
//! type and confidence level.

use pattern_core::config::DecisionThresholds;
use pattern_core::models::{ConfidenceLevel, DecisionType};
use pattern_core::pattern::Pattern;

/// Pattern categories where automation is never permitted.
const HIGH_RISK_TYPES: &[&str] = &["security", "deployment"];
/// Name fragments that mark a pattern high-risk regardless of category.
const HIGH_RISK_NAME_MARKERS: &[&str] = &["security", "deploy"];

/// Whether a pattern belongs to a high-risk category. These are never
/// auto-applied regardless of score.
pub fn is_high_risk(pattern: &Pattern) -> bool {
    let pattern_type = pattern.metadata.pattern_type.to_lowercase();
    if HIGH_RISK_TYPES.iter().any(|t| pattern_type == *t) {
        return true;
    }
    let name = pattern.name.to_lowercase();
    HIGH_RISK_NAME_MARKERS.iter().any(|m| name.contains(m))
}

/// Classify confidence and criteria score into a decision type.
///
/// The bands are deliberate and leave a gap: a pair that clears the
/// reject floor but reaches no positive band needs human review.
pub fn determine(
    pattern: &Pattern,
    confidence: f64,
    criteria_score: f64,
    conservative: bool,
) -> DecisionType {
    let provisional = if confidence >= 0.8 && criteria_score >= 0.8 {
        DecisionType::AutoApply
    } else if confidence >= 0.6 && criteria_score >= 0.7 {
        DecisionType::Recommend
    } else if confidence >= 0.4 && criteria_score >= 0.6 && !conservative {
        DecisionType::Experiment
    } else if confidence < 0.4 || criteria_score < 0.5 {
        DecisionType::Reject
    } else {
        DecisionType::ReviewRequired
    };

    // Automation is never permitted for high-risk categories.
    if provisional == DecisionType::AutoApply && is_high_risk(pattern) {
        DecisionType::Recommend
    } else {
        provisional
    }
}

/// Map a confidence score onto the configured tier thresholds.
pub fn confidence_level(score: f64, thresholds: &DecisionThresholds) -> ConfidenceLevel {
    if score >= thresholds.auto_apply {
        ConfidenceLevel::High
    } else if score >= thresholds.recommend {
        ConfidenceLevel::Medium
    } else if score >= thresholds.experimental {
        ConfidenceLevel::Experimental
    } else {
        ConfidenceLevel::Low
    }
}

/// Human-readable explanation of a classification.
pub fn rationale(
    pattern: &Pattern,
    decision_type: DecisionType,
    confidence: f64,
    criteria_score: f64,
) -> String {
    let base = format!(
        "confidence {confidence:.2}, criteria {criteria_score:.2} for pattern '{}'",
        pattern.name
    );
    match decision_type {
        DecisionType::AutoApply => {
            format!("{base}: both clear the automation band")
        }
        DecisionType::Recommend => {
            if is_high_risk(pattern) && confidence >= 0.8 && criteria_score >= 0.8 {
                format!("{base}: automation band reached but the pattern is high-risk; downgraded to recommendation")
            } else {
                format!("{base}: clears the recommendation band")
            }
        }
        DecisionType::Experiment => {
            format!("{base}: suitable for a controlled experiment")
        }
        DecisionType::ReviewRequired => {
            format!("{base}: falls between the defined bands; human review required")
        }
        DecisionType::Reject => {
            format!("{base}: below the rejection floor")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pattern_core::pattern::*;

    fn pattern_named(name: &str, pattern_type: &str) -> Pattern {
        Pattern {
            id: "pat-classify".into(),
            name: name.into(),
            description: String::new(),
            success_rate: 0.9,
            confidence_score: Confidence::new(0.9),
            context_match: ContextMatchRules::default(),
            quality_gates: vec![],
            metadata: PatternMetadata {
                pattern_type: pattern_type.into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn band_table_matches_the_contract() {
        let p = pattern_named("extract module", "refactoring");
        assert_eq!(determine(&p, 0.85, 0.9, false), DecisionType::AutoApply);
        assert_eq!(determine(&p, 0.65, 0.8, false), DecisionType::Recommend);
        assert_eq!(determine(&p, 0.5, 0.6, false), DecisionType::Experiment);
        assert_eq!(determine(&p, 0.3, 0.9, false), DecisionType::Reject);
        assert_eq!(determine(&p, 0.9, 0.4, false), DecisionType::Reject);
        // The deliberate gap: confidence 0.5, criteria 0.5.
        assert_eq!(determine(&p, 0.5, 0.5, false), DecisionType::ReviewRequired);
    }

    #[test]
    fn conservative_mode_blocks_experiments() {
        let p = pattern_named("extract module", "refactoring");
        assert_eq!(
            determine(&p, 0.5, 0.6, true),
            DecisionType::ReviewRequired
        );
    }

    #[test]
    fn security_type_is_never_auto_applied() {
        let p = pattern_named("harden session cookies", "security");
        assert_eq!(determine(&p, 0.95, 0.95, false), DecisionType::Recommend);
    }

    #[test]
    fn deploy_in_the_name_is_high_risk() {
        let p = pattern_named("blue-green deploy rollout", "workflow");
        assert!(is_high_risk(&p));
        assert_eq!(determine(&p, 0.9, 0.9, false), DecisionType::Recommend);
    }

    #[test]
    fn confidence_levels_follow_thresholds() {
        let t = pattern_core::config::DecisionThresholds::default();
        assert_eq!(confidence_level(0.85, &t), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.7, &t), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.5, &t), ConfidenceLevel::Experimental);
        assert_eq!(confidence_level(0.2, &t), ConfidenceLevel::Low);
    }
}
