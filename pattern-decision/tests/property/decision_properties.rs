use chrono::{Duration, Utc};
use pattern_core::config::{DecisionConfig, DecisionThresholds, ScoringConfig};
use pattern_core::context::Context;
use pattern_core::models::DecisionType;
use pattern_core::pattern::*;
use pattern_decision::{classify, DecisionEngine, DecisionOptions};
use proptest::prelude::*;

fn make_pattern(
    confidence: f64,
    success_rate: f64,
    total: u64,
    pattern_type: &str,
) -> Pattern {
    let now = Utc::now();
    let successful = (total as f64 * success_rate).round() as u64;
    Pattern {
        id: "pat-prop".to_string(),
        name: "candidate pattern".to_string(),
        description: String::new(),
        success_rate,
        confidence_score: Confidence::new(confidence),
        context_match: ContextMatchRules {
            required_fields: vec!["framework".into()],
            optional_fields: vec![],
            excluded_fields: vec![],
            similarity_threshold: 0.2,
        },
        quality_gates: vec![],
        metadata: PatternMetadata {
            pattern_type: pattern_type.into(),
            created_at: now - Duration::days(60),
            usage_statistics: UsageStatistics {
                total_applications: total,
                successful_applications: successful.min(total),
                failed_applications: total - successful.min(total),
                average_quality_impact: 0.0,
                last_applied: (total > 0).then(|| now - Duration::days(3)),
            },
            ..Default::default()
        },
    }
}

fn arb_context() -> impl Strategy<Value = Context> {
    proptest::collection::hash_map("[a-z]{3,10}", Just(serde_json::json!(1)), 0..12)
}

// ── Risk score bounds ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn risk_score_is_always_bounded(
        confidence in 0.0f64..=1.0,
        success_rate in 0.0f64..=1.0,
        total in 0u64..200,
        context in arb_context(),
    ) {
        let mut engine =
            DecisionEngine::new(ScoringConfig::default(), DecisionConfig::default()).unwrap();
        let pattern = make_pattern(confidence, success_rate, total, "general");
        let outcome = engine
            .make_decision(&pattern, &context, &DecisionOptions::default())
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&outcome.risk_assessment.score));
        prop_assert!((0.0..=1.0).contains(&outcome.decision.criteria_score));
    }
}

// ── High-risk override ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn security_patterns_are_never_auto_applied(
        confidence in 0.0f64..=1.0,
        success_rate in 0.0f64..=1.0,
        total in 0u64..200,
        context in arb_context(),
    ) {
        let mut engine =
            DecisionEngine::new(ScoringConfig::default(), DecisionConfig::default()).unwrap();
        let pattern = make_pattern(confidence, success_rate, total, "security");
        let outcome = engine
            .make_decision(&pattern, &context, &DecisionOptions::default())
            .unwrap();
        prop_assert_ne!(outcome.decision.decision_type, DecisionType::AutoApply);
    }
}

// ── Reject floor ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sub_floor_confidence_always_rejects(
        criteria_conf in 0.0f64..0.399,
        total in 0u64..200,
    ) {
        let pattern = make_pattern(0.5, 0.8, total, "general");
        let decision_type = classify::determine(&pattern, criteria_conf, 1.0, false);
        prop_assert_eq!(decision_type, DecisionType::Reject);
    }
}

// ── Confidence levels exhaust the threshold range ────────────────────────

proptest! {
    #[test]
    fn confidence_level_is_total_over_scores(score in 0.0f64..=1.0) {
        // Mapping must never panic and must be monotonic with the score.
        let thresholds = DecisionThresholds::default();
        let level = classify::confidence_level(score, &thresholds);
        let higher = classify::confidence_level((score + 0.1).min(1.0), &thresholds);
        let rank = |l| match l {
            pattern_core::models::ConfidenceLevel::High => 3,
            pattern_core::models::ConfidenceLevel::Medium => 2,
            pattern_core::models::ConfidenceLevel::Experimental => 1,
            pattern_core::models::ConfidenceLevel::Low => 0,
        };
        prop_assert!(rank(higher) >= rank(level));
    }
}
