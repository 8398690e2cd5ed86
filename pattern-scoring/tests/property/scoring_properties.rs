use chrono::{Duration, Utc};
use pattern_core::config::ScoringConfig;
use pattern_core::context::Context;
use pattern_core::pattern::*;
use pattern_scoring::outcome::update_from_outcome;
use pattern_scoring::ConfidenceScorer;
use proptest::prelude::*;

fn make_pattern(
    confidence: f64,
    success_rate: f64,
    total: u64,
    days_ago: Option<i64>,
) -> Pattern {
    let now = Utc::now();
    let successful = (total as f64 * success_rate).round() as u64;
    Pattern {
        id: "pat-prop".to_string(),
        name: "test pattern".to_string(),
        description: String::new(),
        success_rate,
        confidence_score: Confidence::new(confidence),
        context_match: ContextMatchRules {
            required_fields: vec!["framework".into()],
            optional_fields: vec!["database".into()],
            excluded_fields: vec!["legacy".into()],
            similarity_threshold: 0.2,
        },
        quality_gates: vec![],
        metadata: PatternMetadata {
            created_at: now - Duration::days(120),
            usage_statistics: UsageStatistics {
                total_applications: total,
                successful_applications: successful.min(total),
                failed_applications: total - successful.min(total),
                average_quality_impact: 0.0,
                last_applied: days_ago.map(|d| now - Duration::days(d)),
            },
            ..Default::default()
        },
    }
}

fn arb_context() -> impl Strategy<Value = Context> {
    proptest::collection::hash_map(
        prop_oneof![
            Just("framework".to_string()),
            Just("database".to_string()),
            Just("legacy".to_string()),
            "[a-z]{3,8}",
        ],
        Just(serde_json::json!(true)),
        0..6,
    )
}

// ── Score and factor bounds ──────────────────────────────────────────────

proptest! {
    #[test]
    fn score_and_factors_always_bounded(
        confidence in 0.0f64..=1.0,
        success_rate in 0.0f64..=1.0,
        total in 0u64..500,
        days_ago in proptest::option::of(0i64..1000),
        context in arb_context(),
    ) {
        let config = ScoringConfig::default();
        let scorer = ConfidenceScorer::new(config.clone()).unwrap();
        let pattern = make_pattern(confidence, success_rate, total, days_ago);

        let result = scorer.calculate_confidence(&pattern, &context).unwrap();
        prop_assert!(result.score >= config.min_confidence);
        prop_assert!(result.score <= config.max_confidence);
        prop_assert!(result.factors.all_bounded());
    }
}

// ── Read-path idempotence ────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_inputs_give_identical_scores(
        confidence in 0.0f64..=1.0,
        success_rate in 0.0f64..=1.0,
        total in 0u64..500,
        context in arb_context(),
    ) {
        let scorer = ConfidenceScorer::new(ScoringConfig::default()).unwrap();
        let pattern = make_pattern(confidence, success_rate, total, Some(10));
        let now = Utc::now();

        let first = scorer.calculate_confidence_at(&pattern, &context, now).unwrap();
        let second = scorer.calculate_confidence_at(&pattern, &context, now).unwrap();
        prop_assert_eq!(first.score, second.score);
    }
}

// ── Outcome monotonicity ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn success_never_scores_below_failure(
        confidence in 0.0f64..=1.0,
        quality in -1.0f64..=1.0,
        context in arb_context(),
    ) {
        let config = ScoringConfig::default();
        let now = Utc::now();

        let mut succeeded = make_pattern(confidence, 0.8, 10, Some(5));
        let mut failed = succeeded.clone();
        update_from_outcome(&config, &mut succeeded, true, quality, &context, now).unwrap();
        update_from_outcome(&config, &mut failed, false, quality, &context, now).unwrap();

        prop_assert!(
            succeeded.confidence_score.value() >= failed.confidence_score.value()
        );
    }
}

// ── Decay ordering ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fresher_patterns_never_score_below_staler_ones(
        confidence in 0.1f64..=1.0,
        fresh_days in 0i64..30,
        stale_days in 100i64..1000,
    ) {
        let scorer = ConfidenceScorer::new(ScoringConfig::default()).unwrap();
        let now = Utc::now();
        let fresh = make_pattern(confidence, 0.8, 10, Some(fresh_days));
        let stale = make_pattern(confidence, 0.8, 10, Some(stale_days));

        let fresh_score = scorer
            .calculate_confidence_at(&fresh, &Context::new(), now)
            .unwrap()
            .score;
        let stale_score = scorer
            .calculate_confidence_at(&stale, &Context::new(), now)
            .unwrap()
            .score;
        prop_assert!(stale_score <= fresh_score + f64::EPSILON);
    }
}
