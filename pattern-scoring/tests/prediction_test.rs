use chrono::Utc;
use pattern_core::config::ScoringConfig;
use pattern_core::pattern::*;
use pattern_scoring::predict_future_confidence;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_pattern(confidence: f64, success_rate: f64) -> Pattern {
    Pattern {
        id: "pat-prediction-test".to_string(),
        name: "introduce connection pooling".to_string(),
        description: String::new(),
        success_rate,
        confidence_score: Confidence::new(confidence),
        context_match: ContextMatchRules::default(),
        quality_gates: vec![],
        metadata: PatternMetadata {
            created_at: Utc::now(),
            ..Default::default()
        },
    }
}

#[test]
fn projection_stays_within_configured_bounds() {
    let config = ScoringConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    for success_rate in [0.0, 0.3, 0.7, 1.0] {
        let pattern = make_pattern(0.5, success_rate);
        let prediction = predict_future_confidence(&pattern, &config, 100, &mut rng);
        assert!(prediction.projected >= config.min_confidence);
        assert!(prediction.projected <= config.max_confidence);
        assert_eq!(prediction.simulated_runs, 100);
    }
}

#[test]
fn certain_success_projects_upward() {
    let config = ScoringConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let pattern = make_pattern(0.5, 1.0);
    let prediction = predict_future_confidence(&pattern, &config, 20, &mut rng);
    assert!(prediction.delta > 0.0);
}

#[test]
fn certain_failure_projects_downward() {
    let config = ScoringConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let pattern = make_pattern(0.5, 0.0);
    let prediction = predict_future_confidence(&pattern, &config, 20, &mut rng);
    assert!(prediction.delta < 0.0);
}

#[test]
fn zero_runs_is_identity() {
    let config = ScoringConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let pattern = make_pattern(0.5, 0.8);
    let prediction = predict_future_confidence(&pattern, &config, 0, &mut rng);
    assert_eq!(prediction.current, prediction.projected);
    assert_eq!(prediction.delta, 0.0);
}
