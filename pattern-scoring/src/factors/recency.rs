use chrono::{DateTime, Utc};
use pattern_core::config::decay_config::RecencyWeights;
use pattern_core::pattern::Pattern;

use super::NEUTRAL;

/// Recency factor: step function of days since last application.
///
/// Never-applied patterns score a neutral 0.5. The tier weights are
/// configured and validated to be non-increasing with idle time.
pub fn calculate(pattern: &Pattern, weights: &RecencyWeights, now: DateTime<Utc>) -> f64 {
    match pattern.days_since_last_applied(now) {
        Some(days) => weights.for_days_idle(days).clamp(0.0, 1.0),
        None => NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pattern_core::pattern::{Confidence, ContextMatchRules, PatternMetadata, UsageStatistics};

    fn pattern_applied_days_ago(days: Option<i64>) -> Pattern {
        let now = Utc::now();
        Pattern {
            id: "p".into(),
            name: "test".into(),
            description: String::new(),
            success_rate: 0.8,
            confidence_score: Confidence::new(0.5),
            context_match: ContextMatchRules::default(),
            quality_gates: vec![],
            metadata: PatternMetadata {
                usage_statistics: UsageStatistics {
                    last_applied: days.map(|d| now - Duration::days(d)),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn never_applied_is_neutral() {
        let p = pattern_applied_days_ago(None);
        assert_eq!(calculate(&p, &RecencyWeights::default(), Utc::now()), NEUTRAL);
    }

    #[test]
    fn tiers_step_down_with_idle_time() {
        let weights = RecencyWeights::default();
        let now = Utc::now();
        let recent = calculate(&pattern_applied_days_ago(Some(2)), &weights, now);
        let month = calculate(&pattern_applied_days_ago(Some(20)), &weights, now);
        let quarter = calculate(&pattern_applied_days_ago(Some(60)), &weights, now);
        let stale = calculate(&pattern_applied_days_ago(Some(200)), &weights, now);
        assert!(recent >= month && month >= quarter && quarter >= stale);
    }
}
