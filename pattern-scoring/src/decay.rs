use chrono::{DateTime, Utc};
use pattern_core::config::DecayConfig;
use pattern_core::config::defaults::NEVER_USED_PENALTY;
use pattern_core::pattern::Pattern;

/// Days per compounding period.
const COMPOUNDING_PERIOD_DAYS: f64 = 30.0;

/// Apply time-based decay to a combined confidence value.
///
/// Runs after the weighted sum and before the final clamp:
/// - never-applied patterns take a flat ×0.8 penalty;
/// - patterns idle beyond `usage_threshold_days` decay by
///   `(1 - decay_rate)^floor(days_idle / 30)`, monthly compounding,
///   floored at `min_decay_confidence`.
pub fn apply(
    confidence: f64,
    pattern: &Pattern,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> f64 {
    if !config.enabled {
        return confidence;
    }

    match pattern.days_since_last_applied(now) {
        None => confidence * NEVER_USED_PENALTY,
        Some(days_idle) => {
            if days_idle <= config.usage_threshold_days as f64 {
                return confidence;
            }
            let periods = (days_idle / COMPOUNDING_PERIOD_DAYS).floor();
            let decayed = confidence * (1.0 - config.decay_rate).powf(periods);
            decayed.max(config.min_decay_confidence)
        }
    }
}
