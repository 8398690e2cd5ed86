use chrono::{DateTime, Utc};
use pattern_core::config::ScoringConfig;
use pattern_core::context::Context;
use pattern_core::models::FactorScores;
use pattern_core::pattern::Pattern;

use crate::factors;

/// Compute the five factor scores for a pattern in a context.
///
/// Each factor is independently bounded to [0.0, 1.0]; sparse usage data
/// resolves to neutral values rather than errors.
pub fn compute_factors(
    pattern: &Pattern,
    context: &Context,
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> FactorScores {
    FactorScores {
        success_rate: factors::success::calculate(pattern, config.initial_confidence),
        recency: factors::recency::calculate(pattern, &config.decay.recency_weights, now),
        context_match: factors::context_match::calculate(pattern, context),
        diversity: factors::diversity::calculate(pattern),
        quality_impact: factors::quality::calculate(pattern),
    }
}

/// Combine factors with the configured weights.
///
/// The weights are tunables and need not sum to 1.0; the caller applies
/// decay and clamps to the configured bounds afterwards.
pub fn combine(factors: &FactorScores, config: &ScoringConfig) -> f64 {
    factors.weighted_sum(&config.context_weights)
}
