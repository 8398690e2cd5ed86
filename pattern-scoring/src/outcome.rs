//! Outcome-driven confidence adaptation: the only write path.

use chrono::{DateTime, Utc};
use pattern_core::config::ScoringConfig;
use pattern_core::context::Context;
use pattern_core::errors::PatternResult;
use pattern_core::models::OutcomeUpdate;
use pattern_core::pattern::{Confidence, Pattern};
use tracing::info;

use crate::factors::context_match;

/// Quality impact beyond which the adjustment earns a half-step bonus
/// or penalty.
const QUALITY_IMPACT_BAND: f64 = 0.1;
/// Context-match factor above which the adjustment is scaled up 10%.
const WELL_MATCHED_FLOOR: f64 = 0.8;
/// Context-match factor below which the adjustment is scaled down 10%.
const POORLY_MATCHED_CEILING: f64 = 0.5;

/// Nudge a pattern's stored confidence after a real-world application.
///
/// The raw adjustment is `±increment/decrement`, widened by half a step
/// when the observed quality impact is clearly positive or negative, then
/// scaled ±10% by how well the application's context matched the pattern.
/// The stored confidence moves only `adaptation_rate` of the way toward
/// `current + adjustment`, so one outcome never swings the trust signal
/// sharply. Usage counters, the running quality-impact mean,
/// `success_rate`, and `last_applied` are updated alongside.
///
/// The caller is responsible for persisting the mutated pattern.
pub fn update_from_outcome(
    config: &ScoringConfig,
    pattern: &mut Pattern,
    success: bool,
    quality_impact: f64,
    context: &Context,
    now: DateTime<Utc>,
) -> PatternResult<OutcomeUpdate> {
    pattern.validate()?;

    let mut adjustment = if success {
        let mut adj = config.success_increment;
        if quality_impact > QUALITY_IMPACT_BAND {
            adj += config.success_increment * 0.5;
        }
        adj
    } else {
        let mut adj = -config.failure_decrement;
        if quality_impact < -QUALITY_IMPACT_BAND {
            adj -= config.failure_decrement * 0.5;
        }
        adj
    };

    // Outcomes observed in well-matched contexts carry more signal.
    let match_factor = context_match::calculate(pattern, context);
    if match_factor > WELL_MATCHED_FLOOR {
        adjustment *= 1.1;
    } else if match_factor < POORLY_MATCHED_CEILING {
        adjustment *= 0.9;
    }

    let previous = pattern.confidence_score.value();
    let target = previous + adjustment;
    let smoothed = previous + (target - previous) * config.adaptation_rate;
    let new_confidence = config.clamp(smoothed);

    pattern.confidence_score = Confidence::new(new_confidence);
    pattern
        .metadata
        .usage_statistics
        .record_application(success, quality_impact, now);
    pattern.success_rate = pattern.metadata.usage_statistics.observed_success_rate();

    info!(
        pattern_id = %pattern.id,
        success,
        previous,
        new_confidence,
        "confidence updated from outcome"
    );

    Ok(OutcomeUpdate {
        pattern_id: pattern.id.clone(),
        previous_confidence: previous,
        new_confidence,
        adjustment,
        target_confidence: target,
        success,
        quality_impact,
        timestamp: now,
    })
}
