//! Monte Carlo confidence projection.
//!
//! Intentionally randomized: each call draws fresh success/failure
//! outcomes, so two calls with the same inputs will generally differ.
//! This is an exploratory bound, never part of the decision path; the
//! decision engine does not call into this module.

use pattern_core::config::ScoringConfig;
use pattern_core::models::PredictedConfidence;
use pattern_core::pattern::Pattern;
use rand::Rng;

/// Simulate `runs` future applications of a pattern.
///
/// Each synthetic application draws success or failure against the
/// pattern's current `success_rate` and applies the raw
/// increment/decrement step. No adaptation-rate smoothing is applied:
/// this estimates where repeated raw outcomes would push confidence,
/// not what the live update path would record.
pub fn predict_future_confidence<R: Rng>(
    pattern: &Pattern,
    config: &ScoringConfig,
    runs: u32,
    rng: &mut R,
) -> PredictedConfidence {
    let current = pattern.confidence_score.value();
    let mut projected = current;

    for _ in 0..runs {
        let success = rng.gen_bool(pattern.success_rate.clamp(0.0, 1.0));
        if success {
            projected += config.success_increment;
        } else {
            projected -= config.failure_decrement;
        }
        projected = config.clamp(projected);
    }

    PredictedConfidence {
        current,
        projected,
        delta: projected - current,
        simulated_runs: runs,
    }
}
