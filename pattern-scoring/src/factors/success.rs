use pattern_core::pattern::Pattern;

/// Minimum applications before the historical rate counts as evidence.
pub const MIN_EVIDENCE_APPLICATIONS: u64 = 3;
/// Rate above which gains are halved.
const DIMINISHING_KNEE: f64 = 0.95;

/// Success-rate factor.
///
/// Fewer than 3 recorded applications is insufficient evidence: the
/// configured initial confidence is returned instead. Above 0.95 the rate
/// earns diminishing returns (`0.95 + (rate - 0.95) × 0.5`) so a handful
/// of lucky applications cannot saturate the ceiling.
pub fn calculate(pattern: &Pattern, initial_confidence: f64) -> f64 {
    if pattern.metadata.usage_statistics.total_applications < MIN_EVIDENCE_APPLICATIONS {
        return initial_confidence;
    }

    let rate = pattern.success_rate;
    if rate > DIMINISHING_KNEE {
        DIMINISHING_KNEE + (rate - DIMINISHING_KNEE) * 0.5
    } else {
        rate
    }
}
