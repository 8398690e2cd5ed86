use pattern_core::pattern::Pattern;

use super::NEUTRAL;

/// Applications needed before diversity counts as evidence.
pub const MIN_DIVERSITY_APPLICATIONS: u64 = 5;
/// Applications at which the diversity proxy saturates.
const SATURATION_APPLICATIONS: f64 = 10.0;

/// Diversity factor: a proxy for "has this worked across enough distinct
/// situations." Neutral until 5 applications are recorded, then
/// `min(1, applications/10) × success_rate`.
pub fn calculate(pattern: &Pattern) -> f64 {
    let total = pattern.metadata.usage_statistics.total_applications;
    if total < MIN_DIVERSITY_APPLICATIONS {
        return NEUTRAL;
    }
    let breadth = (total as f64 / SATURATION_APPLICATIONS).min(1.0);
    (breadth * pattern.success_rate).clamp(0.0, 1.0)
}
