use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{PatternError, PatternResult};

/// Time-based confidence decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Whether decay is applied at all.
    pub enabled: bool,
    /// Monthly compounding decay rate for idle patterns.
    pub decay_rate: f64,
    /// Days of idleness before compounding decay starts.
    pub usage_threshold_days: u64,
    /// Floor applied after decay.
    pub min_decay_confidence: f64,
    /// Step weights for the recency factor.
    pub recency_weights: RecencyWeights,
}

/// Step function of days-since-last-use, four tiers. Each tier must be
/// non-increasing: applying a pattern more recently never scores worse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecencyWeights {
    /// Applied within the last 7 days.
    pub within_week: f64,
    /// Applied within the last 30 days.
    pub within_month: f64,
    /// Applied within the last 90 days.
    pub within_quarter: f64,
    /// Applied more than 90 days ago.
    pub older: f64,
}

impl Default for RecencyWeights {
    fn default() -> Self {
        Self {
            within_week: defaults::DEFAULT_RECENCY_WITHIN_WEEK,
            within_month: defaults::DEFAULT_RECENCY_WITHIN_MONTH,
            within_quarter: defaults::DEFAULT_RECENCY_WITHIN_QUARTER,
            older: defaults::DEFAULT_RECENCY_OLDER,
        }
    }
}

impl RecencyWeights {
    /// Look up the weight for a given idle duration.
    pub fn for_days_idle(&self, days: f64) -> f64 {
        if days <= 7.0 {
            self.within_week
        } else if days <= 30.0 {
            self.within_month
        } else if days <= 90.0 {
            self.within_quarter
        } else {
            self.older
        }
    }

    fn validate(&self) -> PatternResult<()> {
        let tiers = [
            self.within_week,
            self.within_month,
            self.within_quarter,
            self.older,
        ];
        for w in tiers {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(PatternError::configuration(format!(
                    "recency weight {w} outside [0, 1]"
                )));
            }
        }
        if tiers.windows(2).any(|pair| pair[1] > pair[0]) {
            return Err(PatternError::configuration(
                "recency weights must be non-increasing across tiers",
            ));
        }
        Ok(())
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            usage_threshold_days: defaults::DEFAULT_USAGE_THRESHOLD_DAYS,
            min_decay_confidence: defaults::DEFAULT_MIN_DECAY_CONFIDENCE,
            recency_weights: RecencyWeights::default(),
        }
    }
}

impl DecayConfig {
    pub fn validate(&self) -> PatternResult<()> {
        if !self.decay_rate.is_finite() || !(0.0..1.0).contains(&self.decay_rate) {
            return Err(PatternError::configuration(format!(
                "decay_rate {} outside [0, 1)",
                self.decay_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.min_decay_confidence) {
            return Err(PatternError::configuration(format!(
                "min_decay_confidence {} outside [0, 1]",
                self.min_decay_confidence
            )));
        }
        self.recency_weights.validate()
    }
}
