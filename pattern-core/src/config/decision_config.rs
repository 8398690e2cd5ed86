use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{PatternError, PatternResult};

/// Decision-engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Tiered confidence thresholds for classification.
    pub thresholds: DecisionThresholds,
    /// Risk-score tier boundaries.
    pub risk_thresholds: RiskThresholds,
    /// Bounded decision-history capacity.
    pub history_capacity: usize,
    /// When set, the experiment band classifies as review_required.
    pub conservative_mode: bool,
}

/// Confidence tier floors. Must be strictly decreasing:
/// `auto_apply > recommend > experimental > deprecated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    pub auto_apply: f64,
    pub recommend: f64,
    pub experimental: f64,
    pub deprecated: f64,
}

/// Boundaries for tiering a risk score into low/medium/high.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// At or above this, risk is "medium".
    pub medium: f64,
    /// At or above this, risk is "high".
    pub high: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            auto_apply: defaults::DEFAULT_AUTO_APPLY_THRESHOLD,
            recommend: defaults::DEFAULT_RECOMMEND_THRESHOLD,
            experimental: defaults::DEFAULT_EXPERIMENTAL_THRESHOLD,
            deprecated: defaults::DEFAULT_DEPRECATED_THRESHOLD,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: defaults::DEFAULT_MEDIUM_RISK_THRESHOLD,
            high: defaults::DEFAULT_HIGH_RISK_THRESHOLD,
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            thresholds: DecisionThresholds::default(),
            risk_thresholds: RiskThresholds::default(),
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
            conservative_mode: false,
        }
    }
}

impl DecisionThresholds {
    pub fn validate(&self) -> PatternResult<()> {
        let ordered = self.auto_apply > self.recommend
            && self.recommend > self.experimental
            && self.experimental > self.deprecated;
        if !ordered {
            return Err(PatternError::configuration(format!(
                "decision thresholds must be strictly decreasing: \
                 auto_apply {} > recommend {} > experimental {} > deprecated {}",
                self.auto_apply, self.recommend, self.experimental, self.deprecated
            )));
        }
        for t in [
            self.auto_apply,
            self.recommend,
            self.experimental,
            self.deprecated,
        ] {
            if !t.is_finite() || !(0.0..=1.0).contains(&t) {
                return Err(PatternError::configuration(format!(
                    "decision threshold {t} outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl DecisionConfig {
    pub fn validate(&self) -> PatternResult<()> {
        self.thresholds.validate()?;
        if self.risk_thresholds.medium >= self.risk_thresholds.high {
            return Err(PatternError::configuration(format!(
                "medium risk threshold {} must be below high risk threshold {}",
                self.risk_thresholds.medium, self.risk_thresholds.high
            )));
        }
        if self.history_capacity == 0 {
            return Err(PatternError::configuration(
                "history_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DecisionConfig::default().validate().is_ok());
    }

    #[test]
    fn unordered_thresholds_rejected() {
        let config = DecisionConfig {
            thresholds: DecisionThresholds {
                auto_apply: 0.5,
                recommend: 0.6,
                experimental: 0.4,
                deprecated: 0.2,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
