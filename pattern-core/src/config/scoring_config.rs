use serde::{Deserialize, Serialize};

use super::decay_config::DecayConfig;
use super::defaults;
use crate::errors::{PatternError, PatternResult};

/// Confidence-scoring configuration. Assumed already parsed by the caller's
/// configuration layer; this core never reads files or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Confidence assigned when evidence is insufficient.
    pub initial_confidence: f64,
    /// Adjustment applied for a successful outcome.
    pub success_increment: f64,
    /// Adjustment applied for a failed outcome.
    pub failure_decrement: f64,
    /// Lower bound for any reported or stored confidence.
    pub min_confidence: f64,
    /// Upper bound for any reported or stored confidence.
    pub max_confidence: f64,
    /// Fraction of the outcome adjustment applied per update (smoothing).
    pub adaptation_rate: f64,
    /// Per-factor weights for the confidence formula.
    pub context_weights: ContextWeights,
    /// Time-based decay parameters.
    pub decay: DecayConfig,
}

/// Weights for the five confidence factors.
///
/// These are tunables, not a normalized distribution: they are not required
/// to sum to 1.0 because the combined score is clamped afterwards, so over-
/// or under-weighting only shifts emphasis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextWeights {
    pub success_rate: f64,
    pub recency: f64,
    pub context_match: f64,
    pub diversity: f64,
    pub quality_impact: f64,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            success_rate: defaults::DEFAULT_SUCCESS_WEIGHT,
            recency: defaults::DEFAULT_RECENCY_WEIGHT,
            context_match: defaults::DEFAULT_CONTEXT_WEIGHT,
            diversity: defaults::DEFAULT_DIVERSITY_WEIGHT,
            quality_impact: defaults::DEFAULT_QUALITY_WEIGHT,
        }
    }
}

impl ContextWeights {
    fn validate(&self) -> PatternResult<()> {
        let weights = [
            ("success_rate", self.success_rate),
            ("recency", self.recency),
            ("context_match", self.context_match),
            ("diversity", self.diversity),
            ("quality_impact", self.quality_impact),
        ];
        for (name, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(PatternError::configuration(format!(
                    "context weight '{name}' must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            initial_confidence: defaults::DEFAULT_INITIAL_CONFIDENCE,
            success_increment: defaults::DEFAULT_SUCCESS_INCREMENT,
            failure_decrement: defaults::DEFAULT_FAILURE_DECREMENT,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            max_confidence: defaults::DEFAULT_MAX_CONFIDENCE,
            adaptation_rate: defaults::DEFAULT_ADAPTATION_RATE,
            context_weights: ContextWeights::default(),
            decay: DecayConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Check all parameters. Must pass before any scoring proceeds.
    pub fn validate(&self) -> PatternResult<()> {
        if !(0.0..=1.0).contains(&self.initial_confidence) {
            return Err(PatternError::configuration(format!(
                "initial_confidence {} outside [0, 1]",
                self.initial_confidence
            )));
        }
        if self.min_confidence >= self.max_confidence {
            return Err(PatternError::configuration(format!(
                "min_confidence {} must be below max_confidence {}",
                self.min_confidence, self.max_confidence
            )));
        }
        for (name, rate) in [
            ("success_increment", self.success_increment),
            ("failure_decrement", self.failure_decrement),
            ("adaptation_rate", self.adaptation_rate),
        ] {
            if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
                return Err(PatternError::configuration(format!(
                    "{name} must be in (0, 1], got {rate}"
                )));
            }
        }
        self.context_weights.validate()?;
        self.decay.validate()
    }

    /// Clamp a raw confidence value to the configured bounds.
    pub fn clamp(&self, confidence: f64) -> f64 {
        confidence.clamp(self.min_confidence, self.max_confidence)
    }
}
