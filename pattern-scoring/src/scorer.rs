use chrono::{DateTime, Utc};
use pattern_core::config::ScoringConfig;
use pattern_core::context::Context;
use pattern_core::errors::PatternResult;
use pattern_core::models::ConfidenceResult;
use pattern_core::pattern::Pattern;
use pattern_core::traits::IConfidenceScorer;
use tracing::debug;

use crate::{decay, formula};

/// Tag recorded on every result this scorer produces.
const CALCULATION_METHOD: &str = "weighted_factors_v1";

/// Multi-factor confidence scorer.
///
/// Pure read path: it never mutates the pattern, and identical inputs at
/// the same instant yield the identical score. Outcome-driven mutation
/// lives in [`crate::outcome`].
#[derive(Debug)]
pub struct ConfidenceScorer {
    config: ScoringConfig,
}

impl ConfidenceScorer {
    /// Create a scorer, validating the configuration up front.
    /// Invalid parameters surface here, before any scoring.
    pub fn new(config: ScoringConfig) -> PatternResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a pattern against a context at the current instant.
    pub fn calculate_confidence(
        &self,
        pattern: &Pattern,
        context: &Context,
    ) -> PatternResult<ConfidenceResult> {
        self.calculate_confidence_at(pattern, context, Utc::now())
    }

    /// Score at an explicit instant. The recency and decay steps are
    /// functions of `now`; pinning it makes results reproducible.
    pub fn calculate_confidence_at(
        &self,
        pattern: &Pattern,
        context: &Context,
        now: DateTime<Utc>,
    ) -> PatternResult<ConfidenceResult> {
        pattern.validate()?;

        let factors = formula::compute_factors(pattern, context, &self.config, now);
        let combined = formula::combine(&factors, &self.config);
        let base = pattern.confidence_score.value() * combined;
        let decayed = decay::apply(base, pattern, &self.config.decay, now);
        let score = self.config.clamp(decayed);

        debug!(
            pattern_id = %pattern.id,
            score,
            combined,
            "confidence calculated"
        );

        Ok(ConfidenceResult {
            score,
            factors,
            calculation_method: CALCULATION_METHOD.to_string(),
            timestamp: now,
        })
    }

    /// Nudge a pattern's stored confidence after an observed application.
    /// See [`crate::outcome::update_from_outcome`].
    pub fn update_confidence_from_outcome(
        &self,
        pattern: &mut Pattern,
        success: bool,
        quality_impact: f64,
        context: &Context,
    ) -> PatternResult<pattern_core::models::OutcomeUpdate> {
        crate::outcome::update_from_outcome(
            &self.config,
            pattern,
            success,
            quality_impact,
            context,
            Utc::now(),
        )
    }
}

impl IConfidenceScorer for ConfidenceScorer {
    fn calculate(&self, pattern: &Pattern, context: &Context) -> PatternResult<ConfidenceResult> {
        self.calculate_confidence(pattern, context)
    }
}
