use chrono::Utc;
use pattern_core::config::{DecisionConfig, ScoringConfig};
use pattern_core::context::Context;
use pattern_core::errors::PatternResult;
use pattern_core::models::{ConfidenceResult, Decision, DecisionAnalytics, DecisionRecord,
    RiskAssessment};
use pattern_core::pattern::Pattern;
use pattern_core::traits::IConfidenceScorer;
use pattern_scoring::ConfidenceScorer;
use tracing::info;

use crate::history::DecisionHistory;
use crate::{analytics, classify, criteria, recommendations, risk};

/// Per-call options. Everything optional: `None` falls back to configured
/// or internal behavior.
#[derive(Debug, Clone, Default)]
pub struct DecisionOptions {
    /// Override the engine's conservative mode for this call.
    pub conservative: Option<bool>,
    /// Verdict from the external quality-gate collaborator. `None` falls
    /// back to the internal heuristic.
    pub quality_gates_passed: Option<bool>,
}

/// What a decision call returns to the caller.
#[derive(Debug, Clone)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub confidence: ConfidenceResult,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<String>,
}

/// The decision engine.
///
/// Each call is a fresh, terminal classification: score the pattern,
/// evaluate the five criteria, classify, assess risk, generate guidance,
/// and record the decision in the bounded history. A failed call returns
/// no decision; the caller treats that as "do not apply, do not
/// recommend".
pub struct DecisionEngine {
    scorer: Box<dyn IConfidenceScorer>,
    config: DecisionConfig,
    history: DecisionHistory,
}

impl DecisionEngine {
    /// Create an engine with its own scorer. Both configurations are
    /// validated up front; invalid parameters surface here.
    pub fn new(scoring: ScoringConfig, config: DecisionConfig) -> PatternResult<Self> {
        let scorer = ConfidenceScorer::new(scoring)?;
        Self::with_scorer(Box::new(scorer), config)
    }

    /// Create an engine around an externally supplied scorer.
    pub fn with_scorer(
        scorer: Box<dyn IConfidenceScorer>,
        config: DecisionConfig,
    ) -> PatternResult<Self> {
        config.validate()?;
        let history = DecisionHistory::new(config.history_capacity);
        Ok(Self {
            scorer,
            config,
            history,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Classify one pattern-context pair.
    pub fn make_decision(
        &mut self,
        pattern: &Pattern,
        context: &Context,
        options: &DecisionOptions,
    ) -> PatternResult<DecisionOutcome> {
        pattern.validate()?;
        let now = Utc::now();

        let confidence = self.scorer.calculate(pattern, context)?;
        let criteria = criteria::evaluate(pattern, &confidence, options.quality_gates_passed, now);
        let criteria_score = criteria.score();

        let conservative = options
            .conservative
            .unwrap_or(self.config.conservative_mode);
        let decision_type =
            classify::determine(pattern, confidence.score, criteria_score, conservative);
        let confidence_level = classify::confidence_level(confidence.score, &self.config.thresholds);

        let risk_assessment = risk::assess(
            pattern,
            context,
            confidence.score,
            decision_type,
            &self.config.risk_thresholds,
        );

        let decision = Decision {
            decision_type,
            confidence_level,
            rationale: classify::rationale(pattern, decision_type, confidence.score, criteria_score),
            confidence_score: confidence.score,
            criteria_score,
        };

        let recommendations =
            recommendations::generate(pattern, decision_type, confidence_level, &risk_assessment);

        self.history.push(DecisionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: now,
            pattern_id: pattern.id.clone(),
            context: context.clone(),
            confidence: confidence.clone(),
            criteria,
            decision: decision.clone(),
            risk: risk_assessment.clone(),
            recommendations: recommendations.clone(),
        });

        info!(
            pattern_id = %pattern.id,
            decision = %decision_type,
            confidence = confidence.score,
            criteria = criteria_score,
            risk = %risk_assessment.level,
            "decision made"
        );

        Ok(DecisionOutcome {
            decision,
            confidence,
            risk_assessment,
            recommendations,
        })
    }

    /// The bounded decision history, oldest first.
    pub fn history(&self) -> &DecisionHistory {
        &self.history
    }

    /// Read-only analytics over the current history.
    pub fn analytics(&self) -> DecisionAnalytics {
        analytics::summarize(&self.history)
    }
}
