//! Read-only analytics over the bounded decision history.

use std::collections::HashMap;

use pattern_core::models::{ConfidenceTrend, DecisionAnalytics};

use crate::history::DecisionHistory;

/// Dead-band around zero: mean shifts smaller than this are "stable".
const TREND_DEAD_BAND: f64 = 0.05;

/// Summarize the decision history: distributions, mean confidence, and
/// the confidence trend.
pub fn summarize(history: &DecisionHistory) -> DecisionAnalytics {
    let mut decision_types = HashMap::new();
    let mut confidence_levels = HashMap::new();
    let mut risk_levels = HashMap::new();
    let mut confidence_sum = 0.0;

    for record in history.iter() {
        *decision_types
            .entry(record.decision.decision_type)
            .or_insert(0) += 1;
        *confidence_levels
            .entry(record.decision.confidence_level)
            .or_insert(0) += 1;
        *risk_levels.entry(record.risk.level).or_insert(0) += 1;
        confidence_sum += record.confidence.score;
    }

    let total = history.len();
    let average_confidence = if total == 0 {
        0.0
    } else {
        confidence_sum / total as f64
    };

    DecisionAnalytics {
        total_decisions: total,
        decision_types,
        confidence_levels,
        risk_levels,
        average_confidence,
        trend: trend(history),
    }
}

/// Trend of mean confidence: newer half of the history against the older
/// half, with a ±0.05 dead-band.
pub fn trend(history: &DecisionHistory) -> ConfidenceTrend {
    let scores: Vec<f64> = history.iter().map(|r| r.confidence.score).collect();
    if scores.len() < 2 {
        return ConfidenceTrend::Stable;
    }

    let mid = scores.len() / 2;
    let older_mean = scores[..mid].iter().sum::<f64>() / mid as f64;
    let newer_mean = scores[mid..].iter().sum::<f64>() / (scores.len() - mid) as f64;
    let shift = newer_mean - older_mean;

    if shift > TREND_DEAD_BAND {
        ConfidenceTrend::Improving
    } else if shift < -TREND_DEAD_BAND {
        ConfidenceTrend::Declining
    } else {
        ConfidenceTrend::Stable
    }
}
