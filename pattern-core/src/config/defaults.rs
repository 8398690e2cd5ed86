//! Default algorithm parameters. Callers load real values from their own
//! configuration layer; these are the fallbacks every config type uses.

/// Confidence assigned to patterns with insufficient evidence.
pub const DEFAULT_INITIAL_CONFIDENCE: f64 = 0.5;
/// Confidence adjustment on a successful application.
pub const DEFAULT_SUCCESS_INCREMENT: f64 = 0.05;
/// Confidence adjustment on a failed application.
pub const DEFAULT_FAILURE_DECREMENT: f64 = 0.1;
/// Lower confidence bound.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.1;
/// Upper confidence bound.
pub const DEFAULT_MAX_CONFIDENCE: f64 = 0.95;
/// Fraction of the distance toward the adjustment target applied per
/// outcome. Keeps confidence a slow-moving signal.
pub const DEFAULT_ADAPTATION_RATE: f64 = 0.05;

/// Factor weight: historical success rate.
pub const DEFAULT_SUCCESS_WEIGHT: f64 = 0.3;
/// Factor weight: recency of last application.
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.2;
/// Factor weight: context-match score.
pub const DEFAULT_CONTEXT_WEIGHT: f64 = 0.3;
/// Factor weight: application diversity.
pub const DEFAULT_DIVERSITY_WEIGHT: f64 = 0.1;
/// Factor weight: average quality impact.
pub const DEFAULT_QUALITY_WEIGHT: f64 = 0.1;

/// Monthly compounding decay rate for idle patterns.
pub const DEFAULT_DECAY_RATE: f64 = 0.05;
/// Days of idleness before decay starts compounding.
pub const DEFAULT_USAGE_THRESHOLD_DAYS: u64 = 30;
/// Floor applied after decay.
pub const DEFAULT_MIN_DECAY_CONFIDENCE: f64 = 0.1;
/// Multiplier applied to patterns that have never been applied.
pub const NEVER_USED_PENALTY: f64 = 0.8;

/// Recency weight for patterns applied within the last 7 days.
pub const DEFAULT_RECENCY_WITHIN_WEEK: f64 = 1.0;
/// Recency weight within the last 30 days.
pub const DEFAULT_RECENCY_WITHIN_MONTH: f64 = 0.8;
/// Recency weight within the last 90 days.
pub const DEFAULT_RECENCY_WITHIN_QUARTER: f64 = 0.6;
/// Recency weight beyond 90 days.
pub const DEFAULT_RECENCY_OLDER: f64 = 0.4;

/// Score floor for automatic application.
pub const DEFAULT_AUTO_APPLY_THRESHOLD: f64 = 0.8;
/// Score floor for recommendation.
pub const DEFAULT_RECOMMEND_THRESHOLD: f64 = 0.6;
/// Score floor for experimental use.
pub const DEFAULT_EXPERIMENTAL_THRESHOLD: f64 = 0.4;
/// Score below which a pattern is considered deprecated.
pub const DEFAULT_DEPRECATED_THRESHOLD: f64 = 0.2;

/// Risk score at or above which risk is tiered "medium".
pub const DEFAULT_MEDIUM_RISK_THRESHOLD: f64 = 0.4;
/// Risk score at or above which risk is tiered "high".
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.8;

/// Bounded decision-history capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;
