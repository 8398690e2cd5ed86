pub mod decay_config;
pub mod decision_config;
pub mod defaults;
pub mod scoring_config;

pub use decay_config::{DecayConfig, RecencyWeights};
pub use decision_config::{DecisionConfig, DecisionThresholds, RiskThresholds};
pub use scoring_config::{ContextWeights, ScoringConfig};
