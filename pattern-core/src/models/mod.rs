pub mod analytics;
pub mod confidence_result;
pub mod decision;
pub mod decision_record;
pub mod outcome_update;
pub mod prediction;
pub mod risk;

pub use analytics::{ConfidenceTrend, DecisionAnalytics};
pub use confidence_result::{ConfidenceResult, FactorScores};
pub use decision::{ConfidenceLevel, Decision, DecisionCriteria, DecisionType};
pub use decision_record::DecisionRecord;
pub use outcome_update::OutcomeUpdate;
pub use prediction::PredictedConfidence;
pub use risk::{RiskAssessment, RiskLevel};
