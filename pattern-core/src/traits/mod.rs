pub mod gate;
pub mod scorer;
pub mod store;

pub use gate::IQualityGate;
pub use scorer::IConfidenceScorer;
pub use store::IPatternStore;
