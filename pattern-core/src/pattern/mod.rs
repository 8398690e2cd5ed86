pub mod base;
pub mod confidence;
pub mod matching;
pub mod usage;

pub use base::{Pattern, PatternMetadata};
pub use confidence::Confidence;
pub use matching::ContextMatchRules;
pub use usage::UsageStatistics;
