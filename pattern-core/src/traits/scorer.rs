use crate::context::Context;
use crate::errors::PatternResult;
use crate::models::ConfidenceResult;
use crate::pattern::Pattern;

/// Confidence computation seam consumed by the decision engine.
///
/// Implementations must be pure with respect to the read path: identical
/// pattern and context inputs yield the identical score.
pub trait IConfidenceScorer: Send + Sync {
    /// Compute a bounded confidence score with its factor breakdown.
    fn calculate(&self, pattern: &Pattern, context: &Context) -> PatternResult<ConfidenceResult>;
}
