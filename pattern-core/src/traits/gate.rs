use crate::context::Context;
use crate::errors::PatternResult;

/// Quality-gate collaborator, executed outside this core. Only the
/// aggregate pass/fail verdict feeds back into decision criteria.
pub trait IQualityGate: Send + Sync {
    /// Run one gate against a context and report pass/fail.
    fn evaluate(&self, gate_id: &str, context: &Context) -> PatternResult<bool>;
}
