/// Errors surfaced by the scoring and decision cores.
///
/// Missing context fields and sparse pattern metadata are *not* errors;
/// they resolve to neutral defaults so the engine degrades gracefully.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Algorithm parameters are missing or malformed. Not recoverable
    /// locally; must be surfaced before any scoring can proceed.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A pattern is missing its required identity or confidence fields.
    /// The call is rejected with no partial result.
    #[error("invalid pattern '{pattern_id}': {reason}")]
    Validation { pattern_id: String, reason: String },

    /// The storage collaborator failed a read or write.
    #[error("pattern store error: {message}")]
    Store { message: String },
}

pub type PatternResult<T> = Result<T, PatternError>;

impl PatternError {
    /// Build a configuration error from anything displayable.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Build a validation error for a specific pattern.
    pub fn validation(pattern_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            pattern_id: pattern_id.into(),
            reason: reason.into(),
        }
    }
}
