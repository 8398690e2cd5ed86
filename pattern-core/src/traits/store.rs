use crate::errors::PatternResult;
use crate::pattern::Pattern;

/// Persistence collaborator, keyed by pattern id. This core never persists
/// anything itself: after an outcome update, the caller writes the mutated
/// pattern back through its store. Serialization of concurrent writes to
/// the same pattern is the store's responsibility.
pub trait IPatternStore: Send + Sync {
    /// Read a pattern record, if present.
    fn get(&self, pattern_id: &str) -> PatternResult<Option<Pattern>>;

    /// Write a pattern record.
    fn put(&self, pattern: &Pattern) -> PatternResult<()>;
}
