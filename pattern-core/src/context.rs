use std::collections::HashMap;

/// Open key→value description of the situation a decision is being made
/// for. There is no fixed schema: the scorer only inspects keys referenced
/// by a pattern's [`ContextMatchRules`](crate::pattern::ContextMatchRules),
/// and the risk assessor only counts fields and scans key names.
pub type Context = HashMap<String, serde_json::Value>;

/// Key-name fragments that mark a context as touching sensitive surface
/// area (raises context complexity during risk assessment).
pub const SENSITIVE_KEY_MARKERS: &[&str] = &[
    "auth",
    "security",
    "payment",
    "credential",
    "secret",
    "token",
    "production",
];

/// Check whether a context key looks sensitive.
pub fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    SENSITIVE_KEY_MARKERS.iter().any(|m| lower.contains(m))
}
