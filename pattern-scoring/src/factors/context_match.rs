use pattern_core::context::Context;
use pattern_core::pattern::{ContextMatchRules, Pattern};

use super::NEUTRAL;

/// Context-match factor.
///
/// An empty context scores a neutral 0.5: the caller gave us nothing to
/// match against. Otherwise:
///
/// ```text
/// score = (required×2 + optional×1 − excluded×1) / max_attainable
/// ```
///
/// floored at the pattern's `similarity_threshold`: the match score is
/// never reported below the pattern author's own stated floor for
/// partial matches.
pub fn calculate(pattern: &Pattern, context: &Context) -> f64 {
    if context.is_empty() {
        return NEUTRAL;
    }
    score_rules(&pattern.context_match, context)
}

/// Score a rule set against a non-empty context.
pub fn score_rules(rules: &ContextMatchRules, context: &Context) -> f64 {
    let max_score = rules.max_attainable_score();
    if max_score == 0.0 {
        // No required or optional fields declared; nothing to penalize
        // either unless an excluded field shows up.
        let excluded = ContextMatchRules::count_present(&rules.excluded_fields, context);
        if excluded > 0 {
            return rules.similarity_threshold.clamp(0.0, 1.0);
        }
        return NEUTRAL;
    }

    let required = ContextMatchRules::count_present(&rules.required_fields, context) as f64;
    let optional = ContextMatchRules::count_present(&rules.optional_fields, context) as f64;
    let excluded = ContextMatchRules::count_present(&rules.excluded_fields, context) as f64;

    let raw = (required * 2.0 + optional - excluded) / max_score;
    raw.max(rules.similarity_threshold).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pattern_core::pattern::{Confidence, PatternMetadata};

    fn pattern_with_rules(rules: ContextMatchRules) -> Pattern {
        Pattern {
            id: "p".into(),
            name: "test".into(),
            description: String::new(),
            success_rate: 0.8,
            confidence_score: Confidence::new(0.5),
            context_match: rules,
            quality_gates: vec![],
            metadata: PatternMetadata::default(),
        }
    }

    fn ctx(keys: &[&str]) -> Context {
        keys.iter()
            .map(|k| (k.to_string(), serde_json::Value::Bool(true)))
            .collect()
    }

    fn rules() -> ContextMatchRules {
        ContextMatchRules {
            required_fields: vec!["framework".into(), "language".into()],
            optional_fields: vec!["database".into()],
            excluded_fields: vec!["legacy".into()],
            similarity_threshold: 0.3,
        }
    }

    #[test]
    fn empty_context_is_neutral() {
        let p = pattern_with_rules(rules());
        assert_eq!(calculate(&p, &Context::new()), NEUTRAL);
    }

    #[test]
    fn full_match_scores_one() {
        let p = pattern_with_rules(rules());
        let score = calculate(&p, &ctx(&["framework", "language", "database"]));
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn excluded_field_penalizes() {
        let p = pattern_with_rules(rules());
        let clean = calculate(&p, &ctx(&["framework", "language"]));
        let tainted = calculate(&p, &ctx(&["framework", "language", "legacy"]));
        assert!(tainted < clean);
    }

    #[test]
    fn floored_at_similarity_threshold() {
        let p = pattern_with_rules(rules());
        // Only an excluded field present: raw score is negative.
        let score = calculate(&p, &ctx(&["legacy"]));
        assert!((score - 0.3).abs() < 1e-9);
    }
}
