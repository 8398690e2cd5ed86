use pattern_core::pattern::Pattern;

/// Quality-impact factor: the pattern's average observed quality impact,
/// linearly remapped from [-1, 1] to [0, 1]. An unused pattern has an
/// average impact of 0.0, which lands on the neutral 0.5.
pub fn calculate(pattern: &Pattern) -> f64 {
    let impact = pattern
        .metadata
        .usage_statistics
        .average_quality_impact
        .clamp(-1.0, 1.0);
    (impact + 1.0) / 2.0
}
