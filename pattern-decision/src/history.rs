use std::collections::VecDeque;

use pattern_core::models::DecisionRecord;

/// Bounded FIFO decision history. Appends are O(1); once capacity is
/// reached the oldest record is evicted with each append, so a push never
/// leaves a duplicate or lost entry.
#[derive(Debug)]
pub struct DecisionHistory {
    records: VecDeque<DecisionRecord>,
    capacity: usize,
}

impl DecisionHistory {
    /// Create a history with the given capacity (at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Append a record, evicting the oldest when full.
    pub fn push(&mut self, record: DecisionRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Records in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&DecisionRecord> {
        self.records.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pattern_core::context::Context;
    use pattern_core::models::*;

    fn make_record(pattern_id: &str) -> DecisionRecord {
        DecisionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            pattern_id: pattern_id.to_string(),
            context: Context::new(),
            confidence: ConfidenceResult {
                score: 0.7,
                factors: FactorScores {
                    success_rate: 0.7,
                    recency: 0.7,
                    context_match: 0.7,
                    diversity: 0.7,
                    quality_impact: 0.7,
                },
                calculation_method: "test".into(),
                timestamp: Utc::now(),
            },
            criteria: DecisionCriteria {
                confidence_met: true,
                context_match_met: true,
                quality_met: true,
                risk_tolerance_met: true,
                business_rules_met: true,
            },
            decision: Decision {
                decision_type: DecisionType::Recommend,
                confidence_level: ConfidenceLevel::Medium,
                rationale: String::new(),
                confidence_score: 0.7,
                criteria_score: 1.0,
            },
            risk: RiskAssessment {
                score: 0.1,
                level: RiskLevel::Low,
                factors: vec![],
                mitigation_strategies: vec![],
            },
            recommendations: vec![],
        }
    }

    #[test]
    fn eviction_drops_the_oldest_record() {
        let mut history = DecisionHistory::new(3);
        for i in 0..5 {
            history.push(make_record(&format!("pat-{i}")));
        }
        assert_eq!(history.len(), 3);
        let ids: Vec<_> = history.iter().map(|r| r.pattern_id.as_str()).collect();
        assert_eq!(ids, vec!["pat-2", "pat-3", "pat-4"]);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut history = DecisionHistory::new(0);
        history.push(make_record("pat-a"));
        history.push(make_record("pat-b"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().pattern_id, "pat-b");
    }
}
