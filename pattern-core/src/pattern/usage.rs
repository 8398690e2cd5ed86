use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application counters and quality history for a pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageStatistics {
    /// Total recorded applications.
    pub total_applications: u64,
    /// Applications that succeeded.
    pub successful_applications: u64,
    /// Applications that failed.
    pub failed_applications: u64,
    /// Mean observed quality impact per application, in [-1, 1].
    pub average_quality_impact: f64,
    /// When the pattern was last applied, if ever.
    pub last_applied: Option<DateTime<Utc>>,
}

impl UsageStatistics {
    /// Record one application outcome, updating counters and the running
    /// quality-impact mean.
    pub fn record_application(&mut self, success: bool, quality_impact: f64, now: DateTime<Utc>) {
        let prev_total = self.total_applications as f64;
        self.total_applications += 1;
        if success {
            self.successful_applications += 1;
        } else {
            self.failed_applications += 1;
        }
        self.average_quality_impact = (self.average_quality_impact * prev_total
            + quality_impact.clamp(-1.0, 1.0))
            / self.total_applications as f64;
        self.last_applied = Some(now);
    }

    /// Fraction of applications that succeeded; 0.0 when unused.
    pub fn observed_success_rate(&self) -> f64 {
        if self.total_applications == 0 {
            0.0
        } else {
            self.successful_applications as f64 / self.total_applications as f64
        }
    }
}
