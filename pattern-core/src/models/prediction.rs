use serde::{Deserialize, Serialize};

/// Result of a Monte Carlo confidence projection.
///
/// Produced by a randomized simulation; two calls with the same inputs
/// will generally differ. Exploratory estimation only, never part of
/// the decision path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictedConfidence {
    /// Confidence at the start of the simulation.
    pub current: f64,
    /// Simulated confidence after the synthetic applications.
    pub projected: f64,
    /// `projected - current`.
    pub delta: f64,
    /// Number of synthetic applications simulated.
    pub simulated_runs: u32,
}
