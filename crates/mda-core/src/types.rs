use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identity of a single trajectory: the unit of failure isolation.
///
/// A trajectory is one repetition of one material system, simulated for a
/// fixed runtime at a fixed temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryKey {
    /// Material system the trajectory belongs to.
    pub system: String,
    /// Repetition index (1-based, matching the on-disk naming).
    pub index: usize,
    /// Simulation temperature in Kelvin.
    pub temperature: f64,
    /// Simulation runtime in picoseconds.
    pub runtime: f64,
}

impl TrajectoryKey {
    /// Creates a key for the given system, repetition, temperature, and runtime.
    pub fn new(system: impl Into<String>, index: usize, temperature: f64, runtime: f64) -> Self {
        Self {
            system: system.into(),
            index,
            temperature,
            runtime,
        }
    }
}

impl Display for TrajectoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} @ {} K ({} ps)",
            self.system, self.index, self.temperature, self.runtime
        )
    }
}
