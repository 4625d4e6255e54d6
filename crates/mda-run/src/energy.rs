//! Potential-energy drift diagnostic.
//!
//! A linear fit over each potential-energy series; a slope away from zero
//! means the system was still relaxing when sampling started.

use mda_core::errors::MdaError;
use mda_core::{SystemConfig, TrajectoryKey};
use mda_fit::{fit_indexed, mean, FitResult};

use crate::provider::SeriesProvider;
use crate::report::{EnergyDriftPoint, EnergyDriftReport, TrajectoryFailure};

/// Computes mean potential-energy fits per (runtime, temperature) cell
/// across repetitions.
pub fn energy_drift(
    system: &SystemConfig,
    provider: &dyn SeriesProvider,
) -> Result<EnergyDriftReport, MdaError> {
    let mut points = Vec::new();
    let mut failures = Vec::new();
    for &runtime in &system.runtimes {
        for &temperature in &system.temperatures {
            let mut intercepts = Vec::new();
            let mut slopes = Vec::new();
            for index in 1..=system.repetitions {
                let key = TrajectoryKey::new(system.name.clone(), index, temperature, runtime);
                match provider
                    .energy_series(&key)
                    .and_then(|series| fit_indexed(&series))
                {
                    Ok(result) => {
                        intercepts.push(result.intercept);
                        slopes.push(result.slope);
                    }
                    Err(error) => failures.push(TrajectoryFailure { key, error }),
                }
            }
            if intercepts.is_empty() {
                continue;
            }
            points.push(EnergyDriftPoint {
                runtime,
                temperature,
                mean_fit: FitResult {
                    intercept: mean(&intercepts)?,
                    slope: mean(&slopes)?,
                },
                repetitions: intercepts.len(),
            });
        }
    }
    Ok(EnergyDriftReport {
        system: system.name.clone(),
        points,
        failures,
    })
}
