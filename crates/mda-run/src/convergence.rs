//! Diffusion convergence against runtime.
//!
//! Every configured runtime contributes, unlike the Arrhenius estimators
//! which only look at the longest one. Slopes are averaged raw, without the
//! non-physical-slope floor: a drifting or negative mean slope is exactly
//! what this diagnostic exists to show.

use mda_core::errors::MdaError;
use mda_core::{SystemConfig, TrajectoryKey};
use mda_fit::{fit, mean, FitResult};

use crate::provider::SeriesProvider;
use crate::report::{ConvergencePoint, ConvergenceReport, TrajectoryFailure};
use crate::runner::load_trajectory;

/// Computes mean fitted parameters per (runtime, temperature) cell across
/// repetitions.
pub fn convergence_table(
    system: &SystemConfig,
    provider: &dyn SeriesProvider,
) -> Result<ConvergenceReport, MdaError> {
    let mut points = Vec::new();
    let mut failures = Vec::new();
    for &runtime in &system.runtimes {
        for &temperature in &system.temperatures {
            let mut intercepts = Vec::new();
            let mut slopes = Vec::new();
            for index in 1..=system.repetitions {
                let key = TrajectoryKey::new(system.name.clone(), index, temperature, runtime);
                match fit_cell(system, &key, provider) {
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
            let mean_fit = FitResult {
                intercept: mean(&intercepts)?,
                slope: mean(&slopes)?,
            };
            let mean_diffusion = mean_fit.slope / (2.0 * system.dimensionality as f64);
            points.push(ConvergencePoint {
                runtime,
                temperature,
                mean_fit,
                mean_diffusion,
                repetitions: intercepts.len(),
            });
        }
    }
    Ok(ConvergenceReport {
        system: system.name.clone(),
        points,
        failures,
    })
}

fn fit_cell(
    system: &SystemConfig,
    key: &TrajectoryKey,
    provider: &dyn SeriesProvider,
) -> Result<FitResult, MdaError> {
    let trajectory = load_trajectory(system, key, provider)?;
    let total = trajectory.total();
    fit(&total.time_axis(), total.values())
}
