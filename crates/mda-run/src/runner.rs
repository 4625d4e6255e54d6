//! Per-system batch orchestration.
//!
//! Trajectories are independent units of work: one failing repetition is
//! excluded and recorded, and every aggregate is recomputed over whatever
//! valid data remains. Processing order never affects the numbers.

use indexmap::IndexMap;
use mda_arrhenius::{diffusion_from_slope, fit_arrhenius, fit_averaged_curve, fit_per_trajectory};
use mda_core::errors::{ErrorInfo, MdaError};
use mda_core::{AnalysisConfig, SystemConfig, TrajectoryKey, BOLTZMANN_EV, DEFAULT_SLOPE_FLOOR};
use mda_fit::{fit, mean};
use mda_series::{SampleSeries, TrajectoryData};

use crate::provider::SeriesProvider;
use crate::report::{
    ContributionSummary, RunReport, SystemReport, TemperatureEstimate, TrajectoryFailure,
    TrajectoryReport,
};

/// Shared numeric knobs of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    /// Boltzmann constant in eV/K.
    pub boltzmann_ev: f64,
    /// Floor substituted for non-positive displacement slopes.
    pub slope_floor: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            boltzmann_ev: BOLTZMANN_EV,
            slope_floor: DEFAULT_SLOPE_FLOOR,
        }
    }
}

impl From<&AnalysisConfig> for PipelineOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            boltzmann_ev: config.boltzmann_ev,
            slope_floor: config.slope_floor,
        }
    }
}

/// Analyses every configured system.
pub fn analyze_run(
    config: &AnalysisConfig,
    provider: &dyn SeriesProvider,
) -> Result<RunReport, MdaError> {
    config.validate()?;
    let options = PipelineOptions::from(config);
    let mut systems = Vec::with_capacity(config.systems.len());
    for system in &config.systems {
        systems.push(analyze_system(system, &options, provider)?);
    }
    Ok(RunReport { systems })
}

/// Analyses one system at its longest runtime: displacement fits and
/// diffusion coefficients per (trajectory, temperature), both Arrhenius
/// estimators, and contribution summaries.
pub fn analyze_system(
    system: &SystemConfig,
    options: &PipelineOptions,
    provider: &dyn SeriesProvider,
) -> Result<SystemReport, MdaError> {
    let runtime = system.longest_runtime().ok_or_else(|| {
        MdaError::Config(
            ErrorInfo::new("no-runtimes", "at least one runtime is required")
                .with_context("system", system.name.clone()),
        )
    })?;

    let mut trajectories = Vec::new();
    let mut failures = Vec::new();
    for index in 1..=system.repetitions {
        match analyze_trajectory(system, index, runtime, options, provider) {
            Ok(report) => trajectories.push(report),
            Err(failure) => failures.push(failure),
        }
    }

    let clamped_fits = trajectories
        .iter()
        .flat_map(|trajectory| trajectory.temperatures.iter())
        .filter(|estimate| estimate.diffusion.clamped)
        .count();

    let ln_rows: Vec<Vec<f64>> = trajectories
        .iter()
        .map(|trajectory| {
            trajectory
                .temperatures
                .iter()
                .map(|estimate| estimate.ln_diffusion)
                .collect()
        })
        .collect();
    let (per_trajectory, averaged) = if ln_rows.is_empty() {
        (None, None)
    } else {
        (
            Some(fit_per_trajectory(
                &system.temperatures,
                &ln_rows,
                options.boltzmann_ev,
            )?),
            Some(fit_averaged_curve(
                &system.temperatures,
                &ln_rows,
                options.boltzmann_ev,
            )?),
        )
    };

    let contributions = contribution_summary(system, &trajectories);

    Ok(SystemReport {
        system: system.name.clone(),
        temperatures: system.temperatures.clone(),
        trajectories,
        failures,
        clamped_fits,
        per_trajectory,
        averaged,
        contributions,
    })
}

/// Loads every element series of one trajectory and derives the total.
pub(crate) fn load_trajectory(
    system: &SystemConfig,
    key: &TrajectoryKey,
    provider: &dyn SeriesProvider,
) -> Result<TrajectoryData, MdaError> {
    let mut elements = IndexMap::new();
    for element in &system.elements {
        let scale = system.atom_count(element)? as f64;
        let values = provider.displacement_series(key, element, scale)?;
        elements.insert(element.clone(), SampleSeries::from_values(values));
    }
    TrajectoryData::from_elements(elements)
}

fn analyze_trajectory(
    system: &SystemConfig,
    index: usize,
    runtime: f64,
    options: &PipelineOptions,
    provider: &dyn SeriesProvider,
) -> Result<TrajectoryReport, TrajectoryFailure> {
    let mut estimates = Vec::with_capacity(system.temperatures.len());
    for &temperature in &system.temperatures {
        let key = TrajectoryKey::new(system.name.clone(), index, temperature, runtime);
        match estimate_temperature(system, &key, options, provider) {
            Ok(estimate) => estimates.push(estimate),
            Err(error) => return Err(TrajectoryFailure { key, error }),
        }
    }

    let ln_d: Vec<f64> = estimates
        .iter()
        .map(|estimate| estimate.ln_diffusion)
        .collect();
    let arrhenius =
        fit_arrhenius(&system.temperatures, &ln_d, options.boltzmann_ev).map_err(|error| {
            // A sweep-level failure has no single temperature; report it
            // against the start of the sweep.
            let temperature = system.temperatures.first().copied().unwrap_or(0.0);
            TrajectoryFailure {
                key: TrajectoryKey::new(system.name.clone(), index, temperature, runtime),
                error,
            }
        })?;

    Ok(TrajectoryReport {
        index,
        runtime,
        temperatures: estimates,
        arrhenius,
    })
}

fn estimate_temperature(
    system: &SystemConfig,
    key: &TrajectoryKey,
    options: &PipelineOptions,
    provider: &dyn SeriesProvider,
) -> Result<TemperatureEstimate, MdaError> {
    let trajectory = load_trajectory(system, key, provider)?;
    let total = trajectory.total();
    let fit_result = fit(&total.time_axis(), total.values())?;
    let diffusion =
        diffusion_from_slope(fit_result.slope, system.dimensionality, options.slope_floor);
    Ok(TemperatureEstimate {
        temperature: key.temperature,
        fit: fit_result,
        diffusion,
        ln_diffusion: diffusion.ln_coefficient(),
        contributions: trajectory.contributions(),
    })
}

fn contribution_summary(
    system: &SystemConfig,
    trajectories: &[TrajectoryReport],
) -> Vec<ContributionSummary> {
    let mut summary = Vec::with_capacity(system.temperatures.len() * system.elements.len());
    for (slot, &temperature) in system.temperatures.iter().enumerate() {
        for element in &system.elements {
            let shares: Vec<f64> = trajectories
                .iter()
                .filter_map(|trajectory| {
                    trajectory.temperatures.get(slot).and_then(|estimate| {
                        estimate
                            .contributions
                            .iter()
                            .find(|contribution| &contribution.element == element)
                            .and_then(|contribution| contribution.percent)
                    })
                })
                .collect();
            summary.push(ContributionSummary {
                temperature,
                element: element.clone(),
                mean_percent: mean(&shares).ok(),
                repetitions: shares.len(),
            });
        }
    }
    summary
}
