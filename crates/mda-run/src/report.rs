//! Structured result types exposed to reporting and plotting collaborators.

use mda_arrhenius::{ArrheniusFit, AveragedArrhenius, DiffusionEstimate, PerTrajectoryArrhenius};
use mda_core::{MdaError, TrajectoryKey};
use mda_fit::FitResult;
use mda_series::ElementContribution;
use serde::{Deserialize, Serialize};

/// Everything derived from one trajectory at one temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureEstimate {
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Linear fit of the total squared displacement against time.
    pub fit: FitResult,
    /// Diffusion coefficient derived from the fit slope.
    pub diffusion: DiffusionEstimate,
    /// ln(D), the Arrhenius ordinate.
    pub ln_diffusion: f64,
    /// Per-element shares of the final total displacement.
    pub contributions: Vec<ElementContribution>,
}

/// All estimates for one surviving trajectory repetition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryReport {
    /// Repetition index (1-based).
    pub index: usize,
    /// Runtime the estimates were computed at, in picoseconds.
    pub runtime: f64,
    /// One estimate per temperature, in sweep order.
    pub temperatures: Vec<TemperatureEstimate>,
    /// The trajectory's own Arrhenius fit.
    pub arrhenius: ArrheniusFit,
}

/// Record of a trajectory excluded from the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryFailure {
    /// Identity of the failing trajectory.
    pub key: TrajectoryKey,
    /// The error that excluded it.
    pub error: MdaError,
}

/// Cross-trajectory mean displacement share for one (temperature, element)
/// pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionSummary {
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Element tag.
    pub element: String,
    /// Mean share in percent, or `None` when no trajectory had a defined
    /// share at this temperature.
    pub mean_percent: Option<f64>,
    /// Number of trajectories with a defined share.
    pub repetitions: usize,
}

/// Full analysis of one material system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    /// System name.
    pub system: String,
    /// Temperature sweep in Kelvin, the index order for averaged curves.
    pub temperatures: Vec<f64>,
    /// Per-trajectory estimates for every surviving repetition.
    pub trajectories: Vec<TrajectoryReport>,
    /// Trajectories excluded from the analysis, with their errors.
    pub failures: Vec<TrajectoryFailure>,
    /// How many displacement fits had their slope floored.
    pub clamped_fits: usize,
    /// Per-trajectory Arrhenius estimator; `None` when no trajectory
    /// survived.
    pub per_trajectory: Option<PerTrajectoryArrhenius>,
    /// Averaged-curve Arrhenius estimator; `None` when no trajectory
    /// survived.
    pub averaged: Option<AveragedArrhenius>,
    /// Mean element contributions per temperature.
    pub contributions: Vec<ContributionSummary>,
}

/// Analysis of every configured system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// One report per system, in configuration order.
    pub systems: Vec<SystemReport>,
}

/// Mean fitted parameters for one (runtime, temperature) cell of the
/// convergence diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePoint {
    /// Runtime in picoseconds.
    pub runtime: f64,
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Mean intercept and slope over the surviving repetitions.
    pub mean_fit: FitResult,
    /// Diffusion coefficient derived from the mean slope.
    pub mean_diffusion: f64,
    /// Number of repetitions that entered the mean.
    pub repetitions: usize,
}

/// Diffusion convergence against runtime for one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// System name.
    pub system: String,
    /// One point per (runtime, temperature) cell with any surviving data.
    pub points: Vec<ConvergencePoint>,
    /// Cells excluded from the means, with their errors.
    pub failures: Vec<TrajectoryFailure>,
}

/// Mean potential-energy drift fit for one (runtime, temperature) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDriftPoint {
    /// Runtime in picoseconds.
    pub runtime: f64,
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Mean intercept and slope of the potential-energy fits.
    pub mean_fit: FitResult,
    /// Number of repetitions that entered the mean.
    pub repetitions: usize,
}

/// Potential-energy drift diagnostic for one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDriftReport {
    /// System name.
    pub system: String,
    /// One point per (runtime, temperature) cell with any surviving data.
    pub points: Vec<EnergyDriftPoint>,
    /// Cells excluded from the means, with their errors.
    pub failures: Vec<TrajectoryFailure>,
}
