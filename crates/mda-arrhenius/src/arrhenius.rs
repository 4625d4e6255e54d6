//! Arrhenius regression over a temperature sweep.
//!
//! Two estimators are exposed and deliberately kept separate: fitting each
//! trajectory and averaging the parameters, and averaging ln(D) across
//! trajectories before a single fit. On noisy data they disagree; callers
//! report both.

use mda_core::errors::{ErrorInfo, MdaError};
use mda_fit::{fit, mean, summarize, SummaryStats};
use serde::{Deserialize, Serialize};

/// Activation energy and pre-exponential factor of one Arrhenius fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusFit {
    /// Activation energy in eV, sign-flipped from the raw slope so it is
    /// positive for thermally activated diffusion.
    pub activation_energy: f64,
    /// Natural log of the pre-exponential factor D0.
    pub ln_prefactor: f64,
}

impl ArrheniusFit {
    /// The pre-exponential factor D0 in Å²/ps.
    pub fn prefactor(&self) -> f64 {
        self.ln_prefactor.exp()
    }

    /// Predicted ln(D) at the given temperature.
    pub fn expected_ln_d(&self, temperature: f64, boltzmann_ev: f64) -> f64 {
        self.ln_prefactor - self.activation_energy / (boltzmann_ev * temperature)
    }

    /// Predicted diffusion coefficient at the given temperature.
    pub fn expected_diffusion(&self, temperature: f64, boltzmann_ev: f64) -> f64 {
        self.expected_ln_d(temperature, boltzmann_ev).exp()
    }
}

/// Arrhenius abscissa 1/(kT) for every temperature in the sweep.
pub fn inverse_kt(temperatures: &[f64], boltzmann_ev: f64) -> Vec<f64> {
    temperatures
        .iter()
        .map(|temperature| 1.0 / (boltzmann_ev * temperature))
        .collect()
}

/// Fits ln(D) against 1/(kT) and extracts the Arrhenius parameters.
///
/// The callers guarantee every D entering here is positive (non-physical
/// slopes are floored upstream), so ln(D) is always finite.
pub fn fit_arrhenius(
    temperatures: &[f64],
    ln_d: &[f64],
    boltzmann_ev: f64,
) -> Result<ArrheniusFit, MdaError> {
    let x = inverse_kt(temperatures, boltzmann_ev);
    let result = fit(&x, ln_d)?;
    Ok(ArrheniusFit {
        activation_energy: -result.slope,
        ln_prefactor: result.intercept,
    })
}

/// Per-trajectory estimator: one Arrhenius fit per trajectory, parameters
/// averaged across trajectories afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerTrajectoryArrhenius {
    /// The individual fits, one per surviving trajectory.
    pub fits: Vec<ArrheniusFit>,
    /// Mean activation energy in eV.
    pub activation_energy: f64,
    /// Mean ln(D0) across trajectories.
    pub ln_prefactor: f64,
    /// D0 formed as exp of the averaged ln(D0).
    pub prefactor: f64,
    /// Spread of the activation energy; `None` when fewer than two
    /// trajectories survived.
    pub activation_energy_stats: Option<SummaryStats>,
    /// Spread of ln(D0); `None` when fewer than two trajectories survived.
    pub ln_prefactor_stats: Option<SummaryStats>,
}

/// Averaged-curve estimator: ln(D) averaged across trajectories at each
/// temperature, then a single Arrhenius fit on the averaged curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragedArrhenius {
    /// Mean ln(D) per temperature, in sweep order.
    pub mean_ln_d: Vec<f64>,
    /// Standard error of ln(D) per temperature; `None` when fewer than two
    /// trajectories survived.
    pub ln_d_std_err: Option<Vec<f64>>,
    /// The fit over the averaged curve.
    pub fit: ArrheniusFit,
}

fn check_rows(temperatures: &[f64], ln_d_rows: &[Vec<f64>]) -> Result<(), MdaError> {
    if ln_d_rows.is_empty() {
        return Err(MdaError::InsufficientSamples(ErrorInfo::new(
            "no-trajectories",
            "at least one trajectory is required for Arrhenius estimation",
        )));
    }
    for (idx, row) in ln_d_rows.iter().enumerate() {
        if row.len() != temperatures.len() {
            return Err(MdaError::ShapeMismatch(
                ErrorInfo::new("sweep-length", "ln(D) row does not match the sweep")
                    .with_context("trajectory", idx.to_string())
                    .with_context("expected", temperatures.len().to_string())
                    .with_context("actual", row.len().to_string()),
            ));
        }
    }
    Ok(())
}

/// Runs the per-trajectory estimator over ln(D) rows (one row per
/// trajectory, one entry per temperature).
pub fn fit_per_trajectory(
    temperatures: &[f64],
    ln_d_rows: &[Vec<f64>],
    boltzmann_ev: f64,
) -> Result<PerTrajectoryArrhenius, MdaError> {
    check_rows(temperatures, ln_d_rows)?;
    let mut fits = Vec::with_capacity(ln_d_rows.len());
    for row in ln_d_rows {
        fits.push(fit_arrhenius(temperatures, row, boltzmann_ev)?);
    }

    let energies: Vec<f64> = fits.iter().map(|fit| fit.activation_energy).collect();
    let ln_prefactors: Vec<f64> = fits.iter().map(|fit| fit.ln_prefactor).collect();
    let activation_energy = mean(&energies)?;
    let ln_prefactor = mean(&ln_prefactors)?;
    let activation_energy_stats = summarize(&energies).ok();
    let ln_prefactor_stats = summarize(&ln_prefactors).ok();

    Ok(PerTrajectoryArrhenius {
        fits,
        activation_energy,
        ln_prefactor,
        prefactor: ln_prefactor.exp(),
        activation_energy_stats,
        ln_prefactor_stats,
    })
}

/// Runs the averaged-curve estimator over ln(D) rows (one row per
/// trajectory, one entry per temperature).
pub fn fit_averaged_curve(
    temperatures: &[f64],
    ln_d_rows: &[Vec<f64>],
    boltzmann_ev: f64,
) -> Result<AveragedArrhenius, MdaError> {
    check_rows(temperatures, ln_d_rows)?;
    let mut mean_ln_d = Vec::with_capacity(temperatures.len());
    let mut std_errs = Vec::with_capacity(temperatures.len());
    let mut all_defined = true;
    for slot in 0..temperatures.len() {
        let column: Vec<f64> = ln_d_rows.iter().map(|row| row[slot]).collect();
        mean_ln_d.push(mean(&column)?);
        match summarize(&column) {
            Ok(stats) => std_errs.push(stats.std_err),
            Err(_) => all_defined = false,
        }
    }
    let fit = fit_arrhenius(temperatures, &mean_ln_d, boltzmann_ev)?;
    Ok(AveragedArrhenius {
        mean_ln_d,
        ln_d_std_err: all_defined.then_some(std_errs),
        fit,
    })
}
