//! JSON and CSV export of analysis reports.

use std::fs;
use std::path::Path;

use mda_core::errors::{ErrorInfo, MdaError};
use serde::Serialize;

use crate::report::{ConvergenceReport, EnergyDriftReport, SystemReport};

fn export_error(path: &Path, err: impl ToString) -> MdaError {
    MdaError::Io(
        ErrorInfo::new("export", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// Writes any serializable report as pretty JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), MdaError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| export_error(path, err))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|err| export_error(path, err))?;
    fs::write(path, json).map_err(|err| export_error(path, err))
}

fn number(value: f64) -> String {
    value.to_string()
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes both Arrhenius estimators of one system as CSV rows.
pub fn write_arrhenius_csv(report: &SystemReport, path: &Path) -> Result<(), MdaError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| export_error(path, err))?;
    writer
        .write_record([
            "method",
            "activation_energy_ev",
            "activation_energy_std_err",
            "activation_energy_variance",
            "prefactor",
            "ln_prefactor_std_err",
            "ln_prefactor_variance",
        ])
        .map_err(|err| export_error(path, err))?;
    if let Some(per_trajectory) = &report.per_trajectory {
        writer
            .write_record([
                "per-trajectory".to_string(),
                number(per_trajectory.activation_energy),
                optional(per_trajectory.activation_energy_stats.map(|s| s.std_err)),
                optional(per_trajectory.activation_energy_stats.map(|s| s.variance)),
                number(per_trajectory.prefactor),
                optional(per_trajectory.ln_prefactor_stats.map(|s| s.std_err)),
                optional(per_trajectory.ln_prefactor_stats.map(|s| s.variance)),
            ])
            .map_err(|err| export_error(path, err))?;
    }
    if let Some(averaged) = &report.averaged {
        writer
            .write_record([
                "averaged-curve".to_string(),
                number(averaged.fit.activation_energy),
                String::new(),
                String::new(),
                number(averaged.fit.prefactor()),
                String::new(),
                String::new(),
            ])
            .map_err(|err| export_error(path, err))?;
    }
    writer.flush().map_err(|err| export_error(path, err))
}

/// Writes the averaged ln(D) curve of one system as CSV rows.
pub fn write_lnd_csv(report: &SystemReport, path: &Path) -> Result<(), MdaError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| export_error(path, err))?;
    writer
        .write_record(["temperature_k", "mean_ln_d", "std_err"])
        .map_err(|err| export_error(path, err))?;
    if let Some(averaged) = &report.averaged {
        for (slot, temperature) in report.temperatures.iter().enumerate() {
            let std_err = averaged
                .ln_d_std_err
                .as_ref()
                .and_then(|errs| errs.get(slot).copied());
            writer
                .write_record([
                    number(*temperature),
                    number(averaged.mean_ln_d[slot]),
                    optional(std_err),
                ])
                .map_err(|err| export_error(path, err))?;
        }
    }
    writer.flush().map_err(|err| export_error(path, err))
}

/// Writes mean element contributions of one system as CSV rows.
pub fn write_contributions_csv(report: &SystemReport, path: &Path) -> Result<(), MdaError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| export_error(path, err))?;
    writer
        .write_record(["temperature_k", "element", "mean_percent", "repetitions"])
        .map_err(|err| export_error(path, err))?;
    for contribution in &report.contributions {
        writer
            .write_record([
                number(contribution.temperature),
                contribution.element.clone(),
                optional(contribution.mean_percent),
                contribution.repetitions.to_string(),
            ])
            .map_err(|err| export_error(path, err))?;
    }
    writer.flush().map_err(|err| export_error(path, err))
}

/// Writes the diffusion convergence table as CSV rows.
pub fn write_convergence_csv(report: &ConvergenceReport, path: &Path) -> Result<(), MdaError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| export_error(path, err))?;
    writer
        .write_record([
            "runtime_ps",
            "temperature_k",
            "mean_intercept",
            "mean_slope",
            "mean_diffusion",
            "repetitions",
        ])
        .map_err(|err| export_error(path, err))?;
    for point in &report.points {
        writer
            .write_record([
                number(point.runtime),
                number(point.temperature),
                number(point.mean_fit.intercept),
                number(point.mean_fit.slope),
                number(point.mean_diffusion),
                point.repetitions.to_string(),
            ])
            .map_err(|err| export_error(path, err))?;
    }
    writer.flush().map_err(|err| export_error(path, err))
}

/// Writes the potential-energy drift table as CSV rows.
pub fn write_energy_csv(report: &EnergyDriftReport, path: &Path) -> Result<(), MdaError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| export_error(path, err))?;
    writer
        .write_record([
            "runtime_ps",
            "temperature_k",
            "mean_intercept",
            "mean_slope",
            "repetitions",
        ])
        .map_err(|err| export_error(path, err))?;
    for point in &report.points {
        writer
            .write_record([
                number(point.runtime),
                number(point.temperature),
                number(point.mean_fit.intercept),
                number(point.mean_fit.slope),
                point.repetitions.to_string(),
            ])
            .map_err(|err| export_error(path, err))?;
    }
    writer.flush().map_err(|err| export_error(path, err))
}
