use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use mda_run::export::{write_arrhenius_csv, write_json, write_lnd_csv};
use mda_run::{analyze_run, FileSeriesProvider, RunManifest};

#[derive(Args, Debug)]
pub struct ArrheniusArgs {
    /// YAML configuration describing the systems to analyse.
    #[arg(long)]
    pub config: PathBuf,
    /// Root directory holding per-system data folders.
    #[arg(long)]
    pub data: PathBuf,
    /// Output directory for reports and the run manifest.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ArrheniusArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load_config(&args.config)?;
    let provider = FileSeriesProvider::new(&args.data);
    let report = analyze_run(&config, &provider)?;

    fs::create_dir_all(&args.out)?;
    for system in &report.systems {
        let system_dir = args.out.join(&system.system);
        write_json(system, &system_dir.join("arrhenius.json"))?;
        write_arrhenius_csv(system, &system_dir.join("arrhenius.csv"))?;
        write_lnd_csv(system, &system_dir.join("lnd.csv"))?;

        for failure in &system.failures {
            eprintln!("excluded {}: {}", failure.key, failure.error);
        }
        if system.clamped_fits > 0 {
            println!(
                "{}: {} displacement fit(s) had a non-physical slope floored",
                system.system, system.clamped_fits
            );
        }
        if let Some(per_trajectory) = &system.per_trajectory {
            match (
                &per_trajectory.activation_energy_stats,
                &per_trajectory.ln_prefactor_stats,
            ) {
                (Some(ea), Some(lnd0)) => println!(
                    "(Method 1) {} mean Arrhenius parameters: Ea = {:.4} eV, SE = {:.4}, VAR = {:.4}, D0 = {:.4}, SE = {:.4}, VAR = {:.4}",
                    system.system,
                    per_trajectory.activation_energy,
                    ea.std_err,
                    ea.variance,
                    per_trajectory.prefactor,
                    lnd0.std_err,
                    lnd0.variance,
                ),
                _ => println!(
                    "(Method 1) {} mean Arrhenius parameters: Ea = {:.4} eV, D0 = {:.4} (single trajectory, no spread)",
                    system.system, per_trajectory.activation_energy, per_trajectory.prefactor,
                ),
            }
        }
        if let Some(averaged) = &system.averaged {
            println!(
                "(Method 2) {} mean Arrhenius parameters: Ea = {:.4} eV, D0 = {:.4}",
                system.system,
                averaged.fit.activation_energy,
                averaged.fit.prefactor(),
            );
        }
    }

    let manifest = RunManifest::new(&config, &report)?;
    manifest.write(&args.out.join("manifest.json"))?;
    Ok(())
}
