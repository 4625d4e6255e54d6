use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use mda_run::export::{write_energy_csv, write_json};
use mda_run::{energy_drift, FileSeriesProvider};

#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// YAML configuration describing the systems to analyse.
    #[arg(long)]
    pub config: PathBuf,
    /// Root directory holding per-system data folders.
    #[arg(long)]
    pub data: PathBuf,
    /// Output directory for potential-energy drift tables.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &EnergyArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load_config(&args.config)?;
    let provider = FileSeriesProvider::new(&args.data);

    fs::create_dir_all(&args.out)?;
    for system in &config.systems {
        println!("Fitting {} potential-energy drift...", system.name);
        let report = energy_drift(system, &provider)?;
        let system_dir = args.out.join(&system.name);
        write_json(&report, &system_dir.join("energy-drift.json"))?;
        write_energy_csv(&report, &system_dir.join("energy-drift.csv"))?;
        for failure in &report.failures {
            eprintln!("excluded {}: {}", failure.key, failure.error);
        }
    }
    Ok(())
}
