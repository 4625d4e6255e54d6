use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use mda_run::export::{write_convergence_csv, write_json};
use mda_run::{convergence_table, FileSeriesProvider};

#[derive(Args, Debug)]
pub struct ConvergenceArgs {
    /// YAML configuration describing the systems to analyse.
    #[arg(long)]
    pub config: PathBuf,
    /// Root directory holding per-system data folders.
    #[arg(long)]
    pub data: PathBuf,
    /// Output directory for convergence tables.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ConvergenceArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load_config(&args.config)?;
    let provider = FileSeriesProvider::new(&args.data);

    fs::create_dir_all(&args.out)?;
    for system in &config.systems {
        println!("Tabulating {} diffusion convergence...", system.name);
        let report = convergence_table(system, &provider)?;
        let system_dir = args.out.join(&system.name);
        write_json(&report, &system_dir.join("convergence.json"))?;
        write_convergence_csv(&report, &system_dir.join("convergence.csv"))?;
        for failure in &report.failures {
            eprintln!("excluded {}: {}", failure.key, failure.error);
        }
    }
    Ok(())
}
