use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use mda_run::export::{write_contributions_csv, write_json};
use mda_run::{analyze_run, FileSeriesProvider};

#[derive(Args, Debug)]
pub struct ContributionsArgs {
    /// YAML configuration describing the systems to analyse.
    #[arg(long)]
    pub config: PathBuf,
    /// Root directory holding per-system data folders.
    #[arg(long)]
    pub data: PathBuf,
    /// Output directory for contribution tables.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ContributionsArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load_config(&args.config)?;
    let provider = FileSeriesProvider::new(&args.data);
    let report = analyze_run(&config, &provider)?;

    fs::create_dir_all(&args.out)?;
    for system in &report.systems {
        println!("Summarising {} element contributions...", system.system);
        let system_dir = args.out.join(&system.system);
        write_json(&system.contributions, &system_dir.join("contributions.json"))?;
        write_contributions_csv(system, &system_dir.join("contributions.csv"))?;
        for failure in &system.failures {
            eprintln!("excluded {}: {}", failure.key, failure.error);
        }
    }
    Ok(())
}
