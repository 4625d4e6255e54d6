use std::collections::BTreeSet;
use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use glob::glob;
use mda_core::TrajectoryKey;
use mda_run::FileSeriesProvider;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// YAML configuration describing the systems to analyse.
    #[arg(long)]
    pub config: PathBuf,
    /// Root directory holding per-system data folders.
    #[arg(long)]
    pub data: PathBuf,
    /// Emit only JSON without additional context.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    system: String,
    ok: bool,
    expected: usize,
    missing: Vec<String>,
    unrecognised: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    status: String,
    checks: Vec<DoctorCheck>,
}

/// Verifies that every displacement file the configuration implies exists,
/// and lists stray displacement files the analysis would never read.
pub fn run(args: &DoctorArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load_config(&args.config)?;
    let provider = FileSeriesProvider::new(&args.data);

    let mut checks = Vec::new();
    for system in &config.systems {
        let mut expected = BTreeSet::new();
        for index in 1..=system.repetitions {
            for &runtime in &system.runtimes {
                for &temperature in &system.temperatures {
                    let key =
                        TrajectoryKey::new(system.name.clone(), index, temperature, runtime);
                    for element in &system.elements {
                        expected.insert(provider.displacement_path(&key, element));
                    }
                }
            }
        }

        let missing: Vec<String> = expected
            .iter()
            .filter(|path| !path.exists())
            .map(|path| path.display().to_string())
            .collect();

        let pattern = args
            .data
            .join(&system.name)
            .join("*_msd_*.txt")
            .display()
            .to_string();
        let mut unrecognised = Vec::new();
        for entry in glob(&pattern)? {
            let path = entry?;
            if !expected.contains(&path) {
                unrecognised.push(path.display().to_string());
            }
        }

        checks.push(DoctorCheck {
            system: system.name.clone(),
            ok: missing.is_empty(),
            expected: expected.len(),
            missing,
            unrecognised,
        });
    }

    let status = if checks.iter().all(|check| check.ok) {
        "ok"
    } else {
        "incomplete"
    };
    let report = DoctorReport {
        status: status.to_string(),
        checks,
    };
    let rendered = serde_json::to_string_pretty(&report)?;
    if args.quiet {
        println!("{rendered}");
    } else {
        println!("mda-post doctor status: {}", report.status);
        println!("{rendered}");
    }
    if report.status != "ok" {
        return Err("one or more systems have missing displacement files".into());
    }
    Ok(())
}
