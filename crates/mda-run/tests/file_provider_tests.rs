use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use mda_core::{AnalysisConfig, SystemConfig};
use mda_run::export::{
    write_arrhenius_csv, write_contributions_csv, write_convergence_csv, write_json, write_lnd_csv,
};
use mda_run::{analyze_run, convergence_table, FileSeriesProvider, RunManifest, SeriesProvider};

const TOL: f64 = 1e-9;

fn fixture_system() -> SystemConfig {
    SystemConfig {
        name: "Ni".to_string(),
        elements: vec!["Ni".to_string()],
        atom_counts: BTreeMap::from([("Ni".to_string(), 2)]),
        dimensionality: 3,
        temperatures: vec![700.0, 800.0],
        runtimes: vec![100.0],
        repetitions: 2,
    }
}

fn fixture_config() -> AnalysisConfig {
    AnalysisConfig {
        systems: vec![fixture_system()],
        ..AnalysisConfig::default()
    }
}

/// Writes an MSD file in the observed layout: header, spurious reading,
/// baseline, then per-picosecond samples climbing with slope `per_line`.
fn write_msd_file(path: &Path, baseline: f64, per_line: f64, steps: usize) {
    let mut file = fs::File::create(path).expect("create fixture");
    writeln!(file, "# msd (A^2)").expect("write");
    writeln!(file, "0.00001").expect("write");
    writeln!(file, "{baseline}").expect("write");
    for step in 1..=steps {
        writeln!(file, "{}", baseline + per_line * step as f64).expect("write");
    }
}

fn populate(root: &Path, system: &SystemConfig) {
    let dir = root.join(&system.name);
    fs::create_dir_all(&dir).expect("mkdir");
    for index in 1..=system.repetitions {
        for &temperature in &system.temperatures {
            // The loader multiplies by the atom count (2), so halve the
            // per-line increment to land on slope = temperature / 1000.
            let slope = temperature / 1000.0;
            let path = dir.join(format!("{index}_msd_Ni_100ps_{temperature}.txt"));
            write_msd_file(&path, 0.37, slope / 2.0, 30);
        }
    }
}

#[test]
fn file_provider_reads_the_observed_layout() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let config = fixture_config();
    populate(workdir.path(), &config.systems[0]);

    let provider = FileSeriesProvider::new(workdir.path());
    let report = analyze_run(&config, &provider).expect("analyze");
    let system = &report.systems[0];
    assert_eq!(system.trajectories.len(), 2);
    assert!(system.failures.is_empty());

    for trajectory in &system.trajectories {
        for estimate in &trajectory.temperatures {
            let expected_slope = estimate.temperature / 1000.0;
            assert!((estimate.fit.slope - expected_slope).abs() < 1e-6);
            assert!(
                (estimate.diffusion.coefficient - expected_slope / 6.0).abs() < 1e-6
            );
        }
    }
}

#[test]
fn displacement_path_follows_the_naming_convention() {
    let provider = FileSeriesProvider::new("/data");
    let key = mda_core::TrajectoryKey::new("NiFeCr".to_string(), 4, 1100.0, 250000.0);
    assert_eq!(
        provider.displacement_path(&key, "Cr"),
        Path::new("/data/NiFeCr/4_msd_Cr_250000ps_1100.txt")
    );
    assert_eq!(
        provider.energy_path(&key),
        Path::new("/data/NiFeCr/4_pe_250000ps_1100.txt")
    );
}

#[test]
fn missing_file_reports_its_path() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let provider = FileSeriesProvider::new(workdir.path());
    let key = mda_core::TrajectoryKey::new("Ni".to_string(), 1, 700.0, 100.0);
    let err = provider
        .displacement_series(&key, "Ni", 1.0)
        .expect_err("nothing on disk");
    assert!(err.info().context.get("path").is_some());
}

#[test]
fn exports_cover_every_report_surface() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let config = fixture_config();
    populate(workdir.path(), &config.systems[0]);
    let provider = FileSeriesProvider::new(workdir.path());
    let report = analyze_run(&config, &provider).expect("analyze");
    let system = &report.systems[0];

    let out = workdir.path().join("out");
    fs::create_dir_all(&out).expect("mkdir");

    write_json(system, &out.join("arrhenius.json")).expect("json");
    write_arrhenius_csv(system, &out.join("arrhenius.csv")).expect("csv");
    write_lnd_csv(system, &out.join("lnd.csv")).expect("csv");
    write_contributions_csv(system, &out.join("contributions.csv")).expect("csv");

    let arrhenius = fs::read_to_string(out.join("arrhenius.csv")).expect("read");
    let mut lines = arrhenius.lines();
    assert_eq!(
        lines.next().expect("header"),
        "method,activation_energy_ev,activation_energy_std_err,activation_energy_variance,prefactor,ln_prefactor_std_err,ln_prefactor_variance"
    );
    assert_eq!(lines.clone().count(), 2);
    assert!(lines.next().expect("row").starts_with("per-trajectory,"));

    let lnd = fs::read_to_string(out.join("lnd.csv")).expect("read");
    assert_eq!(lnd.lines().count(), 1 + config.systems[0].temperatures.len());

    let convergence = convergence_table(&config.systems[0], &provider).expect("convergence");
    write_convergence_csv(&convergence, &out.join("convergence.csv")).expect("csv");
    let table = fs::read_to_string(out.join("convergence.csv")).expect("read");
    assert_eq!(table.lines().count(), 1 + convergence.points.len());

    let manifest = RunManifest::new(&config, &report).expect("manifest");
    let manifest_path = out.join("manifest.json");
    manifest.write(&manifest_path).expect("write manifest");
    let loaded = RunManifest::load(&manifest_path).expect("load manifest");
    assert_eq!(loaded, manifest);
}

#[test]
fn json_export_round_trips_the_system_report() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let config = fixture_config();
    populate(workdir.path(), &config.systems[0]);
    let provider = FileSeriesProvider::new(workdir.path());
    let report = analyze_run(&config, &provider).expect("analyze");

    let path = workdir.path().join("report.json");
    write_json(&report, &path).expect("json");
    let decoded: mda_run::RunReport =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("decode");
    assert_eq!(decoded, report);

    let ni = &decoded.systems[0];
    let share = ni.contributions[0].mean_percent.expect("share");
    assert!((share - 100.0).abs() < TOL);
}
