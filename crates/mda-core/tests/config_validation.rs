use std::collections::BTreeMap;

use mda_core::{AnalysisConfig, MdaError, SystemConfig, BOLTZMANN_EV};

fn nickel_system() -> SystemConfig {
    SystemConfig {
        name: "Ni".to_string(),
        elements: vec!["Ni".to_string()],
        atom_counts: BTreeMap::from([("Ni".to_string(), 2049)]),
        dimensionality: 3,
        temperatures: vec![700.0, 800.0, 900.0, 1000.0, 1100.0],
        runtimes: vec![5000.0],
        repetitions: 5,
    }
}

fn base_config() -> AnalysisConfig {
    AnalysisConfig {
        systems: vec![nickel_system()],
        ..AnalysisConfig::default()
    }
}

#[test]
fn valid_config_passes() {
    base_config().validate().expect("config should validate");
}

#[test]
fn defaults_match_observed_conventions() {
    let config = AnalysisConfig::default();
    assert_eq!(config.boltzmann_ev, BOLTZMANN_EV);
    assert_eq!(config.slope_floor, 1e-6);
}

#[test]
fn missing_atom_count_is_rejected() {
    let mut config = base_config();
    config.systems[0].elements.push("Fe".to_string());
    let err = config.validate().expect_err("Fe has no atom count");
    match err {
        MdaError::Config(info) => {
            assert_eq!(info.code, "missing-atom-count");
            assert_eq!(info.context.get("element").map(String::as_str), Some("Fe"));
        }
        other => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn single_temperature_sweep_is_rejected() {
    let mut config = base_config();
    config.systems[0].temperatures = vec![700.0];
    let err = config.validate().expect_err("one temperature cannot fit");
    assert_eq!(err.info().code, "short-sweep");
}

#[test]
fn unsorted_runtimes_are_rejected() {
    let mut config = base_config();
    config.systems[0].runtimes = vec![5000.0, 1000.0];
    let err = config.validate().expect_err("runtimes must ascend");
    assert_eq!(err.info().code, "unsorted-runtimes");
}

#[test]
fn yaml_round_trip_preserves_systems() {
    let config = base_config();
    let yaml = serde_yaml::to_string(&config).expect("encode yaml");
    let decoded: AnalysisConfig = serde_yaml::from_str(&yaml).expect("decode yaml");
    assert_eq!(decoded, config);
}

#[test]
fn yaml_defaults_are_filled_in() {
    let yaml = r#"
systems:
  - name: NiFe
    elements: [Ni, Fe]
    atom_counts:
      Ni: 756
      Fe: 1293
    temperatures: [700, 800, 900, 1000, 1100]
    runtimes: [100000]
    repetitions: 5
"#;
    let decoded: AnalysisConfig = serde_yaml::from_str(yaml).expect("decode yaml");
    assert_eq!(decoded.boltzmann_ev, BOLTZMANN_EV);
    assert_eq!(decoded.systems[0].dimensionality, 3);
    decoded.validate().expect("defaults should validate");
}
