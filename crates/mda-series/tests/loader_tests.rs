use std::io::Cursor;
use std::io::Write;

use mda_core::MdaError;
use mda_series::{accumulate_squared_displacements, load_series, read_series, LoadOptions};

const TOL: f64 = 1e-9;

fn displacement_file() -> &'static str {
    // Header, spurious tiny reading, baseline, then samples.
    "# msd (A^2)\n0.0001\n0.5\n1.5\n2.5\n3.5\n"
}

#[test]
fn displacement_layout_subtracts_the_baseline() {
    let options = LoadOptions::displacement();
    let series = read_series(Cursor::new(displacement_file()), &options).expect("read");
    assert_eq!(series.len(), 3);
    assert!((series[0] - 1.0).abs() < TOL);
    assert!((series[1] - 2.0).abs() < TOL);
    assert!((series[2] - 3.0).abs() < TOL);
}

#[test]
fn scale_factor_multiplies_every_sample() {
    let options = LoadOptions::displacement().with_scale(756.0);
    let series = read_series(Cursor::new(displacement_file()), &options).expect("read");
    assert!((series[0] - 756.0).abs() < TOL);
    assert!((series[2] - 2268.0).abs() < TOL);
}

#[test]
fn energy_layout_keeps_raw_samples() {
    let input = "# pe (eV)\n-100.5\n-100.7\n\n-100.9\n";
    let series = read_series(Cursor::new(input), &LoadOptions::energy()).expect("read");
    assert_eq!(series, vec![-100.5, -100.7, -100.9]);
}

#[test]
fn column_extraction_reads_the_requested_field() {
    let input = "1 0.5 1.0e-12\n2 0.6 2.0e-12\n3 0.7 3.0e-12\n";
    let options = LoadOptions::default().with_column(2).with_scale(1.0e12);
    let series = read_series(Cursor::new(input), &options).expect("read");
    assert_eq!(series, vec![1.0, 2.0, 3.0]);
}

#[test]
fn unparseable_line_is_malformed() {
    let input = "# header\n0.0\n0.1\nnot-a-number\n";
    let err = read_series(Cursor::new(input), &LoadOptions::displacement())
        .expect_err("bad line must fail");
    match err {
        MdaError::MalformedInput(info) => {
            assert_eq!(info.code, "unparseable-sample");
            assert_eq!(info.context.get("line").map(String::as_str), Some("4"));
        }
        other => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn short_series_is_malformed() {
    let input = "# header\n0.0\n0.1\n0.2\n";
    let err = read_series(Cursor::new(input), &LoadOptions::displacement())
        .expect_err("one usable sample is not enough");
    assert_eq!(err.info().code, "too-few-samples");
}

#[test]
fn missing_column_is_malformed() {
    let input = "1 2\n3 4\n";
    let options = LoadOptions::default().with_column(2);
    let err = read_series(Cursor::new(input), &options).expect_err("column 2 absent");
    assert_eq!(err.info().code, "missing-column");
}

#[test]
fn load_series_attaches_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("1_msd_Ni_5000ps_700.txt");
    let mut file = std::fs::File::create(&path).expect("create");
    write!(file, "{}", displacement_file()).expect("write");

    let series = load_series(&path, &LoadOptions::displacement()).expect("load");
    assert_eq!(series.len(), 3);

    let missing = dir.path().join("absent.txt");
    let err = load_series(&missing, &LoadOptions::displacement()).expect_err("missing file");
    match err {
        MdaError::Io(info) => {
            assert!(info.context.get("path").is_some());
        }
        other => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn squared_displacements_accumulate_across_steps() {
    // Two atoms, three steps; per-step sums are 2, 8, 18.
    let input = "\
1 0 0
0 1 0
2 0 0
0 0 2
3 0 0
0 3 0
";
    let series =
        accumulate_squared_displacements(Cursor::new(input), 2, 3, 0).expect("accumulate");
    assert_eq!(series, vec![2.0, 10.0, 28.0]);
}

#[test]
fn truncated_displacement_file_is_malformed() {
    let input = "1 0 0\n0 1 0\n2 0 0\n";
    let err = accumulate_squared_displacements(Cursor::new(input), 2, 3, 0)
        .expect_err("missing rows must fail");
    assert_eq!(err.info().code, "truncated-displacements");
}

#[test]
fn bad_displacement_row_is_malformed() {
    let input = "1 0 0\n0 oops 0\n";
    let err = accumulate_squared_displacements(Cursor::new(input), 1, 2, 0)
        .expect_err("bad row must fail");
    assert_eq!(err.info().code, "bad-displacement-row");
}
