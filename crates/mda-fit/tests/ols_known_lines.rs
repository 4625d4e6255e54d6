use mda_core::MdaError;
use mda_fit::{fit, fit_indexed};

const TOL: f64 = 1e-9;

#[test]
fn exact_line_is_recovered() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|xi| 3.0 * xi + 2.0).collect();
    let result = fit(&x, &y).expect("fit should succeed");
    assert!((result.intercept - 2.0).abs() < TOL);
    assert!((result.slope - 3.0).abs() < TOL);
}

#[test]
fn indexed_fit_matches_explicit_index_axis() {
    let y = vec![4.0, 4.5, 5.2, 5.9, 6.4];
    let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
    let explicit = fit(&x, &y).expect("explicit fit");
    let indexed = fit_indexed(&y).expect("indexed fit");
    assert!((explicit.intercept - indexed.intercept).abs() < TOL);
    assert!((explicit.slope - indexed.slope).abs() < TOL);
}

#[test]
fn predict_evaluates_the_fitted_line() {
    let result = fit_indexed(&[2.0, 5.0, 8.0]).expect("fit");
    assert!((result.predict(10.0) - 32.0).abs() < TOL);
}

#[test]
fn constant_x_is_degenerate() {
    let x = vec![5.0, 5.0, 5.0];
    let y = vec![1.0, 2.0, 3.0];
    let err = fit(&x, &y).expect_err("constant x cannot be fitted");
    match err {
        MdaError::DegenerateInput(info) => assert_eq!(info.code, "constant-x"),
        other => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn single_sample_is_degenerate() {
    let err = fit_indexed(&[1.0]).expect_err("one sample cannot be fitted");
    assert_eq!(err.info().code, "too-few-samples");
}

#[test]
fn mismatched_lengths_are_degenerate() {
    let err = fit(&[0.0, 1.0, 2.0], &[1.0, 2.0]).expect_err("length mismatch");
    assert_eq!(err.info().code, "length-mismatch");
}

#[test]
fn noisy_line_slope_stays_close() {
    // Symmetric noise pattern leaves the OLS slope at the underlying value.
    let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let noise = [0.1, -0.1, 0.1, -0.1, 0.1, -0.1];
    let y: Vec<f64> = x
        .iter()
        .zip(noise.iter())
        .map(|(xi, ni)| 2.0 * xi + 1.0 + ni)
        .collect();
    let result = fit(&x, &y).expect("fit");
    assert!((result.slope - 2.0).abs() < 0.05);
}
