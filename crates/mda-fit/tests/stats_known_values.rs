use mda_core::MdaError;
use mda_fit::{mean, summarize};

const TOL: f64 = 1e-9;

#[test]
fn summary_of_one_through_five() {
    let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("summarize");
    assert!((stats.mean - 3.0).abs() < TOL);
    assert!((stats.variance - 2.5).abs() < TOL);
    assert!((stats.std_dev - 2.5_f64.sqrt()).abs() < TOL);
    assert!((stats.std_err - 2.5_f64.sqrt() / 5.0_f64.sqrt()).abs() < TOL);
    assert_eq!(stats.count, 5);
}

#[test]
fn variance_needs_two_samples() {
    let err = summarize(&[1.0]).expect_err("one repetition has no variance");
    match err {
        MdaError::InsufficientSamples(info) => {
            assert_eq!(info.code, "too-few-repetitions");
        }
        other => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn mean_is_defined_for_one_sample() {
    assert!((mean(&[4.2]).expect("mean") - 4.2).abs() < TOL);
}

#[test]
fn mean_of_empty_sample_is_rejected() {
    let err = mean(&[]).expect_err("empty sample has no mean");
    assert_eq!(err.info().code, "empty-sample");
}

#[test]
fn identical_values_have_zero_spread() {
    let stats = summarize(&[7.0, 7.0, 7.0]).expect("summarize");
    assert!((stats.mean - 7.0).abs() < TOL);
    assert_eq!(stats.variance, 0.0);
    assert_eq!(stats.std_err, 0.0);
}
