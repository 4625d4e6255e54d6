use mda_fit::{fit, summarize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn exact_lines_are_recovered(
        slope in -50.0f64..50.0,
        intercept in -50.0f64..50.0,
        n in 2usize..64,
    ) {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|xi| intercept + slope * xi).collect();
        let result = fit(&x, &y).unwrap();
        prop_assert!((result.slope - slope).abs() < 1e-6);
        prop_assert!((result.intercept - intercept).abs() < 1e-6);
    }

    #[test]
    fn shifting_y_moves_only_the_intercept(
        shift in -100.0f64..100.0,
        values in proptest::collection::vec(-100.0f64..100.0, 2..32),
    ) {
        let x: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        let base = fit(&x, &values).unwrap();
        let shifted: Vec<f64> = values.iter().map(|v| v + shift).collect();
        let moved = fit(&x, &shifted).unwrap();
        prop_assert!((moved.slope - base.slope).abs() < 1e-6);
        prop_assert!((moved.intercept - (base.intercept + shift)).abs() < 1e-6);
    }

    #[test]
    fn variance_is_never_negative(
        values in proptest::collection::vec(-1000.0f64..1000.0, 2..32),
    ) {
        let stats = summarize(&values).unwrap();
        prop_assert!(stats.variance >= 0.0);
        prop_assert!(stats.std_err <= stats.std_dev + 1e-12);
    }
}
