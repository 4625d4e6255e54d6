use mda_arrhenius::diffusion_from_slope;

const TOL: f64 = 1e-12;

#[test]
fn slope_six_in_three_dimensions_gives_unit_diffusion() {
    let estimate = diffusion_from_slope(6.0, 3, 1e-6);
    assert!((estimate.coefficient - 1.0).abs() < TOL);
    assert!(!estimate.clamped);
}

#[test]
fn negative_slope_is_floored_and_flagged() {
    let estimate = diffusion_from_slope(-2.0, 3, 1e-6);
    assert!(estimate.clamped);
    assert!((estimate.slope - 1e-6).abs() < TOL);
    assert!((estimate.coefficient - 1e-6 / 6.0).abs() < TOL);
    assert!(estimate.coefficient > 0.0);
}

#[test]
fn zero_slope_is_floored_and_flagged() {
    let estimate = diffusion_from_slope(0.0, 3, 1e-6);
    assert!(estimate.clamped);
    assert!(estimate.ln_coefficient().is_finite());
}

#[test]
fn two_dimensional_systems_divide_by_four() {
    let estimate = diffusion_from_slope(8.0, 2, 1e-6);
    assert!((estimate.coefficient - 2.0).abs() < TOL);
}
