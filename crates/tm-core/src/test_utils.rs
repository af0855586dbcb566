//! Float assertions shared by tests across tm-* crates

/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    (actual - expected).abs(),
    tolerance
  );
}

/// Grades and scores come back as 0..100 floats with a handful of decimals
pub fn assert_grade_eq(actual: f64, expected: f64) {
  assert_approx_eq(actual, expected, 1e-6);
}

/// Assert that an optional metric is present and close to `expected`
pub fn assert_some_approx(actual: Option<f64>, expected: f64) {
  match actual {
    Some(v) => assert_approx_eq(v, expected, DEFAULT_TOLERANCE),
    None => panic!("expected Some({}), got None", expected),
  }
}
