pub fn init_test() {
    drop(env_logger::try_init());
}

/// Default tolerance for comparing computed floats.
pub const TOL: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        crate::math::approx_eq(actual, expected, tol),
        "{}: (actual : expected) {} : {}, tolerance {}",
        what,
        actual,
        expected,
        tol
    );
}
