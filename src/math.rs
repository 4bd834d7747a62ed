pub const M_PI: f64 = core::f64::consts::PI;

/// Greatest common divisor, by repeated remainder. `gcd(0, d) == d` and
/// `gcd(a, 0) == a`, so reducing a zero numerator never divides by zero.
/// `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Rounds to the nearest integer; ties go away from zero (2.5 -> 3, -2.5 -> -3).
/// Values outside the range of `i64` saturate.
pub fn round_half_away(f: f64) -> i64 {
    f.round() as i64
}

/// `count` evenly spaced values from `start` to `end`, both endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        // avoid drift on the final sample
                        end
                    } else {
                        start + (end - start) * (i as f64 / last)
                    }
                })
                .collect()
        }
    }
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
