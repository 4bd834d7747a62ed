//! Closed-form rotation of two fixed-magnitude vectors and their cross product.

use crate::vec2::Vec2;

/// The two vectors at one instant, and their cross product.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub v1: Vec2<f64>,
    pub v2: Vec2<f64>,
    /// `v1.x * v2.y - v1.y * v2.x`
    pub cross: f64,
}

/// Computes both vectors from their angles and magnitudes, and their 2-D cross
/// product. Any real input is accepted, including zero and negative magnitudes.
///
/// The angles are independent; a mirrored sweep is the caller's choice of
/// `theta2 = -theta1`.
pub fn compute_frame(theta1: f64, theta2: f64, mag1: f64, mag2: f64) -> Frame {
    let v1 = Vec2::from_polar(mag1, theta1);
    let v2 = Vec2::from_polar(mag2, theta2);
    Frame {
        v1,
        v2,
        cross: v1.cross(v2),
    }
}

/// Current angles of the two vectors, in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RotationState {
    pub theta1: f64,
    pub theta2: f64,
}

impl RotationState {
    pub fn mirrored(theta: f64) -> Self {
        Self {
            theta1: theta,
            theta2: -theta,
        }
    }

    pub fn compute_frame(&self, mag1: f64, mag2: f64) -> Frame {
        compute_frame(self.theta1, self.theta2, mag1, mag2)
    }
}

/// How the second vector's angle relates to the driving angle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RotationPolicy {
    /// Vector 1 follows the driving angle and vector 2 is its reflection across
    /// the x axis.
    Mirrored,

    /// Vector 1 follows the driving angle; vector 2 advances by its own fixed
    /// step on every frame after the first.
    Independent { step2: f64 },
}

impl Default for RotationPolicy {
    fn default() -> Self {
        RotationPolicy::Mirrored
    }
}

impl RotationPolicy {
    /// Angles for the next frame. `first` is true for the frame that starts a run,
    /// which keeps vector 2 at its initial angle.
    pub fn advance(&self, prev: RotationState, theta: f64, first: bool) -> RotationState {
        match *self {
            RotationPolicy::Mirrored => RotationState::mirrored(theta),
            RotationPolicy::Independent { step2 } => RotationState {
                theta1: theta,
                theta2: if first {
                    prev.theta2
                } else {
                    prev.theta2 + step2
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{linspace, M_PI};
    use crate::testing::*;

    #[test]
    fn components_follow_magnitude_and_angle() {
        let f = compute_frame(M_PI / 3.0, -M_PI / 6.0, 4.0, 3.0);
        assert_close(f.v1.x, 4.0 * (M_PI / 3.0).cos(), TOL, "v1.x");
        assert_close(f.v1.y, 4.0 * (M_PI / 3.0).sin(), TOL, "v1.y");
        assert_close(f.v2.x, 3.0 * (M_PI / 6.0).cos(), TOL, "v2.x");
        assert_close(f.v2.y, -3.0 * (M_PI / 6.0).sin(), TOL, "v2.y");
        assert_close(f.cross, f.v1.x * f.v2.y - f.v1.y * f.v2.x, TOL, "cross");
    }

    #[test]
    fn mirrored_cross_is_sin_of_double_angle() {
        init_test();
        for &(m1, m2) in &[(4.0, 3.0), (4.0, 4.0), (1.5, -2.0), (0.0, 7.0)] {
            for theta in linspace(0.0, M_PI, 33) {
                let f = compute_frame(theta, -theta, m1, m2);
                // v1 x v2 = m1 m2 sin(theta2 - theta1) = -m1 m2 sin(2 theta)
                let expected = m1 * m2 * (-theta - theta).sin();
                assert_close(f.cross, expected, 1e-9, "cross(theta, -theta)");
                assert_close(f.cross.abs(), (m1 * m2 * (2.0 * theta).sin()).abs(), 1e-9, "|cross|");
            }
        }
    }

    #[test]
    fn parallel_at_zero() {
        for &(m1, m2) in &[(4.0, 3.0), (-1.0, 2.0), (0.0, 0.0)] {
            let f = compute_frame(0.0, 0.0, m1, m2);
            assert_eq!(f.cross, 0.0);
            assert_eq!(f.v1, Vec2::new(m1, 0.0));
        }
    }

    #[test]
    fn quarter_turn_mirrored() {
        let f = compute_frame(M_PI / 2.0, -M_PI / 2.0, 4.0, 3.0);
        assert_close(f.v1.x, 0.0, TOL, "v1.x");
        assert_close(f.v1.y, 4.0, TOL, "v1.y");
        assert_close(f.v2.x, 0.0, TOL, "v2.x");
        assert_close(f.v2.y, -3.0, TOL, "v2.y");
        assert_close(f.cross, 0.0, TOL, "cross");
    }

    #[test]
    fn compute_frame_is_pure() {
        let a = compute_frame(1.234, -0.5, 4.0, 3.0);
        let b = compute_frame(1.234, -0.5, 4.0, 3.0);
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_policy_test() {
        let start = RotationState::default();

        let m = RotationPolicy::Mirrored.advance(start, 0.75, false);
        assert_eq!(m, RotationState { theta1: 0.75, theta2: -0.75 });

        let p = RotationPolicy::Independent { step2: 0.25 };
        let s0 = p.advance(start, 0.0, true);
        assert_eq!(s0, RotationState { theta1: 0.0, theta2: 0.0 });
        let s1 = p.advance(s0, 0.1, false);
        let s2 = p.advance(s1, 0.2, false);
        assert_eq!(s2.theta1, 0.2);
        assert_close(s2.theta2, 0.5, TOL, "theta2 after two steps");
    }
}
