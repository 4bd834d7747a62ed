use core::ops::{Add, Mul, Neg, Sub};

#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Mul<T, Output = T> + Sub<T, Output = T> + Copy> Vec2<T> {
    /// The z component of the 3-D cross product of two vectors lying in the
    /// xy plane. Positive when `other` is counter-clockwise from `self`.
    pub fn cross(self, other: Vec2<T>) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T: Mul<T, Output = T> + Add<T, Output = T> + Copy> Vec2<T> {
    pub fn dot(self, other: Vec2<T>) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl Vec2<f64> {
    /// Unit vector at `theta` radians from the positive x axis.
    pub fn from_angle(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self { x: c, y: s }
    }

    /// Vector of length `magnitude` at `theta`. A negative magnitude points
    /// the opposite way.
    pub fn from_polar(magnitude: f64, theta: f64) -> Self {
        magnitude * Self::from_angle(theta)
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl<T: Add<T, Output = T> + Copy> Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Sub<T, Output = T> + Copy> Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Vec2<T>;
    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<Vec2<f64>> for f64 {
    type Output = Vec2<f64>;
    fn mul(self, other: Vec2<f64>) -> Self::Output {
        Vec2 {
            x: self * other.x,
            y: self * other.y,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vec2<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::M_PI;
    use crate::testing::*;

    #[test]
    fn cross_is_antisymmetric() {
        let a = Vec2::new(3, 1);
        let b = Vec2::new(-2, 5);
        assert_eq!(a.cross(b), 17);
        assert_eq!(b.cross(a), -17);
        assert_eq!(a.cross(a), 0);
    }

    #[test]
    fn from_polar_test() {
        let v = Vec2::from_polar(2.0, M_PI / 2.0);
        assert_close(v.x, 0.0, TOL, "x");
        assert_close(v.y, 2.0, TOL, "y");
        assert_close(v.length(), 2.0, TOL, "length");

        // negative magnitude is a half turn
        let flipped = Vec2::from_polar(-2.0, 0.3);
        let turned = Vec2::from_polar(2.0, 0.3 + M_PI);
        assert_close((flipped - turned).length(), 0.0, TOL, "flipped vs turned");
        assert_close((flipped + -turned).length(), 0.0, TOL, "add neg");
    }
}
