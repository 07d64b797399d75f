//! Planar vector used for positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, Sub};

/// 2D vector in container-local CSS pixels (y grows downward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    pub fn length(self) -> F { self.dot(self).sqrt() }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Self) -> Self {
        (self + other).scale(F::half())
    }

    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4() {
        assert!((Vec2::new(3.0f32, 4.0).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn midpoint_between_points() {
        let m = Vec2::new(0.0f32, 10.0).midpoint(Vec2::new(10.0, 30.0));
        assert_eq!(m, Vec2::new(5.0, 20.0));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(Vec2::new(1.0f32, 2.0).is_finite());
    }
}
