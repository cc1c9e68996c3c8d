//! 2D vector type for planar ragdoll physics.

use crate::float::Float;
use core::ops::{Add, AddAssign, Sub, SubAssign, Neg};

/// 2D vector in screen space (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// True if both components are finite.
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
