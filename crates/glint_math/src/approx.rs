//! Tolerance-based comparisons shared by every primitive.
//!
//! All zero tests in the intersection code go through [`NearZero`] so that
//! planes, triangles and segments agree on where a boundary lies.

use crate::Vec3;

/// Absolute tolerance for comparisons against zero.
pub const EPSILON: f32 = 1e-6;

/// Values that can be compared against zero with [`EPSILON`].
pub trait NearZero {
    fn near_zero(&self) -> bool;
}

impl NearZero for f32 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.abs() < EPSILON
    }
}

impl NearZero for Vec3 {
    /// True when every component is near zero.
    #[inline]
    fn near_zero(&self) -> bool {
        self.x.near_zero() && self.y.near_zero() && self.z.near_zero()
    }
}

/// The scalar `s` such that `a = s * b`, assuming `a` and `b` are parallel.
///
/// Computed as a projection, so a slightly off-parallel `a` still gives the
/// nearest multiple. Returns NaN when `b` is zero.
#[inline]
pub fn scalar_multiple(a: Vec3, b: Vec3) -> f32 {
    a.dot(b) / b.length_squared()
}
