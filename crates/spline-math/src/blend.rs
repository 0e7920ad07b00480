//! Scalar-weighted blends over `Vec3`.

use crate::Vec3;

/// Linear blend `a * (1 - t) + b * t`.
///
/// Exact at both ends: `t == 0` yields `a`, `t == 1` yields `b`.
#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Unit vector in the direction of `v`, or zero when `v` has no direction.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Square root of the length of `v`.
#[inline]
pub fn sqrt_length(v: Vec3) -> f32 {
    v.length().sqrt()
}
