//! Vector helpers used by normal estimation.

use glam::Vec3;

/// Normalizes `v`, returning the zero vector when `v` has zero length.
///
/// Never produces NaN for a zero input.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return Vec3::ZERO;
    }
    v / len
}

/// Unit normal of the triangle `(a, b, c)`, counter-clockwise winding.
///
/// Computed as `normalize((b - a) × (c - a))`. Degenerate triangles
/// yield the zero vector.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    normalize_or_zero((b - a).cross(c - a))
}
