//! Pure numeric helpers shared by the shape evaluators.

use glam::Vec3;

use crate::basis::Basis;

/// Place a basis-local offset in world space:
/// `origin + forward * forward_dist + right * right_offset + up * up_offset`.
#[inline]
pub fn resolve_position(basis: &Basis, forward_dist: f32, right_offset: f32, up_offset: f32) -> Vec3 {
    basis.origin + basis.forward * forward_dist + basis.right * right_offset + basis.up * up_offset
}

/// Sine and cosine of `angle` (radians), computed together.
#[inline]
pub fn sincos(angle: f32) -> (f32, f32) {
    angle.sin_cos()
}

/// Unit parabola `4t(1 - t)`: 0 at both ends, 1 at t = 0.5.
/// Not clamped; negative outside [0, 1].
#[inline]
pub fn parabola(t: f32) -> f32 {
    4.0 * t * (1.0 - t)
}
