//! Scalar helpers shared by the camera controllers.

/// Framerate-independent smoothing weight.
///
/// `damping` close to 1 chases slowly, close to 0 snaps. The weight is
/// `1 - damping^(dt * 1000)`, so a zero `dt` yields zero (no movement).
#[inline]
#[must_use]
pub fn damp(damping: f32, dt: f32) -> f32 {
    1.0 - damping.powf(dt * 1000.0)
}

/// Euclidean modulus: the result always has the sign of `m`.
///
/// Returns 0 when `m` is zero rather than NaN.
#[inline]
#[must_use]
pub fn modulo(n: f32, m: f32) -> f32 {
    if m == 0.0 {
        return 0.0;
    }
    ((n % m) + m) % m
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Whether every value in the slice is finite.
#[inline]
#[must_use]
pub fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}
