//! Easing curves for camera mode transitions.
//!
//! The rig blends from the previous pose into the new camera's pose with one
//! of these curves. All variants map `[0, 1]` onto `[0, 1]` with fixed
//! endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition blends.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Exponential ease-out, normalized so that `evaluate(1) == 1`.
    /// Formula: (1 - 2^(-10t)) / (1 - 2^-10)
    #[default]
    ExponentialOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First interior control value.
        c1: f32,
        /// Second interior control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::ExponentialOut => ease_out(t),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

/// Normalized exponential ease-out used by the default transition blend.
#[inline]
#[must_use]
pub fn ease_out(x: f32) -> f32 {
    (1.0 - 2f32.powf(-10.0 * x)) / (1.0 - 2f32.powi(-10))
}
