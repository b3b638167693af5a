//! Camera controllers and the math they share.
//!
//! Three mutually exclusive controllers produce a [`Pose`] each frame:
//! [`OrbitCamera`] circles a focus point, [`FlyCamera`] moves freely and
//! [`AnimCamera`] plays back a keyframed track. All of them implement
//! [`CameraController`], and the rig picks one by [`CameraMode`].

/// Keyframed track playback camera.
pub mod anim;
/// Looping/ping-pong animation time cursor.
pub mod cursor;
/// Free-flight camera.
pub mod fly;
/// Orbit-around-a-focus camera.
pub mod orbit;
/// Camera pose value type.
pub mod pose;
/// Multi-channel exponential smoothing.
pub mod smooth_damp;
/// Spline contract and looping cubic implementation.
pub mod spline;

pub use anim::AnimCamera;
pub use cursor::{AnimCursor, LoopMode};
pub use fly::FlyCamera;
pub use orbit::{OrbitCamera, MIN_DISTANCE};
pub use pose::Pose;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smooth_damp::SmoothDamp;
pub use spline::{CubicSpline, Spline};

use crate::input::InputFrame;

/// Which controller drives the camera.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Orbit around a focus point.
    #[default]
    Orbit,
    /// Free six-degree-of-freedom flight.
    Fly,
    /// Scripted track playback.
    Anim,
}

/// Capability set shared by every camera controller.
pub trait CameraController {
    /// Place the camera at `pose`. With `snap` the smoothed state jumps there
    /// too; without it the camera glides over from where it was.
    fn reset(&mut self, pose: &Pose, snap: bool);

    /// Advance by `dt` seconds, consuming `input` if the mode accepts any.
    fn update(&mut self, dt: f32, input: Option<&InputFrame>);

    /// Current (smoothed) pose.
    fn pose(&self) -> Pose;
}
