use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::smooth_damp::DEFAULT_DAMPING;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera smoothing, transition and control parameters.
pub struct CameraOptions {
    /// Whether the scene's field of view is measured horizontally.
    #[schemars(title = "Horizontal FOV")]
    pub horizontal_fov: bool,
    /// Per-millisecond retention factor for camera smoothing. Higher is
    /// smoother and slower.
    #[schemars(title = "Damping", range(min = 0.8, max = 0.999), extend("step" = 0.001))]
    pub damping: f32,
    /// Seconds taken to blend between camera modes.
    #[schemars(title = "Transition Time", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub transition_duration: f32,
    /// Blend curve used for mode transitions.
    #[schemars(skip)]
    pub transition_easing: EasingFunction,
    /// Let pointer input look around during scripted playback.
    #[schemars(title = "Free Look")]
    pub free_look: bool,
    /// Orbit pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Orbit and fly rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Orbit dolly sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Scripted-camera free-look sensitivity.
    #[schemars(skip)]
    pub look_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            horizontal_fov: false,
            damping: DEFAULT_DAMPING,
            transition_duration: 1.0,
            transition_easing: EasingFunction::ExponentialOut,
            free_look: false,
            pan_speed: 1.0,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            look_speed: 0.2,
        }
    }
}
