use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Device sensitivity and gesture parameters.
pub struct InputOptions {
    /// Multiplier on the scene-derived fly speed.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Pointer and stick rotation speed.
    #[schemars(title = "Orbit Speed", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub orbit_speed: f32,
    /// Two-finger pinch dolly speed.
    #[schemars(title = "Pinch Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub pinch_speed: f32,
    /// Mouse wheel dolly speed, per scrolled pixel.
    #[schemars(title = "Wheel Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub wheel_speed: f32,
    /// Virtual joystick radius in pixels.
    #[schemars(skip)]
    pub joystick_radius: f32,
    /// Gamepad stick dead zone.
    #[schemars(skip)]
    pub gamepad_dead_zone: f32,
    /// Longest gap between the taps of a double tap, in milliseconds.
    #[schemars(skip)]
    pub double_tap_ms: u64,
    /// Furthest apart (per axis, pixels) the taps of a double tap may be.
    #[schemars(skip)]
    pub double_tap_slop: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            orbit_speed: 18.0,
            pinch_speed: 0.4,
            wheel_speed: 0.06,
            joystick_radius: 50.0,
            gamepad_dead_zone: 0.1,
            double_tap_ms: 300,
            double_tap_slop: 8.0,
        }
    }
}
