//! Device input sources.
//!
//! Each source turns one device's events into raw deltas and hands them out
//! once per frame through `read()`. Accumulated deltas are cleared on read;
//! held state (joystick deflection, gamepad sticks) is reported every frame.

mod desktop;
mod gamepad;
mod joystick;
mod touch;

pub use desktop::{DesktopDeltas, DesktopSource};
pub use gamepad::{GamepadDeltas, GamepadSource};
pub use joystick::{JoystickDeltas, JoystickSource, JoystickUi};
pub use touch::{TouchDeltas, TouchSource};
