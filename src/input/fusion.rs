//! Fuses per-device deltas into one [`InputFrame`].
//!
//! Keyboard, mouse, touch, virtual joystick and gamepad contributions are
//! weighted by the active camera mode and summed. Held keys, buttons and
//! touch counts are latched from their edges so a key held across many
//! frames keeps moving the camera.

use glam::{Vec2, Vec3};

use super::frame::InputFrame;
use super::keyboard::Key;
use super::sources::{
    DesktopDeltas, GamepadDeltas, JoystickDeltas, TouchDeltas,
};
use super::MouseButton;
use crate::camera::CameraMode;

/// Everything the sources produced this frame.
#[derive(Debug, Clone, Default)]
pub struct DeviceDeltas {
    /// Keyboard and mouse.
    pub desktop: DesktopDeltas,
    /// Multi-touch orbit gestures.
    pub touch: TouchDeltas,
    /// Virtual joysticks.
    pub joystick: JoystickDeltas,
    /// Gamepad sticks.
    pub gamepad: GamepadDeltas,
}

/// Per-frame parameters the fusion depends on.
#[derive(Debug, Clone, Copy)]
pub struct FusionContext {
    /// Active camera mode.
    pub mode: CameraMode,
    /// Frame time in seconds.
    pub dt: f32,
    /// Field of view in degrees.
    pub fov: f32,
    /// Whether `fov` is measured horizontally.
    pub horizontal_fov: bool,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Whether the scripted camera accepts look-around input.
    pub free_look: bool,
}

impl FusionContext {
    /// Convert a pixel delta into a camera-plane pan at unit distance.
    ///
    /// The result is negated horizontally so the scene follows the pointer.
    #[must_use]
    pub fn screen_to_world(&self, delta: Vec2) -> Vec3 {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Vec3::ZERO;
        }
        let ndc = Vec2::new(
            -(delta.x / self.viewport.x) * 2.0,
            (delta.y / self.viewport.y) * 2.0,
        );

        let aspect = self.viewport.x / self.viewport.y;
        let half = (0.5 * self.fov.to_radians()).tan();
        let half_size = if self.horizontal_fov {
            Vec2::new(half, half / aspect)
        } else {
            Vec2::new(half * aspect, half)
        };

        (ndc * half_size).extend(0.0)
    }
}

/// Speed multipliers applied during fusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionSpeeds {
    /// Keyboard / joystick / gamepad translation speed (world units/s).
    pub move_speed: f32,
    /// Rotation speed (degrees per pixel-second for pointers).
    pub orbit_speed: f32,
    /// Pinch dolly speed.
    pub pinch_speed: f32,
    /// Wheel dolly speed.
    pub wheel_speed: f32,
}

impl Default for FusionSpeeds {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            orbit_speed: 18.0,
            pinch_speed: 0.4,
            wheel_speed: 0.06,
        }
    }
}

/// Latched device state plus the weighting rules.
#[derive(Debug, Clone, Default)]
pub struct FusionController {
    /// Speed multipliers.
    pub speeds: FusionSpeeds,
    axis: Vec3,
    mouse: [i32; 3],
    shift: i32,
    ctrl: i32,
    touches: i32,
}

impl FusionController {
    /// Create a controller with the given speeds.
    #[must_use]
    pub fn new(speeds: FusionSpeeds) -> Self {
        Self {
            speeds,
            ..Self::default()
        }
    }

    /// Latched key axis (x = right, y = up, z = forward).
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Latched number of touches down.
    #[must_use]
    pub fn touches(&self) -> i32 {
        self.touches
    }

    fn latch(&mut self, desktop: &DesktopDeltas, touch: &TouchDeltas) {
        let k = |key| desktop.key(key) as f32;
        self.axis += Vec3::new(
            (k(Key::D) - k(Key::A)) + (k(Key::ArrowRight) - k(Key::ArrowLeft)),
            k(Key::E) - k(Key::Q),
            (k(Key::W) - k(Key::S)) + (k(Key::ArrowUp) - k(Key::ArrowDown)),
        );
        self.touches += touch.count;
        for (held, edge) in self.mouse.iter_mut().zip(desktop.buttons) {
            *held += edge;
        }
        self.shift += desktop.key(Key::Shift);
        self.ctrl += desktop.key(Key::Control);
    }

    /// Fuse one frame of device deltas into `frame`.
    ///
    /// Returns `Some(CameraMode::Fly)` when movement keys are held outside
    /// fly mode; the caller switches modes before the camera update.
    pub fn update(
        &mut self,
        deltas: &DeviceDeltas,
        ctx: &FusionContext,
        frame: &mut InputFrame,
    ) -> Option<CameraMode> {
        let DeviceDeltas {
            desktop,
            touch,
            joystick,
            gamepad,
        } = deltas;
        self.latch(desktop, touch);

        let switch = (ctx.mode != CameraMode::Fly && self.axis != Vec3::ZERO)
            .then_some(CameraMode::Fly);
        let mode = switch.unwrap_or(ctx.mode);

        let weight = |on: bool| if on { 1.0 } else { 0.0 };
        let orbit = weight(mode == CameraMode::Orbit);
        let fly = weight(mode == CameraMode::Fly);
        let look = weight(mode == CameraMode::Anim && ctx.free_look);
        let double = weight(self.touches > 1);
        let right_slot = MouseButton::Right.index();
        let pan = weight(
            self.mouse[right_slot] > 0
                || self.mouse[MouseButton::Middle.index()] > 0
                || desktop.buttons[right_slot] < 0
                || self.touches > 1,
        );
        let orbit_factor = if fly > 0.0 { ctx.fov / 120.0 } else { 1.0 };

        let s = self.speeds;
        let dt = ctx.dt;

        // Desktop move
        let modifier = if self.shift > 0 {
            2.0
        } else if self.ctrl > 0 {
            0.5
        } else {
            1.0
        };
        let keys = self.axis.normalize_or_zero() * (fly * s.move_speed * modifier * dt);
        let wheel = desktop.wheel * s.wheel_speed * dt;
        let dolly = if fly > 0.0 { -wheel } else { wheel };
        frame.add_move(
            keys + ctx.screen_to_world(desktop.mouse) * pan + Vec3::Z * dolly,
        );

        // Desktop rotate
        frame.add_rotate(
            desktop.mouse.extend(0.0) * ((1.0 - pan) * s.orbit_speed * orbit_factor * dt),
        );

        // Touch move
        let stick = Vec3::new(joystick.left.x, 0.0, -joystick.left.y);
        frame.add_move(
            ctx.screen_to_world(touch.touch) * (orbit * pan)
                + stick * (fly * s.move_speed * dt)
                + Vec3::Z * (-touch.pinch * orbit * double * s.pinch_speed * dt),
        );

        // Touch rotate
        let touch_gate = orbit.max(look);
        frame.add_rotate(
            touch.touch.extend(0.0) * (touch_gate * (1.0 - pan) * s.orbit_speed * dt)
                + joystick.right.extend(0.0)
                    * (fly * s.orbit_speed * orbit_factor * dt),
        );

        // Gamepad
        frame.add_move(
            Vec3::new(gamepad.left.x, 0.0, -gamepad.left.y) * (s.move_speed * dt),
        );
        frame.add_rotate(
            gamepad.right.extend(0.0) * (s.orbit_speed * orbit_factor * dt),
        );

        frame.released |= desktop.released || touch.released || joystick.released;

        switch
    }
}
