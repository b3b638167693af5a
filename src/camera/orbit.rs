use glam::{EulerRot, Quat, Vec3};

use super::pose::Pose;
use super::smooth_damp::SmoothDamp;
use super::CameraController;
use crate::input::InputFrame;
use crate::util::math::modulo;

/// Closest the orbit camera may get to its focus point.
pub const MIN_DISTANCE: f32 = 0.01;

const PITCH: usize = 3;
const YAW: usize = 4;

/// Rotation from orbit Euler angles in degrees (yaw about Y, then pitch
/// about X, then roll about Z).
fn euler_rotation(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw.to_radians(),
        pitch.to_radians(),
        roll.to_radians(),
    )
}

/// Orbit camera controller.
///
/// Keeps a focus point, pitch/yaw angles (degrees) and a distance. Input
/// moves the raw state immediately; the rendered pose chases it through a
/// 7-channel [`SmoothDamp`] (focus xyz, pitch, yaw, roll, distance).
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    focus: Vec3,
    /// (pitch, yaw, roll) in degrees. Roll stays 0.
    rotation: Vec3,
    distance: f32,
    smooth: SmoothDamp<7>,

    /// Pan sensitivity, multiplied by the current distance.
    pub pan_speed: f32,
    /// Rotation sensitivity (degrees per input unit).
    pub rotate_speed: f32,
    /// Dolly sensitivity (fractional distance change per input unit).
    pub distance_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera one unit from the origin, looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            focus: Vec3::ZERO,
            rotation: Vec3::ZERO,
            distance: 1.0,
            smooth: SmoothDamp::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0])
                .with_period(PITCH, 180.0)
                .with_period(YAW, 360.0),
            pan_speed: 1.0,
            rotate_speed: 1.0,
            distance_speed: 1.0,
        }
    }

    /// Set the smoothing damping factor.
    pub fn set_damping(&mut self, damping: f32) {
        self.smooth.damping = damping;
    }

    /// Raw (unsmoothed) focus point.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Raw pitch in degrees, within `[-90, 90]`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    /// Raw yaw in degrees, within `[0, 360)`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    /// Raw (pitch, yaw, roll) in degrees.
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Raw distance to the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply one frame of input to the raw state.
    pub fn move_by(&mut self, input: &InputFrame) {
        let orientation =
            euler_rotation(self.rotation.x, self.rotation.y, self.rotation.z);
        let right = orientation * Vec3::X;
        let up = orientation * Vec3::Y;

        // Pan speed scales with distance so on-screen motion feels the same
        // at any zoom level.
        let pan = self.pan_speed * self.distance;
        self.focus += right * (input.movement.x * pan);
        self.focus += up * (input.movement.y * pan);

        self.distance = (self.distance
            * (1.0 + input.movement.z * self.distance_speed))
            .max(MIN_DISTANCE);

        self.rotation.x = (self.rotation.x
            - input.rotate.y * self.rotate_speed)
            .clamp(-90.0, 90.0);
        self.rotation.y =
            modulo(self.rotation.y - input.rotate.x * self.rotate_speed, 360.0);
    }

    /// Chase the raw state.
    pub fn smooth(&mut self, dt: f32) {
        let target = &mut self.smooth.target;
        target[..3].copy_from_slice(&self.focus.to_array());
        target[3..6].copy_from_slice(&self.rotation.to_array());
        target[6] = self.distance;
        self.smooth.update(dt);
    }
}

impl CameraController for OrbitCamera {
    fn reset(&mut self, pose: &Pose, snap: bool) {
        let forward = pose.forward().normalize();

        self.focus = pose.position + forward * pose.distance;
        self.rotation = Vec3::new(
            forward.y.clamp(-1.0, 1.0).asin().to_degrees(),
            modulo((-forward.x).atan2(-forward.z).to_degrees(), 360.0),
            0.0,
        );
        self.distance = pose.distance.max(MIN_DISTANCE);

        if snap {
            let target = &mut self.smooth.target;
            target[..3].copy_from_slice(&self.focus.to_array());
            target[3..6].copy_from_slice(&self.rotation.to_array());
            target[6] = self.distance;
            self.smooth.snap();
        }
    }

    fn update(&mut self, dt: f32, input: Option<&InputFrame>) {
        if let Some(input) = input {
            self.move_by(input);
        }
        self.smooth(dt);
    }

    fn pose(&self) -> Pose {
        let v = &self.smooth.value;
        let rotation = euler_rotation(v[3], v[4], v[5]);
        let distance = v[6];
        let focus = Vec3::new(v[0], v[1], v[2]);
        Pose {
            position: focus - rotation * Vec3::NEG_Z * distance,
            rotation,
            distance,
        }
    }
}
