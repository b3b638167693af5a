use glam::{Quat, Vec3};

use super::pose::Pose;
use super::smooth_damp::DEFAULT_DAMPING;
use super::CameraController;
use crate::input::InputFrame;
use crate::util::math::damp;

/// Free-flight camera controller.
///
/// Translation is along the camera's own right/up/forward axes at a fixed
/// speed, independent of distance. Rotation composes pitch about the local
/// right axis, yaw about world up and roll about the local forward axis, in
/// that order, each pre-multiplied onto the orientation. The rendered pose
/// lags behind the raw state with exponential smoothing.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    rotation: Quat,
    distance: f32,
    smooth_position: Vec3,
    smooth_rotation: Quat,

    /// World units per input unit.
    pub move_speed: f32,
    /// Degrees per input unit.
    pub rotate_speed: f32,
    /// Smoothing damping factor.
    pub damping: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FlyCamera {
    /// Camera at the origin looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            distance: 1.0,
            smooth_position: Vec3::ZERO,
            smooth_rotation: Quat::IDENTITY,
            move_speed: 1.0,
            rotate_speed: 1.0,
            damping: DEFAULT_DAMPING,
        }
    }

    /// Raw (unsmoothed) position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Raw (unsmoothed) orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Apply one frame of input to the raw state.
    pub fn move_by(&mut self, input: &InputFrame) {
        let forward = self.rotation * Vec3::NEG_Z;
        let right = self.rotation * Vec3::X;
        let up = self.rotation * Vec3::Y;

        let step = input.movement * self.move_speed;
        self.position += right * step.x + up * step.y + forward * step.z;

        let angles = input.rotate * -self.rotate_speed;
        let pitch = Quat::from_axis_angle(right, angles.y.to_radians());
        let yaw = Quat::from_axis_angle(Vec3::Y, angles.x.to_radians());
        let roll = Quat::from_axis_angle(forward, angles.z.to_radians());
        self.rotation = (roll * (yaw * (pitch * self.rotation))).normalize();
    }

    /// Chase the raw state.
    pub fn smooth(&mut self, dt: f32) {
        let weight = damp(self.damping, dt);
        self.smooth_position = self.smooth_position.lerp(self.position, weight);

        if self.smooth_rotation != self.rotation {
            let end = if self.smooth_rotation.dot(self.rotation) < 0.0 {
                -self.rotation
            } else {
                self.rotation
            };
            self.smooth_rotation =
                self.smooth_rotation.slerp(end, weight).normalize();
        }
    }
}

impl CameraController for FlyCamera {
    fn reset(&mut self, pose: &Pose, snap: bool) {
        self.position = pose.position;
        self.rotation = pose.rotation;
        self.distance = pose.distance;
        if snap {
            self.smooth_position = pose.position;
            self.smooth_rotation = pose.rotation;
        }
    }

    fn update(&mut self, dt: f32, input: Option<&InputFrame>) {
        if let Some(input) = input {
            self.move_by(input);
        }
        self.smooth(dt);
    }

    fn pose(&self) -> Pose {
        Pose {
            position: self.smooth_position,
            rotation: self.smooth_rotation,
            distance: self.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(movement: Vec3) -> InputFrame {
        InputFrame {
            movement,
            ..InputFrame::default()
        }
    }

    fn turning(rotate: Vec3) -> InputFrame {
        InputFrame {
            rotate,
            ..InputFrame::default()
        }
    }

    #[test]
    fn moves_along_local_axes() {
        let mut fly = FlyCamera::new();
        fly.reset(&Pose::from_look_at(Vec3::ZERO, Vec3::X), true);
        fly.move_speed = 2.0;

        fly.move_by(&moving(Vec3::new(0.0, 0.0, 1.0)));
        assert!((fly.position() - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);

        fly.move_by(&moving(Vec3::new(1.0, 0.0, 0.0)));
        // Looking down +X, right is +Z
        assert!((fly.position() - Vec3::new(2.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn speed_ignores_distance() {
        let mut near = FlyCamera::new();
        near.reset(&Pose::new(Vec3::ZERO, Quat::IDENTITY, 1.0), true);
        let mut far = FlyCamera::new();
        far.reset(&Pose::new(Vec3::ZERO, Quat::IDENTITY, 100.0), true);

        near.move_by(&moving(Vec3::Z));
        far.move_by(&moving(Vec3::Z));
        assert_eq!(near.position(), far.position());
        assert_eq!(far.pose().distance, 100.0);
    }

    #[test]
    fn yaw_keeps_horizon_level() {
        let mut fly = FlyCamera::new();
        for _ in 0..37 {
            fly.move_by(&turning(Vec3::new(13.0, 0.0, 0.0)));
        }
        let right = fly.rotation() * Vec3::X;
        assert!(right.y.abs() < 1e-5);
        assert!(fly.rotation().is_normalized());
    }

    #[test]
    fn pitch_then_yaw_order_matters() {
        let mut fly = FlyCamera::new();
        fly.move_by(&turning(Vec3::new(45.0, 45.0, 0.0)));
        // Pitch about the old right axis (X) then yaw about world up:
        // the camera still has no roll relative to the horizon
        let right = fly.rotation() * Vec3::X;
        assert!(right.y.abs() < 1e-5);
        let forward = fly.rotation() * Vec3::NEG_Z;
        assert!(forward.y < 0.0);
    }

    #[test]
    fn smoothing_converges_and_respects_zero_dt() {
        let mut fly = FlyCamera::new();
        fly.move_by(&moving(Vec3::new(3.0, 0.0, 0.0)));

        fly.smooth(0.0);
        assert_eq!(fly.pose().position, Vec3::ZERO);

        for _ in 0..600 {
            fly.smooth(1.0 / 60.0);
        }
        assert!((fly.pose().position - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-3);
    }
}
