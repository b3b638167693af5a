//! Scene extents and the camera placements derived from them.

use glam::{Quat, Vec3};

use crate::camera::{LoopMode, Pose, MIN_DISTANCE};
use crate::settings::{AnimTrack, CameraSettings, KeyframeValues, Keyframes};

/// Scenes whose half-extent length exceeds this are walked through rather
/// than framed from outside.
pub const HUGE_SCENE: f32 = 100.0;

const TURNTABLE_KEYS: usize = 12;
const TURNTABLE_SECONDS: f32 = 20.0;

/// Axis-aligned scene bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneBounds {
    /// Box center.
    pub center: Vec3,
    /// Half the box size along each axis.
    pub half_extents: Vec3,
}

impl SceneBounds {
    /// Bounds from a center and half extents.
    #[must_use]
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Bounds spanning two corners.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, (max - min) * 0.5)
    }

    /// Length of the half-extent vector: the bounding sphere radius.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.half_extents.length()
    }

    /// Whether `point` is inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        let offset = (point - self.center).abs();
        offset.cmple(self.half_extents).all()
    }

    /// Pose that fits the bounding sphere in a `fov`-degree view, looking at
    /// the center from the (2, 1, 2) direction.
    #[must_use]
    pub fn frame_pose(&self, fov: f32) -> Pose {
        let half_fov = (fov * 0.5).to_radians().sin();
        let distance = if half_fov > 0.0 {
            (self.size() / half_fov).max(MIN_DISTANCE)
        } else {
            MIN_DISTANCE
        };
        let eye = self.center + Vec3::new(2.0, 1.0, 2.0).normalize() * distance;
        Pose::from_look_at(eye, self.center)
    }
}

/// The authored reset placement, defaulting to `[2, 1, 2]` looking at the
/// origin.
#[must_use]
pub fn reset_pose(camera: &CameraSettings) -> Pose {
    let eye = camera.position.map_or(Vec3::new(2.0, 1.0, 2.0), Vec3::from);
    let target = camera.target.map_or(Vec3::ZERO, Vec3::from);
    Pose::from_look_at(eye, target)
}

/// A slow repeating orbit around the target of `start`, used to show off
/// object scenes that ship without a track.
#[must_use]
pub fn turntable_track(start: &Pose) -> AnimTrack {
    let target = start.calc_target();
    let offset = start.position - target;

    let mut times = Vec::with_capacity(TURNTABLE_KEYS);
    let mut position = Vec::with_capacity(TURNTABLE_KEYS * 3);
    let mut targets = Vec::with_capacity(TURNTABLE_KEYS * 3);
    for i in 0..TURNTABLE_KEYS {
        let turn = i as f32 / TURNTABLE_KEYS as f32;
        times.push(turn * TURNTABLE_SECONDS);
        let eye = target
            + Quat::from_rotation_y((-turn * 360.0).to_radians()) * offset;
        position.extend_from_slice(&eye.to_array());
        targets.extend_from_slice(&target.to_array());
    }

    AnimTrack {
        name: "turntable".into(),
        duration: TURNTABLE_SECONDS,
        frame_rate: 1.0,
        loop_mode: LoopMode::Repeat,
        keyframes: Keyframes {
            times,
            values: KeyframeValues {
                position,
                target: targets,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_pose_fits_bounding_sphere() {
        let bounds = SceneBounds::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
        let pose = bounds.frame_pose(60.0);
        assert!((pose.calc_target() - bounds.center).length() < 1e-4);
        // sin(30 degrees) = 0.5
        assert!((pose.distance - bounds.size() * 2.0).abs() < 1e-4);
        let dir = (pose.position - bounds.center).normalize();
        assert!((dir - Vec3::new(2.0, 1.0, 2.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn empty_bounds_still_frame() {
        let pose = SceneBounds::default().frame_pose(50.0);
        assert!(pose.position.is_finite());
        assert!(pose.distance > 0.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = SceneBounds::from_min_max(Vec3::ZERO, Vec3::splat(2.0));
        assert!(bounds.contains(Vec3::ONE));
        assert!(bounds.contains(Vec3::splat(2.0)));
        assert!(!bounds.contains(Vec3::new(2.5, 1.0, 1.0)));
    }

    #[test]
    fn reset_pose_defaults() {
        let pose = reset_pose(&CameraSettings::default());
        assert_eq!(pose.position, Vec3::new(2.0, 1.0, 2.0));
        assert!(pose.calc_target().length() < 1e-4);

        let custom = CameraSettings {
            target: Some([0.0, 1.0, 0.0]),
            ..CameraSettings::default()
        };
        assert!((reset_pose(&custom).calc_target() - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn turntable_circles_the_target() {
        let start = Pose::from_look_at(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        let track = turntable_track(&start);
        assert!(track.validate().is_ok());
        assert_eq!(track.keyframes.times.len(), TURNTABLE_KEYS);
        assert_eq!(track.loop_mode, LoopMode::Repeat);

        let radius = Vec3::new(0.0, 0.0, 5.0).length();
        for eye in track.keyframes.values.position.chunks_exact(3) {
            let eye = Vec3::from_slice(eye);
            assert!((eye.y - 1.0).abs() < 1e-4);
            assert!((Vec3::new(eye.x, 0.0, eye.z).length() - radius).abs() < 1e-3);
        }
        // Last key stops short of the loop end
        assert!(*track.keyframes.times.last().unwrap() < TURNTABLE_SECONDS);
    }
}
