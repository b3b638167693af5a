use glam::{Mat3, Quat, Vec3};

use crate::util::math::lerp;

/// Camera placement: eye position, orientation and distance to the focus
/// point.
///
/// The camera looks down its local -Z axis. `rotation` is kept normalized and
/// `distance` is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation (unit quaternion).
    pub rotation: Quat,
    /// Distance from the eye to the focus point.
    pub distance: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            distance: 1.0,
        }
    }
}

impl Pose {
    /// Create a pose from its parts. The rotation is normalized and the
    /// distance clamped to be non-negative.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat, distance: f32) -> Self {
        Self {
            position,
            rotation: rotation.normalize(),
            distance: distance.max(0.0),
        }
    }

    /// Pose at `eye` looking at `target`.
    ///
    /// When `eye == target` the rotation is the identity and the distance is
    /// zero.
    #[must_use]
    pub fn from_look_at(eye: Vec3, target: Vec3) -> Self {
        let offset = target - eye;
        let distance = offset.length();
        let rotation = if distance > 0.0 {
            look_rotation(offset / distance)
        } else {
            Quat::IDENTITY
        };
        Self {
            position: eye,
            rotation,
            distance,
        }
    }

    /// The focus point: `position + forward * distance`.
    #[must_use]
    pub fn calc_target(&self) -> Vec3 {
        self.position + self.forward() * self.distance
    }

    /// Camera forward axis (world space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Camera right axis (world space).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera up axis (world space).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Blend two poses: position and distance linearly, rotation along the
    /// shortest arc.
    ///
    /// `t <= 0` returns `a` and `t >= 1` returns `b` unchanged, and blending a
    /// pose with itself returns it bit-for-bit.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *a;
        }
        if t >= 1.0 {
            return *b;
        }

        let rotation = if a.rotation == b.rotation {
            a.rotation
        } else {
            // Flip onto the same hemisphere so the arc is the short one
            let end = if a.rotation.dot(b.rotation) < 0.0 {
                -b.rotation
            } else {
                b.rotation
            };
            a.rotation.slerp(end, t).normalize()
        };

        Self {
            position: a.position.lerp(b.position, t),
            rotation,
            distance: lerp(a.distance, b.distance, t),
        }
    }
}

/// Rotation whose -Z axis points along `forward` (unit length) with the
/// camera up kept as close to world +Y as possible.
fn look_rotation(forward: Vec3) -> Quat {
    let back = -forward;
    // Straight up or down: borrow the horizontal axis the camera was
    // most likely tilting from.
    let reference = if back.y.abs() > 0.9999 {
        Vec3::new(0.0, 0.0, -back.y.signum())
    } else {
        Vec3::Y
    };
    let right = reference.cross(back).normalize();
    let up = back.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(a: Vec3, b: Vec3, eps: f32) {
        assert!((a - b).length() < eps, "{a:?} != {b:?}");
    }

    #[test]
    fn look_at_round_trips_target() {
        let cases = [
            (Vec3::new(2.0, 1.0, 2.0), Vec3::ZERO),
            (Vec3::new(-5.0, 3.0, 0.5), Vec3::new(1.0, -2.0, 4.0)),
            (Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO),
            (Vec3::new(0.0, -4.0, 0.0), Vec3::ZERO),
        ];
        for (eye, target) in cases {
            let pose = Pose::from_look_at(eye, target);
            assert_vec_near(pose.calc_target(), target, 1e-4);
            assert!((pose.distance - eye.distance(target)).abs() < 1e-5);
            assert!(pose.rotation.is_normalized());
        }
    }

    #[test]
    fn look_at_keeps_up_vertical() {
        let pose = Pose::from_look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert_vec_near(pose.forward(), Vec3::NEG_Z, 1e-6);
        assert_vec_near(pose.up(), Vec3::Y, 1e-6);
        assert_vec_near(pose.right(), Vec3::X, 1e-6);
    }

    #[test]
    fn look_at_degenerate_eye_equals_target() {
        let pose = Pose::from_look_at(Vec3::ONE, Vec3::ONE);
        assert_eq!(pose.rotation, Quat::IDENTITY);
        assert_eq!(pose.distance, 0.0);
    }

    #[test]
    fn reconstructing_from_target_reproduces_pose() {
        let pose = Pose::from_look_at(Vec3::new(3.0, 2.0, -1.0), Vec3::ZERO);
        let again = Pose::from_look_at(pose.position, pose.calc_target());
        assert_vec_near(again.position, pose.position, 1e-6);
        assert!(again.rotation.dot(pose.rotation).abs() > 1.0 - 1e-5);
        assert!((again.distance - pose.distance).abs() < 1e-4);
    }

    #[test]
    fn lerp_with_self_is_identity() {
        let a = Pose::from_look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(Pose::lerp(&a, &a, t), a);
        }
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Pose::from_look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let b = Pose::from_look_at(Vec3::new(-4.0, 0.0, 1.0), Vec3::X);
        assert_eq!(Pose::lerp(&a, &b, 0.0), a);
        assert_eq!(Pose::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_is_normalized_and_short_arc() {
        let a = Pose::new(Vec3::ZERO, Quat::IDENTITY, 2.0);
        // Same orientation expressed on the opposite hemisphere
        let b = Pose::new(Vec3::X * 2.0, -Quat::IDENTITY, 4.0);
        let mid = Pose::lerp(&a, &b, 0.5);
        assert!(mid.rotation.is_normalized());
        assert!(mid.rotation.dot(Quat::IDENTITY).abs() > 1.0 - 1e-5);
        assert_vec_near(mid.position, Vec3::X, 1e-6);
        assert!((mid.distance - 3.0).abs() < 1e-6);
    }
}
