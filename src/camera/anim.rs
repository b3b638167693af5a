use glam::{Quat, Vec3};

use super::cursor::{AnimCursor, LoopMode};
use super::pose::Pose;
use super::spline::{CubicSpline, Spline};
use super::CameraController;
use crate::error::VantageError;
use crate::input::InputFrame;
use crate::settings::AnimTrack;
use crate::util::math::all_finite;

/// Eye xyz followed by target xyz.
const CHANNELS: usize = 6;

/// Scripted camera playing an eye/target spline.
///
/// The cursor advances with `dt`, the spline is sampled at
/// `cursor.value() * frame_rate` (key times are in frames), and the camera
/// looks from the sampled eye to the sampled target. An optional free-look
/// offset lets the viewer glance around without leaving the track.
pub struct AnimCamera {
    cursor: AnimCursor,
    spline: Box<dyn Spline>,
    frame_rate: f32,
    scratch: [f32; CHANNELS],
    eye: Vec3,
    target: Vec3,
    /// Free-look (pitch, yaw) in degrees.
    look: (f32, f32),

    /// Free-look sensitivity.
    pub rotate_speed: f32,
}

impl AnimCamera {
    /// Wrap a spline and place the camera at the start of the track.
    #[must_use]
    pub fn new(
        spline: Box<dyn Spline>,
        duration: f32,
        loop_mode: LoopMode,
        frame_rate: f32,
    ) -> Self {
        let mut camera = Self {
            cursor: AnimCursor::new(duration, loop_mode),
            spline,
            frame_rate,
            scratch: [0.0; CHANNELS],
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            look: (0.0, 0.0),
            rotate_speed: 0.2,
        };
        camera.update(0.0, None);
        camera
    }

    /// Build a camera from a settings track.
    pub fn from_track(track: &AnimTrack) -> Result<Self, VantageError> {
        track.validate()?;

        let times = &track.keyframes.times;
        let values = &track.keyframes.values;
        let mut points = Vec::with_capacity(times.len() * CHANNELS);
        for i in 0..times.len() {
            points.extend_from_slice(&values.position[i * 3..i * 3 + 3]);
            points.extend_from_slice(&values.target[i * 3..i * 3 + 3]);
        }

        let length = loop_length(track);
        let spline = CubicSpline::from_points_looping(length, times, &points)?;

        log::debug!(
            "anim track '{}': {} keys, {}s at {} fps, loop length {length}",
            track.name,
            times.len(),
            track.duration,
            track.frame_rate
        );

        Ok(Self::new(
            Box::new(spline),
            track.duration,
            track.loop_mode,
            track.frame_rate,
        ))
    }

    /// Playback cursor.
    #[must_use]
    pub fn cursor(&self) -> &AnimCursor {
        &self.cursor
    }

    /// Mutable playback cursor, for scrubbing.
    pub fn cursor_mut(&mut self) -> &mut AnimCursor {
        &mut self.cursor
    }

    /// Sampled eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Sampled look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Free-look offset as (pitch, yaw) degrees.
    #[must_use]
    pub fn look_offset(&self) -> (f32, f32) {
        self.look
    }

    fn free_look(&mut self, input: &InputFrame) {
        if input.released {
            self.look = (0.0, 0.0);
            return;
        }
        let (pitch, yaw) = self.look;
        self.look = (
            (pitch - input.rotate.y * self.rotate_speed).clamp(-90.0, 90.0),
            (yaw - input.rotate.x * self.rotate_speed).clamp(-180.0, 180.0),
        );
    }
}

/// Spline loop period in frames. A last key sitting exactly on the end of
/// the track gets one more frame so the closing segment back to the first
/// key has a length.
fn loop_length(track: &AnimTrack) -> f32 {
    let end = track.duration * track.frame_rate;
    match track.keyframes.times.last() {
        Some(&last) if last == end => end + 1.0,
        _ => end,
    }
}

impl CameraController for AnimCamera {
    /// The track decides where the camera goes; only the free-look offset
    /// is cleared.
    fn reset(&mut self, _pose: &Pose, _snap: bool) {
        self.look = (0.0, 0.0);
    }

    fn update(&mut self, dt: f32, input: Option<&InputFrame>) {
        self.cursor.update(dt);

        let time = self.cursor.value() * self.frame_rate;
        self.spline.evaluate(time, &mut self.scratch);
        if all_finite(&self.scratch) {
            self.eye = Vec3::from_slice(&self.scratch[..3]);
            self.target = Vec3::from_slice(&self.scratch[3..]);
        }

        if let Some(input) = input {
            self.free_look(input);
        }
    }

    fn pose(&self) -> Pose {
        let mut pose = Pose::from_look_at(self.eye, self.target);
        let (pitch, yaw) = self.look;
        if pitch != 0.0 || yaw != 0.0 {
            let rotation = Quat::from_rotation_y(yaw.to_radians())
                * pose.rotation
                * Quat::from_rotation_x(pitch.to_radians());
            pose.rotation = rotation.normalize();
        }
        pose
    }
}
