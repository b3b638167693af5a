use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::math::modulo;

/// What happens when playback reaches the end of a track.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Stop at the last frame.
    #[default]
    None,
    /// Jump back to the start.
    Repeat,
    /// Play forward then backward.
    PingPong,
}

/// Time cursor along a fixed-duration animation track.
///
/// `timer` counts total elapsed time and never wraps. `cursor` is the
/// position within the loop: `[0, duration]` for [`LoopMode::None`],
/// `[0, duration)` for [`LoopMode::Repeat`] and `[0, 2 * duration)` for
/// [`LoopMode::PingPong`], where the second half plays backward.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimCursor {
    duration: f32,
    loop_mode: LoopMode,
    timer: f32,
    cursor: f32,
}

impl AnimCursor {
    /// Create a cursor at the start of a track.
    #[must_use]
    pub fn new(duration: f32, loop_mode: LoopMode) -> Self {
        Self {
            duration,
            loop_mode,
            timer: 0.0,
            cursor: 0.0,
        }
    }

    /// Restart on a (possibly different) track.
    pub fn reset(&mut self, duration: f32, loop_mode: LoopMode) {
        *self = Self::new(duration, loop_mode);
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.timer += dt;

        if self.duration <= 0.0 {
            self.cursor = 0.0;
            return;
        }

        self.cursor += dt;
        if self.cursor >= self.duration {
            match self.loop_mode {
                LoopMode::None => self.cursor = self.duration,
                LoopMode::Repeat => self.cursor %= self.duration,
                LoopMode::PingPong => self.cursor %= self.duration * 2.0,
            }
        }
    }

    /// Playback position in `[0, duration]`.
    ///
    /// The backward half of a ping-pong cycle folds as
    /// `2 * duration - cursor`, so the value runs continuously back to 0.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.cursor > self.duration {
            self.duration * 2.0 - self.cursor
        } else {
            self.cursor
        }
    }

    /// Seek to `value` seconds, wrapped into `[0, duration)`.
    ///
    /// Always lands in the forward half of a ping-pong cycle.
    pub fn set_value(&mut self, value: f32) {
        self.cursor = if self.duration > 0.0 {
            modulo(value, self.duration)
        } else {
            0.0
        };
    }

    /// Playback position as a fraction of the duration.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            self.value() / self.duration
        } else {
            0.0
        }
    }

    /// Track duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Loop behavior.
    #[must_use]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Total elapsed time, never wrapped.
    #[must_use]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Raw looped position (up to `2 * duration` for ping-pong).
    #[must_use]
    pub fn cursor(&self) -> f32 {
        self.cursor
    }
}

impl Default for AnimCursor {
    fn default() -> Self {
        Self::new(0.0, LoopMode::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn repeat_stays_in_range() {
        let mut cursor = AnimCursor::new(3.0, LoopMode::Repeat);
        for dt in [0.5, 2.9, 0.1, 7.3, 0.0, 3.0, 11.11] {
            cursor.update(dt);
            assert!(cursor.cursor() >= 0.0 && cursor.cursor() < 3.0);
        }
    }

    #[test]
    fn repeat_whole_cycles_return_to_start() {
        let mut cursor = AnimCursor::new(2.5, LoopMode::Repeat);
        cursor.update(1.2);
        let before = cursor.cursor();
        for k in 1..4 {
            let mut c = cursor.clone();
            c.update(2.5 * k as f32);
            assert!((c.cursor() - before).abs() < EPS);
        }
    }

    #[test]
    fn none_pins_at_duration() {
        let mut cursor = AnimCursor::new(2.0, LoopMode::None);
        cursor.update(1.5);
        assert!((cursor.value() - 1.5).abs() < EPS);
        cursor.update(1.0);
        assert_eq!(cursor.cursor(), 2.0);
        for _ in 0..5 {
            cursor.update(0.7);
            assert_eq!(cursor.cursor(), 2.0);
        }
        assert!((cursor.timer() - 6.0).abs() < EPS);
    }

    #[test]
    fn pingpong_folds_continuously() {
        let mut cursor = AnimCursor::new(4.0, LoopMode::PingPong);
        let mut previous = cursor.value();
        for _ in 0..160 {
            cursor.update(0.1);
            let value = cursor.value();
            assert!((0.0..=4.0).contains(&value));
            assert!((value - previous).abs() <= 0.1 + EPS);
            previous = value;
        }
        // 16s into an 8s cycle: back at the start
        assert!(cursor.value() < 0.1 + EPS);
    }

    #[test]
    fn pingpong_backward_half() {
        let mut cursor = AnimCursor::new(4.0, LoopMode::PingPong);
        cursor.update(5.0);
        assert!((cursor.value() - 3.0).abs() < EPS);
        cursor.update(2.5);
        assert!((cursor.value() - 0.5).abs() < EPS);
    }

    #[test]
    fn set_value_wraps_into_forward_half() {
        let mut cursor = AnimCursor::new(4.0, LoopMode::PingPong);
        cursor.set_value(6.0);
        assert!((cursor.cursor() - 2.0).abs() < EPS);
        cursor.set_value(-1.0);
        assert!((cursor.cursor() - 3.0).abs() < EPS);
    }

    #[test]
    fn empty_track_never_produces_nan() {
        let mut cursor = AnimCursor::new(0.0, LoopMode::Repeat);
        cursor.update(0.0);
        cursor.update(0.5);
        cursor.set_value(3.0);
        assert_eq!(cursor.value(), 0.0);
        assert_eq!(cursor.progress(), 0.0);
    }
}
