//! Observable viewer state.
//!
//! The host UI needs to know when the camera mode changes, when playback
//! pauses, or how far along the track playback is. Instead of wrapping the
//! state in change-detecting proxies, every field is an [`Observable`] and
//! setters queue a [`StateEvent`] only when the value actually changed. The
//! host drains the queue once per frame.

use crate::camera::CameraMode;
use crate::input::InputMode;

/// A value that reports whether an assignment changed it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Observable<T> {
    value: T,
}

impl<T: PartialEq + Copy> Observable<T> {
    /// Wrap an initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    /// Assign, returning the previous value if it differed.
    pub fn set(&mut self, value: T) -> Option<T> {
        if self.value == value {
            return None;
        }
        Some(std::mem::replace(&mut self.value, value))
    }
}

/// A published state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateEvent {
    /// Camera mode switched.
    CameraMode {
        /// New mode.
        value: CameraMode,
        /// Mode switched away from.
        previous: CameraMode,
    },
    /// Input device class changed.
    InputMode(InputMode),
    /// Playback paused or resumed.
    AnimationPaused(bool),
    /// Playback position moved (seconds).
    AnimationTime(f32),
}

/// State the rig shares with the host.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    camera_mode: Observable<CameraMode>,
    input_mode: Observable<InputMode>,
    animation_paused: Observable<bool>,
    animation_time: Observable<f32>,
    animation_duration: f32,
    has_animation: bool,
    events: Vec<StateEvent>,
}

impl ViewerState {
    /// State for a scene with or without a scripted track.
    #[must_use]
    pub fn new(camera_mode: CameraMode, animation_duration: Option<f32>) -> Self {
        Self {
            camera_mode: Observable::new(camera_mode),
            has_animation: animation_duration.is_some(),
            animation_duration: animation_duration.unwrap_or(0.0),
            ..Self::default()
        }
    }

    /// Active camera mode.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode.get()
    }

    /// Input device class.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode.get()
    }

    /// Whether playback is paused.
    #[must_use]
    pub fn animation_paused(&self) -> bool {
        self.animation_paused.get()
    }

    /// Playback position in seconds.
    #[must_use]
    pub fn animation_time(&self) -> f32 {
        self.animation_time.get()
    }

    /// Track duration in seconds (0 without a track).
    #[must_use]
    pub fn animation_duration(&self) -> f32 {
        self.animation_duration
    }

    /// Whether the scene has a scripted track.
    #[must_use]
    pub fn has_animation(&self) -> bool {
        self.has_animation
    }

    /// Set the camera mode, returning the previous one if it changed.
    pub fn set_camera_mode(&mut self, value: CameraMode) -> Option<CameraMode> {
        let previous = self.camera_mode.set(value)?;
        self.events.push(StateEvent::CameraMode { value, previous });
        Some(previous)
    }

    /// Set the input device class. Returns whether it changed.
    pub fn set_input_mode(&mut self, value: InputMode) -> bool {
        let changed = self.input_mode.set(value).is_some();
        if changed {
            self.events.push(StateEvent::InputMode(value));
        }
        changed
    }

    /// Pause or resume playback.
    pub fn set_animation_paused(&mut self, value: bool) {
        if self.animation_paused.set(value).is_some() {
            self.events.push(StateEvent::AnimationPaused(value));
        }
    }

    /// Publish the playback position.
    pub fn set_animation_time(&mut self, value: f32) {
        if self.animation_time.set(value).is_some() {
            self.events.push(StateEvent::AnimationTime(value));
        }
    }

    /// Take every change published since the last drain.
    pub fn drain_events(&mut self) -> Vec<StateEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observable_reports_only_real_changes() {
        let mut value = Observable::new(3);
        assert_eq!(value.set(3), None);
        assert_eq!(value.set(4), Some(3));
        assert_eq!(value.get(), 4);
    }

    #[test]
    fn setters_queue_events_once() {
        let mut state = ViewerState::new(CameraMode::Orbit, None);
        assert_eq!(state.set_camera_mode(CameraMode::Fly), Some(CameraMode::Orbit));
        assert_eq!(state.set_camera_mode(CameraMode::Fly), None);
        state.set_animation_paused(true);
        state.set_animation_paused(true);

        assert_eq!(
            state.drain_events(),
            vec![
                StateEvent::CameraMode {
                    value: CameraMode::Fly,
                    previous: CameraMode::Orbit,
                },
                StateEvent::AnimationPaused(true),
            ]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn animation_flags_follow_track() {
        let state = ViewerState::new(CameraMode::Anim, Some(12.0));
        assert!(state.has_animation());
        assert_eq!(state.animation_duration(), 12.0);
        assert!(!ViewerState::default().has_animation());
    }
}
