//! The rig's interactive vocabulary.
//!
//! Every discrete operation, whether triggered by a key press, a double
//! tap, a host UI button or a programmatic call, is a `RigCommand` passed to
//! [`CameraRig::execute`](super::CameraRig::execute).

use crate::camera::CameraMode;

/// Discrete rig operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigCommand {
    /// Fit the whole scene in view (leaves scripted playback first).
    Frame,
    /// Return to the authored reset placement (leaves scripted playback
    /// first).
    Reset,
    /// Leave scripted playback for the previous mode.
    Cancel,
    /// The user touched the controls; leave scripted playback.
    Interrupt,
    /// Switch to scripted playback and toggle pause.
    PlayPause,
    /// Switch to scripted playback, paused or playing.
    SetPaused(bool),
    /// Scrub scripted playback to a time in seconds.
    SetAnimationTime(f32),
    /// Switch camera mode.
    SetCameraMode(CameraMode),
    /// Double tap at a screen position: re-aim the orbit camera at whatever
    /// is under it.
    Pick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}
