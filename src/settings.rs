//! Scene-authored settings document.
//!
//! Scenes ship a JSON document describing where the camera starts, where
//! "reset" takes it, and any scripted camera tracks. Older documents stored
//! track key times in seconds without a frame rate; [`Settings::from_json`]
//! migrates those on load.

use serde::{Deserialize, Serialize};

use crate::camera::LoopMode;
use crate::error::VantageError;

/// Frame rate assumed for tracks written before `frameRate` existed.
pub const LEGACY_FRAME_RATE: f32 = 30.0;

/// Which animation the viewer starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StartAnim {
    /// No scripted start.
    #[default]
    None,
    /// Start on the orbit camera.
    Orbit,
    /// Play the track named by [`CameraSettings::anim_track`].
    AnimTrack,
}

/// Camera placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Reset eye position. Defaults to `[2, 1, 2]` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    /// Reset look-at target. Defaults to the origin when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<[f32; 3]>,
    /// Start-up animation choice.
    pub start_anim: StartAnim,
    /// Name of the track to play when `start_anim` is `animTrack`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim_track: Option<String>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 50.0,
            position: None,
            target: None,
            start_anim: StartAnim::None,
            anim_track: None,
        }
    }
}

/// Keyframe values: flat xyz triples, one per key time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyframeValues {
    /// Eye positions.
    pub position: Vec<f32>,
    /// Look-at targets.
    pub target: Vec<f32>,
}

/// Key times (in frames) and their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyframes {
    /// Key times, ascending, measured in frames.
    pub times: Vec<f32>,
    /// Per-key values.
    pub values: KeyframeValues,
}

/// A scripted camera track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimTrack {
    /// Track name, referenced by [`CameraSettings::anim_track`].
    #[serde(default)]
    pub name: String,
    /// Duration in seconds.
    pub duration: f32,
    /// Frames per second. Zero means the document predates frame rates.
    #[serde(default)]
    pub frame_rate: f32,
    /// Playback looping behaviour.
    #[serde(default)]
    pub loop_mode: LoopMode,
    /// Key data.
    #[serde(default)]
    pub keyframes: Keyframes,
}

impl AnimTrack {
    /// Check that the track can be turned into a spline.
    pub fn validate(&self) -> Result<(), VantageError> {
        let keys = self.keyframes.times.len();
        let invalid = |msg: String| {
            Err(VantageError::InvalidTrack(format!("{}: {msg}", self.name)))
        };
        if keys == 0 {
            return invalid("no keyframes".into());
        }
        let values = &self.keyframes.values;
        if values.position.len() != keys * 3 || values.target.len() != keys * 3 {
            return invalid(format!(
                "{keys} keys but {} position and {} target values",
                values.position.len(),
                values.target.len()
            ));
        }
        let times = &self.keyframes.times;
        if !times.iter().all(|time| time.is_finite()) {
            return invalid("non-finite key time".into());
        }
        if let Some(pair) = times.windows(2).find(|pair| pair[0] >= pair[1]) {
            return invalid(format!(
                "key times must ascend, {} is followed by {}",
                pair[0], pair[1]
            ));
        }
        if !(self.frame_rate > 0.0 && self.frame_rate.is_finite()) {
            return invalid(format!("frame rate {}", self.frame_rate));
        }
        if !(self.duration > 0.0 && self.duration.is_finite()) {
            return invalid(format!("duration {}", self.duration));
        }
        Ok(())
    }

    /// Upgrade a legacy track: times were seconds, now they are frames.
    fn migrate(&mut self) -> bool {
        if self.frame_rate > 0.0 {
            return false;
        }
        self.frame_rate = LEGACY_FRAME_RATE;
        for time in &mut self.keyframes.times {
            *time *= LEGACY_FRAME_RATE;
        }
        true
    }
}

/// The full settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Camera placement.
    pub camera: CameraSettings,
    /// Scripted camera tracks.
    pub anim_tracks: Vec<AnimTrack>,
}

impl Settings {
    /// Parse a settings document, migrating legacy tracks.
    pub fn from_json(json: &str) -> Result<Self, VantageError> {
        let mut settings: Self = serde_json::from_str(json)
            .map_err(|e| VantageError::SettingsParse(e.to_string()))?;
        settings.migrate();
        Ok(settings)
    }

    /// Load and parse a settings file.
    pub fn load(path: &std::path::Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Apply in-place upgrades for older documents.
    pub fn migrate(&mut self) {
        for track in &mut self.anim_tracks {
            if track.migrate() {
                log::warn!(
                    "track '{}' has no frame rate, assuming {LEGACY_FRAME_RATE}",
                    track.name
                );
            }
        }
    }

    /// The track selected for start-up playback, if any.
    #[must_use]
    pub fn start_track(&self) -> Option<&AnimTrack> {
        if self.camera.start_anim != StartAnim::AnimTrack {
            return None;
        }
        let name = self.camera.anim_track.as_deref()?;
        self.anim_tracks.iter().find(|track| track.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "camera": {
            "fov": 60,
            "position": [1, 2, 3],
            "startAnim": "animTrack",
            "animTrack": "intro"
        },
        "animTracks": [{
            "name": "intro",
            "duration": 4,
            "frameRate": 30,
            "target": "camera",
            "interpolation": "spline",
            "loopMode": "pingpong",
            "keyframes": {
                "times": [0, 60],
                "values": {
                    "position": [0, 0, 5, 5, 0, 0],
                    "target": [0, 0, 0, 0, 0, 0]
                }
            }
        }]
    }"#;

    #[test]
    fn parses_camel_case_document() {
        let settings = Settings::from_json(DOC).unwrap();
        assert_eq!(settings.camera.fov, 60.0);
        assert_eq!(settings.camera.position, Some([1.0, 2.0, 3.0]));
        assert_eq!(settings.camera.target, None);

        let track = settings.start_track().unwrap();
        assert_eq!(track.loop_mode, LoopMode::PingPong);
        assert_eq!(track.keyframes.times, vec![0.0, 60.0]);
        assert!(track.validate().is_ok());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.start_track().is_none());
    }

    #[test]
    fn legacy_track_times_become_frames() {
        let doc = r#"{"animTracks": [{
            "name": "old",
            "duration": 2,
            "keyframes": {"times": [0, 1, 2], "values": {
                "position": [0,0,0, 1,1,1, 2,2,2],
                "target": [0,0,0, 0,0,0, 0,0,0]
            }}
        }]}"#;
        let settings = Settings::from_json(doc).unwrap();
        let track = &settings.anim_tracks[0];
        assert_eq!(track.frame_rate, LEGACY_FRAME_RATE);
        assert_eq!(track.keyframes.times, vec![0.0, 30.0, 60.0]);
        assert_eq!(track.loop_mode, LoopMode::None);
    }

    #[test]
    fn migration_leaves_modern_tracks_alone() {
        let mut settings = Settings::from_json(DOC).unwrap();
        settings.migrate();
        assert_eq!(settings.anim_tracks[0].keyframes.times, vec![0.0, 60.0]);
    }

    #[test]
    fn malformed_tracks_are_rejected() {
        let base = Settings::from_json(DOC).unwrap().anim_tracks[0].clone();

        let mut empty = base.clone();
        empty.keyframes = Keyframes::default();
        assert!(matches!(
            empty.validate(),
            Err(VantageError::InvalidTrack(_))
        ));

        let mut short = base.clone();
        let _ = short.keyframes.values.target.pop();
        assert!(short.validate().is_err());

        let mut zero = base;
        zero.duration = 0.0;
        assert!(zero.validate().is_err());
    }

    #[test]
    fn key_times_must_ascend() {
        let base = Settings::from_json(DOC).unwrap().anim_tracks[0].clone();
        assert!(base.validate().is_ok());

        let mut reversed = base.clone();
        reversed.keyframes.times.reverse();
        assert!(matches!(
            reversed.validate(),
            Err(VantageError::InvalidTrack(_))
        ));

        let mut repeated = base;
        let first = repeated.keyframes.times[0];
        repeated.keyframes.times[1] = first;
        assert!(repeated.validate().is_err());
    }

    #[test]
    fn unknown_start_track_is_none() {
        let mut settings = Settings::from_json(DOC).unwrap();
        settings.camera.anim_track = Some("missing".into());
        assert!(settings.start_track().is_none());
    }

    #[test]
    fn bad_json_is_a_settings_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(VantageError::SettingsParse(_))
        ));
    }
}
