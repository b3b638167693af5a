use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Keys the rig understands.
///
/// Codes follow the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"ArrowUp"`, `"Space"`) so bindings written for a winit host read the
/// same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    F,
    R,
    P,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Shift,
    Control,
    Space,
    Escape,
}

const ALL_KEYS: [Key; 17] = [
    Key::W,
    Key::A,
    Key::S,
    Key::D,
    Key::Q,
    Key::E,
    Key::F,
    Key::R,
    Key::P,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Shift,
    Key::Control,
    Key::Space,
    Key::Escape,
];

impl Key {
    /// Physical key string used in key bindings.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::W => "KeyW",
            Self::A => "KeyA",
            Self::S => "KeyS",
            Self::D => "KeyD",
            Self::Q => "KeyQ",
            Self::E => "KeyE",
            Self::F => "KeyF",
            Self::R => "KeyR",
            Self::P => "KeyP",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Shift => "ShiftLeft",
            Self::Control => "ControlLeft",
            Self::Space => "Space",
            Self::Escape => "Escape",
        }
    }

    /// Parse a key string. Left and right modifier variants collapse into
    /// one key.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ShiftRight" => Some(Self::Shift),
            "ControlRight" => Some(Self::Control),
            _ => ALL_KEYS.into_iter().find(|key| key.code() == code),
        }
    }
}

#[cfg(feature = "winit")]
impl Key {
    /// Map a winit physical key code, if the rig cares about it.
    #[must_use]
    pub fn from_winit(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        Some(match code {
            KeyCode::KeyW => Self::W,
            KeyCode::KeyA => Self::A,
            KeyCode::KeyS => Self::S,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyQ => Self::Q,
            KeyCode::KeyE => Self::E,
            KeyCode::KeyF => Self::F,
            KeyCode::KeyR => Self::R,
            KeyCode::KeyP => Self::P,
            KeyCode::ArrowUp => Self::ArrowUp,
            KeyCode::ArrowDown => Self::ArrowDown,
            KeyCode::ArrowLeft => Self::ArrowLeft,
            KeyCode::ArrowRight => Self::ArrowRight,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Self::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Self::Control,
            KeyCode::Space => Self::Space,
            KeyCode::Escape => Self::Escape,
            _ => return None,
        })
    }
}

/// Rig-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// frame = "KeyF"
/// play_pause = "Space"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fit the whole scene in view.
    Frame,
    /// Return to the scene's authored reset placement.
    Reset,
    /// Toggle scripted playback.
    PlayPause,
    /// Leave scripted playback.
    Cancel,
}
