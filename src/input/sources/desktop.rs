use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::input::keyboard::Key;
use crate::input::MouseButton;

/// What the keyboard and mouse did since the last read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesktopDeltas {
    /// Per-key edge counts: +1 per press, -1 per release.
    pub keys: FxHashMap<Key, i32>,
    /// Per-button edge counts, indexed by [`MouseButton::index`].
    pub buttons: [i32; 3],
    /// Mouse movement in pixels while a button was held.
    pub mouse: Vec2,
    /// Accumulated wheel delta.
    pub wheel: f32,
    /// A button was released.
    pub released: bool,
}

impl DesktopDeltas {
    /// Edge count for `key` (0 if untouched).
    #[must_use]
    pub fn key(&self, key: Key) -> i32 {
        self.keys.get(&key).copied().unwrap_or(0)
    }
}

/// Keyboard + mouse + wheel source.
///
/// Key and button changes are reported as edges so a consumer can keep its
/// own latched view of what is held; auto-repeat presses of an already held
/// key are dropped.
#[derive(Debug, Default)]
pub struct DesktopSource {
    held_keys: FxHashSet<Key>,
    held_buttons: [bool; 3],
    last_pos: Option<Vec2>,
    deltas: DesktopDeltas,
}

impl DesktopSource {
    /// Create an idle source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently down.
    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.held_keys.contains(&key)
    }

    /// Key press or release.
    pub fn key(&mut self, key: Key, pressed: bool) {
        let changed = if pressed {
            self.held_keys.insert(key)
        } else {
            self.held_keys.remove(&key)
        };
        if changed {
            *self.deltas.keys.entry(key).or_insert(0) +=
                if pressed { 1 } else { -1 };
        }
    }

    /// Mouse button press.
    pub fn button_down(&mut self, button: MouseButton, pos: Vec2) {
        let slot = button.index();
        if !self.held_buttons[slot] {
            self.held_buttons[slot] = true;
            self.deltas.buttons[slot] += 1;
        }
        self.last_pos = Some(pos);
    }

    /// Mouse movement. Only drags count towards the delta.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if let Some(last) = self.last_pos {
            if self.held_buttons.iter().any(|&held| held) {
                self.deltas.mouse += pos - last;
            }
        }
        self.last_pos = Some(pos);
    }

    /// Mouse button release.
    pub fn button_up(&mut self, button: MouseButton) {
        let slot = button.index();
        if self.held_buttons[slot] {
            self.held_buttons[slot] = false;
            self.deltas.buttons[slot] -= 1;
            self.deltas.released = true;
        }
    }

    /// Scroll wheel.
    pub fn wheel(&mut self, delta: f32) {
        self.deltas.wheel += delta;
    }

    /// Release every held button, e.g. when pointer input is routed
    /// elsewhere. Keys stay held: keyboard input is never re-routed.
    pub fn release_pointers(&mut self) {
        for button in [MouseButton::Left, MouseButton::Middle, MouseButton::Right]
        {
            self.button_up(button);
        }
        self.last_pos = None;
    }

    /// Hand out everything accumulated since the last read.
    pub fn read(&mut self) -> DesktopDeltas {
        std::mem::take(&mut self.deltas)
    }
}
