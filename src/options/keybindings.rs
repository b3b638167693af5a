use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Frame` → `"KeyF"`).
    pub bindings: FxHashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings: FxHashMap<KeyAction, String> = [
            (KeyAction::Frame, "KeyF".into()),
            (KeyAction::Reset, "KeyR".into()),
            (KeyAction::PlayPause, "Space".into()),
            (KeyAction::Cancel, "Escape".into()),
        ]
        .into_iter()
        .collect();

        let mut opts = Self {
            bindings,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_moves_the_action() {
        let mut keys = KeybindingOptions::default();
        keys.bind(KeyAction::Frame, "KeyP");
        assert_eq!(keys.lookup("KeyP"), Some(KeyAction::Frame));
        assert_eq!(keys.lookup("KeyF"), None);
    }
}
