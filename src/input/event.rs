use glam::Vec2;

use super::keyboard::Key;

/// Pixels per scrolled line, the browser convention for one wheel notch.
pub const LINE_HEIGHT: f32 = 100.0;

/// Platform-agnostic input events.
///
/// These are fed into the [`CameraRig`](crate::rig::CameraRig), which routes
/// them to the device sources for the current camera and input mode.
///
/// # Example
///
/// ```ignore
/// rig.handle_event(InputEvent::PointerDown {
///     id: 1,
///     kind: PointerKind::Mouse,
///     button: MouseButton::Left,
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer (mouse button, finger, pen) went down.
    PointerDown {
        /// Stable identifier for the pointer while it is down.
        id: u64,
        /// Device class.
        kind: PointerKind,
        /// Mouse button (ignored for touch).
        button: MouseButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A pointer moved.
    PointerMove {
        /// Pointer identifier.
        id: u64,
        /// Device class.
        kind: PointerKind,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A pointer was released.
    PointerUp {
        /// Pointer identifier.
        id: u64,
        /// Device class.
        kind: PointerKind,
        /// Mouse button (ignored for touch).
        button: MouseButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The platform took a pointer away (gesture interrupted).
    PointerCancel {
        /// Pointer identifier.
        id: u64,
        /// Device class.
        kind: PointerKind,
    },
    /// Scroll wheel. Positive scrolls down (wheel rolled toward the user)
    /// and dollies out.
    Wheel {
        /// Scroll amount in pixels, about [`LINE_HEIGHT`] per notch. Use
        /// [`InputEvent::wheel_lines`] for line-based platforms.
        delta: f32,
    },
    /// Key pressed or released.
    Key {
        /// Which key changed.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Current gamepad stick state, sent whenever it changes.
    Gamepad {
        /// Left stick, each axis in `[-1, 1]` (y down).
        left: Vec2,
        /// Right stick, each axis in `[-1, 1]` (y down).
        right: Vec2,
    },
}

impl InputEvent {
    /// Wheel event from a line-based scroll amount.
    #[must_use]
    pub fn wheel_lines(lines: f32) -> Self {
        Self::Wheel {
            delta: lines * LINE_HEIGHT,
        }
    }

    /// The device class of a pointer event.
    #[must_use]
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        match *self {
            Self::PointerDown { kind, .. }
            | Self::PointerMove { kind, .. }
            | Self::PointerUp { kind, .. }
            | Self::PointerCancel { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Pointer device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    /// Mouse or trackpad.
    #[default]
    Mouse,
    /// Finger on a touch screen.
    Touch,
    /// Stylus.
    Pen,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    #[default]
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// Slot in per-button arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// winit reports scrolling up as positive; wheel deltas here are positive
/// scrolling down.
#[cfg(feature = "winit")]
impl From<winit::event::MouseScrollDelta> for InputEvent {
    fn from(delta: winit::event::MouseScrollDelta) -> Self {
        match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => {
                Self::wheel_lines(-y)
            }
            winit::event::MouseScrollDelta::PixelDelta(pos) => Self::Wheel {
                delta: -(pos.y as f32),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_kind_only_for_pointer_events() {
        let down = InputEvent::PointerDown {
            id: 3,
            kind: PointerKind::Touch,
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
        };
        assert_eq!(down.pointer_kind(), Some(PointerKind::Touch));
        assert_eq!(InputEvent::Wheel { delta: 1.0 }.pointer_kind(), None);
    }

    #[test]
    fn line_scrolls_become_pixels() {
        assert_eq!(
            InputEvent::wheel_lines(-2.0),
            InputEvent::Wheel { delta: -200.0 }
        );
    }

    #[cfg(feature = "winit")]
    #[test]
    fn winit_scroll_up_dollies_in() {
        use winit::event::MouseScrollDelta;
        assert_eq!(
            InputEvent::from(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::Wheel { delta: -LINE_HEIGHT }
        );
        assert_eq!(
            InputEvent::from(MouseScrollDelta::PixelDelta(
                winit::dpi::PhysicalPosition::new(0.0, -30.0)
            )),
            InputEvent::Wheel { delta: 30.0 }
        );
    }

    #[test]
    fn button_slots_are_distinct() {
        let slots = [MouseButton::Left, MouseButton::Middle, MouseButton::Right]
            .map(MouseButton::index);
        assert_eq!(slots, [0, 1, 2]);
    }
}
