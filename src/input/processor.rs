//! Routes raw platform events to device sources and turns discrete gestures
//! into rig commands.
//!
//! The `InputProcessor` owns every device source, the double-tap detector
//! and the key-binding map. Pointer events go to exactly one source,
//! chosen by the rig from the camera mode and the kind of device the user
//! last touched; keyboard and gamepad events always reach their sources.

use glam::Vec2;
use web_time::{Duration, Instant};

use super::event::{InputEvent, MouseButton, PointerKind};
use super::fusion::DeviceDeltas;
use super::keyboard::{Key, KeyAction};
use super::sources::{
    DesktopSource, GamepadSource, JoystickSource, JoystickUi, TouchSource,
};
use super::tap::TapDetector;
use crate::camera::CameraMode;
use crate::options::{InputOptions, KeybindingOptions};
use crate::rig::RigCommand;

/// Which kind of device the user is driving the viewer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Mouse and keyboard.
    #[default]
    Desktop,
    /// Touch screen.
    Touch,
}

impl From<PointerKind> for InputMode {
    fn from(kind: PointerKind) -> Self {
        match kind {
            PointerKind::Touch => Self::Touch,
            PointerKind::Mouse | PointerKind::Pen => Self::Desktop,
        }
    }
}

/// Where pointer events are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerRoute {
    /// Pointer input is ignored.
    #[default]
    None,
    /// Mouse drag, buttons and wheel.
    Desktop,
    /// One/two-finger orbit gestures.
    Touch,
    /// Virtual joysticks for fly mode.
    Joystick,
}

impl PointerRoute {
    /// The route for a camera mode and input mode. Scripted playback only
    /// takes pointer input when free-look is on, and then uses the orbit
    /// gestures.
    #[must_use]
    pub fn select(mode: CameraMode, input: InputMode, free_look: bool) -> Self {
        match (mode, input) {
            (CameraMode::Anim, _) if !free_look => Self::None,
            (_, InputMode::Desktop) => Self::Desktop,
            (CameraMode::Fly, InputMode::Touch) => Self::Joystick,
            (_, InputMode::Touch) => Self::Touch,
        }
    }
}

/// Converts raw events into source deltas and [`RigCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = processor.handle_event(event) {
///     rig.execute(cmd);
/// }
/// // Once per frame:
/// let deltas = processor.read();
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    desktop: DesktopSource,
    touch: TouchSource,
    joystick: JoystickSource,
    gamepad: GamepadSource,
    route: PointerRoute,
    taps: TapDetector,
    key_bindings: KeybindingOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&InputOptions::default(), KeybindingOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor from input options and key bindings.
    #[must_use]
    pub fn new(options: &InputOptions, key_bindings: KeybindingOptions) -> Self {
        Self {
            desktop: DesktopSource::new(),
            touch: TouchSource::new(),
            joystick: JoystickSource::new(options.joystick_radius),
            gamepad: GamepadSource::new(options.gamepad_dead_zone),
            route: PointerRoute::None,
            taps: TapDetector::new(
                Duration::from_millis(options.double_tap_ms),
                options.double_tap_slop,
            ),
            key_bindings,
        }
    }

    /// Current pointer route.
    #[must_use]
    pub fn route(&self) -> PointerRoute {
        self.route
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Viewport size changed.
    pub fn set_viewport(&mut self, width: f32) {
        self.joystick.set_width(width);
    }

    /// Deliver pointer events to a different source. Gestures in progress
    /// on the old source are released so latched state stays balanced.
    pub fn set_route(&mut self, route: PointerRoute) {
        if route == self.route {
            return;
        }
        match self.route {
            PointerRoute::None => {}
            PointerRoute::Desktop => self.desktop.release_pointers(),
            PointerRoute::Touch => self.touch.release_pointers(),
            PointerRoute::Joystick => self.joystick.release_pointers(),
        }
        self.route = route;
    }

    /// On-screen joystick geometry, while the joystick route is active.
    #[must_use]
    pub fn joystick(&self) -> Option<JoystickUi> {
        (self.route == PointerRoute::Joystick)
            .then(|| self.joystick.ui())
            .flatten()
    }

    /// Collect this frame's deltas from every source.
    pub fn read(&mut self) -> DeviceDeltas {
        DeviceDeltas {
            desktop: self.desktop.read(),
            touch: self.touch.read(),
            joystick: self.joystick.read(),
            gamepad: self.gamepad.read(),
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<RigCommand> {
        self.handle_event_at(event, Instant::now())
    }

    /// [`handle_event`](Self::handle_event) with an explicit clock.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<RigCommand> {
        match event {
            InputEvent::PointerDown {
                id, button, x, y, ..
            } => self.pointer_down(id, button, Vec2::new(x, y), now),
            InputEvent::PointerMove { id, x, y, .. } => {
                self.pointer_move(id, Vec2::new(x, y));
                None
            }
            InputEvent::PointerUp { id, button, .. } => {
                self.pointer_up(id, button);
                None
            }
            InputEvent::PointerCancel { id, .. } => {
                match self.route {
                    PointerRoute::Desktop => self.desktop.release_pointers(),
                    PointerRoute::Touch => self.touch.pointer_up(id),
                    PointerRoute::Joystick => self.joystick.pointer_up(id),
                    PointerRoute::None => {}
                }
                None
            }
            InputEvent::Wheel { delta } => {
                if self.route == PointerRoute::Desktop {
                    self.desktop.wheel(delta);
                }
                Some(RigCommand::Interrupt)
            }
            InputEvent::Key { key, pressed } => self.key(key, pressed),
            InputEvent::Gamepad { left, right } => {
                self.gamepad.set_sticks(left, right);
                None
            }
        }
    }

    fn pointer_down(
        &mut self,
        id: u64,
        button: MouseButton,
        pos: Vec2,
        now: Instant,
    ) -> Option<RigCommand> {
        self.route_pointer_down(id, button, pos);

        if self.taps.tap(now, pos) {
            Some(RigCommand::Pick { x: pos.x, y: pos.y })
        } else {
            Some(RigCommand::Interrupt)
        }
    }

    /// Hand a pointer press to the routed source without tap detection.
    ///
    /// A press that switches the camera mode changes the route after it
    /// was delivered; the rig replays it here so the gesture carries on
    /// in the new mode.
    pub fn route_pointer_down(&mut self, id: u64, button: MouseButton, pos: Vec2) {
        match self.route {
            PointerRoute::Desktop => self.desktop.button_down(button, pos),
            PointerRoute::Touch => self.touch.pointer_down(id, pos),
            PointerRoute::Joystick => self.joystick.pointer_down(id, pos),
            PointerRoute::None => {}
        }
    }

    fn pointer_move(&mut self, id: u64, pos: Vec2) {
        match self.route {
            PointerRoute::Desktop => self.desktop.pointer_move(pos),
            PointerRoute::Touch => self.touch.pointer_move(id, pos),
            PointerRoute::Joystick => self.joystick.pointer_move(id, pos),
            PointerRoute::None => {}
        }
    }

    fn pointer_up(&mut self, id: u64, button: MouseButton) {
        match self.route {
            PointerRoute::Desktop => self.desktop.button_up(button),
            PointerRoute::Touch => self.touch.pointer_up(id),
            PointerRoute::Joystick => self.joystick.pointer_up(id),
            PointerRoute::None => {}
        }
    }

    /// Key press/release. Bound keys map to their command (ignored while
    /// Control is held, except Cancel); any other press interrupts playback.
    fn key(&mut self, key: Key, pressed: bool) -> Option<RigCommand> {
        self.desktop.key(key, pressed);
        if !pressed {
            return None;
        }

        let action = self.key_bindings.lookup(key.code());
        let ctrl = self.desktop.is_held(Key::Control);
        match action {
            Some(KeyAction::Cancel) => Some(RigCommand::Cancel),
            Some(_) if ctrl => None,
            Some(KeyAction::Frame) => Some(RigCommand::Frame),
            Some(KeyAction::Reset) => Some(RigCommand::Reset),
            Some(KeyAction::PlayPause) => Some(RigCommand::PlayPause),
            None => Some(RigCommand::Interrupt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(id: u64, kind: PointerKind, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown {
            id,
            kind,
            button: MouseButton::Left,
            x,
            y,
        }
    }

    fn moved(id: u64, kind: PointerKind, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove { id, kind, x, y }
    }

    #[test]
    fn route_follows_camera_and_input_mode() {
        use CameraMode::{Anim, Fly, Orbit};
        use InputMode::{Desktop, Touch};
        assert_eq!(PointerRoute::select(Orbit, Desktop, false), PointerRoute::Desktop);
        assert_eq!(PointerRoute::select(Orbit, Touch, false), PointerRoute::Touch);
        assert_eq!(PointerRoute::select(Fly, Touch, false), PointerRoute::Joystick);
        assert_eq!(PointerRoute::select(Fly, Desktop, false), PointerRoute::Desktop);
        assert_eq!(PointerRoute::select(Anim, Touch, false), PointerRoute::None);
        assert_eq!(PointerRoute::select(Anim, Touch, true), PointerRoute::Touch);
    }

    #[test]
    fn pointer_events_reach_only_the_routed_source() {
        let mut processor = InputProcessor::default();
        processor.set_route(PointerRoute::Desktop);
        let start = Instant::now();
        let _ = processor.handle_event_at(down(1, PointerKind::Mouse, 0.0, 0.0), start);
        let _ = processor.handle_event_at(moved(1, PointerKind::Mouse, 5.0, 0.0), start);

        let deltas = processor.read();
        assert_eq!(deltas.desktop.mouse, Vec2::new(5.0, 0.0));
        assert_eq!(deltas.touch.count, 0);
    }

    #[test]
    fn pointer_kind_picks_input_mode() {
        assert_eq!(InputMode::from(PointerKind::Touch), InputMode::Touch);
        assert_eq!(InputMode::from(PointerKind::Pen), InputMode::Desktop);
    }

    #[test]
    fn double_tap_requests_pick() {
        let mut processor = InputProcessor::default();
        let start = Instant::now();
        let first = processor.handle_event_at(down(1, PointerKind::Touch, 50.0, 60.0), start);
        assert_eq!(first, Some(RigCommand::Interrupt));
        let second = processor.handle_event_at(
            down(1, PointerKind::Touch, 52.0, 61.0),
            start + Duration::from_millis(150),
        );
        assert_eq!(second, Some(RigCommand::Pick { x: 52.0, y: 61.0 }));
    }

    #[test]
    fn bound_keys_map_to_commands() {
        let mut processor = InputProcessor::default();
        let press = |key| InputEvent::Key { key, pressed: true };
        assert_eq!(processor.handle_event(press(Key::F)), Some(RigCommand::Frame));
        assert_eq!(processor.handle_event(press(Key::Space)), Some(RigCommand::PlayPause));
        assert_eq!(processor.handle_event(press(Key::W)), Some(RigCommand::Interrupt));
        assert_eq!(
            processor.handle_event(InputEvent::Key { key: Key::W, pressed: false }),
            None
        );
    }

    #[test]
    fn control_suppresses_bindings_but_not_cancel() {
        let mut processor = InputProcessor::default();
        let press = |key| InputEvent::Key { key, pressed: true };
        let _ = processor.handle_event(press(Key::Control));
        assert_eq!(processor.handle_event(press(Key::R)), None);
        assert_eq!(processor.handle_event(press(Key::Escape)), Some(RigCommand::Cancel));
    }

    #[test]
    fn rerouting_releases_gestures() {
        let mut processor = InputProcessor::default();
        processor.set_route(PointerRoute::Touch);
        let _ = processor.handle_event(down(1, PointerKind::Touch, 0.0, 0.0));
        assert_eq!(processor.read().touch.count, 1);

        processor.set_route(PointerRoute::Joystick);
        let deltas = processor.read();
        assert_eq!(deltas.touch.count, -1);
        assert!(deltas.touch.released);
    }

    #[test]
    fn wheel_only_counts_on_desktop_route() {
        let mut processor = InputProcessor::default();
        assert_eq!(
            processor.handle_event(InputEvent::Wheel { delta: 3.0 }),
            Some(RigCommand::Interrupt)
        );
        assert_eq!(processor.read().desktop.wheel, 0.0);

        processor.set_route(PointerRoute::Desktop);
        let _ = processor.handle_event(InputEvent::Wheel { delta: 3.0 });
        assert_eq!(processor.read().desktop.wheel, 3.0);
    }
}
