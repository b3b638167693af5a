use glam::Vec2;

/// On-screen joystick geometry for the host to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickUi {
    /// Where the thumb first went down, in pixels.
    pub base: Vec2,
    /// Thumb offset from the base, clamped to the joystick radius.
    pub stick: Vec2,
}

/// What the virtual joysticks did since the last read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoystickDeltas {
    /// Left stick deflection, each axis in `[-1, 1]` (y down). Held, not
    /// accumulated.
    pub left: Vec2,
    /// Right-side drag in pixels since the last read.
    pub right: Vec2,
    /// A touch ended.
    pub released: bool,
}

#[derive(Debug, Clone, Copy)]
struct Stick {
    id: u64,
    base: Vec2,
    pos: Vec2,
}

/// Dual-gesture touch source for fly mode.
///
/// A touch starting on the left half of the screen becomes a virtual
/// joystick anchored where it went down; a touch starting on the right half
/// drags to look around. Each side tracks one touch at a time.
#[derive(Debug)]
pub struct JoystickSource {
    radius: f32,
    width: f32,
    left: Option<Stick>,
    right: Option<(u64, Vec2)>,
    drag: Vec2,
    released: bool,
}

impl Default for JoystickSource {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl JoystickSource {
    /// Create an idle source with the given joystick radius in pixels.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(1.0),
            width: 0.0,
            left: None,
            right: None,
            drag: Vec2::ZERO,
            released: false,
        }
    }

    /// Viewport width, used to split the screen into halves.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    fn offset(&self, stick: &Stick) -> Vec2 {
        (stick.pos - stick.base).clamp_length_max(self.radius)
    }

    /// Joystick geometry while the left thumb is deflected.
    #[must_use]
    pub fn ui(&self) -> Option<JoystickUi> {
        let stick = self.left.as_ref()?;
        let offset = self.offset(stick);
        (offset != Vec2::ZERO).then_some(JoystickUi {
            base: stick.base,
            stick: offset,
        })
    }

    /// A touch went down.
    pub fn pointer_down(&mut self, id: u64, pos: Vec2) {
        if pos.x < self.width * 0.5 {
            if self.left.is_none() {
                self.left = Some(Stick {
                    id,
                    base: pos,
                    pos,
                });
            }
        } else if self.right.is_none() {
            self.right = Some((id, pos));
        }
    }

    /// A touch moved.
    pub fn pointer_move(&mut self, id: u64, pos: Vec2) {
        if let Some(stick) = self.left.as_mut().filter(|s| s.id == id) {
            stick.pos = pos;
        } else if let Some(right) =
            self.right.as_mut().filter(|right| right.0 == id)
        {
            self.drag += pos - right.1;
            right.1 = pos;
        }
    }

    /// A touch lifted or was cancelled.
    pub fn pointer_up(&mut self, id: u64) {
        if self.left.is_some_and(|s| s.id == id) {
            self.left = None;
            self.released = true;
        } else if self.right.is_some_and(|(right, _)| right == id) {
            self.right = None;
            self.released = true;
        }
    }

    /// Lift both thumbs.
    pub fn release_pointers(&mut self) {
        let left = self.left.take();
        let right = self.right.take();
        if left.is_some() || right.is_some() {
            self.released = true;
        }
    }

    /// Current stick deflection plus the drag accumulated since the last
    /// read.
    pub fn read(&mut self) -> JoystickDeltas {
        let left = self
            .left
            .as_ref()
            .map_or(Vec2::ZERO, |stick| self.offset(stick) / self.radius);
        JoystickDeltas {
            left,
            right: std::mem::take(&mut self.drag),
            released: std::mem::take(&mut self.released),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> JoystickSource {
        let mut source = JoystickSource::new(50.0);
        source.set_width(800.0);
        source
    }

    #[test]
    fn left_thumb_is_a_held_stick() {
        let mut source = source();
        source.pointer_down(1, Vec2::new(100.0, 500.0));
        source.pointer_move(1, Vec2::new(100.0, 475.0));

        let first = source.read();
        assert!((first.left - Vec2::new(0.0, -0.5)).length() < 1e-6);
        // Still held on the next frame
        assert_eq!(source.read().left, first.left);

        let ui = source.ui().unwrap();
        assert_eq!(ui.base, Vec2::new(100.0, 500.0));
        assert_eq!(ui.stick, Vec2::new(0.0, -25.0));
    }

    #[test]
    fn stick_deflection_is_clamped() {
        let mut source = source();
        source.pointer_down(1, Vec2::new(100.0, 500.0));
        source.pointer_move(1, Vec2::new(400.0, 500.0));
        assert!((source.read().left - Vec2::X).length() < 1e-6);
        let stick = source.ui().unwrap().stick;
        assert!((stick - Vec2::new(50.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn right_thumb_drags() {
        let mut source = source();
        source.pointer_down(2, Vec2::new(600.0, 300.0));
        source.pointer_move(2, Vec2::new(610.0, 295.0));
        source.pointer_move(2, Vec2::new(630.0, 290.0));
        let deltas = source.read();
        assert_eq!(deltas.right, Vec2::new(30.0, -10.0));
        assert_eq!(deltas.left, Vec2::ZERO);
        assert_eq!(source.read().right, Vec2::ZERO);
    }

    #[test]
    fn lifting_hides_ui_and_recenters() {
        let mut source = source();
        source.pointer_down(1, Vec2::new(100.0, 500.0));
        source.pointer_move(1, Vec2::new(120.0, 500.0));
        source.pointer_up(1);
        assert!(source.ui().is_none());
        let deltas = source.read();
        assert_eq!(deltas.left, Vec2::ZERO);
        assert!(deltas.released);
    }

    #[test]
    fn undeflected_stick_has_no_ui() {
        let mut source = source();
        source.pointer_down(1, Vec2::new(100.0, 500.0));
        assert!(source.ui().is_none());
    }
}
