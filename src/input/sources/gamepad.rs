use glam::Vec2;

/// Current gamepad stick state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadDeltas {
    /// Left stick after the dead zone, each axis in `[-1, 1]` (y down).
    pub left: Vec2,
    /// Right stick after the dead zone.
    pub right: Vec2,
}

/// Gamepad source.
///
/// Sticks are level-triggered: the last reported state keeps contributing
/// every frame until the pad reports something else.
#[derive(Debug, Clone)]
pub struct GamepadSource {
    dead_zone: f32,
    state: GamepadDeltas,
}

impl Default for GamepadSource {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl GamepadSource {
    /// Create a source with the given radial dead zone.
    #[must_use]
    pub fn new(dead_zone: f32) -> Self {
        Self {
            dead_zone: dead_zone.clamp(0.0, 0.99),
            state: GamepadDeltas::default(),
        }
    }

    /// Rescale so the output starts at zero right at the dead zone edge.
    fn filter(&self, stick: Vec2) -> Vec2 {
        let stick = stick.clamp(Vec2::NEG_ONE, Vec2::ONE);
        let length = stick.length();
        if length <= self.dead_zone {
            return Vec2::ZERO;
        }
        let scaled = ((length - self.dead_zone) / (1.0 - self.dead_zone)).min(1.0);
        stick * (scaled / length)
    }

    /// New stick state from the pad.
    pub fn set_sticks(&mut self, left: Vec2, right: Vec2) {
        self.state = GamepadDeltas {
            left: self.filter(left),
            right: self.filter(right),
        };
    }

    /// Current stick state.
    #[must_use]
    pub fn read(&self) -> GamepadDeltas {
        self.state
    }
}
