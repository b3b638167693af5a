use glam::Vec3;

/// One frame of fused camera input.
///
/// `movement` and `rotate` are additive accumulators: every device source
/// adds its contribution, the active camera consumes the sum, and the rig
/// clears the frame afterwards.
///
/// Axis conventions (camera local):
/// - `movement`: x = right, y = up, z = forward (fly) or dolly (orbit,
///   positive moves away from the focus).
/// - `rotate`: x = yaw, y = pitch, z = roll, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Accumulated translation intent.
    pub movement: Vec3,
    /// Accumulated rotation intent in degrees.
    pub rotate: Vec3,
    /// A pointer or touch gesture ended during this frame.
    pub released: bool,
}

impl InputFrame {
    /// Add a translation contribution.
    pub fn add_move(&mut self, delta: Vec3) {
        self.movement += delta;
    }

    /// Add a rotation contribution.
    pub fn add_rotate(&mut self, delta: Vec3) {
        self.rotate += delta;
    }

    /// Whether the frame carries no motion.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.movement == Vec3::ZERO && self.rotate == Vec3::ZERO
    }

    /// Reset all accumulators after consumption.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
