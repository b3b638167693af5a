use crate::util::math::{damp, lerp, modulo};

/// Default damping shared by the orbit and fly cameras.
pub const DEFAULT_DAMPING: f32 = 0.98;

/// Exponential smoother over `N` scalar channels.
///
/// Each [`update`](Self::update) moves every `value` channel toward its
/// `target` by the framerate-independent weight
/// [`damp(damping, dt)`](crate::util::math::damp). Channels registered as
/// periodic are first rewound to the representation closest to their
/// target so the chase always takes the short way round.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothDamp<const N: usize> {
    /// Current (smoothed) values.
    pub value: [f32; N],
    /// Values being chased.
    pub target: [f32; N],
    /// Damping factor in `[0, 1)`.
    pub damping: f32,
    periods: [Option<f32>; N],
}

impl<const N: usize> SmoothDamp<N> {
    /// Create a smoother resting at `initial`.
    #[must_use]
    pub fn new(initial: [f32; N]) -> Self {
        Self {
            value: initial,
            target: initial,
            damping: DEFAULT_DAMPING,
            periods: [None; N],
        }
    }

    /// Mark channel `index` as an angle with the given period (e.g. 360 for
    /// yaw, 180 for pitch). Out-of-range indices are ignored.
    #[must_use]
    pub fn with_period(mut self, index: usize, period: f32) -> Self {
        if let Some(slot) = self.periods.get_mut(index) {
            *slot = Some(period);
        }
        self
    }

    /// Jump every channel straight to its target.
    pub fn snap(&mut self) {
        self.value = self.target;
    }

    /// Advance all channels by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for i in 0..N {
            if let Some(period) = self.periods[i] {
                let half = period * 0.5;
                let target = self.target[i];
                self.value[i] =
                    target + modulo(self.value[i] - target + half, period) - half;
            }
        }

        let weight = damp(self.damping, dt);
        for (value, target) in self.value.iter_mut().zip(self.target) {
            *value = lerp(*value, target, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_leaves_values_alone() {
        let mut sd = SmoothDamp::new([1.0, 2.0]);
        sd.target = [5.0, -3.0];
        sd.update(0.0);
        assert_eq!(sd.value, [1.0, 2.0]);
    }

    #[test]
    fn converges_to_target() {
        let mut sd = SmoothDamp::new([0.0; 3]);
        sd.target = [10.0, -4.0, 0.5];
        for _ in 0..600 {
            sd.update(1.0 / 60.0);
        }
        for (v, t) in sd.value.iter().zip(sd.target) {
            assert!((v - t).abs() < 1e-3, "{v} vs {t}");
        }
    }

    #[test]
    fn zero_damping_snaps_in_one_step() {
        let mut sd = SmoothDamp::new([0.0]);
        sd.damping = 0.0;
        sd.target = [7.0];
        sd.update(0.016);
        assert_eq!(sd.value, [7.0]);
    }

    #[test]
    fn yaw_channel_takes_short_arc() {
        // 350° chasing 10° should pass through 0°, not sweep back through 180°
        let mut sd = SmoothDamp::new([350.0]).with_period(0, 360.0);
        sd.target = [10.0];
        sd.update(0.001);
        assert!(sd.value[0] < 10.0 && sd.value[0] > -10.0, "{}", sd.value[0]);
    }

    #[test]
    fn pitch_channel_rewinds_into_half_window() {
        let mut sd = SmoothDamp::new([170.0]).with_period(0, 180.0);
        sd.target = [0.0];
        sd.damping = 1.0; // weight 0: only the rewind applies
        sd.update(0.016);
        assert!((sd.value[0] - -10.0).abs() < 1e-4, "{}", sd.value[0]);
    }

    #[test]
    fn snap_copies_target() {
        let mut sd = SmoothDamp::new([0.0, 0.0]);
        sd.target = [3.0, 4.0];
        sd.snap();
        assert_eq!(sd.value, [3.0, 4.0]);
    }
}
