use glam::Vec2;
use web_time::{Duration, Instant};

/// Double-tap / double-click detector.
///
/// Platforms that never report native double clicks (mobile browsers) need
/// this done by hand: two pointer-downs within `window` of each other and
/// within `slop` pixels on both axes count as a double tap.
#[derive(Debug, Clone)]
pub(crate) struct TapDetector {
    window: Duration,
    slop: f32,
    last: Option<(Instant, Vec2)>,
}

impl TapDetector {
    pub(crate) fn new(window: Duration, slop: f32) -> Self {
        Self {
            window,
            slop,
            last: None,
        }
    }

    /// Register a pointer-down at `pos`. Returns `true` when it completes a
    /// double tap; the detector then starts over.
    pub(crate) fn tap(&mut self, now: Instant, pos: Vec2) -> bool {
        let double = self.last.is_some_and(|(time, last_pos)| {
            let delta = (pos - last_pos).abs();
            now.saturating_duration_since(time) < self.window
                && delta.x < self.slop
                && delta.y < self.slop
        });

        self.last = if double { None } else { Some((now, pos)) };
        double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> TapDetector {
        TapDetector::new(Duration::from_millis(300), 8.0)
    }

    #[test]
    fn two_quick_close_taps_are_double() {
        let mut taps = detector();
        let start = Instant::now();
        assert!(!taps.tap(start, Vec2::new(100.0, 100.0)));
        assert!(taps.tap(
            start + Duration::from_millis(200),
            Vec2::new(104.0, 97.0)
        ));
    }

    #[test]
    fn third_tap_starts_over() {
        let mut taps = detector();
        let start = Instant::now();
        let pos = Vec2::splat(50.0);
        assert!(!taps.tap(start, pos));
        assert!(taps.tap(start + Duration::from_millis(100), pos));
        assert!(!taps.tap(start + Duration::from_millis(200), pos));
    }

    #[test]
    fn slow_or_far_taps_are_single() {
        let mut taps = detector();
        let start = Instant::now();
        assert!(!taps.tap(start, Vec2::ZERO));
        assert!(!taps.tap(start + Duration::from_millis(400), Vec2::ZERO));
        assert!(!taps.tap(
            start + Duration::from_millis(450),
            Vec2::new(20.0, 0.0)
        ));
    }
}
