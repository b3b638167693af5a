use glam::Vec2;
use rustc_hash::FxHashMap;

/// What the touch screen did since the last read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchDeltas {
    /// Movement of the touch centroid in pixels.
    pub touch: Vec2,
    /// Change in the spread between the first two touches, in pixels
    /// (positive = fingers moving apart).
    pub pinch: f32,
    /// Touches added minus touches removed.
    pub count: i32,
    /// A touch ended.
    pub released: bool,
}

/// Multi-touch source for one- and two-finger orbit gestures.
///
/// One finger drags the centroid; two fingers also pinch. Adding or lifting
/// a finger never makes the centroid jump: only movement of a finger that
/// stays down contributes.
#[derive(Debug, Default)]
pub struct TouchSource {
    touches: FxHashMap<u64, Vec2>,
    deltas: TouchDeltas,
}

impl TouchSource {
    /// Create an idle source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of touches currently down.
    #[must_use]
    pub fn active(&self) -> usize {
        self.touches.len()
    }

    fn centroid(&self) -> Vec2 {
        if self.touches.is_empty() {
            return Vec2::ZERO;
        }
        self.touches.values().copied().sum::<Vec2>() / self.touches.len() as f32
    }

    fn spread(&self) -> Option<f32> {
        type Anchor = Option<(u64, Vec2)>;

        // The two lowest ids are the gesture's anchor fingers
        let (first, second) = self.touches.iter().fold(
            (None, None),
            |(first, second): (Anchor, Anchor), (&id, &pos)| match first {
                Some((lowest, _)) if id > lowest => match second {
                    Some((next, _)) if id > next => (first, second),
                    _ => (first, Some((id, pos))),
                },
                _ => (Some((id, pos)), first),
            },
        );
        Some(first?.1.distance(second?.1))
    }

    /// A finger went down.
    pub fn pointer_down(&mut self, id: u64, pos: Vec2) {
        if self.touches.insert(id, pos).is_none() {
            self.deltas.count += 1;
        }
    }

    /// A finger moved.
    pub fn pointer_move(&mut self, id: u64, pos: Vec2) {
        if !self.touches.contains_key(&id) {
            return;
        }
        let centroid = self.centroid();
        let spread = self.spread();

        let _ = self.touches.insert(id, pos);

        self.deltas.touch += self.centroid() - centroid;
        if let (Some(before), Some(after)) = (spread, self.spread()) {
            self.deltas.pinch += after - before;
        }
    }

    /// A finger lifted or was cancelled.
    pub fn pointer_up(&mut self, id: u64) {
        if self.touches.remove(&id).is_some() {
            self.deltas.count -= 1;
            self.deltas.released = true;
        }
    }

    /// Lift every finger, e.g. when pointer input is routed elsewhere.
    pub fn release_pointers(&mut self) {
        let ids: Vec<u64> = self.touches.keys().copied().collect();
        for id in ids {
            self.pointer_up(id);
        }
    }

    /// Hand out everything accumulated since the last read.
    pub fn read(&mut self) -> TouchDeltas {
        std::mem::take(&mut self.deltas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_finger_drags_centroid() {
        let mut source = TouchSource::new();
        source.pointer_down(1, Vec2::new(10.0, 10.0));
        source.pointer_move(1, Vec2::new(15.0, 30.0));
        let deltas = source.read();
        assert_eq!(deltas.touch, Vec2::new(5.0, 20.0));
        assert_eq!(deltas.pinch, 0.0);
        assert_eq!(deltas.count, 1);
    }

    #[test]
    fn adding_a_finger_does_not_jump() {
        let mut source = TouchSource::new();
        source.pointer_down(1, Vec2::ZERO);
        source.pointer_down(2, Vec2::new(100.0, 0.0));
        assert_eq!(source.read().touch, Vec2::ZERO);
    }

    #[test]
    fn spreading_fingers_pinches_out() {
        let mut source = TouchSource::new();
        source.pointer_down(1, Vec2::new(100.0, 100.0));
        source.pointer_down(2, Vec2::new(200.0, 100.0));
        let _ = source.read();

        source.pointer_move(2, Vec2::new(240.0, 100.0));
        source.pointer_move(1, Vec2::new(60.0, 100.0));
        let deltas = source.read();
        assert!((deltas.pinch - 80.0).abs() < 1e-4);
        // Symmetric spread keeps the centroid in place
        assert!(deltas.touch.length() < 1e-4);
    }

    #[test]
    fn pinch_follows_the_two_lowest_ids() {
        let mut source = TouchSource::new();
        source.pointer_down(7, Vec2::new(500.0, 0.0));
        source.pointer_down(3, Vec2::new(0.0, 0.0));
        source.pointer_down(5, Vec2::new(100.0, 0.0));
        assert_eq!(source.spread(), Some(100.0));

        // A third finger moving does not change the anchor spread
        source.pointer_move(7, Vec2::new(900.0, 0.0));
        assert_eq!(source.read().pinch, 0.0);

        source.pointer_up(3);
        assert_eq!(source.spread(), Some(800.0));
        source.pointer_up(5);
        assert_eq!(source.spread(), None);
    }

    #[test]
    fn lifting_counts_down_and_flags_release() {
        let mut source = TouchSource::new();
        source.pointer_down(1, Vec2::ZERO);
        source.pointer_down(2, Vec2::ONE);
        let _ = source.read();

        source.pointer_up(2);
        source.pointer_up(7);
        let deltas = source.read();
        assert_eq!(deltas.count, -1);
        assert!(deltas.released);
        assert_eq!(source.active(), 1);

        source.release_pointers();
        assert_eq!(source.read().count, -1);
        assert_eq!(source.active(), 0);
    }

    #[test]
    fn unknown_finger_moves_are_ignored() {
        let mut source = TouchSource::new();
        source.pointer_move(9, Vec2::new(50.0, 50.0));
        assert_eq!(source.read(), TouchDeltas::default());
    }
}
