//! Double-tap focus picking.
//!
//! The rig does not know how to hit-test the scene. It hands out a
//! [`PickRequest`] and the host answers it later with whatever it found.
//! Only one request is in flight at a time; answers to anything else are
//! dropped.

/// A screen position the host should hit-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRequest {
    /// Ticket identifying this request.
    pub id: u64,
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels.
    pub y: f32,
}

/// Single-slot pick tracker.
#[derive(Debug, Default)]
pub(crate) struct PickSlot {
    next_id: u64,
    in_flight: Option<PickRequest>,
    delivered: bool,
}

impl PickSlot {
    /// Start a request unless one is already in flight.
    pub(crate) fn issue(&mut self, x: f32, y: f32) -> Option<PickRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_id += 1;
        let request = PickRequest {
            id: self.next_id,
            x,
            y,
        };
        self.in_flight = Some(request);
        self.delivered = false;
        Some(request)
    }

    /// The in-flight request, handed out once.
    pub(crate) fn take_request(&mut self) -> Option<PickRequest> {
        if self.delivered {
            return None;
        }
        self.delivered = true;
        self.in_flight
    }

    /// Close the in-flight request if `id` matches it.
    pub(crate) fn complete(&mut self, id: u64) -> bool {
        if self.in_flight.is_some_and(|request| request.id == id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Abandon the in-flight request. A late answer for it is then treated
    /// as unknown.
    pub(crate) fn cancel(&mut self) -> Option<PickRequest> {
        self.delivered = false;
        self.in_flight.take()
    }

    /// Whether a request is waiting for an answer.
    pub(crate) fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_request_at_a_time() {
        let mut slot = PickSlot::default();
        let first = slot.issue(1.0, 2.0).unwrap();
        assert!(slot.issue(3.0, 4.0).is_none());
        assert_eq!(slot.take_request(), Some(first));
        assert_eq!(slot.take_request(), None);

        assert!(slot.complete(first.id));
        assert!(!slot.is_pending());
        let second = slot.issue(3.0, 4.0).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn mismatched_answers_are_ignored() {
        let mut slot = PickSlot::default();
        let request = slot.issue(0.0, 0.0).unwrap();
        assert!(!slot.complete(request.id + 1));
        assert!(slot.is_pending());
    }

    #[test]
    fn cancel_frees_the_slot() {
        let mut slot = PickSlot::default();
        let abandoned = slot.issue(0.0, 0.0).unwrap();
        assert_eq!(slot.take_request(), Some(abandoned));

        assert_eq!(slot.cancel(), Some(abandoned));
        assert!(!slot.complete(abandoned.id));
        assert_eq!(slot.cancel(), None);

        let next = slot.issue(1.0, 1.0).unwrap();
        assert_eq!(slot.take_request(), Some(next));
    }
}
