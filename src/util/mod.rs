//! Shared utilities: easing curves and scalar camera math.

pub mod easing;
pub mod math;
