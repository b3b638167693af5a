//! Keyframe splines driving the scripted camera.
//!
//! [`Spline`] is the evaluation contract the animation camera relies on;
//! [`CubicSpline`] is the looping cubic Hermite implementation used for
//! settings tracks.

use crate::error::VantageError;
use crate::util::math::modulo;

/// A multi-channel curve sampled by time.
pub trait Spline {
    /// Number of channels written by [`evaluate`](Self::evaluate).
    fn dimension(&self) -> usize;

    /// Sample the curve at `time`, writing up to
    /// [`dimension`](Self::dimension) values into `out`.
    ///
    /// Implementations may produce non-finite values near degenerate
    /// segments; callers are expected to check.
    fn evaluate(&self, time: f32, out: &mut [f32]);
}

/// Closed cubic Hermite spline through a set of keyframes.
///
/// Tangents are finite differences of the neighbouring keys (non-uniform
/// Catmull-Rom), wrapping around the loop so the end flows back into the
/// start after `length` time units.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    dim: usize,
    knots: Vec<f32>,
    values: Vec<f32>,
    tangents: Vec<f32>,
    length: f32,
}

impl CubicSpline {
    /// Build a looping spline.
    ///
    /// `times` are the key times (ascending), `points` holds
    /// `times.len() * dim` interleaved values, and `length` is the loop
    /// period measured in the same units as `times`.
    pub fn from_points_looping(
        length: f32,
        times: &[f32],
        points: &[f32],
    ) -> Result<Self, VantageError> {
        let count = times.len();
        if count == 0 {
            return Err(VantageError::InvalidTrack(
                "spline needs at least one key".into(),
            ));
        }
        if points.is_empty() || points.len() % count != 0 {
            return Err(VantageError::InvalidTrack(format!(
                "{} values do not divide evenly across {count} keys",
                points.len()
            )));
        }
        let dim = points.len() / count;

        let point = |i: usize| &points[i * dim..(i + 1) * dim];

        let mut tangents = Vec::with_capacity((count + 1) * dim);
        for i in 0..count {
            let (prev, prev_time) = if i == 0 {
                (count - 1, times[count - 1] - length)
            } else {
                (i - 1, times[i - 1])
            };
            let (next, next_time) = if i + 1 == count {
                (0, times[0] + length)
            } else {
                (i + 1, times[i + 1])
            };
            let span = next_time - prev_time;
            for c in 0..dim {
                let slope = if span > 0.0 {
                    (point(next)[c] - point(prev)[c]) / span
                } else {
                    0.0
                };
                tangents.push(slope);
            }
        }

        let mut knots = times.to_vec();
        let mut values = points.to_vec();

        // Closing knot: the first key again, one period later
        knots.push(times[0] + length);
        values.extend_from_slice(point(0));
        tangents.extend_from_within(0..dim);

        Ok(Self {
            dim,
            knots,
            values,
            tangents,
            length,
        })
    }

    /// Loop period.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    fn segment(&self, time: f32) -> usize {
        // Index of the last knot at or before `time`, kept inside the
        // segment range.
        let upper = self.knots.partition_point(|&k| k <= time);
        upper.saturating_sub(1).min(self.knots.len().saturating_sub(2))
    }
}

impl Spline for CubicSpline {
    fn dimension(&self) -> usize {
        self.dim
    }

    fn evaluate(&self, time: f32, out: &mut [f32]) {
        let channels = self.dim.min(out.len());

        // A single key is a constant curve
        if self.knots.len() < 3 {
            out[..channels].copy_from_slice(&self.values[..channels]);
            return;
        }

        let start = self.knots[0];
        let time = if self.length > 0.0 {
            start + modulo(time - start, self.length)
        } else {
            time
        };

        let k = self.segment(time);
        let span = self.knots[k + 1] - self.knots[k];
        let u = (time - self.knots[k]) / span;
        let u2 = u * u;
        let u3 = u2 * u;

        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;

        let a = k * self.dim;
        let b = (k + 1) * self.dim;
        for (c, slot) in out.iter_mut().enumerate().take(channels) {
            *slot = h00 * self.values[a + c]
                + h10 * span * self.tangents[a + c]
                + h01 * self.values[b + c]
                + h11 * span * self.tangents[b + c];
        }
    }
}
