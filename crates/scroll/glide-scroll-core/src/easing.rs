//! Quadratic ease-in-out timing curve.
//!
//! Accelerates through the first half of `duration` and decelerates through
//! the second, with zero velocity at both ends.

/// Offset at `elapsed` along a quadratic ease-in-out from `start` to
/// `start + change` over `duration`.
///
/// `elapsed` and `duration` share a unit. `duration` must be non-zero; the
/// scheduler validates this before sampling.
#[inline]
pub fn ease_in_out(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    let t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + start;
    }
    let t = t - 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + start
}
