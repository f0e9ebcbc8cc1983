//! In-flight animation record and request validation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::easing::ease_in_out;
use crate::error::ScrollError;
use crate::host::ScrollTarget;

/// A validated scroll-to request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Destination scroll offset.
    pub to: f64,
    /// Total animation time (ms).
    pub duration_ms: f64,
}

impl ScrollRequest {
    pub fn new(to: f64, duration_ms: f64) -> Result<Self, ScrollError> {
        if !to.is_finite() {
            return Err(ScrollError::InvalidOffset { offset: to });
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(ScrollError::InvalidDuration {
                duration: duration_ms,
            });
        }
        Ok(Self { to, duration_ms })
    }
}

/// Result of advancing an animation by one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickProgress {
    Running,
    Finished,
}

/// State of the single active animation.
#[derive(Debug)]
pub struct AnimationState<T> {
    target: T,
    start_offset: f64,
    delta: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl<T: ScrollTarget> AnimationState<T> {
    /// Capture the target's current offset as the starting point.
    pub fn begin(target: T, request: &ScrollRequest) -> Self {
        let start_offset = target.scroll_offset();
        Self {
            target,
            start_offset,
            delta: request.to - start_offset,
            duration_ms: request.duration_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advance `elapsed` by `increment_ms` and write the eased offset.
    ///
    /// The curve is sampled at `min(elapsed, duration)` so the final tick
    /// lands exactly on the destination even when `duration` is not a
    /// multiple of the increment.
    pub fn advance(&mut self, increment_ms: f64) -> TickProgress {
        self.elapsed_ms += increment_ms;
        let sample_at = self.elapsed_ms.min(self.duration_ms);
        let offset = ease_in_out(sample_at, self.start_offset, self.delta, self.duration_ms);
        self.target.set_scroll_offset(offset);
        trace!(elapsed_ms = self.elapsed_ms, offset, "scroll tick");
        if self.elapsed_ms < self.duration_ms {
            TickProgress::Running
        } else {
            TickProgress::Finished
        }
    }

    #[inline]
    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn target_offset(&self) -> f64 {
        self.start_offset + self.delta
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SharedOffset;

    #[test]
    fn request_validation() {
        assert!(ScrollRequest::new(0.0, 1500.0).is_ok());
        assert_eq!(
            ScrollRequest::new(0.0, 0.0),
            Err(ScrollError::InvalidDuration { duration: 0.0 })
        );
        assert!(matches!(
            ScrollRequest::new(0.0, -10.0),
            Err(ScrollError::InvalidDuration { .. })
        ));
        assert!(matches!(
            ScrollRequest::new(0.0, f64::INFINITY),
            Err(ScrollError::InvalidDuration { .. })
        ));
        assert!(matches!(
            ScrollRequest::new(f64::NAN, 100.0),
            Err(ScrollError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn begin_captures_start_and_delta() {
        let target = SharedOffset::new(800.0);
        let req = ScrollRequest::new(200.0, 1000.0).unwrap();
        let state = AnimationState::begin(target.clone(), &req);
        assert_eq!(state.start_offset(), 800.0);
        assert_eq!(state.delta(), -600.0);
        assert_eq!(state.target_offset(), 200.0);
        assert_eq!(state.elapsed_ms(), 0.0);
        // Nothing is written until the first tick.
        assert_eq!(target.writes(), 0);
    }

    #[test]
    fn final_tick_clamps_to_destination() {
        let target = SharedOffset::new(0.0);
        let req = ScrollRequest::new(100.0, 25.0).unwrap();
        let mut state = AnimationState::begin(target.clone(), &req);
        assert_eq!(state.advance(10.0), TickProgress::Running);
        assert_eq!(state.advance(10.0), TickProgress::Running);
        assert_eq!(state.advance(10.0), TickProgress::Finished);
        assert_eq!(state.elapsed_ms(), 30.0);
        assert_eq!(target.offset(), 100.0);
        assert_eq!(target.writes(), 3);
    }
}
