//! Core configuration for glide-scroll-core.

use serde::{Deserialize, Serialize};

use crate::error::ScrollError;

/// Tick increment used by the reference scroll animation (ms).
pub const DEFAULT_TICK_INCREMENT_MS: f64 = 10.0;

/// Duration of the "back to top" scroll (ms).
pub const DEFAULT_SCROLL_TO_TOP_DURATION_MS: f64 = 1500.0;

/// Configuration for scheduler timing.
/// Missing fields fall back to their defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Simulated time advanced per tick, also used as the delay between ticks.
    pub tick_increment_ms: f64,
    /// Duration used by `scroll_to_top`.
    pub scroll_to_top_duration_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            tick_increment_ms: DEFAULT_TICK_INCREMENT_MS,
            scroll_to_top_duration_ms: DEFAULT_SCROLL_TO_TOP_DURATION_MS,
        }
    }
}

impl ScrollConfig {
    /// Reject values that would stall or corrupt the tick loop.
    pub fn validate(&self) -> Result<(), ScrollError> {
        if !self.tick_increment_ms.is_finite() || self.tick_increment_ms <= 0.0 {
            return Err(ScrollError::InvalidConfig {
                reason: format!(
                    "tick_increment_ms must be finite and positive, got {}",
                    self.tick_increment_ms
                ),
            });
        }
        if !self.scroll_to_top_duration_ms.is_finite() || self.scroll_to_top_duration_ms <= 0.0 {
            return Err(ScrollError::InvalidConfig {
                reason: format!(
                    "scroll_to_top_duration_ms must be finite and positive, got {}",
                    self.scroll_to_top_duration_ms
                ),
            });
        }
        Ok(())
    }
}
