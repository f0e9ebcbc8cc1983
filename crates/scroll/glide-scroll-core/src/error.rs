//! Error types for scroll requests and configuration.

use serde::{Deserialize, Serialize};

/// Errors raised while validating scroll input.
///
/// Cancellation is a normal transition and never surfaces here.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ScrollError {
    /// Duration is not finite or not strictly positive
    #[error("Invalid duration: {duration} ms")]
    InvalidDuration { duration: f64 },

    /// Target offset is not finite
    #[error("Invalid scroll offset: {offset}")]
    InvalidOffset { offset: f64 },

    /// Configuration rejected by `ScrollConfig::validate`
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl ScrollError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } | Self::InvalidOffset { .. } => "request",
            Self::InvalidConfig { .. } => "config",
        }
    }
}
