//! Glide Scroll Core (host-agnostic)
//!
//! Smooth scroll animation: a quadratic ease-in-out curve sampled by a
//! single-slot scheduler. The scheduler owns the active animation, its pending
//! timer and its wheel subscription; hosts (browser, tests) supply those
//! services through the traits in [`host`].

pub mod animation;
pub mod config;
pub mod easing;
pub mod error;
pub mod host;
pub mod scheduler;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod viewport;

// Re-exports for consumers (adapters)
pub use animation::{AnimationState, ScrollRequest, TickProgress};
pub use config::ScrollConfig;
pub use easing::ease_in_out;
pub use error::ScrollError;
pub use host::{ScrollHost, ScrollTarget, TickToken};
pub use scheduler::{CancelReason, ScrollScheduler, ScrollState, TickOutcome};
#[cfg(any(test, feature = "testing"))]
pub use testing::{ManualHost, SharedOffset};
pub use viewport::{visibility, Rect, Viewport, Visibility};
