//! Host contracts consumed by the scheduler.
//!
//! Adapters (web/tests) implement these to give the core access to an
//! element's scroll offset, a one-shot timer, and wheel input. The core never
//! talks to a host environment any other way.

/// Generation stamp carried by every scheduled tick.
///
/// Each animation gets a fresh token; ticks whose token does not match the
/// active animation are dropped.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TickToken(pub u32);

/// Handle to a scrollable element.
///
/// Implementations are cheap handles (a DOM node, a shared cell); the
/// scheduler clones nothing and only holds the handle while animating.
pub trait ScrollTarget {
    /// Current scroll offset.
    fn scroll_offset(&self) -> f64;
    /// Write a new scroll offset. Detached targets may silently ignore this.
    fn set_scroll_offset(&mut self, offset: f64);
}

/// Timer and input services supplied by the host environment.
pub trait ScrollHost {
    /// Opaque pending-timer handle.
    type Timer;
    /// Opaque wheel subscription handle.
    type Listener;

    /// Arrange for `ScrollScheduler::on_tick(token)` to be called after `delay_ms`.
    fn schedule_tick(&mut self, delay_ms: f64, token: TickToken) -> Self::Timer;

    /// Cancel a pending tick. Cancelling a timer that already fired is allowed.
    fn cancel_tick(&mut self, timer: Self::Timer);

    /// Start routing wheel input to `ScrollScheduler::on_wheel`.
    fn listen_wheel(&mut self) -> Self::Listener;

    /// Stop routing wheel input.
    fn unlisten_wheel(&mut self, listener: Self::Listener);
}
