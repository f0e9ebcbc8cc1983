//! ScrollScheduler: owns the single animation slot, the pending timer and the
//! wheel subscription.
//!
//! Methods:
//! - scroll_to / scroll_to_top / start (cancel previous → capture → first tick)
//! - on_tick (token check → advance → reschedule or complete)
//! - on_wheel / cancel (release without snapping)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{AnimationState, ScrollRequest, TickProgress};
use crate::config::ScrollConfig;
use crate::error::ScrollError;
use crate::host::{ScrollHost, ScrollTarget, TickToken};

/// Public state of the scheduler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollState {
    Idle,
    Running,
}

/// Why a running animation stopped before reaching its destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CancelReason {
    /// User wheel input.
    Wheel,
    /// A new scroll request replaced the running one.
    Superseded,
    /// `cancel()` was called.
    Requested,
}

/// What a delivered tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Offset written, next tick scheduled.
    Continued,
    /// Offset written, animation reached its duration.
    Completed,
    /// Token did not match the active animation; nothing changed.
    Stale,
}

struct Active<H: ScrollHost, T> {
    state: AnimationState<T>,
    token: TickToken,
    timer: Option<H::Timer>,
    listener: H::Listener,
}

/// Single-slot scroll animation scheduler.
pub struct ScrollScheduler<H: ScrollHost, T> {
    host: H,
    cfg: ScrollConfig,
    next_token: u32,
    active: Option<Active<H, T>>,
}

impl<H: ScrollHost, T: ScrollTarget> ScrollScheduler<H, T> {
    /// Create a scheduler over `host`. Fails if `cfg` does not validate.
    pub fn new(host: H, cfg: ScrollConfig) -> Result<Self, ScrollError> {
        cfg.validate()?;
        Ok(Self {
            host,
            cfg,
            next_token: 0,
            active: None,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> ScrollState {
        if self.active.is_some() {
            ScrollState::Running
        } else {
            ScrollState::Idle
        }
    }

    /// The in-flight animation, if any.
    pub fn animation(&self) -> Option<&AnimationState<T>> {
        self.active.as_ref().map(|a| &a.state)
    }

    /// Token of the in-flight animation, if any.
    pub fn active_token(&self) -> Option<TickToken> {
        self.active.as_ref().map(|a| a.token)
    }

    /// Animate `target` to offset `to` over `duration_ms`.
    ///
    /// Invalid input is rejected before anything else happens, so a running
    /// animation is left untouched.
    pub fn scroll_to(&mut self, target: T, to: f64, duration_ms: f64) -> Result<(), ScrollError> {
        let request = ScrollRequest::new(to, duration_ms)?;
        self.start(target, request);
        Ok(())
    }

    /// Animate `root` back to offset 0 using the configured duration.
    pub fn scroll_to_top(&mut self, root: T) {
        let request = ScrollRequest {
            to: 0.0,
            duration_ms: self.cfg.scroll_to_top_duration_ms,
        };
        self.start(root, request);
    }

    /// Begin a validated request, superseding any running animation.
    pub fn start(&mut self, target: T, request: ScrollRequest) {
        self.stop(CancelReason::Superseded);

        let token = TickToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);

        let listener = self.host.listen_wheel();
        let state = AnimationState::begin(target, &request);
        debug!(
            token = token.0,
            from = state.start_offset(),
            to = request.to,
            duration_ms = request.duration_ms,
            "scroll animation started"
        );
        self.active = Some(Active {
            state,
            token,
            timer: None,
            listener,
        });

        // The first step runs synchronously; later steps wait on the timer.
        self.step();
    }

    /// Deliver a timer tick scheduled with `token`.
    pub fn on_tick(&mut self, token: TickToken) -> TickOutcome {
        match self.active.as_mut() {
            Some(active) if active.token == token => {
                // The timer that delivered this tick has fired.
                active.timer = None;
            }
            _ => return TickOutcome::Stale,
        }
        self.step()
    }

    /// Wheel input from the user. Returns true if an animation was cancelled.
    pub fn on_wheel(&mut self) -> bool {
        self.stop(CancelReason::Wheel)
    }

    /// Cancel the running animation, leaving the target where the last tick
    /// put it. No-op when idle; returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.stop(CancelReason::Requested)
    }

    fn step(&mut self) -> TickOutcome {
        let increment = self.cfg.tick_increment_ms;
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Stale;
        };
        match active.state.advance(increment) {
            TickProgress::Running => {
                active.timer = Some(self.host.schedule_tick(increment, active.token));
                TickOutcome::Continued
            }
            TickProgress::Finished => {
                if let Some((token, state)) = self.release() {
                    debug!(
                        token = token.0,
                        offset = state.target_offset(),
                        "scroll animation completed"
                    );
                }
                TickOutcome::Completed
            }
        }
    }

    fn stop(&mut self, reason: CancelReason) -> bool {
        match self.release() {
            Some((token, state)) => {
                debug!(
                    token = token.0,
                    elapsed_ms = state.elapsed_ms(),
                    ?reason,
                    "scroll animation cancelled"
                );
                true
            }
            None => false,
        }
    }

    /// Clear the slot and hand the timer and listener back to the host.
    fn release(&mut self) -> Option<(TickToken, AnimationState<T>)> {
        let Active {
            state,
            token,
            timer,
            listener,
        } = self.active.take()?;
        if let Some(timer) = timer {
            self.host.cancel_tick(timer);
        }
        self.host.unlisten_wheel(listener);
        Some((token, state))
    }
}
