//! Deterministic host and target used to drive the scheduler without a
//! browser or wall clock.
//!
//! `ManualHost` records pending ticks against a simulated clock; the
//! `ScrollScheduler<ManualHost, _>::advance_by` helper fires whatever
//! becomes due, in order.

use std::cell::Cell;
use std::rc::Rc;

use crate::host::{ScrollHost, ScrollTarget, TickToken};
use crate::scheduler::ScrollScheduler;

/// Upper bound on ticks fired by a single `run_until_idle` call.
const MAX_TICKS_PER_RUN: usize = 1_000_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ManualTimer(pub u64);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ManualListener(pub u64);

#[derive(Clone, Debug)]
struct PendingTick {
    timer: ManualTimer,
    due_ms: f64,
    token: TickToken,
}

/// Fake clock implementing `ScrollHost`.
#[derive(Debug, Default)]
pub struct ManualHost {
    now_ms: f64,
    next_id: u64,
    pending: Vec<PendingTick>,
    listeners: Vec<ManualListener>,
    cancelled_total: usize,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of ticks scheduled and not yet fired or cancelled.
    pub fn pending_ticks(&self) -> usize {
        self.pending.len()
    }

    /// Number of live wheel subscriptions.
    pub fn wheel_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }

    /// Remove the earliest tick due at or before `until_ms` and move the
    /// clock to its due time.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<TickToken> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
            .map(|(i, _)| i)?;
        let tick = self.pending.remove(idx);
        self.now_ms = self.now_ms.max(tick.due_ms);
        Some(tick.token)
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl ScrollHost for ManualHost {
    type Timer = ManualTimer;
    type Listener = ManualListener;

    fn schedule_tick(&mut self, delay_ms: f64, token: TickToken) -> ManualTimer {
        let timer = ManualTimer(self.alloc_id());
        self.pending.push(PendingTick {
            timer,
            due_ms: self.now_ms + delay_ms,
            token,
        });
        timer
    }

    fn cancel_tick(&mut self, timer: ManualTimer) {
        let before = self.pending.len();
        self.pending.retain(|p| p.timer != timer);
        if self.pending.len() != before {
            self.cancelled_total += 1;
        }
    }

    fn listen_wheel(&mut self) -> ManualListener {
        let listener = ManualListener(self.alloc_id());
        self.listeners.push(listener);
        listener
    }

    fn unlisten_wheel(&mut self, listener: ManualListener) {
        self.listeners.retain(|l| *l != listener);
    }
}

impl<T: ScrollTarget> ScrollScheduler<ManualHost, T> {
    /// Advance the simulated clock by `ms`, delivering every tick that falls
    /// due. Returns the number of ticks delivered.
    pub fn advance_by(&mut self, ms: f64) -> usize {
        let until = self.host().now_ms() + ms;
        let mut fired = 0;
        while let Some(token) = self.host_mut().pop_due(until) {
            self.on_tick(token);
            fired += 1;
        }
        let host = self.host_mut();
        host.now_ms = host.now_ms.max(until);
        fired
    }

    /// Deliver ticks until nothing is pending. Returns the number delivered.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while fired < MAX_TICKS_PER_RUN {
            let Some(token) = self.host_mut().pop_due(f64::INFINITY) else {
                break;
            };
            self.on_tick(token);
            fired += 1;
        }
        fired
    }
}

/// Shared scroll offset standing in for a DOM element.
///
/// Clones observe the same offset, so a test can keep one handle while the
/// scheduler animates another.
#[derive(Clone, Debug, Default)]
pub struct SharedOffset {
    offset: Rc<Cell<f64>>,
    writes: Rc<Cell<usize>>,
    detached: Rc<Cell<bool>>,
}

impl SharedOffset {
    pub fn new(offset: f64) -> Self {
        let target = Self::default();
        target.offset.set(offset);
        target
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Number of writes that reached the element.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Simulate removal from the document: later writes are dropped.
    pub fn detach(&self) {
        self.detached.set(true);
    }
}

impl ScrollTarget for SharedOffset {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        if self.detached.get() {
            return;
        }
        self.offset.set(offset);
        self.writes.set(self.writes.get() + 1);
    }
}
