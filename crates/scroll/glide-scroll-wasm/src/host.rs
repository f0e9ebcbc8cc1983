//! DOM-backed implementations of the core host traits.

use std::cell::RefCell;
use std::rc::Weak;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use glide_scroll_core::{ScrollHost, ScrollScheduler, ScrollTarget, TickToken};

use crate::console::{warn, warn_js};

pub(crate) type WebScheduler = ScrollScheduler<WebHost, ElementTarget>;

/// Scrollable DOM element driven through `scrollTop`.
pub struct ElementTarget(pub Element);

impl ScrollTarget for ElementTarget {
    fn scroll_offset(&self) -> f64 {
        f64::from(self.0.scroll_top())
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        // Detached elements ignore this write.
        self.0.set_scroll_top(offset.round() as i32);
    }
}

/// `setTimeout` id, or `None` if the browser refused to schedule.
pub struct WebTimer(Option<i32>);

impl WebTimer {
    pub fn id(&self) -> Option<i32> {
        self.0
    }
}

/// Marker for the window-level wheel subscription.
pub struct WebWheelListener;

/// Window timers and wheel events routed back into the shared scheduler.
///
/// The two callbacks are created once in [`WebHost::attach`] and reused for
/// every animation, so a callback is never dropped while it is running.
pub struct WebHost {
    window: Window,
    on_tick: Option<Closure<dyn FnMut(JsValue)>>,
    on_wheel: Option<Closure<dyn FnMut()>>,
}

impl WebHost {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            on_tick: None,
            on_wheel: None,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Install the callbacks that re-enter `scheduler`. Must run before the
    /// first animation starts.
    pub(crate) fn attach(&mut self, scheduler: Weak<RefCell<WebScheduler>>) {
        let tick_target = scheduler.clone();
        let on_tick = Closure::wrap(Box::new(move |token: JsValue| {
            let Some(raw) = token.as_f64() else {
                return;
            };
            let Some(shared) = tick_target.upgrade() else {
                return;
            };
            let Ok(mut sched) = shared.try_borrow_mut() else {
                warn("scroll tick dropped: scheduler busy");
                return;
            };
            sched.on_tick(TickToken(raw as u32));
        }) as Box<dyn FnMut(JsValue)>);

        let on_wheel = Closure::wrap(Box::new(move || {
            let Some(shared) = scheduler.upgrade() else {
                return;
            };
            let Ok(mut sched) = shared.try_borrow_mut() else {
                warn("wheel input dropped: scheduler busy");
                return;
            };
            sched.on_wheel();
        }) as Box<dyn FnMut()>);

        self.on_tick = Some(on_tick);
        self.on_wheel = Some(on_wheel);
    }

    fn wheel_fn(&self) -> Option<&Function> {
        self.on_wheel.as_ref().map(|c| c.as_ref().unchecked_ref())
    }
}

impl ScrollHost for WebHost {
    type Timer = WebTimer;
    type Listener = WebWheelListener;

    fn schedule_tick(&mut self, delay_ms: f64, token: TickToken) -> WebTimer {
        let Some(cb) = self.on_tick.as_ref() else {
            warn("scroll tick not scheduled: host not attached");
            return WebTimer(None);
        };
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                cb.as_ref().unchecked_ref(),
                delay_ms.round() as i32,
                &JsValue::from(token.0),
            );
        match id {
            Ok(id) => WebTimer(Some(id)),
            Err(err) => {
                warn_js("setTimeout failed", &err);
                WebTimer(None)
            }
        }
    }

    fn cancel_tick(&mut self, timer: WebTimer) {
        if let Some(id) = timer.0 {
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn listen_wheel(&mut self) -> WebWheelListener {
        if let Some(f) = self.wheel_fn() {
            if let Err(err) = self.window.add_event_listener_with_callback("wheel", f) {
                warn_js("failed to add wheel listener", &err);
            }
        }
        WebWheelListener
    }

    fn unlisten_wheel(&mut self, _listener: WebWheelListener) {
        if let Some(f) = self.wheel_fn() {
            if let Err(err) = self.window.remove_event_listener_with_callback("wheel", f) {
                warn_js("failed to remove wheel listener", &err);
            }
        }
    }
}
