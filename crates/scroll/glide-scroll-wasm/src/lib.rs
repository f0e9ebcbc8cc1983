use std::cell::RefCell;
use std::rc::Rc;

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use glide_scroll_core::{visibility, Rect, ScrollConfig, ScrollScheduler, ScrollState, Viewport};

mod console;
mod host;

pub use host::{ElementTarget, WebHost, WebTimer};
use host::WebScheduler;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn window() -> Result<Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::new("no global window"))
}

/// `document.scrollingElement`, falling back to `document.body`.
fn scrolling_root(document: &Document) -> Option<Element> {
    document
        .scrolling_element()
        .or_else(|| document.body().map(Element::from))
}

/// Smooth scroller bound to the page's window.
#[wasm_bindgen]
pub struct GlideScroll {
    inner: Rc<RefCell<WebScheduler>>,
}

#[wasm_bindgen]
impl GlideScroll {
    /// Create a scroller. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new GlideScroll({ tick_increment_ms: 16 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlideScroll, JsError> {
        console_error_panic_hook::set_once();

        let cfg: ScrollConfig = if jsvalue_is_undefined_or_null(&config) {
            ScrollConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let sched = ScrollScheduler::new(WebHost::new(window()?), cfg)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        let inner = Rc::new(RefCell::new(sched));
        inner.borrow_mut().host_mut().attach(Rc::downgrade(&inner));
        Ok(GlideScroll { inner })
    }

    /// Animate `element.scrollTop` to `to` over `duration_ms`, cancelling any
    /// running animation. Wheel input cancels it.
    #[wasm_bindgen(js_name = scroll_to)]
    pub fn scroll_to(&self, element: Element, to: f64, duration_ms: f64) -> Result<(), JsError> {
        self.inner
            .borrow_mut()
            .scroll_to(ElementTarget(element), to, duration_ms)
            .map_err(|e| JsError::new(&format!("scroll_to error: {e}")))
    }

    /// Scroll the document back to the top using the configured duration.
    #[wasm_bindgen(js_name = scroll_to_top)]
    pub fn scroll_to_top(&self) -> Result<(), JsError> {
        let mut sched = self.inner.borrow_mut();
        let root = sched
            .host()
            .window()
            .document()
            .as_ref()
            .and_then(scrolling_root)
            .ok_or_else(|| JsError::new("scroll_to_top: no scrolling element"))?;
        sched.scroll_to_top(ElementTarget(root));
        Ok(())
    }

    /// Stop the running animation where it is. Returns false when idle.
    pub fn cancel(&self) -> bool {
        self.inner.borrow_mut().cancel()
    }

    #[wasm_bindgen(js_name = is_running)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().state() == ScrollState::Running
    }
}

impl Drop for GlideScroll {
    fn drop(&mut self) {
        // Clear the pending timeout and wheel listener before the callbacks go away.
        if let Ok(mut sched) = self.inner.try_borrow_mut() {
            sched.cancel();
        }
    }
}

/// Quadratic ease-in-out used by the scroller.
#[wasm_bindgen(js_name = ease_in_out)]
pub fn ease_in_out(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    glide_scroll_core::ease_in_out(elapsed, start, change, duration)
}

/// Returns `{ partial, complete }` describing how much of `element` is inside
/// the viewport.
#[wasm_bindgen(js_name = is_element_in_view)]
pub fn is_element_in_view(element: &Element) -> Result<JsValue, JsError> {
    let win = window()?;
    let r = element.get_bounding_client_rect();
    let rect = Rect {
        top: r.top(),
        left: r.left(),
        width: r.width(),
        height: r.height(),
    };
    let root = win.document().and_then(|d| d.document_element());
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| root.as_ref().map(|e| f64::from(e.client_width())))
        .unwrap_or_default();
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| root.as_ref().map(|e| f64::from(e.client_height())))
        .unwrap_or_default();
    let vis = visibility(&rect, &Viewport { width, height });
    swb::to_value(&vis).map_err(|e| JsError::new(&format!("visibility error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
