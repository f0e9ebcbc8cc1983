//! Browser console output for adapter failures.
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
}

/// Logs a warning to the browser console.
pub(crate) fn warn(message: &str) {
    console_warn(&format!("glide-scroll: {message}"));
}

/// Logs a warning together with the JS error that caused it.
pub(crate) fn warn_js(message: &str, err: &JsValue) {
    warn(&format!("{message}: {err:?}"));
}
