//! Console logging for the browser layer

use wasm_bindgen::JsValue;
use web_sys::console;

const PREFIX: &str = "[micro-interactions]";

pub fn debug(message: &str) {
    console::debug_1(&JsValue::from_str(&format!("{} {}", PREFIX, message)));
}

pub fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(&format!("{} {}", PREFIX, message)));
}
