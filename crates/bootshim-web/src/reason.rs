//! Conversion of JS rejection values into [`FailureReason`]s.

use bootshim_core::FailureReason;
use wasm_bindgen::{JsCast, JsValue};

/// Describe an arbitrary JS value the way `String(value)` would, best effort.
///
/// Strings are kept verbatim, `Error` objects keep their name and message,
/// everything else is rendered through its own `toString`.
#[must_use]
pub fn failure_reason_from_js(value: &JsValue) -> FailureReason {
    if let Some(text) = value.as_string() {
        return FailureReason::message(text);
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return FailureReason::error(String::from(err.name()), String::from(err.message()));
    }
    FailureReason::opaque(render_opaque(value))
}

fn render_opaque(value: &JsValue) -> String {
    if value.is_null() {
        return "null".to_string();
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if let Some(flag) = value.as_bool() {
        return flag.to_string();
    }
    if let Some(number) = value.as_f64() {
        return js_sys::Number::from(number)
            .to_string(10)
            .map_or_else(|_| number.to_string(), String::from);
    }
    if let Some(object) = value.dyn_ref::<js_sys::Object>() {
        return String::from(object.to_string());
    }
    format!("{value:?}")
}
