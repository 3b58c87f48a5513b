//! Global error slot on `globalThis`.

use bootshim_core::{DEFAULT_ERROR_SLOT_KEY, ErrorSlot};
use wasm_bindgen::JsValue;

/// Named property of the global object holding an error message override.
///
/// Holds only the key, so it can be moved into a panic hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalErrorSlot {
    key: String,
}

impl GlobalErrorSlot {
    /// Slot stored under `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Property name of the slot.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Store `message` in the slot.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if the global object rejects the write.
    pub fn publish(&self, message: &str) -> Result<(), JsValue> {
        js_sys::Reflect::set(
            js_sys::global().as_ref(),
            &JsValue::from_str(&self.key),
            &JsValue::from_str(message),
        )
        .map(|_| ())
    }
}

impl Default for GlobalErrorSlot {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_SLOT_KEY)
    }
}

impl ErrorSlot for GlobalErrorSlot {
    /// Only string values count; anything else reads as unset.
    fn read(&self) -> Option<String> {
        js_sys::Reflect::get(js_sys::global().as_ref(), &JsValue::from_str(&self.key))
            .ok()?
            .as_string()
    }
}
