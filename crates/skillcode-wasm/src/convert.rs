use std::fmt::Display;

use wasm_bindgen::JsValue;

/// Converts any displayable error into a `JsValue` carrying its message.
pub fn error_to_js<E: Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
