//! WASM bindings for toonline-core.
//!
//! Exposes the converter surface as `#[wasm_bindgen]` functions callable
//! from JavaScript/TypeScript — the browser UI consumes exactly these five
//! operations. Errors become JS exceptions carrying the core error message
//! verbatim, so callers can display them unchanged.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p toonline-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/toonline_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Encode a JSON string into TOON token text.
///
/// Returns the token lines, or throws a JS error if the input is not valid
/// JSON.
#[wasm_bindgen]
pub fn encode(json: &str) -> std::result::Result<String, JsValue> {
    toonline_core::encode(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode TOON token text back into pretty-printed JSON.
///
/// Blank input decodes to `{}`. Throws a JS error if the input is not valid
/// TOON.
#[wasm_bindgen]
pub fn decode(toon: &str) -> std::result::Result<String, JsValue> {
    toonline_core::decode(toon).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate JSON text. Returns nothing on success, throws the validation
/// message otherwise.
#[wasm_bindgen]
pub fn validate_json(input: &str) -> std::result::Result<(), JsValue> {
    toonline_core::validate_json(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate TOON token text (grammar and bracket balance).
#[wasm_bindgen]
pub fn validate_toon(input: &str) -> std::result::Result<(), JsValue> {
    toonline_core::validate_toon(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Project TOON token text into the display tree, serialized as JSON
/// (`"null"` for blank input).
#[wasm_bindgen]
pub fn project(toon: &str) -> std::result::Result<String, JsValue> {
    let tree = toonline_core::project(toon).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&tree).map_err(|e| JsValue::from_str(&e.to_string()))
}
