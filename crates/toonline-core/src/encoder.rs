//! JSON → TOON encoder.
//!
//! Walks a parsed JSON value in pre-order and emits one token per node:
//! `OBJ_START`/`OBJ_END` around object entries (each entry a `KEY=` line
//! followed by its value's tokens), `ARR_START`/`ARR_END` around array
//! elements, and `STR=`/`NUM=`/`BOOL=`/`NULL` for primitives. Object key
//! order is the JSON document's insertion order (serde_json's
//! `preserve_order` feature).
//!
//! # Example
//! ```
//! use toonline_core::encode;
//! let toon = encode(r#"{"name":"test","value":123}"#).unwrap();
//! assert_eq!(toon, "OBJ_START\nKEY=name\nSTR=test\nKEY=value\nNUM=123\nOBJ_END");
//! ```

use crate::error::Result;
use crate::escape::escape;
use serde_json::Value;

/// Encode a JSON string into TOON token text.
///
/// Returns the token lines joined with `\n` (no trailing newline), or the
/// underlying parse error if the input is not valid JSON. Recursion depth is
/// bounded by serde_json's own nesting limit on the parse.
pub fn encode(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    let mut tokens = Vec::new();
    encode_value(&value, &mut tokens);
    Ok(tokens.join("\n"))
}

/// Emit the token lines for one value, recursively.
fn encode_value(value: &Value, tokens: &mut Vec<String>) {
    match value {
        Value::Null => tokens.push("NULL".to_string()),
        Value::Bool(b) => tokens.push(format!("BOOL={}", b)),
        Value::Number(n) => tokens.push(format!("NUM={}", format_number(n))),
        Value::String(s) => tokens.push(format!("STR={}", escape(s))),
        Value::Array(arr) => {
            tokens.push("ARR_START".to_string());
            for item in arr {
                encode_value(item, tokens);
            }
            tokens.push("ARR_END".to_string());
        }
        Value::Object(map) => {
            tokens.push("OBJ_START".to_string());
            for (key, val) in map {
                tokens.push(format!("KEY={}", escape(key)));
                encode_value(val, tokens);
            }
            tokens.push("OBJ_END".to_string());
        }
    }
}

/// Standard decimal text for a JSON number. Integers print directly; floats
/// use `Display` (round-trip beyond double precision is an explicit
/// non-goal).
fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => f.to_string(),
        // serde_json numbers are always one of the three
        None => "0".to_string(),
    }
}
