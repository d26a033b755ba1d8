//! TOON → JSON decoder.
//!
//! Tokenizes the input, then reconstructs a JSON value by recursive descent
//! over a single cursor: `parse_value` dispatches on the current token kind,
//! `parse_object` expects alternating KEY/value runs up to `OBJ_END`, and
//! `parse_array` collects values up to `ARR_END`. Each parser consumes
//! exactly the tokens belonging to its value; anything left over after the
//! top-level value is an error, which rejects multiple sibling roots.
//!
//! The token format itself puts no bound on nesting, so descent depth is
//! capped at [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH) to keep
//! adversarially deep inputs from overflowing the stack.

use crate::error::{Result, ToonError};
use crate::escape::unescape;
use crate::token::{tokenize, Token};
use crate::MAX_NESTING_DEPTH;
use serde_json::{Map, Value};

/// Decode TOON token text into pretty-printed JSON (2-space indent).
///
/// Input with no non-blank lines decodes to the empty object `{}` — a
/// special case, not an error. A single bare primitive token is a valid
/// standalone document.
pub fn decode(toon: &str) -> Result<String> {
    if toon.trim().is_empty() {
        return Ok("{}".to_string());
    }

    let tokens = tokenize(toon)?;
    let mut cursor = Cursor { tokens: &tokens, index: 0 };
    let value = cursor.parse_value(0)?;

    if cursor.index != tokens.len() {
        return Err(ToonError::Root(
            "Extra tokens after complete parse".to_string(),
        ));
    }

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Recursive-descent state: the token slice and the single advancing index.
struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Parse one complete value starting at the cursor, consuming exactly
    /// its tokens.
    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ToonError::Structural(
                "Maximum nesting depth exceeded".to_string(),
            ));
        }

        let token = self.next()?;
        match token {
            Token::ObjStart => self.parse_object(depth + 1),
            Token::ArrStart => self.parse_array(depth + 1),
            Token::Null => Ok(Value::Null),
            Token::Bool(payload) => match payload.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                other => Err(ToonError::Value(format!("Invalid boolean value: {other}"))),
            },
            Token::Num(payload) => parse_number(payload),
            Token::Str(payload) => Ok(Value::String(unescape(payload))),
            other => Err(ToonError::Structural(format!(
                "Unexpected token type: {}",
                other.kind()
            ))),
        }
    }

    /// Parse object entries after an already-consumed `OBJ_START`, through
    /// the matching `OBJ_END`.
    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        let mut map = Map::new();

        while let Some(token) = self.peek() {
            if matches!(token, Token::ObjEnd) {
                self.index += 1;
                return Ok(Value::Object(map));
            }

            let key = match token {
                Token::Key(payload) => unescape(payload),
                other => {
                    return Err(ToonError::Structural(format!(
                        "Expected KEY token, got: {}",
                        other.kind()
                    )))
                }
            };
            self.index += 1;

            if self.index >= self.tokens.len() {
                return Err(ToonError::Structural(
                    "Unexpected end of TOON input after KEY".to_string(),
                ));
            }

            // Last entry wins on duplicate keys, as in JSON objects
            map.insert(key, self.parse_value(depth)?);
        }

        Err(ToonError::Structural("Unterminated object".to_string()))
    }

    /// Parse array elements after an already-consumed `ARR_START`, through
    /// the matching `ARR_END`.
    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        let mut items = Vec::new();

        while let Some(token) = self.peek() {
            if matches!(token, Token::ArrEnd) {
                self.index += 1;
                return Ok(Value::Array(items));
            }
            items.push(self.parse_value(depth)?);
        }

        Err(ToonError::Structural("Unterminated array".to_string()))
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Result<&'a Token> {
        let token = self.tokens.get(self.index).ok_or_else(|| {
            ToonError::Structural("Unexpected end of TOON input".to_string())
        })?;
        self.index += 1;
        Ok(token)
    }
}

/// Parse a NUM payload, preserving integer-ness where possible.
/// Non-numeric payloads (including NaN/Infinity spellings) are rejected.
fn parse_number(payload: &str) -> Result<Value> {
    if let Ok(i) = payload.parse::<i64>() {
        return Ok(Value::Number(i.into()));
    }
    if let Ok(u) = payload.parse::<u64>() {
        return Ok(Value::Number(u.into()));
    }
    if let Ok(f) = payload.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Ok(Value::Number(n));
        }
    }
    Err(ToonError::Value(format!("Invalid number: {payload}")))
}
