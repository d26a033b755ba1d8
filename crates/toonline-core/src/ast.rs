//! TOON → AST builder.
//!
//! Rebuilds an explicit tree from a token sequence using a stack of
//! in-progress container frames instead of recursion, so nesting depth costs
//! heap, not call stack. Each frame remembers the key slot it will occupy in
//! its parent object (captured from the pending KEY when the container
//! opened), which replaces scattered "is the current key set" checks with a
//! small awaiting-key/awaiting-value state per frame.
//!
//! The builder is independent of the JSON decoder and intentionally differs
//! from it at the margins: it rejects empty decoded keys, holds NUM payloads
//! to a strict numeric grammar, and accepts multiple sibling top-level
//! values (the last one becomes the root).

use crate::error::{Result, ToonError};
use crate::escape::unescape;
use crate::token::Token;
use crate::MAX_NESTING_DEPTH;

/// A primitive leaf value. Integers and floats are kept distinct so display
/// labels and JSON-shaped output keep the source's numeric texture.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// A node of the reconstructed tree. Objects are ordered key/value pairs
/// (insertion order, no map dependency), arrays are ordered elements.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Object(Vec<(String, AstNode)>),
    Array(Vec<AstNode>),
    Value(Scalar),
}

/// An in-progress container on the build stack.
enum Container {
    Object(Vec<(String, AstNode)>),
    Array(Vec<AstNode>),
}

impl Container {
    fn into_node(self) -> AstNode {
        match self {
            Container::Object(entries) => AstNode::Object(entries),
            Container::Array(items) => AstNode::Array(items),
        }
    }
}

struct Frame {
    container: Container,
    /// Key under which this container attaches to its parent, when the
    /// parent is an object. Captured when the container opens.
    slot: Option<String>,
}

impl Frame {
    fn is_object(&self) -> bool {
        matches!(self.container, Container::Object(_))
    }
}

/// Build an AST root from a token sequence.
pub fn build_ast(tokens: &[Token]) -> Result<AstNode> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut pending_key: Option<String> = None;
    let mut root: Option<AstNode> = None;

    for token in tokens {
        match token {
            Token::ObjStart | Token::ArrStart => {
                if stack.len() >= MAX_NESTING_DEPTH {
                    return Err(ToonError::Structural(
                        "Maximum nesting depth exceeded".to_string(),
                    ));
                }
                let slot = match stack.last() {
                    Some(frame) if frame.is_object() => {
                        Some(pending_key.take().ok_or_else(|| {
                            ToonError::Structural(format!(
                                "KEY expected before {}",
                                token.kind()
                            ))
                        })?)
                    }
                    _ => None,
                };
                let container = match token {
                    Token::ObjStart => Container::Object(Vec::new()),
                    _ => Container::Array(Vec::new()),
                };
                stack.push(Frame { container, slot });
            }

            Token::ObjEnd | Token::ArrEnd => {
                let frame = stack.pop().ok_or_else(|| {
                    ToonError::Structural(format!("Unexpected {} token", token.kind()))
                })?;
                place(&mut stack, &mut root, frame.slot, frame.container.into_node())?;
                // A key with no value inside the closed container is dropped
                pending_key = None;
            }

            Token::Key(payload) => {
                let key = unescape(payload);
                if key.is_empty() {
                    return Err(ToonError::Value(
                        "Empty KEY token is not allowed".to_string(),
                    ));
                }
                pending_key = Some(key);
            }

            Token::Str(_) | Token::Num(_) | Token::Bool(_) | Token::Null => {
                let scalar = parse_scalar(token)?;
                let slot = match stack.last() {
                    Some(frame) if frame.is_object() => {
                        Some(pending_key.take().ok_or_else(|| {
                            ToonError::Structural(
                                "KEY expected before value token".to_string(),
                            )
                        })?)
                    }
                    _ => None,
                };
                place(&mut stack, &mut root, slot, AstNode::Value(scalar))?;
            }
        }
    }

    if !stack.is_empty() {
        return Err(ToonError::Structural(
            "Invalid TOON structure - unbalanced tokens".to_string(),
        ));
    }
    root.ok_or_else(|| ToonError::Root("No root found in TOON tokens".to_string()))
}

/// Attach a finished node to the current stack top, or make it the root
/// candidate when the stack is empty. Duplicate keys keep their original
/// position and take the latest value.
fn place(
    stack: &mut [Frame],
    root: &mut Option<AstNode>,
    slot: Option<String>,
    node: AstNode,
) -> Result<()> {
    let Some(frame) = stack.last_mut() else {
        *root = Some(node);
        return Ok(());
    };
    match &mut frame.container {
        Container::Object(entries) => {
            let key = slot.ok_or_else(|| {
                ToonError::Structural("KEY expected before value token".to_string())
            })?;
            match entries.iter_mut().find(|entry| entry.0 == key) {
                Some(entry) => entry.1 = node,
                None => entries.push((key, node)),
            }
        }
        Container::Array(items) => items.push(node),
    }
    Ok(())
}

/// Decode a primitive token's payload into a scalar.
fn parse_scalar(token: &Token) -> Result<Scalar> {
    match token {
        Token::Null => Ok(Scalar::Null),
        Token::Str(payload) => Ok(Scalar::String(unescape(payload))),
        Token::Bool(payload) => match payload.as_str() {
            "true" => Ok(Scalar::Bool(true)),
            "false" => Ok(Scalar::Bool(false)),
            other => Err(ToonError::Value(format!("Invalid BOOL token: {other}"))),
        },
        Token::Num(payload) => {
            if !is_numeric_literal(payload) {
                return Err(ToonError::Value(format!("Invalid NUM token: {payload}")));
            }
            if !payload.contains(['.', 'e', 'E']) {
                if let Ok(i) = payload.parse::<i64>() {
                    return Ok(Scalar::Integer(i));
                }
            }
            payload
                .parse::<f64>()
                .map(Scalar::Float)
                .map_err(|_| ToonError::Value(format!("Invalid NUM token: {payload}")))
        }
        other => Err(ToonError::Structural(format!(
            "Unexpected token type for value: {}",
            other.kind()
        ))),
    }
}

/// Strict NUM payload grammar: `[+-]? digits [ "." digits ] [ [eE] [+-]? digits ]`.
/// Stricter than the JSON decoder, which accepts anything Rust parses as f64.
fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}
