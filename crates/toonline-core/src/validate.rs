//! Pre-conversion validation for JSON and TOON text.
//!
//! TOON validation is deliberately a cheap structural pre-check: it verifies
//! that every line matches the token grammar and that START/END brackets
//! balance, and nothing more. Payload grammar (NUM must be numeric, BOOL must
//! be true/false) and token sequencing (KEY must precede a value) are owned
//! by the decoder and AST builder. Tightening the validator to cover
//! sequencing is a possible future change, not a bug in the current layering.

use crate::error::{Result, ToonError};
use crate::token::{tokenize, Token};

/// Validate TOON text: token grammar plus bracket balance.
///
/// Object and array nesting are tracked with two independent depth counters.
/// An END that would drive its counter negative fails immediately; leftover
/// depth after the full pass is reported per bracket kind (objects first).
pub fn validate_toon(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(ToonError::EmptyInput);
    }

    let tokens = tokenize(input)?;

    let mut object_depth: i64 = 0;
    let mut array_depth: i64 = 0;

    for token in &tokens {
        match token {
            Token::ObjStart => object_depth += 1,
            Token::ObjEnd => {
                object_depth -= 1;
                if object_depth < 0 {
                    return Err(ToonError::Structural(
                        "Unbalanced OBJ_END token".to_string(),
                    ));
                }
            }
            Token::ArrStart => array_depth += 1,
            Token::ArrEnd => {
                array_depth -= 1;
                if array_depth < 0 {
                    return Err(ToonError::Structural(
                        "Unbalanced ARR_END token".to_string(),
                    ));
                }
            }
            // Structurally valid regardless of payload content at this layer
            Token::Null | Token::Key(_) | Token::Str(_) | Token::Num(_) | Token::Bool(_) => {}
        }
    }

    if object_depth != 0 {
        return Err(ToonError::Structural(
            "Unbalanced object structure".to_string(),
        ));
    }
    if array_depth != 0 {
        return Err(ToonError::Structural(
            "Unbalanced array structure".to_string(),
        ));
    }

    Ok(())
}

/// Validate JSON text for the encoding path.
///
/// The document must parse and its top level must be an object or array —
/// bare primitives are accepted by the encoder itself but rejected here,
/// matching the converter surface this validator fronts.
pub fn validate_json(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(ToonError::EmptyInput);
    }

    let value: serde_json::Value = serde_json::from_str(input)?;

    if !value.is_object() && !value.is_array() {
        return Err(ToonError::Structural(
            "JSON must be an object or array".to_string(),
        ));
    }

    Ok(())
}
