//! TOON token grammar and line tokenizer.
//!
//! A TOON document is a flat sequence of tokens, one per line. Nesting is
//! implied by START/END pairing, never by a token field. The tokenizer only
//! classifies lines — balance and sequencing are checked downstream by the
//! validator, decoder, and AST builder.
//!
//! Line grammar (blank lines are ignored, lines are trimmed):
//!
//! ```text
//! OBJ_START | OBJ_END | ARR_START | ARR_END | NULL
//! KEY=<escaped-text>
//! STR=<escaped-text>
//! NUM=<decimal-number-text>
//! BOOL=true | BOOL=false
//! ```

use crate::error::{Result, ToonError};

/// One classified line of TOON text.
///
/// `Key`/`Str` payloads are carried raw (still escaped); consumers unescape
/// them. `Num`/`Bool` payloads are carried verbatim and validated by the
/// decoder and AST builder, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    ObjStart,
    ObjEnd,
    ArrStart,
    ArrEnd,
    Null,
    Key(String),
    Str(String),
    Num(String),
    Bool(String),
}

impl Token {
    /// The token's wire name, as it appears on a TOON line and in error
    /// messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::ObjStart => "OBJ_START",
            Token::ObjEnd => "OBJ_END",
            Token::ArrStart => "ARR_START",
            Token::ArrEnd => "ARR_END",
            Token::Null => "NULL",
            Token::Key(_) => "KEY",
            Token::Str(_) => "STR",
            Token::Num(_) => "NUM",
            Token::Bool(_) => "BOOL",
        }
    }
}

/// Split TOON text into tokens.
///
/// Lines are trimmed and blank lines discarded before classification. A line
/// matching none of the grammar rules fails with [`ToonError::Token`] naming
/// the line verbatim.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

/// Classify a single non-blank, trimmed line.
fn classify_line(line: &str) -> Result<Token> {
    match line {
        "OBJ_START" => return Ok(Token::ObjStart),
        "OBJ_END" => return Ok(Token::ObjEnd),
        "ARR_START" => return Ok(Token::ArrStart),
        "ARR_END" => return Ok(Token::ArrEnd),
        "NULL" => return Ok(Token::Null),
        _ => {}
    }
    if let Some(payload) = line.strip_prefix("KEY=") {
        return Ok(Token::Key(payload.to_string()));
    }
    if let Some(payload) = line.strip_prefix("STR=") {
        return Ok(Token::Str(payload.to_string()));
    }
    if let Some(payload) = line.strip_prefix("NUM=") {
        return Ok(Token::Num(payload.to_string()));
    }
    if let Some(payload) = line.strip_prefix("BOOL=") {
        return Ok(Token::Bool(payload.to_string()));
    }
    Err(ToonError::Token(line.to_string()))
}
