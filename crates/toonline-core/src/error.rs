//! Error types for TOON conversion and validation.

use thiserror::Error;

/// Errors that can occur while converting between JSON, TOON token text,
/// and the display tree.
///
/// Every public entry point returns a [`Result`]; no operation panics or
/// returns a partially built value on failure.
#[derive(Error, Debug)]
pub enum ToonError {
    /// The input string was not valid JSON (encoding path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input was empty or contained only whitespace.
    #[error("empty input")]
    EmptyInput,

    /// A line matched none of the token grammar rules. Carries the
    /// offending line verbatim.
    #[error("Invalid TOON token: {0}")]
    Token(String),

    /// Unbalanced or out-of-order tokens (unexpected END, KEY without a
    /// following value, unterminated container).
    #[error("{0}")]
    Structural(String),

    /// A token payload failed its type-specific grammar (non-numeric NUM,
    /// BOOL other than true/false, empty KEY).
    #[error("{0}")]
    Value(String),

    /// No root value was established, or tokens remained after a complete
    /// top-level parse.
    #[error("{0}")]
    Root(String),
}

/// Convenience alias used throughout toonline-core.
pub type Result<T> = std::result::Result<T, ToonError>;
