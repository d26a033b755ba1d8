//! # toonline-core
//!
//! Converter between JSON text and **TOON**, a flat line-oriented token
//! format carrying the same tree of values as a sequence of typed tokens,
//! one per line. A secondary transform projects a token stream into a
//! presentation tree for human-friendly visualization.
//!
//! ## Quick start
//!
//! ```rust
//! use toonline_core::{encode, decode};
//!
//! // JSON → TOON tokens
//! let toon = encode(r#"{"name":"test","value":123}"#).unwrap();
//! assert_eq!(toon, "OBJ_START\nKEY=name\nSTR=test\nKEY=value\nNUM=123\nOBJ_END");
//!
//! // TOON tokens → pretty JSON (roundtrip)
//! let json = decode(&toon).unwrap();
//! assert_eq!(json, "{\n  \"name\": \"test\",\n  \"value\": 123\n}");
//! ```
//!
//! ## Modules
//!
//! - [`escape`] — reversible line-safe payload escaping
//! - [`token`] — token grammar and line tokenizer
//! - [`validate`] — structural pre-checks for TOON and JSON text
//! - [`encoder`] — JSON string → TOON string
//! - [`decoder`] — TOON string → pretty-printed JSON string
//! - [`ast`] — TOON tokens → explicit value tree
//! - [`display`] — value tree → icon/label display tree
//! - [`error`] — error types shared by all operations
//!
//! All operations are synchronous, pure transformations over in-memory
//! strings and trees; every call allocates and discards its own state, so
//! the public functions are freely callable from concurrent call sites.

pub mod ast;
pub mod decoder;
pub mod display;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod token;
pub mod validate;

pub use ast::{build_ast, AstNode, Scalar};
pub use decoder::decode;
pub use display::{project, project_ast, DisplayChild, DisplayNode};
pub use encoder::encode;
pub use error::ToonError;
pub use token::{tokenize, Token};
pub use validate::{validate_json, validate_toon};

/// Maximum container nesting accepted by the decoder and AST builder.
///
/// The token format itself puts no bound on START/END nesting, so both
/// consumers cap depth here to keep adversarial inputs from exhausting the
/// call stack (the encoder inherits serde_json's own limit on the parse
/// side).
pub const MAX_NESTING_DEPTH: usize = 128;
