//! AST → display-tree projector.
//!
//! Maps the reconstructed tree into a presentation tree for human-friendly
//! rendering: every node carries an icon and (except the root) a descriptive
//! label, and composite nodes hold their children as `keyValue` or
//! `arrayItem` wrappers. The projection performs no validation — its input
//! is assumed already well-formed — and always succeeds structurally.
//!
//! The serialized shape is stable: each node serializes with a `kind` tag
//! (`root`, `object`, `array`, `keyValue`, `arrayItem`, `primitive`).

use crate::ast::{build_ast, AstNode, Scalar};
use crate::error::Result;
use crate::token::tokenize;
use serde::Serialize;

/// Icon for objects and the default root.
pub const ICON_OBJECT: &str = "📦";
/// Icon for arrays.
pub const ICON_ARRAY: &str = "📚";
/// Icon for object keys.
pub const ICON_KEY: &str = "🔑";
/// Icon for string primitives.
pub const ICON_STRING: &str = "🔤";
/// Icon for numeric primitives.
pub const ICON_NUMBER: &str = "🔢";
/// Icon for `true`.
pub const ICON_TRUE: &str = "🟢";
/// Icon for `false`.
pub const ICON_FALSE: &str = "🔴";
/// Icon for `null`.
pub const ICON_NULL: &str = "⚫";
/// Fallback icon for values with no recognized presentation (non-finite
/// numbers are the only reachable case).
pub const ICON_UNKNOWN: &str = "❓";

/// A node of the display tree.
///
/// The outermost object or array projects to `Root`; the same shapes nested
/// deeper project to `Object`/`Array` with a summary label. The distinction
/// is purely positional, not stored in the AST.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DisplayNode {
    Root {
        icon: String,
        children: Vec<DisplayChild>,
    },
    Object {
        icon: String,
        /// e.g. `"Object (4 keys)"`
        label: String,
        children: Vec<DisplayChild>,
    },
    Array {
        icon: String,
        /// e.g. `"Array (5 items)"`
        label: String,
        children: Vec<DisplayChild>,
    },
    Primitive {
        icon: String,
        label: String,
    },
}

/// A child slot of a composite display node: always a keyed entry or an
/// indexed element, never a bare node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DisplayChild {
    KeyValue {
        icon: String,
        key: String,
        child: DisplayNode,
    },
    ArrayItem {
        icon: String,
        index: usize,
        child: DisplayNode,
    },
}

/// Project TOON text straight to a display tree.
///
/// Blank input yields `Ok(None)` — there is nothing to display, but it is
/// not an error. Everything else goes through the tokenizer and AST builder,
/// whose errors propagate unchanged.
pub fn project(toon: &str) -> Result<Option<DisplayNode>> {
    if toon.trim().is_empty() {
        return Ok(None);
    }
    let tokens = tokenize(toon)?;
    let ast = build_ast(&tokens)?;
    Ok(Some(project_ast(&ast)))
}

/// Project an AST root into a display tree. Total; never fails.
///
/// A bare top-level primitive is wrapped in a synthetic root object with a
/// single key named `value`.
pub fn project_ast(ast: &AstNode) -> DisplayNode {
    match ast {
        AstNode::Object(entries) => DisplayNode::Root {
            icon: ICON_OBJECT.to_string(),
            children: entries
                .iter()
                .map(|(key, value)| key_value(key.clone(), project_nested(value)))
                .collect(),
        },
        AstNode::Array(items) => DisplayNode::Root {
            icon: ICON_ARRAY.to_string(),
            children: items
                .iter()
                .enumerate()
                .map(|(index, value)| array_item(index, project_nested(value)))
                .collect(),
        },
        AstNode::Value(scalar) => DisplayNode::Root {
            icon: ICON_OBJECT.to_string(),
            children: vec![key_value("value".to_string(), project_scalar(scalar))],
        },
    }
}

/// Project a non-root AST node.
fn project_nested(node: &AstNode) -> DisplayNode {
    match node {
        AstNode::Object(entries) => DisplayNode::Object {
            icon: ICON_OBJECT.to_string(),
            label: format!("Object ({} keys)", entries.len()),
            children: entries
                .iter()
                .map(|(key, value)| key_value(key.clone(), project_nested(value)))
                .collect(),
        },
        AstNode::Array(items) => DisplayNode::Array {
            icon: ICON_ARRAY.to_string(),
            label: format!("Array ({} items)", items.len()),
            children: items
                .iter()
                .enumerate()
                .map(|(index, value)| array_item(index, project_nested(value)))
                .collect(),
        },
        AstNode::Value(scalar) => project_scalar(scalar),
    }
}

/// Leaf projection: kind-specific icon plus display label (quoted for
/// strings, decimal text for numbers).
fn project_scalar(scalar: &Scalar) -> DisplayNode {
    let (icon, label) = match scalar {
        Scalar::String(s) => (ICON_STRING, format!("\"{s}\"")),
        Scalar::Integer(i) => (ICON_NUMBER, i.to_string()),
        Scalar::Float(f) if f.is_finite() => (ICON_NUMBER, f.to_string()),
        Scalar::Float(f) => (ICON_UNKNOWN, f.to_string()),
        Scalar::Bool(true) => (ICON_TRUE, "true".to_string()),
        Scalar::Bool(false) => (ICON_FALSE, "false".to_string()),
        Scalar::Null => (ICON_NULL, "null".to_string()),
    };
    DisplayNode::Primitive {
        icon: icon.to_string(),
        label,
    }
}

fn key_value(key: String, child: DisplayNode) -> DisplayChild {
    DisplayChild::KeyValue {
        icon: ICON_KEY.to_string(),
        key,
        child,
    }
}

fn array_item(index: usize, child: DisplayNode) -> DisplayChild {
    DisplayChild::ArrayItem {
        icon: keycap_icon(index + 1),
        index,
        child,
    }
}

/// Keycap-style icon for a 1-based array position: the decimal digits
/// followed by U+FE0F U+20E3.
fn keycap_icon(position: usize) -> String {
    format!("{position}\u{fe0f}\u{20e3}")
}
