//! `toonline` CLI — convert between JSON and flat TOON token text.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to TOON tokens (stdin → stdout)
//! echo '{"name":"test","value":123}' | toonline encode
//!
//! # Encode from file to file
//! toonline encode -i data.json -o data.toon
//!
//! # Decode TOON back to pretty-printed JSON
//! toonline decode -i data.toon
//!
//! # Check TOON well-formedness (exit code reflects validity)
//! toonline validate -i data.toon
//!
//! # Check JSON instead
//! toonline validate --json -i data.json
//!
//! # Render the display tree
//! toonline tree -i data.toon
//! toonline tree --json -i data.toon   # serialized node tree
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use toonline_core::{DisplayChild, DisplayNode};

#[derive(Parser)]
#[command(name = "toonline", version, about = "Flat TOON token format converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to TOON token text
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode TOON token text back to pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate TOON (or, with --json, JSON) text
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Validate JSON text instead of TOON
        #[arg(long)]
        json: bool,
    },
    /// Project TOON token text into the display tree
    Tree {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit the serialized node tree instead of the text rendering
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let toon = toonline_core::encode(&json).context("Failed to encode JSON to TOON")?;
            write_output(output.as_deref(), &toon)?;
        }
        Commands::Decode { input, output } => {
            let toon = read_input(input.as_deref())?;
            let json = toonline_core::decode(&toon).context("Failed to decode TOON to JSON")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Validate { input, json } => {
            let text = read_input(input.as_deref())?;
            let result = if json {
                toonline_core::validate_json(&text)
            } else {
                toonline_core::validate_toon(&text)
            };
            match result {
                Ok(()) => println!("valid"),
                Err(e) => anyhow::bail!("{e}"),
            }
        }
        Commands::Tree { input, output, json } => {
            let toon = read_input(input.as_deref())?;
            let tree = toonline_core::project(&toon).context("Failed to project TOON")?;
            let rendered = match tree {
                None => {
                    if json {
                        "null".to_string()
                    } else {
                        String::new()
                    }
                }
                Some(node) if json => serde_json::to_string_pretty(&node)?,
                Some(node) => render_tree(&node),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Render a display tree as indented icon/label lines, one node per line.
fn render_tree(root: &DisplayNode) -> String {
    let mut out = String::new();
    out.push_str(&heading(root));
    out.push('\n');
    render_children(root, 1, &mut out);
    out
}

/// The single-line header for a node: icon plus label (the root has no
/// stored label and reads "Document").
fn heading(node: &DisplayNode) -> String {
    match node {
        DisplayNode::Root { icon, .. } => format!("{icon} Document"),
        DisplayNode::Object { icon, label, .. } | DisplayNode::Array { icon, label, .. } => {
            format!("{icon} {label}")
        }
        DisplayNode::Primitive { icon, label } => format!("{icon} {label}"),
    }
}

fn children_of(node: &DisplayNode) -> &[DisplayChild] {
    match node {
        DisplayNode::Root { children, .. }
        | DisplayNode::Object { children, .. }
        | DisplayNode::Array { children, .. } => children,
        DisplayNode::Primitive { .. } => &[],
    }
}

fn render_children(node: &DisplayNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for child in children_of(node) {
        match child {
            DisplayChild::KeyValue { icon, key, child } => {
                out.push_str(&format!("{indent}{icon} {key}: {}\n", heading(child)));
                render_children(child, depth + 1, out);
            }
            DisplayChild::ArrayItem { icon, child, .. } => {
                out.push_str(&format!("{indent}{icon} {}\n", heading(child)));
                render_children(child, depth + 1, out);
            }
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
