//! `jot` CLI: read, edit, and normalize JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize a document (stdin → stdout)
//! echo '{"a": 1,}' | jot fmt
//!
//! # Format from file to file
//! jot fmt -i config.json -o config.json
//!
//! # Read one value by dotted path
//! jot get -i config.json -p owner.name
//!
//! # All-digit segments index into lists
//! jot get -i config.json -p users.0.name
//!
//! # Write a value; the value is itself document text
//! jot set -i config.json -p version -v 4 -o config.json
//!
//! # Strings keep their quotes (shell-quote them)
//! jot set -i config.json -p owner.name -v '"lin"'
//!
//! # Remove a value (missing paths are a no-op)
//! jot del -i config.json -p owner.email
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jot_core::{Key, Node};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jot",
    version,
    about = "Read, edit, and normalize JSON documents by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it back normalized
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the value at a path
    Get {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Dotted path; all-digit segments index into lists (e.g. users.0.name)
        #[arg(short, long)]
        path: String,
    },
    /// Write a value at a path and print the whole document
    Set {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Dotted path; all-digit segments index into lists
        #[arg(short, long)]
        path: String,
        /// New value, itself document text (quote strings: -v '"text"')
        #[arg(short, long)]
        value: String,
    },
    /// Remove the value at a path (missing paths are a no-op)
    Del {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Dotted path; all-digit segments index into lists
        #[arg(short, long)]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let doc = parse_document(&text)?;
            write_output(output.as_deref(), &render(&doc))?;
        }
        Commands::Get { input, path } => {
            let text = read_input(input.as_deref())?;
            let doc = parse_document(&text)?;
            let keys = parse_path(&path);
            let node = doc
                .get(&keys)
                .with_context(|| format!("No value at path '{}'", path))?;
            print!("{}", render(node));
        }
        Commands::Set {
            input,
            output,
            path,
            value,
        } => {
            let text = read_input(input.as_deref())?;
            let mut doc = parse_document(&text)?;
            let new = jot_core::parse(&value)
                .with_context(|| format!("Failed to parse value '{}' as a document", value))?;
            let keys = parse_path(&path);
            doc.set(new, &keys)
                .with_context(|| format!("Failed to set value at path '{}'", path))?;
            write_output(output.as_deref(), &render(&doc))?;
        }
        Commands::Del {
            input,
            output,
            path,
        } => {
            let text = read_input(input.as_deref())?;
            let mut doc = parse_document(&text)?;
            let keys = parse_path(&path);
            // Removing a missing path is a no-op, matching the library contract.
            doc.del(&keys);
            write_output(output.as_deref(), &render(&doc))?;
        }
    }

    Ok(())
}

/// Split a dotted path into lookup keys.
///
/// Every all-digit segment becomes a list index, anything else a member
/// name: `users.0.name` addresses the name of the first user. Empty
/// segments are skipped, so an empty path addresses the whole document.
fn parse_path(raw: &str) -> Vec<Key> {
    raw.split('.')
        .filter(|seg| !seg.is_empty())
        .map(|seg| match seg.parse::<usize>() {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(seg.to_string()),
        })
        .collect()
}

fn parse_document(text: &str) -> Result<Node> {
    jot_core::parse(text).context("Failed to parse input as a document")
}

/// Printed form plus the trailing newline every output channel gets.
fn render(node: &Node) -> String {
    let mut text = node.to_text();
    text.push('\n');
    text
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
