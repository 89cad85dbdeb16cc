//! Serializer: the exact inverse of the parser.
//!
//! The layout is fixed rather than configurable: `parse(print(tree))`
//! must rebuild an identical tree.
//!
//! - Hashes go multi-line, one `"key": value` member per line,
//!   tab-indented, comma-terminated except the last, braces on their own
//!   lines at the enclosing depth
//! - Lists stay on one line, `, `-separated, and do not deepen the indent
//! - Booleans print bare (`true`/`false`), never quoted
//! - Numbers use the shortest `f64` decimal form, never scientific
//!   notation
//! - Strings are re-quoted verbatim with no escaping, mirroring the
//!   parser

use crate::node::Node;
use std::fmt;

/// Serialize a document tree to text.
pub fn print(node: &Node) -> String {
    let mut out = String::new();
    print_node(node, 0, &mut out);
    out
}

impl Node {
    /// Serialize this node per [`print`].
    pub fn to_text(&self) -> String {
        print(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(self))
    }
}

/// Append `node` to `out` at the given hash-nesting depth.
fn print_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Number(n) => out.push_str(&n.to_string()),
        Node::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Node::List(items) => print_list(items, depth, out),
        Node::Hash(members) => print_hash(members, depth, out),
    }
}

/// Lists print compact: `[1, 2, 3]`. The enclosing depth passes through
/// unchanged, so a hash inside a list indents relative to the line the
/// list started on.
fn print_list(items: &[Node], depth: usize, out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        print_node(item, depth, out);
    }
    out.push(']');
}

/// Hashes print one member per line, members one tab deeper than the
/// braces. An empty hash collapses to `{}` so it can sit on one line.
fn print_hash(members: &[(String, Node)], depth: usize, out: &mut String) {
    if members.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let indent = make_indent(depth + 1);
    for (i, (key, value)) in members.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&indent);
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
        print_node(value, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(depth));
    out.push('}');
}

/// One tab per hash level.
fn make_indent(depth: usize) -> String {
    "\t".repeat(depth)
}
