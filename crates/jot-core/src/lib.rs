//! # jot-core
//!
//! An engine for **path-addressed JSON document trees**: parse a text
//! buffer into an owned tree of [`Node`]s, walk and edit it through mixed
//! index/name paths, and print it back out in a form the parser reads
//! unchanged.
//!
//! The dialect is JSON-shaped but deliberately smaller: no escape
//! sequences, no exponent notation, and commas between children are
//! optional. In exchange the engine keeps a hard guarantee:
//! `parse(print(tree))` rebuilds an identical tree.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::{path, Node};
//!
//! let mut doc = Node::from_text(r#"{"users": [{"name": "ada", "admin": true}]}"#);
//!
//! // Read through a mixed index/name path.
//! let name = doc.get(path!["users", 0, "name"]).and_then(Node::as_str);
//! assert_eq!(name, Some("ada"));
//!
//! // Edit in place, then print.
//! doc.set(false, path!["users", 0, "admin"]).unwrap();
//! assert_eq!(
//!     doc.to_text(),
//!     "{\n\t\"users\": [{\n\t\t\"name\": \"ada\",\n\t\t\"admin\": false\n\t}]\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: text → [`Node`] tree (strict and tolerant entry points)
//! - [`printer`]: [`Node`] tree → text, the parser's exact inverse
//! - [`path`]: [`Key`] steps, the [`path!`] macro, get/set/del
//! - [`node`]: the tree itself (construction, inspection, iteration)
//! - [`error`]: [`ParseError`] and [`PathError`]

pub mod error;
pub mod node;
pub mod parser;
pub mod path;
pub mod printer;

pub use error::{ParseError, PathError};
pub use node::{Entries, Kind, Node};
pub use parser::parse;
pub use path::Key;
pub use printer::print;
