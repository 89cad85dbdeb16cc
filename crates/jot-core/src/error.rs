//! Error types for parsing and path operations.

use crate::node::Kind;
use crate::path::Key;
use thiserror::Error;

/// Errors produced by the strict parse entry point ([`crate::parse`]).
///
/// Every variant carries the byte offset where the problem was detected.
/// Where there is input worth showing, a context window of up to 20
/// characters of remaining text is included. For unterminated constructs
/// the offset is the opening delimiter, so the window shows the construct
/// that never closed rather than the empty tail of the buffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A character that cannot start any value.
    #[error("unexpected character at byte {offset}: {context:?}")]
    Unexpected { offset: usize, context: String },

    /// Input ended while a value was still expected.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEnd { offset: usize },

    /// A `true`/`false`/`null` literal that does not match in full.
    #[error("malformed literal at byte {offset}: {context:?}")]
    BadLiteral { offset: usize, context: String },

    /// A number with no digits where digits are required.
    #[error("malformed number at byte {offset}: {context:?}")]
    BadNumber { offset: usize, context: String },

    /// A string whose closing quote never arrived.
    #[error("unterminated string starting at byte {offset}: {context:?}")]
    UnterminatedString { offset: usize, context: String },

    /// A list whose closing `]` never arrived.
    #[error("unterminated list starting at byte {offset}: {context:?}")]
    UnterminatedList { offset: usize, context: String },

    /// A hash whose closing `}` never arrived.
    #[error("unterminated hash starting at byte {offset}: {context:?}")]
    UnterminatedHash { offset: usize, context: String },

    /// A hash member that does not start with a quoted key.
    #[error("expected a quoted key at byte {offset}: {context:?}")]
    BadKey { offset: usize, context: String },

    /// A hash member missing the `:` between key and value.
    #[error("expected ':' after key at byte {offset}: {context:?}")]
    MissingColon { offset: usize, context: String },
}

/// Errors produced by [`Node::set`](crate::Node::set).
///
/// `get` and `del` treat an unresolvable path as an ordinary miss and
/// answer `None`; only `set` turns it into an error, because a failed
/// write means the caller's intent was not carried out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A prefix step did not resolve: missing name, index out of range,
    /// or a step applied to a node of the wrong kind. `set` never invents
    /// intermediate containers.
    #[error("path step {key} did not resolve")]
    NotFound { key: Key },

    /// The final step was applied to a node that cannot hold it: an
    /// `Index` needs a list, a `Name` needs a hash.
    #[error("cannot apply {key} to a {kind} node")]
    KindMismatch { key: Key, kind: Kind },
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, ParseError>;
