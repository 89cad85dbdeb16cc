//! Recursive-descent parser for the document dialect.
//!
//! The dialect is JSON-shaped but deliberately smaller and looser:
//!
//! - Whitespace is any byte `<= 0x20`, skippable between tokens
//! - Strings are verbatim: no escape sequences, so `"` cannot be embedded
//! - Numbers are `-?digits(.digits)?`, with no exponents and no leading `+`
//! - Literals `true`/`false`/`null` must match in full; a near-miss like
//!   `ture` is an error, never a silent misparse
//! - Commas between children are optional, and a trailing comma is fine
//! - Hash keys must be quoted strings, followed by `:`
//!
//! Two entry points with different failure contracts:
//!
//! - [`parse`] is strict: any syntax problem comes back as a [`ParseError`]
//!   carrying the byte offset and a short window of the remaining input.
//! - [`Node::from_text`] is tolerant: a malformed buffer yields a `Null`
//!   document, so callers at an outer boundary can branch on the node kind
//!   instead of handling errors.

use crate::error::{ParseError, Result};
use crate::node::Node;
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};

/// Parse a complete document from `text`.
///
/// The input must lead with a single value after any leading whitespace.
/// Content after that value is left unread: `parse("1 2")` answers `1`.
pub fn parse(text: &str) -> Result<Node> {
    let mut parser = Parser::new(text);
    parser.skip_space();
    parser.parse_value()
}

impl Node {
    /// Parse `text`, degrading any syntax error to a `Null` document.
    ///
    /// This is the tolerant outer boundary: it never fails, so a caller
    /// that does not care why a buffer was bad can just check the result
    /// kind. Use [`parse`] to learn what went wrong.
    pub fn from_text(text: &str) -> Node {
        parse(text).unwrap_or(Node::Null)
    }

    /// Read a file and parse its contents per [`Node::from_text`].
    ///
    /// I/O failures propagate; only malformed *content* degrades to a
    /// `Null` document.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Node> {
        let text = fs::read_to_string(path)?;
        Ok(Node::from_text(&text))
    }
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Node> {
        parse(s)
    }
}

/// Byte cursor over the source text.
///
/// Every structural character in the dialect is ASCII, so the cursor moves
/// byte by byte and the positions it slices at are char boundaries: a
/// non-ASCII byte can only sit inside a string body or at the start of an
/// unparseable value.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser { src, pos: 0 }
    }

    /// The byte at the cursor, if any.
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Advance one byte.
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Skip whitespace: every byte `<= 0x20`, which covers space, tab,
    /// newlines, and the rest of the control range.
    fn skip_space(&mut self) {
        while matches!(self.peek(), Some(b) if b <= 0x20) {
            self.bump();
        }
    }

    /// Up to 20 characters of remaining input starting at `from`, for
    /// error diagnostics. If `from` is not a char boundary, the window
    /// starts at the next one.
    fn context_from(&self, from: usize) -> String {
        let mut start = from.min(self.src.len());
        while !self.src.is_char_boundary(start) {
            start += 1;
        }
        self.src[start..].chars().take(20).collect()
    }

    /// Parse one value at the cursor. Callers must already have skipped
    /// leading whitespace.
    fn parse_value(&mut self) -> Result<Node> {
        match self.peek() {
            Some(b'[') => self.parse_list(),
            Some(b'{') => self.parse_hash(),
            Some(b'"') => Ok(Node::String(self.parse_string()?)),
            Some(b'0'..=b'9' | b'-') => self.parse_number(),
            Some(b't') => self.parse_literal("true", Node::Bool(true)),
            Some(b'f') => self.parse_literal("false", Node::Bool(false)),
            Some(b'n') => self.parse_literal("null", Node::Null),
            Some(_) => Err(ParseError::Unexpected {
                offset: self.pos,
                context: self.context_from(self.pos),
            }),
            None => Err(ParseError::UnexpectedEnd { offset: self.pos }),
        }
    }

    /// Match `literal` in full at the cursor.
    fn parse_literal(&mut self, literal: &str, node: Node) -> Result<Node> {
        let end = self.pos + literal.len();
        if self.src.as_bytes().get(self.pos..end) == Some(literal.as_bytes()) {
            self.pos = end;
            Ok(node)
        } else {
            Err(ParseError::BadLiteral {
                offset: self.pos,
                context: self.context_from(self.pos),
            })
        }
    }

    /// Parse a quoted string with the cursor on the opening `"`.
    ///
    /// Bytes are taken verbatim up to the next `"`. There are no escape
    /// sequences in the dialect, which also means a string cannot contain
    /// a double quote.
    fn parse_string(&mut self) -> Result<String> {
        let open = self.pos;
        self.bump();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'"' {
                let text = self.src[start..self.pos].to_string();
                self.bump();
                return Ok(text);
            }
            self.bump();
        }
        Err(ParseError::UnterminatedString {
            offset: open,
            context: self.context_from(start),
        })
    }

    /// Parse a number: `-?digits(.digits)?`.
    ///
    /// The digit run can be arbitrarily long; the matched text is sliced
    /// out of the source and handed to `f64::from_str` whole, never
    /// accumulated through a fixed-size buffer. A `.` with no digits after
    /// it is a malformed number, not a shorter one.
    fn parse_number(&mut self) -> Result<Node> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        if !self.digit_run() {
            return Err(self.bad_number(start));
        }
        if self.peek() == Some(b'.') {
            self.bump();
            if !self.digit_run() {
                return Err(self.bad_number(start));
            }
        }
        match self.src[start..self.pos].parse::<f64>() {
            Ok(n) => Ok(Node::Number(n)),
            Err(_) => Err(self.bad_number(start)),
        }
    }

    /// Consume a run of ASCII digits, answering whether at least one was
    /// seen.
    fn digit_run(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
        self.pos > start
    }

    fn bad_number(&self, start: usize) -> ParseError {
        ParseError::BadNumber {
            offset: start,
            context: self.context_from(start),
        }
    }

    /// Parse a list with the cursor on the opening `[`.
    ///
    /// Children are separated by optional commas: `[1 2]` reads the same
    /// as `[1, 2]`, and a trailing comma before `]` is tolerated.
    fn parse_list(&mut self) -> Result<Node> {
        let open = self.pos;
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_space();
            match self.peek() {
                Some(b']') => {
                    self.bump();
                    return Ok(Node::List(items));
                }
                Some(_) => {
                    items.push(self.parse_value()?);
                    self.skip_space();
                    if self.peek() == Some(b',') {
                        self.bump();
                    }
                }
                None => {
                    return Err(ParseError::UnterminatedList {
                        offset: open,
                        context: self.context_from(open),
                    })
                }
            }
        }
    }

    /// Parse a hash with the cursor on the opening `{`.
    ///
    /// Members are `"key": value` under the same optional-comma rule as
    /// lists. Keys must be quoted; an unquoted key is an error, not a
    /// best-effort read. Duplicate keys are preserved as written.
    fn parse_hash(&mut self) -> Result<Node> {
        let open = self.pos;
        self.bump();
        let mut members = Vec::new();
        loop {
            self.skip_space();
            match self.peek() {
                Some(b'}') => {
                    self.bump();
                    return Ok(Node::Hash(members));
                }
                Some(b'"') => {
                    let key = self.parse_string()?;
                    self.skip_space();
                    if self.peek() != Some(b':') {
                        return Err(ParseError::MissingColon {
                            offset: self.pos,
                            context: self.context_from(self.pos),
                        });
                    }
                    self.bump();
                    self.skip_space();
                    let value = self.parse_value()?;
                    members.push((key, value));
                    self.skip_space();
                    if self.peek() == Some(b',') {
                        self.bump();
                    }
                }
                Some(_) => {
                    return Err(ParseError::BadKey {
                        offset: self.pos,
                        context: self.context_from(self.pos),
                    })
                }
                None => {
                    return Err(ParseError::UnterminatedHash {
                        offset: open,
                        context: self.context_from(open),
                    })
                }
            }
        }
    }
}
