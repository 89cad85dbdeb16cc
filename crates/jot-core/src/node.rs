//! The document tree: [`Node`], its construction and inspection surface.
//!
//! A document is a tree of `Node`s. Containers own their children outright:
//! `List` holds ordered keyless children, `Hash` holds ordered
//! `(key, child)` members. Insertion order is the only order: nothing is
//! ever sorted or hashed, and duplicate hash keys are kept as written, with
//! lookups answering the first match.

use std::fmt;
use std::slice;

/// A single value in a document tree.
///
/// Hashes use `Vec<(String, Node)>` so that member order is insertion
/// order and a member's key lives next to the member itself. A node
/// reached through a `List`, or the document root, has no key at all, by
/// construction.
///
/// Derived equality is the structural equality the engine promises: same
/// kind, same child order, same keys, numerically equal numbers,
/// byte-equal strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// The absent value. Also what [`Node::take`] leaves behind.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    /// Owned text, held verbatim; the dialect has no escape sequences.
    String(String),
    List(Vec<Node>),
    /// Members in insertion order; the `String` is the member's key.
    Hash(Vec<(String, Node)>),
}

/// The six value kinds, as a bare discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    List,
    Hash,
}

impl Kind {
    /// Lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Hash => "hash",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    /// An empty list.
    pub fn list() -> Self {
        Node::List(Vec::new())
    }

    /// An empty hash.
    pub fn hash() -> Self {
        Node::Hash(Vec::new())
    }

    /// The discriminant of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Bool(_) => Kind::Bool,
            Node::Number(_) => Kind::Number,
            Node::String(_) => Kind::String,
            Node::List(_) => Kind::List,
            Node::Hash(_) => Kind::Hash,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn is_hash(&self) -> bool {
        matches!(self, Node::Hash(_))
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload. `Bool` answers too, as 0 or 1, since booleans
    /// share the numeric slot.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            Node::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// [`as_f64`](Node::as_f64) truncated toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    /// The string payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of children: list length or hash member count, 0 for
    /// scalars.
    pub fn len(&self) -> usize {
        match self {
            Node::List(items) => items.len(),
            Node::Hash(members) => members.len(),
            _ => 0,
        }
    }

    /// Whether this node has no children. True for every scalar.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First member of a hash whose key equals `name`, if any.
    ///
    /// Duplicate keys are legal; the linear scan answers the earliest one.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Hash(members) => members.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Mutable counterpart of [`child`](Node::child).
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self {
            Node::Hash(members) => members.iter_mut().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Iterate the children in insertion order.
    ///
    /// Hash members come with their key, list children with `None`.
    /// Scalars yield nothing.
    pub fn entries(&self) -> Entries<'_> {
        let inner = match self {
            Node::List(items) => EntriesInner::List(items.iter()),
            Node::Hash(members) => EntriesInner::Hash(members.iter()),
            _ => EntriesInner::Empty,
        };
        Entries { inner }
    }

    /// Move the value out, leaving `Null` behind.
    ///
    /// This is the transfer half of the ownership story: [`Clone`] copies
    /// a whole subtree, `take` moves it and parks a `Null` placeholder in
    /// its slot. The parent keeps its member (and key); only the payload
    /// changes hands.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }
}

/// Iterator over a container's children. See [`Node::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

#[derive(Debug, Clone)]
enum EntriesInner<'a> {
    Empty,
    List(slice::Iter<'a, Node>),
    Hash(slice::Iter<'a, (String, Node)>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Option<&'a str>, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Empty => None,
            EntriesInner::List(items) => items.next().map(|node| (None, node)),
            EntriesInner::Hash(members) => members.next().map(|(k, v)| (Some(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Empty => (0, Some(0)),
            EntriesInner::List(items) => items.size_hint(),
            EntriesInner::Hash(members) => members.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a Node {
    type Item = (Option<&'a str>, &'a Node);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Node {
            fn from(n: $ty) -> Self {
                Node::Number(n as f64)
            }
        }
    )*};
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32);

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

impl From<Vec<(String, Node)>> for Node {
    fn from(members: Vec<(String, Node)>) -> Self {
        Node::Hash(members)
    }
}
