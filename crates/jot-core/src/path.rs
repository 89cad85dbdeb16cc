//! Path-addressed navigation and mutation.
//!
//! A path is a sequence of [`Key`]s walked from a starting node: `Index`
//! steps into a list position, `Name` into the first hash member with
//! that key. The three operations share the walk but differ on failure:
//!
//! - [`Node::get`] and [`Node::get_mut`] answer `None` on any miss
//! - [`Node::set`] refuses to invent intermediate containers: a prefix
//!   that does not resolve is [`PathError::NotFound`], and a final key
//!   aimed at the wrong kind of node is [`PathError::KindMismatch`]
//! - [`Node::del`] treats a miss as a no-op and answers `None`
//!
//! The [`path!`] macro builds a mixed-key path from literals:
//!
//! ```rust
//! use jot_core::{path, Node};
//!
//! let doc = Node::from_text(r#"{"users": [{"name": "ada"}]}"#);
//! let name = doc.get(path!["users", 0, "name"]);
//! assert_eq!(name.and_then(Node::as_str), Some("ada"));
//! ```

use crate::error::PathError;
use crate::node::Node;
use std::fmt;

/// One step of a path: a list position or a hash member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// 0-based position in a list.
    Index(usize),
    /// Member name in a hash. Duplicate keys resolve to the first match.
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "[{i}]"),
            Key::Name(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

/// Build a fixed-size path from mixed index and name literals.
///
/// Names convert from `&str`, indices from `usize`:
///
/// ```rust
/// use jot_core::{path, Key};
///
/// assert_eq!(path!["users", 0], [Key::Name("users".into()), Key::Index(0)]);
/// assert_eq!(path![].len(), 0);
/// ```
#[macro_export]
macro_rules! path {
    () => {{
        let keys: [$crate::Key; 0] = [];
        keys
    }};
    ($($key:expr),+ $(,)?) => {
        [$($crate::Key::from($key)),+]
    };
}

/// Resolve one step of a path against a node.
///
/// `Index` addresses a list position, `Name` scans hash members in
/// insertion order for the first key match. Everything else, including a
/// step applied to a scalar, is a miss.
fn step<'a>(node: &'a Node, key: &Key) -> Option<&'a Node> {
    match (node, key) {
        (Node::List(items), Key::Index(i)) => items.get(*i),
        (Node::Hash(members), Key::Name(name)) => {
            members.iter().find(|(k, _)| k == name).map(|(_, v)| v)
        }
        _ => None,
    }
}

/// Mutable counterpart of [`step`].
fn step_mut<'a>(node: &'a mut Node, key: &Key) -> Option<&'a mut Node> {
    match (node, key) {
        (Node::List(items), Key::Index(i)) => items.get_mut(*i),
        (Node::Hash(members), Key::Name(name)) => members
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v),
        _ => None,
    }
}

impl Node {
    /// Walk `path` from this node and answer the node it lands on.
    ///
    /// An empty path answers the node itself. Any step that misses
    /// (index out of range, name not present, or a step applied to the
    /// wrong container kind) answers `None`, never a panic.
    pub fn get<P>(&self, path: P) -> Option<&Node>
    where
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let mut node = self;
        for key in path {
            node = step(node, &key.into())?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`get`](Node::get).
    pub fn get_mut<P>(&mut self, path: P) -> Option<&mut Node>
    where
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let mut node = self;
        for key in path {
            node = step_mut(node, &key.into())?;
        }
        Some(node)
    }

    /// Write `value` at `path`.
    ///
    /// Every step except the last must already resolve; `set` never
    /// invents intermediate containers. The final step then places the
    /// value:
    ///
    /// - `Name` on a hash overwrites the first member with that key in
    ///   place (position and key are kept), or appends a new member
    /// - `Index` on a list replaces the child at that position, or
    ///   appends when the index is at or past the end
    /// - an empty path assigns the value to this node itself
    ///
    /// A prefix miss is [`PathError::NotFound`]; a final step aimed at a
    /// node that is not the matching container kind is
    /// [`PathError::KindMismatch`]. The tree is untouched on either
    /// error.
    pub fn set<V, P>(&mut self, value: V, path: P) -> Result<(), PathError>
    where
        V: Into<Node>,
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let mut keys: Vec<Key> = path.into_iter().map(Into::into).collect();
        let Some(last) = keys.pop() else {
            *self = value.into();
            return Ok(());
        };

        let mut node = self;
        for key in keys {
            node = step_mut(node, &key).ok_or_else(|| PathError::NotFound { key })?;
        }

        match (node, last) {
            (Node::Hash(members), Key::Name(name)) => {
                match members.iter_mut().find(|(k, _)| *k == name) {
                    Some((_, slot)) => *slot = value.into(),
                    None => members.push((name, value.into())),
                }
                Ok(())
            }
            (Node::List(items), Key::Index(i)) => {
                if i < items.len() {
                    items[i] = value.into();
                } else {
                    items.push(value.into());
                }
                Ok(())
            }
            (other, key) => Err(PathError::KindMismatch {
                key,
                kind: other.kind(),
            }),
        }
    }

    /// Remove and answer the node at `path`.
    ///
    /// A path that does not resolve (including an empty one) is a
    /// no-op answering `None`. Otherwise the final step removes the
    /// child from its parent: a list closes the gap, a hash drops the
    /// first member with that key.
    pub fn del<P>(&mut self, path: P) -> Option<Node>
    where
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let mut keys: Vec<Key> = path.into_iter().map(Into::into).collect();
        let last = keys.pop()?;

        let mut node = self;
        for key in &keys {
            node = step_mut(node, key)?;
        }

        match (node, last) {
            (Node::List(items), Key::Index(i)) => {
                if i < items.len() {
                    Some(items.remove(i))
                } else {
                    None
                }
            }
            (Node::Hash(members), Key::Name(name)) => {
                let at = members.iter().position(|(k, _)| *k == name)?;
                Some(members.remove(at).1)
            }
            _ => None,
        }
    }
}
