//! Resolution inputs.

use crate::{node::TreeNode, scope::Scope};
use std::fmt;

/// Class-list prefix marking "the rest of this token is a registered name".
pub const CLASS_PREFIX: &str = "blot-";

/// What the resolver is asked about.
///
/// Text and element nodes both arrive as [`Query::Node`]; the resolver
/// dispatches on [`TreeNode::kind`](crate::TreeNode::kind).
pub enum Query<'a, N> {
    /// A blot or attribute name.
    Name(&'a str),
    /// A scope value; resolves to the registered `block` or `inline` type.
    Scope(Scope),
    /// A live tree node.
    Node(&'a N),
}

impl<N> Clone for Query<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Query<'_, N> {}

impl<'a, N> Query<'a, N> {
    /// The text input, if this is a name query.
    pub fn as_name(&self) -> Option<&'a str> {
        match *self {
            Query::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The node input, if this is a node query.
    pub fn as_node(&self) -> Option<&'a N> {
        match *self {
            Query::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl<'a, N> From<&'a str> for Query<'a, N> {
    fn from(name: &'a str) -> Self {
        Query::Name(name)
    }
}

impl<N> From<Scope> for Query<'_, N> {
    fn from(scope: Scope) -> Self {
        Query::Scope(scope)
    }
}

impl<'a, N: TreeNode> From<&'a N> for Query<'a, N> {
    fn from(node: &'a N) -> Self {
        Query::Node(node)
    }
}

impl<N: TreeNode> fmt::Display for Query<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Name(name) => f.write_str(name),
            Query::Scope(scope) => write!(f, "scope {scope}"),
            Query::Node(node) => match node.tag_name() {
                Some(tag) => write!(f, "<{}>", tag.to_lowercase()),
                None => write!(f, "{:?} node", node.kind()),
            },
        }
    }
}
