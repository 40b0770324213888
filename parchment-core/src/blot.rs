//! Blot contract.
//!
//! A blot is the runtime wrapper bound 1:1 to a tree node. Concrete blot
//! hierarchies live outside this crate; Parchment only constructs them
//! through a [`BlotConstructor`](crate::BlotConstructor) and, for
//! attribute-driven creation, formats them through [`Formattable`].

use crate::{Value, node::TreeNode};
use std::{fmt, rc::Rc};

/// Shared handle to a blot.
///
/// Both the caller and the node's attachment slot hold one.
pub type BlotRef<N> = Rc<dyn Blot<N>>;

/// The runtime wrapper bound to one tree node.
pub trait Blot<N: TreeNode>: 'static {
    /// The node this blot wraps.
    fn dom_node(&self) -> &N;

    /// The registered name of this blot's definition.
    fn blot_name(&self) -> &str;

    /// The formatting capability, when this blot supports it.
    fn as_formattable(&self) -> Option<&dyn Formattable> {
        None
    }
}

impl<N: TreeNode> fmt::Debug for dyn Blot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blot")
            .field("name", &self.blot_name())
            .field("formattable", &self.as_formattable().is_some())
            .finish_non_exhaustive()
    }
}

/// Blots that accept named formats.
///
/// Implementations typically look the name up as an attributor and apply
/// it to their node. A `None` value removes the format.
pub trait Formattable {
    /// Apply (or with `None`, clear) the format `name`.
    fn format(&self, name: &str, value: Option<&Value>);
}
