//! Hosted tree abstraction.
//!
//! Parchment never owns the document tree. It only needs to ask a node what
//! kind it is, read its tag and class list, walk to its parent, and read the
//! blot attached to it. Hosts implement [`TreeNode`] over whatever tree they
//! already have (a DOM binding, an rcdom handle, an arena index).

use crate::blot::BlotRef;

/// The structural kind of a tree node, as far as resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An element carrying a tag name and a class list.
    Element,
    /// A text-content node.
    Text,
    /// Anything else (comments, documents, processing instructions).
    Other,
}

/// A node in the externally hosted document tree.
///
/// Implementations are expected to be cheap handles (`Rc`-like): cloning a
/// node must yield another handle to the same underlying node.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Parchment tree node",
    label = "missing `TreeNode` implementation",
    note = "Implement `TreeNode` for the handle type of your document tree."
)]
pub trait TreeNode: Clone + 'static {
    /// The node's structural kind.
    fn kind(&self) -> NodeKind;

    /// The element's tag name, in whatever case the host stores it.
    ///
    /// Non-elements return `None`.
    fn tag_name(&self) -> Option<String>;

    /// The raw, whitespace-separated class attribute.
    fn class_name(&self) -> Option<String> {
        None
    }

    /// The parent node, if any.
    fn parent_node(&self) -> Option<Self>;

    /// Read the attachment slot.
    ///
    /// The slot is written by whoever constructs a blot for this node;
    /// Parchment only reads it.
    fn attached_blot(&self) -> Option<BlotRef<Self>>;
}
