//! Attachment lookup.
//!
//! Reads the blot a host attached to a node, optionally walking up the
//! ancestor chain. Nothing here writes the attachment slot.

use parchment_core::{BlotRef, TreeNode};

/// Find the blot attached to `node`.
///
/// With `bubble`, the nearest ancestor's blot is returned when `node` has
/// none. A missing node or an unattached chain yields `None`.
pub fn find<N: TreeNode>(node: Option<&N>, bubble: bool) -> Option<BlotRef<N>> {
    let mut current = node?.clone();
    loop {
        if let Some(blot) = current.attached_blot() {
            return Some(blot);
        }
        if !bubble {
            return None;
        }
        current = current.parent_node()?;
    }
}

/// [`find`] for a node that is known to exist.
pub fn find_from<N: TreeNode>(node: &N, bubble: bool) -> Option<BlotRef<N>> {
    find(Some(node), bubble)
}
