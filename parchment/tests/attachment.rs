//! Attachment lookup over created blots.

use parchment::{Blot, find, find_from, testing::MemoryNode};
use std::rc::Rc;

mod common;
use common::editor_registry;

#[test]
fn test_find_bubbles_to_created_ancestor() {
    let (registry, _) = editor_registry();
    let paragraph = registry.create("block", None).unwrap();
    let text = MemoryNode::text("inside");
    paragraph.dom_node().append_child(&text);

    assert!(find(Some(&text), false).is_none());
    let found = find(Some(&text), true).unwrap();
    assert!(Rc::ptr_eq(&found, &paragraph));
}

#[test]
fn test_find_prefers_own_blot() {
    let (registry, _) = editor_registry();
    let paragraph = registry.create("block", None).unwrap();
    let text = MemoryNode::text("inside");
    paragraph.dom_node().append_child(&text);
    let text_blot = registry.create(&text, None).unwrap();

    assert!(Rc::ptr_eq(&find_from(&text, true).unwrap(), &text_blot));
    assert_eq!(find_from(&text, false).unwrap().blot_name(), "text");
}

#[test]
fn test_find_after_detach() {
    let (registry, _) = editor_registry();
    let blot = registry.create("bold", None).unwrap();
    let node = blot.dom_node().clone();
    node.detach();
    assert!(find_from(&node, true).is_none());
}

#[test]
fn test_find_none() {
    assert!(find::<MemoryNode>(None, false).is_none());
    assert!(find::<MemoryNode>(None, true).is_none());
}
