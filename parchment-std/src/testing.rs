//! Testing utilities for Parchment.
//!
//! This module provides a small in-memory document tree and blot/attributor
//! implementations over it, enough to exercise registration, resolution,
//! creation and attachment lookup without a real host tree.
//!
//! # Features
//!
//! - [`MemoryNode`]: an `Rc`-backed tree node with attributes and an attachment slot
//! - [`MemoryBlot`]: a blot that applies formats through its attribute definitions
//! - [`MemoryBlotConstructor`]: a constructor that attaches what it builds and counts nodes
//! - [`RecordingAttributor`]: an attributor that stores values as node attributes

use parchment_core::{
    AttributeDefinition, Attributor, Blot, BlotConstructor, BlotRef, Formattable, NodeKind,
    TreeNode, Value,
};
use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Memory Node
// ============================================================================

struct NodeData {
    kind: NodeKind,
    tag: Option<String>,
    text: RefCell<String>,
    attributes: RefCell<BTreeMap<String, String>>,
    parent: RefCell<Weak<NodeData>>,
    children: RefCell<Vec<MemoryNode>>,
    blot: RefCell<Option<BlotRef<MemoryNode>>>,
}

/// A handle to a node in an in-memory tree.
///
/// Clones share the same node. A node holding an attached blot and the blot
/// holding the node form a cycle; call [`MemoryNode::detach`] to break it.
#[derive(Clone)]
pub struct MemoryNode(Rc<NodeData>);

impl MemoryNode {
    fn new(kind: NodeKind, tag: Option<String>, text: String) -> Self {
        Self(Rc::new(NodeData {
            kind,
            tag,
            text: RefCell::new(text),
            attributes: RefCell::new(BTreeMap::new()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            blot: RefCell::new(None),
        }))
    }

    /// Create an element. The tag is stored as given.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Element, Some(tag.into()), String::new())
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, None, content.into())
    }

    /// Create a comment node.
    pub fn comment(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Other, None, content.into())
    }

    /// Set the class attribute, builder style.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.set_attribute("class", class);
        self
    }

    /// Set an attribute.
    pub fn set_attribute(&self, key: impl Into<String>, value: impl Into<String>) {
        self.0
            .attributes
            .borrow_mut()
            .insert(key.into(), value.into());
    }

    /// Remove an attribute.
    pub fn remove_attribute(&self, key: &str) {
        self.0.attributes.borrow_mut().remove(key);
    }

    /// Read an attribute.
    pub fn attribute(&self, key: &str) -> Option<String> {
        self.0.attributes.borrow().get(key).cloned()
    }

    /// The text content of a text or comment node.
    pub fn text_content(&self) -> String {
        self.0.text.borrow().clone()
    }

    /// Append `child`, re-parenting it.
    pub fn append_child(&self, child: &MemoryNode) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    /// The node's children.
    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.children.borrow().clone()
    }

    /// Write the attachment slot.
    pub fn attach(&self, blot: BlotRef<MemoryNode>) {
        *self.0.blot.borrow_mut() = Some(blot);
    }

    /// Clear the attachment slot.
    pub fn detach(&self) {
        self.0.blot.borrow_mut().take();
    }

    /// Whether two handles point at the same node.
    pub fn ptr_eq(&self, other: &MemoryNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TreeNode for MemoryNode {
    fn kind(&self) -> NodeKind {
        self.0.kind
    }

    fn tag_name(&self) -> Option<String> {
        self.0.tag.clone()
    }

    fn class_name(&self) -> Option<String> {
        self.attribute("class")
    }

    fn parent_node(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(MemoryNode)
    }

    fn attached_blot(&self) -> Option<BlotRef<Self>> {
        self.0.blot.borrow().clone()
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryNode")
            .field("kind", &self.0.kind)
            .field("tag", &self.0.tag)
            .field("attributes", &self.0.attributes.borrow())
            .field("attached", &self.0.blot.borrow().is_some())
            .finish()
    }
}

// ============================================================================
// Memory Blot
// ============================================================================

/// A blot over a [`MemoryNode`].
///
/// When formattable, a format name is matched against the attribute
/// definitions the blot was built with (by name or key) and the matching
/// attributor is applied to the node. Unknown names are ignored.
pub struct MemoryBlot {
    name: String,
    node: MemoryNode,
    value: Option<Value>,
    formattable: bool,
    attributes: Arc<[AttributeDefinition<MemoryNode>]>,
}

impl MemoryBlot {
    /// The value the blot was constructed with.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl Blot<MemoryNode> for MemoryBlot {
    fn dom_node(&self) -> &MemoryNode {
        &self.node
    }

    fn blot_name(&self) -> &str {
        &self.name
    }

    fn as_formattable(&self) -> Option<&dyn Formattable> {
        if self.formattable {
            Some(self as &dyn Formattable)
        } else {
            None
        }
    }
}

impl Formattable for MemoryBlot {
    fn format(&self, name: &str, value: Option<&Value>) {
        let found = self
            .attributes
            .iter()
            .find(|attr| attr.name() == name || attr.key_name() == name);
        if let Some(attr) = found {
            attr.attributor().format(&self.node, value);
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Memory Blot Constructor
// ============================================================================

#[derive(Debug, Clone)]
enum Shape {
    Element(String),
    Text,
}

/// Builds [`MemoryNode`]s and wraps them in [`MemoryBlot`]s.
///
/// `construct` writes the node's attachment slot. The constructor counts
/// how many nodes it has created; clones share the counter.
///
/// # Example
///
/// ```rust,ignore
/// let paragraph = MemoryBlotConstructor::element("p");
/// let created = paragraph.clone();
///
/// let def = BlotDefinition::new("paragraph", paragraph).with_tag("p");
/// // ...
/// assert_eq!(created.created(), 1);
/// ```
#[derive(Clone)]
pub struct MemoryBlotConstructor {
    name: Option<String>,
    shape: Shape,
    formattable: bool,
    attributes: Arc<[AttributeDefinition<MemoryNode>]>,
    created: Arc<AtomicUsize>,
}

impl MemoryBlotConstructor {
    /// A constructor that creates `<tag>` elements.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            name: None,
            shape: Shape::Element(tag.into()),
            formattable: true,
            attributes: Arc::new([]),
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A constructor that creates text nodes from string values.
    pub fn text() -> Self {
        Self {
            name: None,
            shape: Shape::Text,
            formattable: false,
            attributes: Arc::new([]),
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Name the blots it constructs (defaults to the lowercased tag, or `text`).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the attribute definitions its blots may apply.
    ///
    /// Definitions are cloned from the ones registered, so attributor state
    /// (such as [`RecordingAttributor`] counters) is shared with the registry.
    pub fn with_attributes(
        mut self,
        attributes: impl IntoIterator<Item = AttributeDefinition<MemoryNode>>,
    ) -> Self {
        self.attributes = attributes.into_iter().collect();
        self
    }

    /// Make the blots it constructs reject formats.
    pub fn unformattable(mut self) -> Self {
        self.formattable = false;
        self
    }

    /// Get the number of nodes created so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for MemoryBlotConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes: Vec<_> = self.attributes.iter().map(|attr| attr.name()).collect();
        f.debug_struct("MemoryBlotConstructor")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("formattable", &self.formattable)
            .field("attributes", &attributes)
            .field("created", &self.created())
            .finish()
    }
}

impl BlotConstructor<MemoryNode> for MemoryBlotConstructor {
    fn create(&self, value: Option<&Value>) -> MemoryNode {
        self.created.fetch_add(1, Ordering::SeqCst);
        match &self.shape {
            Shape::Element(tag) => MemoryNode::element(tag.clone()),
            Shape::Text => MemoryNode::text(value.map(render).unwrap_or_default()),
        }
    }

    fn construct(&self, node: MemoryNode, value: Option<&Value>) -> BlotRef<MemoryNode> {
        let name = match (&self.name, &self.shape) {
            (Some(name), _) => name.clone(),
            (None, Shape::Element(tag)) => tag.to_lowercase(),
            (None, Shape::Text) => "text".to_string(),
        };
        let blot: BlotRef<MemoryNode> = Rc::new(MemoryBlot {
            name,
            node: node.clone(),
            value: value.cloned(),
            formattable: self.formattable,
            attributes: self.attributes.clone(),
        });
        node.attach(blot.clone());
        blot
    }
}

// ============================================================================
// Recording Attributor
// ============================================================================

/// An attributor that stores values as a node attribute named by its key.
///
/// Counts how many times it has been applied; clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RecordingAttributor {
    key: Option<String>,
    applied: Arc<AtomicUsize>,
}

impl RecordingAttributor {
    /// Create an attributor that writes to the `data-format` attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an attributor that writes to attribute `key`.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            applied: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times `format` was called.
    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::SeqCst)
    }

    fn key(&self) -> &str {
        self.key.as_deref().unwrap_or("data-format")
    }
}

impl Attributor<MemoryNode> for RecordingAttributor {
    fn format(&self, node: &MemoryNode, value: Option<&Value>) -> bool {
        self.applied.fetch_add(1, Ordering::SeqCst);
        match value {
            Some(value) => node.set_attribute(self.key(), render(value)),
            None => node.remove_attribute(self.key()),
        }
        true
    }

    fn value(&self, node: &MemoryNode) -> Option<Value> {
        node.attribute(self.key()).map(Value::String)
    }
}
