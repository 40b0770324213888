//! Registrable definitions.
//!
//! A definition is either a blot type or an attribute type. Each variant
//! carries its identifying data as plain fields and delegates behaviour to a
//! trait object, so the registry resolves by pattern match instead of probing
//! for optional fields.

use crate::{Value, blot::BlotRef, node::TreeNode, scope::Scope};
use std::{fmt, sync::Arc};

/// Blot name reserved for non-instantiable base contracts.
pub const ABSTRACT: &str = "abstract";

/// Behaviour of a blot type.
pub trait BlotConstructor<N: TreeNode>: Send + Sync + 'static {
    /// Build a fresh tree node for this blot type.
    fn create(&self, value: Option<&Value>) -> N;

    /// Wrap `node` in a new blot.
    ///
    /// Writing the node's attachment slot is this method's responsibility.
    fn construct(&self, node: N, value: Option<&Value>) -> BlotRef<N>;
}

/// Behaviour of a formatting attribute.
pub trait Attributor<N: TreeNode>: Send + Sync + 'static {
    /// Apply `value` to `node`, or remove the attribute when `value` is `None`.
    ///
    /// Returns `false` when the value is not acceptable for this attribute.
    fn format(&self, node: &N, value: Option<&Value>) -> bool;

    /// Read the attribute's current value from `node`.
    fn value(&self, node: &N) -> Option<Value>;
}

/// A blot type registration.
pub struct BlotDefinition<N: TreeNode> {
    name: String,
    scope: Scope,
    tag_names: Vec<String>,
    constructor: Arc<dyn BlotConstructor<N>>,
}

impl<N: TreeNode> BlotDefinition<N> {
    /// Create a blot definition with no scope and no tags.
    ///
    /// A definition without a scope is stored but never passes a filter.
    pub fn new<C: BlotConstructor<N>>(name: impl Into<String>, constructor: C) -> Self {
        Self {
            name: name.into(),
            scope: Scope::empty(),
            tag_names: Vec::new(),
            constructor: Arc::new(constructor),
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Claim a tag name.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_names.push(tag.into());
        self
    }

    /// Claim several tag names.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_names.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Tag names this blot claims, as declared.
    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }

    /// The behaviour object.
    pub fn constructor(&self) -> &dyn BlotConstructor<N> {
        &*self.constructor
    }
}

impl<N: TreeNode> Clone for BlotDefinition<N> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            scope: self.scope,
            tag_names: self.tag_names.clone(),
            constructor: self.constructor.clone(),
        }
    }
}

/// An attribute type registration.
pub struct AttributeDefinition<N: TreeNode> {
    name: String,
    key_name: String,
    scope: Scope,
    attributor: Arc<dyn Attributor<N>>,
}

impl<N: TreeNode> AttributeDefinition<N> {
    /// Create an attribute definition.
    ///
    /// `key_name` is the attribute's identity on the node (a CSS property, a
    /// class prefix, an attribute key).
    pub fn new<A: Attributor<N>>(
        name: impl Into<String>,
        key_name: impl Into<String>,
        scope: Scope,
        attributor: A,
    ) -> Self {
        Self {
            name: name.into(),
            key_name: key_name.into(),
            scope,
            attributor: Arc::new(attributor),
        }
    }

    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key the attribute is addressed by on a node.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// The declared scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The behaviour object.
    pub fn attributor(&self) -> &dyn Attributor<N> {
        &*self.attributor
    }
}

impl<N: TreeNode> Clone for AttributeDefinition<N> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key_name: self.key_name.clone(),
            scope: self.scope,
            attributor: self.attributor.clone(),
        }
    }
}

/// Anything that can be registered.
pub enum Definition<N: TreeNode> {
    /// A blot type.
    Blot(BlotDefinition<N>),
    /// A formatting attribute.
    Attribute(AttributeDefinition<N>),
}

impl<N: TreeNode> Definition<N> {
    /// The name the definition is registered under.
    pub fn name(&self) -> &str {
        match self {
            Definition::Blot(def) => def.name(),
            Definition::Attribute(def) => def.name(),
        }
    }

    /// The declared scope.
    pub fn scope(&self) -> Scope {
        match self {
            Definition::Blot(def) => def.scope(),
            Definition::Attribute(def) => def.scope(),
        }
    }

    /// Returns the blot definition, if this is one.
    pub fn as_blot(&self) -> Option<&BlotDefinition<N>> {
        match self {
            Definition::Blot(def) => Some(def),
            Definition::Attribute(_) => None,
        }
    }

    /// Returns the attribute definition, if this is one.
    pub fn as_attribute(&self) -> Option<&AttributeDefinition<N>> {
        match self {
            Definition::Attribute(def) => Some(def),
            Definition::Blot(_) => None,
        }
    }

    /// Whether the definition's scope passes `filter`.
    pub fn matches(&self, filter: Scope) -> bool {
        self.scope().matches(filter)
    }
}

impl<N: TreeNode> Clone for Definition<N> {
    fn clone(&self) -> Self {
        match self {
            Definition::Blot(def) => Definition::Blot(def.clone()),
            Definition::Attribute(def) => Definition::Attribute(def.clone()),
        }
    }
}

impl<N: TreeNode> From<BlotDefinition<N>> for Definition<N> {
    fn from(def: BlotDefinition<N>) -> Self {
        Definition::Blot(def)
    }
}

impl<N: TreeNode> From<AttributeDefinition<N>> for Definition<N> {
    fn from(def: AttributeDefinition<N>) -> Self {
        Definition::Attribute(def)
    }
}

impl<N: TreeNode> fmt::Debug for Definition<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Blot(def) => f
                .debug_struct("Blot")
                .field("name", &def.name)
                .field("scope", &def.scope)
                .field("tag_names", &def.tag_names)
                .finish_non_exhaustive(),
            Definition::Attribute(def) => f
                .debug_struct("Attribute")
                .field("name", &def.name)
                .field("key_name", &def.key_name)
                .field("scope", &def.scope)
                .finish_non_exhaustive(),
        }
    }
}
