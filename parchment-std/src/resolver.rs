//! Resolution of names, scopes and tree nodes to registered definitions.

use crate::registry::Registry;
use parchment_core::{Definition, NodeKind, Query, Scope, TreeNode};
use std::sync::Arc;

/// Name a text node resolves to.
pub const TEXT: &str = "text";
/// Name a block-level scope query resolves to.
pub const BLOCK: &str = "block";
/// Name an inline-level scope query resolves to.
pub const INLINE: &str = "inline";

impl<N: TreeNode> Registry<N> {
    /// Resolve `input` with no scope filter.
    ///
    /// Returns `None` when nothing matches; absence is not an error.
    pub fn query<'a>(&self, input: impl Into<Query<'a, N>>) -> Option<&Definition<N>> {
        self.query_in(input, Scope::ANY)
    }

    /// Resolve `input`, keeping the match only if its scope passes `filter`.
    ///
    /// - a name looks in the type table, then the attribute-key table
    /// - a text node resolves to [`TEXT`]
    /// - a scope resolves to [`BLOCK`] or [`INLINE`] by its level bits
    /// - an element is matched by its first prefixed class, then by tag
    pub fn query_in<'a>(
        &self,
        input: impl Into<Query<'a, N>>,
        filter: Scope,
    ) -> Option<&Definition<N>> {
        let input = input.into();
        let Some(found) = self.lookup(input) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(%input, "nothing registered");
            return None;
        };
        if found.matches(filter) {
            Some(found)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                name = found.name(),
                scope = %found.scope(),
                %filter,
                "match rejected by scope filter"
            );
            None
        }
    }

    fn lookup(&self, input: Query<'_, N>) -> Option<&Definition<N>> {
        let found = match input {
            Query::Name(name) => self.types.get(name).or_else(|| self.attributes.get(name)),
            Query::Scope(scope) if scope.is_block_level() => self.types.get(BLOCK),
            Query::Scope(scope) if scope.is_inline_level() => self.types.get(INLINE),
            Query::Scope(_) => None,
            Query::Node(node) => match node.kind() {
                NodeKind::Text => self.types.get(TEXT),
                NodeKind::Element => self.lookup_element(node),
                NodeKind::Other => None,
            },
        };
        found.map(Arc::as_ref)
    }

    fn lookup_element(&self, node: &N) -> Option<&Arc<Definition<N>>> {
        self.lookup_class(node).or_else(|| {
            let tag = node.tag_name()?;
            self.tags.get(&tag.to_uppercase())
        })
    }

    /// Only the first prefixed class token is consulted.
    fn lookup_class(&self, node: &N) -> Option<&Arc<Definition<N>>> {
        let classes = node.class_name()?;
        let prefix = self.options.class_prefix();
        let name = classes
            .split_whitespace()
            .find_map(|token| token.strip_prefix(prefix))?;
        self.types.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{BLOCK, INLINE, TEXT};
    use crate::{
        options::RegistryOptions,
        registry::Registry,
        testing::{MemoryBlotConstructor, MemoryNode, RecordingAttributor},
    };
    use parchment_core::{AttributeDefinition, BlotDefinition, Query, Scope};

    fn registry() -> Registry<MemoryNode> {
        Registry::<MemoryNode>::builder()
            .register(
                BlotDefinition::new(BLOCK, MemoryBlotConstructor::element("p"))
                    .with_scope(Scope::BLOCK_BLOT)
                    .with_tag("P"),
            )
            .register(
                BlotDefinition::new(INLINE, MemoryBlotConstructor::element("span"))
                    .with_scope(Scope::INLINE_BLOT)
                    .with_tag("span"),
            )
            .register(
                BlotDefinition::new(TEXT, MemoryBlotConstructor::text())
                    .with_scope(Scope::INLINE_BLOT),
            )
            .register(
                BlotDefinition::new("bold", MemoryBlotConstructor::element("strong"))
                    .with_scope(Scope::INLINE_BLOT)
                    .with_tags(["strong", "b"]),
            )
            .register(AttributeDefinition::new(
                "color",
                "data-color",
                Scope::INLINE_ATTRIBUTE,
                RecordingAttributor::keyed("data-color"),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_query_by_name() {
        let registry = registry();
        assert_eq!(registry.query("bold").unwrap().name(), "bold");
        assert_eq!(registry.query("color").unwrap().name(), "color");
        assert!(registry.query("italic").is_none());
    }

    #[test]
    fn test_query_by_key_name_falls_back() {
        let registry = registry();
        assert_eq!(registry.query("data-color").unwrap().name(), "color");
    }

    #[test]
    fn test_query_by_scope() {
        let registry = registry();
        assert_eq!(registry.query(Scope::BLOCK_BLOT).unwrap().name(), BLOCK);
        assert_eq!(registry.query(Scope::INLINE_ATTRIBUTE).unwrap().name(), INLINE);
        // both level bits: block is checked first
        assert_eq!(registry.query(Scope::ANY).unwrap().name(), BLOCK);
        assert!(registry.query(Scope::TYPE).is_none());
    }

    #[test]
    fn test_query_text_and_other_nodes() {
        let registry = registry();
        let text = MemoryNode::text("hi");
        assert_eq!(registry.query(&text).unwrap().name(), TEXT);
        assert!(registry.query(&MemoryNode::comment("x")).is_none());
    }

    #[test]
    fn test_query_element_by_tag_case_insensitive() {
        let registry = registry();
        assert_eq!(registry.query(&MemoryNode::element("p")).unwrap().name(), BLOCK);
        assert_eq!(registry.query(&MemoryNode::element("B")).unwrap().name(), "bold");
        assert!(registry.query(&MemoryNode::element("table")).is_none());
    }

    #[test]
    fn test_query_element_class_before_tag() {
        let registry = registry();
        let node = MemoryNode::element("p").with_class("  lead blot-bold blot-inline ");
        assert_eq!(registry.query(&node).unwrap().name(), "bold");
    }

    #[test]
    fn test_first_prefixed_class_decides() {
        let registry = registry();
        // the unknown prefixed class stops the scan; the tag still applies
        let node = MemoryNode::element("p").with_class("blot-unknown blot-bold");
        assert_eq!(registry.query(&node).unwrap().name(), BLOCK);
    }

    #[test]
    fn test_custom_class_prefix() {
        let mut registry: Registry<MemoryNode> =
            Registry::with_options(RegistryOptions::new().with_class_prefix("ql-"));
        registry
            .register(
                BlotDefinition::new("code", MemoryBlotConstructor::element("code"))
                    .with_scope(Scope::INLINE_BLOT),
            )
            .unwrap();
        let node = MemoryNode::element("span").with_class("ql-code");
        assert_eq!(registry.query(&node).unwrap().name(), "code");
        let node = MemoryNode::element("span").with_class("blot-code");
        assert!(registry.query(&node).is_none());
    }

    #[test]
    fn test_filter_applies_to_every_input_kind() {
        let registry = registry();
        assert!(registry.query_in("bold", Scope::BLOCK).is_none());
        assert!(registry.query_in("bold", Scope::INLINE_BLOT).is_some());
        assert!(registry.query_in("color", Scope::BLOT).is_none());
        assert!(registry.query_in("color", Scope::ATTRIBUTE).is_some());
        assert!(registry.query_in(Scope::BLOCK, Scope::INLINE).is_none());
        let text = MemoryNode::text("x");
        assert!(registry.query_in(Query::Node(&text), Scope::BLOCK_BLOT).is_none());
    }

    #[test]
    fn test_unscoped_definition_never_matches() {
        let mut registry: Registry<MemoryNode> = Registry::new();
        registry
            .register(BlotDefinition::new("loose", MemoryBlotConstructor::element("div")))
            .unwrap();
        assert!(registry.contains("loose"));
        assert!(registry.query("loose").is_none());
    }
}
