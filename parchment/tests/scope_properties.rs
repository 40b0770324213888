//! Scope matching truth table.

use parchment::{
    BlotDefinition, Registry, Scope,
    testing::{MemoryBlotConstructor, MemoryNode},
};
use proptest::prelude::*;

fn probe(scope: Scope) -> Registry<MemoryNode> {
    let mut registry: Registry<MemoryNode> = Registry::new();
    registry
        .register(
            BlotDefinition::new("probe", MemoryBlotConstructor::element("div")).with_scope(scope),
        )
        .unwrap();
    registry
}

fn expected(definition: u8, filter: u8) -> bool {
    let shared = definition & filter;
    shared & 0b1100 != 0 && shared & 0b0011 != 0
}

#[test]
fn test_full_truth_table() {
    for definition in 0u8..16 {
        let registry = probe(Scope::from_bits_retain(definition));
        for filter in 0u8..16 {
            assert_eq!(
                registry
                    .query_in("probe", Scope::from_bits_retain(filter))
                    .is_some(),
                expected(definition, filter),
                "definition {definition:#06b}, filter {filter:#06b}"
            );
        }
    }
}

#[test]
fn test_named_pairs() {
    let cases = [
        (Scope::BLOCK, Scope::BLOCK_BLOT, true),
        (Scope::BLOCK, Scope::INLINE, false),
        (Scope::BLOCK_BLOT, Scope::BLOT, true),
        (Scope::BLOCK_BLOT, Scope::ATTRIBUTE, false),
        (Scope::INLINE_ATTRIBUTE, Scope::ATTRIBUTE, true),
        (Scope::INLINE_ATTRIBUTE, Scope::INLINE_BLOT, false),
        (Scope::ANY, Scope::BLOCK_ATTRIBUTE, true),
    ];
    for (definition, filter, matches) in cases {
        assert_eq!(definition.matches(filter), matches, "{definition} vs {filter}");
    }
}

proptest! {
    #[test]
    fn query_agrees_with_scope_algebra(definition in 0u8..16, filter in 0u8..16) {
        let definition_scope = Scope::from_bits_retain(definition);
        let filter_scope = Scope::from_bits_retain(filter);
        let registry = probe(definition_scope);

        prop_assert_eq!(
            registry.query_in("probe", filter_scope).is_some(),
            definition_scope.matches(filter_scope)
        );
        prop_assert_eq!(definition_scope.matches(filter_scope), expected(definition, filter));
    }

    #[test]
    fn matching_is_symmetric(a in 0u8..16, b in 0u8..16) {
        let (a, b) = (Scope::from_bits_retain(a), Scope::from_bits_retain(b));
        prop_assert_eq!(a.matches(b), b.matches(a));
    }

    #[test]
    fn registered_names_round_trip(name in "[a-z][a-z0-9-]{0,12}") {
        prop_assume!(name != "abstract");
        let mut registry: Registry<MemoryNode> = Registry::new();
        let stored = registry
            .register(
                BlotDefinition::new(name.clone(), MemoryBlotConstructor::element("div"))
                    .with_scope(Scope::BLOCK_BLOT),
            )
            .unwrap();
        let found = registry.query(name.as_str()).unwrap();
        prop_assert!(std::ptr::eq(found, &*stored));
    }
}
