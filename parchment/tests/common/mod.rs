#![allow(dead_code)]

use parchment::{
    AttributeDefinition, BLOCK, BlotDefinition, INLINE, Registry, Scope, TEXT,
    testing::{MemoryBlotConstructor, MemoryNode, RecordingAttributor},
};

// ============================================================================
// Test Registry
// ============================================================================

/// Constructors and attributors kept by the test so creation and
/// formatting counts can be inspected.
pub struct Constructors {
    pub block: MemoryBlotConstructor,
    pub inline: MemoryBlotConstructor,
    pub text: MemoryBlotConstructor,
    pub bold: MemoryBlotConstructor,
    pub header: MemoryBlotConstructor,
    pub color: RecordingAttributor,
    pub align: RecordingAttributor,
}

impl Constructors {
    pub fn new() -> Self {
        let color = RecordingAttributor::keyed("color");
        let align = RecordingAttributor::keyed("text-align");
        let attributes = [color_definition(&color), align_definition(&align)];
        Self {
            block: MemoryBlotConstructor::element("p")
                .named(BLOCK)
                .with_attributes(attributes.clone()),
            inline: MemoryBlotConstructor::element("span")
                .named(INLINE)
                .with_attributes(attributes),
            text: MemoryBlotConstructor::text(),
            bold: MemoryBlotConstructor::element("strong").named("bold"),
            header: MemoryBlotConstructor::element("h1").named("header"),
            color,
            align,
        }
    }
}

fn color_definition(attributor: &RecordingAttributor) -> AttributeDefinition<MemoryNode> {
    AttributeDefinition::new("color", "color", Scope::INLINE_ATTRIBUTE, attributor.clone())
}

fn align_definition(attributor: &RecordingAttributor) -> AttributeDefinition<MemoryNode> {
    AttributeDefinition::new(
        "align",
        "text-align",
        Scope::BLOCK_ATTRIBUTE,
        attributor.clone(),
    )
}

/// A registry shaped like a small rich-text editor's.
pub fn editor_registry() -> (Registry<MemoryNode>, Constructors) {
    let ctors = Constructors::new();
    let registry = Registry::<MemoryNode>::builder()
        .register(
            BlotDefinition::new(BLOCK, ctors.block.clone())
                .with_scope(Scope::BLOCK_BLOT)
                .with_tag("P"),
        )
        .register(
            BlotDefinition::new(INLINE, ctors.inline.clone())
                .with_scope(Scope::INLINE_BLOT)
                .with_tag("SPAN"),
        )
        .register(BlotDefinition::new(TEXT, ctors.text.clone()).with_scope(Scope::INLINE_BLOT))
        .register(
            BlotDefinition::new("bold", ctors.bold.clone())
                .with_scope(Scope::INLINE_BLOT)
                .with_tags(["strong", "b"]),
        )
        .register(
            BlotDefinition::new("header", ctors.header.clone())
                .with_scope(Scope::BLOCK_BLOT)
                .with_tags(["h1", "h2"]),
        )
        .register(color_definition(&ctors.color))
        .register(align_definition(&ctors.align))
        .build()
        .unwrap();
    (registry, ctors)
}
