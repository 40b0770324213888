//! # Static Definition Collection
//!
//! Definitions can be submitted from anywhere in a program with
//! `inventory::submit!` and registered in one call, which keeps blot and
//! attribute crates decoupled from the code that owns the registry.
//!
//! # Example
//!
//! ```rust,ignore
//! fn bold() -> Box<dyn Any> {
//!     Box::new(Definition::from(
//!         BlotDefinition::new("bold", BoldConstructor)
//!             .with_scope(Scope::INLINE_BLOT)
//!             .with_tags(["strong", "b"]),
//!     ))
//! }
//!
//! inventory::submit! { DefinitionRegistration::new::<DomNode>(bold) }
//!
//! let mut registry = Registry::<DomNode>::new();
//! registry.register_collected()?;
//! ```

use crate::registry::Registry;
use parchment_core::{Definition, ParchmentError, TreeNode};
use std::any::{Any, TypeId};

/// A statically submitted definition.
///
/// The definition is built lazily and type-erased; `node_type` records which
/// tree the definition was written for so registries over other trees skip it.
pub struct DefinitionRegistration {
    /// The `TypeId` of the tree node type.
    pub node_type: fn() -> TypeId,
    /// Builds a boxed `Definition<N>` for that node type.
    pub build: fn() -> Box<dyn Any>,
}

impl DefinitionRegistration {
    /// Create a registration for tree node type `N`.
    pub const fn new<N: TreeNode>(build: fn() -> Box<dyn Any>) -> Self {
        Self {
            node_type: TypeId::of::<N>,
            build,
        }
    }
}

inventory::collect!(DefinitionRegistration);

impl<N: TreeNode> Registry<N> {
    /// Register every submitted definition written for `N`.
    ///
    /// Submission order across crates is unspecified, so duplicate names or
    /// tags resolve in an unspecified order too. Returns how many were
    /// registered; stops at the first failure.
    pub fn register_collected(&mut self) -> Result<usize, ParchmentError> {
        let target = TypeId::of::<N>();
        let mut count = 0;
        for registration in inventory::iter::<DefinitionRegistration> {
            if (registration.node_type)() != target {
                continue;
            }
            let definition = (registration.build)()
                .downcast::<Definition<N>>()
                .map_err(|_| ParchmentError::InvalidDefinition)?;
            self.register(*definition)?;
            count += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(count, "registered collected definitions");

        Ok(count)
    }
}
