//! # parchment - Document-Model Registry Core
//!
//! `parchment` maps nodes of a hosted document tree to typed wrappers
//! ("blots") and formatting attributes ("attributors"). It answers two
//! questions: *what registered type is this name, scope or node?* and
//! *construct or locate the blot for this node*.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parchment::prelude::*;
//!
//! let registry = Registry::builder()
//!     .register(BlotDefinition::new("block", Paragraph).with_scope(Scope::BLOCK_BLOT).with_tag("p"))
//!     .register(BlotDefinition::new("bold", Bold).with_scope(Scope::INLINE_BLOT).with_tag("strong"))
//!     .build()?;
//!
//! // Resolve by name, scope or node
//! assert!(registry.query("bold").is_some());
//! assert!(registry.query_in(&node, Scope::BLOCK_BLOT).is_none());
//!
//! // Create a blot and find it again from its node
//! let blot = registry.create("block", None)?;
//! let again = find_from(blot.dom_node(), false);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use parchment_core::{
    // Definitions
    ABSTRACT,
    AttributeDefinition,
    Attributor,
    // Blots
    Blot,
    BlotConstructor,
    BlotDefinition,
    BlotRef,
    // Resolution input
    CLASS_PREFIX,
    Definition,
    // Errors
    ERROR_TAG,
    Formattable,
    // Tree
    NodeKind,
    ParchmentError,
    Query,
    // Classification
    Scope,
    TreeNode,
    Value,
};

// Registry
pub use parchment_std::{
    BLOCK, DuplicatePolicy, INLINE, Registry, RegistryBuilder, RegistryOptions, TEXT,
    attachment::{find, find_from},
};

#[cfg(feature = "inventory")]
pub use parchment_std::DefinitionRegistration;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use parchment_std::testing::*;
}

/// Prelude module - common imports for Parchment.
///
/// # Usage
///
/// ```rust,ignore
/// use parchment::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AttributeDefinition,
        Attributor,
        Blot,
        BlotConstructor,
        BlotDefinition,
        BlotRef,
        Definition,
        Formattable,
        NodeKind,
        ParchmentError,
        Query,
        Registry,
        Scope,
        TreeNode,
        Value,
        find,
        find_from,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
