//! # parchment-std
//!
//! Standard implementations for the Parchment document-model registry.
//!
//! This crate provides:
//! - **Registration**: [`Registry`], [`RegistryBuilder`], [`RegistryOptions`]
//! - **Resolution**: [`Registry::query`] and [`Registry::query_in`]
//! - **Creation**: [`Registry::create`]
//! - **Attachment lookup**: [`find`], [`find_from`]
//! - **Testing**: an in-memory tree in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use parchment_core;

// Modules
pub mod attachment;
mod dispatch;
pub mod options;
pub mod registry;
pub mod resolver;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collect;

pub use attachment::{find, find_from};
pub use options::{DuplicatePolicy, RegistryOptions};
pub use registry::{Registry, RegistryBuilder};
pub use resolver::{BLOCK, INLINE, TEXT};

#[cfg(feature = "inventory")]
pub use collect::DefinitionRegistration;

#[cfg(feature = "inventory")]
pub use inventory;
