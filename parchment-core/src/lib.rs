//! # parchment-core
//!
//! Core contracts for the Parchment document-model registry.
//!
//! This crate has minimal dependencies and is meant to be imported by crates
//! that provide concrete blots or attributors without pulling in the
//! registry implementation from `parchment-std`.
//!
//! # Classification
//!
//! Every registered type is classified by a [`Scope`] along two independent
//! axes: its role (blot or attribute) and its level (block or inline). A
//! query filter passes only when both axes agree.
//!
//! # Contracts
//!
//! - [`TreeNode`] - the host's document tree, read-only from here
//! - [`Blot`] / [`Formattable`] - wrappers bound to nodes
//! - [`BlotConstructor`] / [`Attributor`] - behaviour behind a registration
//! - [`Definition`] - the tagged registration record
//! - [`Query`] - the four kinds of resolution input
//!
//! # Errors
//!
//! - [`ParchmentError`] - fatal registration and creation failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod blot;
mod definition;
mod error;
mod node;
mod query;
mod scope;

/// Values carried by `create` and `format`.
pub use serde_json::Value;

// Re-exports
pub use blot::{Blot, BlotRef, Formattable};
pub use definition::{
    ABSTRACT, AttributeDefinition, Attributor, BlotConstructor, BlotDefinition, Definition,
};
pub use error::{ERROR_TAG, ParchmentError};
pub use node::{NodeKind, TreeNode};
pub use query::{CLASS_PREFIX, Query};
pub use scope::Scope;
