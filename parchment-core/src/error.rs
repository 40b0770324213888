//! Error types for Parchment.
//!
//! A single error kind covers every fatal condition. Routine absence (a
//! query that matches nothing, a node with no attached blot) is reported as
//! `None`, never as an error.

use thiserror::Error;

/// Tag prepended to every error message.
pub const ERROR_TAG: &str = "[Parchment]";

/// Fatal errors raised by registration and creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParchmentError {
    /// The definition carries neither a usable blot name nor attribute name.
    #[error("[Parchment] Invalid definition")]
    InvalidDefinition,

    /// The reserved `abstract` blot name was registered.
    #[error("[Parchment] Cannot register abstract class")]
    AbstractRegistration,

    /// `create` was asked for something that resolves to nothing.
    #[error("[Parchment] Unable to create {input}")]
    UnresolvedCreate {
        /// Rendering of the query input.
        input: String,
    },

    /// An attribute was applied to a blot that cannot be formatted.
    #[error("[Parchment] Blot {name} is not formattable")]
    NotFormattable {
        /// Name of the blot that rejected the format.
        name: String,
    },

    /// A name was registered twice while duplicates are rejected.
    #[error("[Parchment] {name} is already registered")]
    DuplicateName {
        /// The registered name.
        name: String,
    },

    /// A tag was claimed twice while duplicates are rejected.
    #[error("[Parchment] Tag {tag} is already registered")]
    DuplicateTag {
        /// The uppercased tag name.
        tag: String,
    },

    /// An attribute key was claimed twice while duplicates are rejected.
    #[error("[Parchment] Attribute key {key} is already registered")]
    DuplicateKey {
        /// The attribute key name.
        key: String,
    },
}

impl ParchmentError {
    /// Build a [`ParchmentError::UnresolvedCreate`] from any displayable input.
    pub fn unresolved(input: impl ToString) -> Self {
        ParchmentError::UnresolvedCreate {
            input: input.to_string(),
        }
    }
}
