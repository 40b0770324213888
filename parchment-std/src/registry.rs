//! Registry tables and registration.
//!
//! A [`Registry`] owns three lookup tables over the same set of
//! registrations:
//!
//! - **types**: blot and attribute names
//! - **tags**: uppercased tag names claimed by blots
//! - **attributes**: attribute key names
//!
//! Every table shares one `Arc` per definition. Registrations live as long
//! as the registry; there is no unregister.

use crate::options::{DuplicatePolicy, RegistryOptions};
use parchment_core::{ABSTRACT, Definition, ParchmentError, TreeNode};
use std::{collections::HashMap, fmt, sync::Arc};

/// An explicit, host-owned registry of blot and attribute definitions.
///
/// Register everything up front, then share the registry by reference (or
/// behind an `Arc`) for queries. Separate registries are fully isolated, so
/// each editor instance or test can have its own.
pub struct Registry<N: TreeNode> {
    pub(crate) types: HashMap<String, Arc<Definition<N>>>,
    pub(crate) tags: HashMap<String, Arc<Definition<N>>>,
    pub(crate) attributes: HashMap<String, Arc<Definition<N>>>,
    pub(crate) options: RegistryOptions,
}

impl<N: TreeNode> Registry<N> {
    /// Create an empty registry with default options.
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Create an empty registry with the given options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            types: HashMap::new(),
            tags: HashMap::new(),
            attributes: HashMap::new(),
            options,
        }
    }

    /// Start a [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder<N> {
        RegistryBuilder::new()
    }

    /// Validate and store a definition, returning the stored handle.
    ///
    /// Blot definitions are indexed by each claimed tag (uppercased);
    /// attribute definitions by their key name. Registration is
    /// all-or-nothing: on error no table is touched.
    ///
    /// A name that is empty or only whitespace is rejected with
    /// [`ParchmentError::InvalidDefinition`].
    pub fn register(
        &mut self,
        definition: impl Into<Definition<N>>,
    ) -> Result<Arc<Definition<N>>, ParchmentError> {
        let definition = definition.into();
        let name = definition.name();
        if name.trim().is_empty() {
            return Err(ParchmentError::InvalidDefinition);
        }
        if matches!(&definition, Definition::Blot(def) if def.name() == ABSTRACT) {
            return Err(ParchmentError::AbstractRegistration);
        }

        let tags: Vec<String> = match &definition {
            Definition::Blot(def) => def.tag_names().iter().map(|t| t.to_uppercase()).collect(),
            Definition::Attribute(_) => Vec::new(),
        };

        if self.options.duplicates() == DuplicatePolicy::Reject {
            if self.types.contains_key(name) {
                return Err(ParchmentError::DuplicateName {
                    name: name.to_string(),
                });
            }
            if let Some(tag) = tags.iter().find(|t| self.tags.contains_key(*t)) {
                return Err(ParchmentError::DuplicateTag { tag: tag.clone() });
            }
            if let Definition::Attribute(attr) = &definition {
                let key = attr.key_name();
                if !key.is_empty() && self.attributes.contains_key(key) {
                    return Err(ParchmentError::DuplicateKey {
                        key: key.to_string(),
                    });
                }
            }
        }

        let definition = Arc::new(definition);
        self.types
            .insert(definition.name().to_string(), definition.clone());

        match &*definition {
            Definition::Blot(_) => {
                for tag in tags {
                    if self.tags.insert(tag.clone(), definition.clone()).is_some() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(%tag, name = definition.name(), "tag re-registered");
                    }
                }
            }
            Definition::Attribute(attr) => {
                if !attr.key_name().is_empty() {
                    self.attributes
                        .insert(attr.key_name().to_string(), definition.clone());
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            name = definition.name(),
            scope = %definition.scope(),
            "registered definition"
        );

        Ok(definition)
    }

    /// The options this registry was created with.
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Whether `name` is registered as a blot or attribute name.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate over registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Get the number of registered names.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<N: TreeNode> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: TreeNode> fmt::Debug for Registry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry")
            .field("names", &names)
            .field("tags", &self.tags.len())
            .field("attributes", &self.attributes.len())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a Registry.
///
/// Definitions are validated in registration order when `.build()` is
/// called; the first failure is returned.
///
/// # Example
/// ```ignore
/// let registry = Registry::builder()
///     .with_options(RegistryOptions::new().with_class_prefix("ql-"))
///     .register(paragraph)
///     .register(bold)
///     .build()?;
/// ```
pub struct RegistryBuilder<N: TreeNode> {
    definitions: Vec<Definition<N>>,
    options: RegistryOptions,
}

impl<N: TreeNode> RegistryBuilder<N> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            options: RegistryOptions::default(),
        }
    }

    /// Set the registry options.
    pub fn with_options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }

    /// Queue a definition.
    pub fn register(mut self, definition: impl Into<Definition<N>>) -> Self {
        self.register_mut(definition);
        self
    }

    /// Queue a definition (mutable version).
    pub fn register_mut(&mut self, definition: impl Into<Definition<N>>) {
        self.definitions.push(definition.into());
    }

    /// Register everything queued and return the registry.
    pub fn build(self) -> Result<Registry<N>, ParchmentError> {
        let mut registry = Registry::with_options(self.options);
        for definition in self.definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Get the number of queued definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the builder has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<N: TreeNode> Default for RegistryBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
