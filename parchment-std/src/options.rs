//! Registry configuration.

use parchment_core::CLASS_PREFIX;

/// What happens when a name or tag is registered a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later registrations replace earlier ones.
    #[default]
    Overwrite,
    /// A second registration for an existing name or tag fails.
    Reject,
}

/// Options fixed for the lifetime of a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    class_prefix: String,
    duplicates: DuplicatePolicy,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryOptions {
    /// Default options: `blot-` class prefix, last registration wins.
    pub fn new() -> Self {
        Self {
            class_prefix: CLASS_PREFIX.to_string(),
            duplicates: DuplicatePolicy::Overwrite,
        }
    }

    /// Set the class-list prefix used by element queries.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the duplicate policy.
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Shorthand for [`DuplicatePolicy::Reject`].
    pub fn reject_duplicates(self) -> Self {
        self.with_duplicates(DuplicatePolicy::Reject)
    }

    /// The class-list prefix.
    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// The duplicate policy.
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::{DuplicatePolicy, RegistryOptions};

    #[test]
    fn test_defaults() {
        let options = RegistryOptions::default();
        assert_eq!(options.class_prefix(), "blot-");
        assert_eq!(options.duplicates(), DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_setters() {
        let options = RegistryOptions::new()
            .with_class_prefix("ql-")
            .reject_duplicates();
        assert_eq!(options.class_prefix(), "ql-");
        assert_eq!(options.duplicates(), DuplicatePolicy::Reject);
    }
}
