//! Blot creation.
//!
//! `create` resolves its input and then either wraps a node in a new blot or,
//! for an attribute, creates the blot the attribute decorates and formats it.

use crate::registry::Registry;
use parchment_core::{
    Blot, BlotDefinition, BlotRef, Definition, Formattable, ParchmentError, Query, TreeNode, Value,
};

impl<N: TreeNode> Registry<N> {
    /// Create a blot for `input`.
    ///
    /// - A blot match wraps the input node when one was given, otherwise a
    ///   node freshly built from `value`.
    /// - An attribute match creates the enclosing blot for the attribute's
    ///   level, formats it with `value`, and returns it.
    ///
    /// Fails with [`ParchmentError::UnresolvedCreate`] when nothing matches.
    pub fn create<'a>(
        &self,
        input: impl Into<Query<'a, N>>,
        value: Option<&Value>,
    ) -> Result<BlotRef<N>, ParchmentError> {
        let input = input.into();
        match self.query(input) {
            Some(Definition::Blot(def)) => Ok(construct(def, input, value)),
            Some(Definition::Attribute(attr)) => {
                let level = Query::Scope(attr.scope().level());
                let blot = match self.query(level) {
                    Some(Definition::Blot(def)) => construct(def, level, None),
                    _ => return Err(unresolved(level)),
                };
                let name = input.as_name().unwrap_or(attr.name());
                let target =
                    blot.as_formattable()
                        .ok_or_else(|| ParchmentError::NotFormattable {
                            name: blot.blot_name().to_string(),
                        })?;
                target.format(name, value);
                Ok(blot)
            }
            None => Err(unresolved(input)),
        }
    }
}

fn construct<N: TreeNode>(
    def: &BlotDefinition<N>,
    input: Query<'_, N>,
    value: Option<&Value>,
) -> BlotRef<N> {
    let constructor = def.constructor();
    let node = match input.as_node() {
        Some(node) => node.clone(),
        None => constructor.create(value),
    };
    constructor.construct(node, value)
}

fn unresolved<N: TreeNode>(input: Query<'_, N>) -> ParchmentError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%input, "unable to create");
    ParchmentError::unresolved(input)
}
