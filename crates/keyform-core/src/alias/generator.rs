//! Model-wide name generation.

/// A pure canonical-name to external-name transform.
pub type Transform = fn(&str) -> String;

/// A systematic renaming rule applied to every field of a model, with three
/// independent slots. A slot left unconfigured generates nothing and the
/// field's explicit alias (or canonical name) stands.
///
/// The transforms run once, when the model schema is built; only the
/// resulting strings are cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasGenerator {
    pub alias: Option<Transform>,
    pub validation_alias: Option<Transform>,
    pub serialization_alias: Option<Transform>,
}

impl AliasGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator applying the same transform to all three slots.
    pub fn uniform(transform: Transform) -> Self {
        Self {
            alias: Some(transform),
            validation_alias: Some(transform),
            serialization_alias: Some(transform),
        }
    }

    pub fn with_alias(mut self, transform: Transform) -> Self {
        self.alias = Some(transform);
        self
    }

    pub fn with_validation_alias(mut self, transform: Transform) -> Self {
        self.validation_alias = Some(transform);
        self
    }

    pub fn with_serialization_alias(mut self, transform: Transform) -> Self {
        self.serialization_alias = Some(transform);
        self
    }

    pub(crate) fn plain_for(&self, canonical: &str) -> Option<String> {
        self.alias.map(|f| f(canonical))
    }

    pub(crate) fn validation_for(&self, canonical: &str) -> Option<String> {
        self.validation_alias.map(|f| f(canonical))
    }

    pub(crate) fn serialization_for(&self, canonical: &str) -> Option<String> {
        self.serialization_alias.map(|f| f(canonical))
    }
}
