//! Model schema: declared fields bound to their effective aliases.
//!
//! A [`ModelSchema`] is built once per model class. Alias resolution runs at
//! build time and the resulting table is immutable, so concurrent readers
//! share it without locking.

pub mod locate;

use serde_json::Value;
use tracing::debug;

use crate::alias::generator::AliasGenerator;
use crate::alias::resolver::{EffectiveAliases, resolve};
use crate::alias::spec::AliasSpec;

/// Per-model configuration, fixed at schema build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelConfig {
    /// Accept the canonical field name as an input key alongside aliases.
    pub populate_by_name: bool,
    /// Systematic renaming rule applied to every field.
    pub alias_generator: Option<AliasGenerator>,
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_populate_by_name(mut self, populate_by_name: bool) -> Self {
        self.populate_by_name = populate_by_name;
        self
    }

    pub fn with_alias_generator(mut self, generator: AliasGenerator) -> Self {
        self.alias_generator = Some(generator);
        self
    }
}

/// A field as declared in the model definition. The canonical name must be
/// unique within the model and never changes after the schema is built.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub alias: AliasSpec,
    pub required: bool,
    pub default: Option<Value>,
}

impl FieldDef {
    /// A required field with no explicit aliases.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: AliasSpec::default(),
            required: true,
            default: None,
        }
    }

    /// An optional field; absent input leaves it out of the instance unless
    /// a default is declared.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    pub fn with_alias(mut self, alias: AliasSpec) -> Self {
        self.alias = alias;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.required = false;
        self.default = Some(default);
        self
    }
}

/// A declared field together with its resolved effective aliases.
#[derive(Debug, Clone)]
pub struct BoundField {
    pub def: FieldDef,
    pub effective: EffectiveAliases,
}

impl BoundField {
    pub fn name(&self) -> &str {
        &self.def.name
    }
}

/// The cached, immutable alias table for one model class.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    name: String,
    populate_by_name: bool,
    fields: Vec<BoundField>,
}

impl ModelSchema {
    /// Resolve every field's aliases against the model configuration. This
    /// is the only place generator transforms run; operations afterwards
    /// only read cached strings.
    pub fn build(name: impl Into<String>, config: ModelConfig, fields: Vec<FieldDef>) -> Self {
        let name = name.into();
        let fields: Vec<BoundField> = fields
            .into_iter()
            .map(|def| {
                let effective = resolve(&def.name, &def.alias, config.alias_generator.as_ref());
                BoundField { def, effective }
            })
            .collect();

        debug!(
            model = %name,
            fields = fields.len(),
            populate_by_name = config.populate_by_name,
            "resolved model alias table"
        );

        Self {
            name,
            populate_by_name: config.populate_by_name,
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn populate_by_name(&self) -> bool {
        self.populate_by_name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    /// Look a field up by canonical name.
    pub fn field(&self, name: &str) -> Option<&BoundField> {
        self.fields.iter().find(|f| f.def.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::to_camel;

    #[test]
    fn test_build_resolves_aliases_once() {
        let config = ModelConfig::new().with_alias_generator(AliasGenerator::new().with_alias(to_camel));
        let schema = ModelSchema::build(
            "User",
            config,
            vec![FieldDef::required("first_name"), FieldDef::required("last_name")],
        );
        assert_eq!(schema.fields().len(), 2);
        let first = schema.field("first_name").unwrap();
        assert_eq!(first.effective.plain.as_deref(), Some("firstName"));
        assert!(schema.field("firstName").is_none());
    }
}
