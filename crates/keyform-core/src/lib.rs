//! keyform-core: field alias resolution for data models.
//!
//! A data-model field can be known by several external names: the one used
//! when constructing an instance from keyword arguments, the one used when
//! parsing structured input, and the one used when producing output. This
//! crate decides, per field and per operation, which names are accepted or
//! produced, and reconciles explicit per-field aliases with a model-wide
//! name generator through a priority rule.
//!
//! Alias resolution runs once, when a [`ModelSchema`] is built; operations
//! afterwards are pure lookups over the cached table.

pub mod alias;
pub mod error;
pub mod model;
pub mod naming;
pub mod schema;

pub use alias::{AliasGenerator, AliasPath, AliasSpec, EffectiveAliases, ValidationAlias, resolve};
pub use error::{Error, ErrorItem, ErrorKind, Result, ValidationErrors};
pub use model::ModelInstance;
pub use naming::Name;
pub use schema::{FieldDef, ModelConfig, ModelSchema};
