pub mod generator;
pub mod resolver;
pub mod spec;

pub use generator::AliasGenerator;
pub use resolver::{EffectiveAliases, resolve};
pub use spec::{AliasPath, AliasSpec, PathSegment, ValidationAlias};
