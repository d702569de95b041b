//! Reconciles a field's explicit aliases with the model-wide generator.

use crate::alias::generator::AliasGenerator;
use crate::alias::spec::{AliasSpec, ValidationAlias};

/// The three external names a field effectively carries, computed once per
/// model schema. A `None` slot means: fall back to the canonical name at the
/// lookup layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveAliases {
    pub plain: Option<String>,
    pub validation: Option<ValidationAlias>,
    pub serialization: Option<String>,
}

/// Priority rule, applied independently per slot:
///
/// - no explicit value: the generated value, if any;
/// - explicit value with priority unset or <= 1: the generated value wins
///   when the generator produced one, the explicit value otherwise;
/// - explicit value with priority >= 2: the explicit value wins.
pub fn resolve(
    canonical: &str,
    spec: &AliasSpec,
    generator: Option<&AliasGenerator>,
) -> EffectiveAliases {
    let explicit_wins = spec.priority.unwrap_or(1) >= 2;

    let (gen_plain, gen_validation, gen_serialization) = match generator {
        Some(g) => (
            g.plain_for(canonical),
            g.validation_for(canonical),
            g.serialization_for(canonical),
        ),
        None => (None, None, None),
    };

    EffectiveAliases {
        plain: pick(spec.plain.clone(), gen_plain, explicit_wins),
        validation: pick(
            spec.validation.clone(),
            gen_validation.map(ValidationAlias::Single),
            explicit_wins,
        ),
        serialization: pick(spec.serialization.clone(), gen_serialization, explicit_wins),
    }
}

fn pick<T>(explicit: Option<T>, generated: Option<T>, explicit_wins: bool) -> Option<T> {
    match (explicit, generated) {
        (explicit, None) => explicit,
        (None, generated) => generated,
        (Some(explicit), Some(_)) if explicit_wins => Some(explicit),
        (Some(_), generated) => generated,
    }
}
