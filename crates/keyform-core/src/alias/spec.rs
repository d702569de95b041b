//! Per-field alias declarations.
//!
//! An [`AliasSpec`] holds the up-to-three explicit external names a field may
//! carry (plain, validation, serialization) plus the priority marker that
//! decides whether a model-wide generator may override them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step of a compound lookup into a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{k}"),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// An ordered sequence of segments resolved against a nested document,
/// e.g. `names.0.first` for `{"names": [{"first": "Mickey"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct AliasPath {
    pub segments: Vec<PathSegment>,
}

impl AliasPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// A path made of a single top-level key.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Key(key.into())],
        }
    }

    /// A path made of top-level keys only.
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: keys.into_iter().map(|k| PathSegment::Key(k.into())).collect(),
        }
    }

    /// Walk the document along the segments. Produces the located value, or
    /// nothing as soon as a segment is absent.
    pub fn lookup<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut current = doc;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(k) => current.get(k)?,
                PathSegment::Index(i) => current.get(i)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for AliasPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Alias(es) consulted only when parsing structured input.
///
/// Either a single key, or an ordered list of candidate paths where the
/// first one that locates a value wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ValidationAlias {
    Single(String),
    Choices(Vec<AliasPath>),
}

impl ValidationAlias {
    /// Ordered candidates built from plain key names.
    pub fn choices<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationAlias::Choices(keys.into_iter().map(AliasPath::key).collect())
    }

    /// Try each candidate in order against the document; first match wins.
    pub fn locate<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        match self {
            ValidationAlias::Single(key) => doc.get(key),
            ValidationAlias::Choices(paths) => paths.iter().find_map(|p| p.lookup(doc)),
        }
    }

    /// The primary candidate, used as the diagnostic location when no
    /// candidate matches.
    pub fn primary_loc(&self) -> Vec<String> {
        match self {
            ValidationAlias::Single(key) => vec![key.clone()],
            ValidationAlias::Choices(paths) => paths
                .first()
                .map(|p| p.segments.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<&str> for ValidationAlias {
    fn from(key: &str) -> Self {
        ValidationAlias::Single(key.to_string())
    }
}

/// Explicit alias declarations for a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AliasSpec {
    /// Used for construction by keyword, and as the parse/dump fallback when
    /// the more specific slots are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain: Option<String>,

    /// Used only when locating the field in parsed input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationAlias>,

    /// Used only when producing alias-keyed output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialization: Option<String>,

    /// Unset or <= 1: a model-wide generator overrides the explicit values.
    /// >= 2: the explicit values win.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl AliasSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A spec carrying only a plain alias.
    pub fn plain(alias: impl Into<String>) -> Self {
        Self {
            plain: Some(alias.into()),
            ..Self::default()
        }
    }

    pub fn with_plain(mut self, alias: impl Into<String>) -> Self {
        self.plain = Some(alias.into());
        self
    }

    pub fn with_validation(mut self, alias: impl Into<ValidationAlias>) -> Self {
        self.validation = Some(alias.into());
        self
    }

    pub fn with_serialization(mut self, alias: impl Into<String>) -> Self {
        self.serialization = Some(alias.into());
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }
}
