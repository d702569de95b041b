//! Error types for keyform operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type alias for keyform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for model operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("input document is not a mapping")]
    NotAnObject,
}

/// Kind of a single validation error record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Missing,
}

/// One structured validation error: which field location failed, why, and
/// against which input. `loc` carries the primary alias (or canonical name
/// when the field has none) the way it would appear in the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorItem {
    pub kind: ErrorKind,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Value,
}

impl ErrorItem {
    pub(crate) fn missing(loc: Vec<String>, input: Value) -> Self {
        Self {
            kind: ErrorKind::Missing,
            loc,
            msg: "Field required".to_string(),
            input,
        }
    }
}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// The full, ordered list of validation errors from one failed operation.
/// Every field is attempted before the operation fails, so the list covers
/// all missing fields at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationErrors {
    errors: Vec<ErrorItem>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ErrorItem>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ErrorItem] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorItem> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
