//! Model assembly: construct, parse, and dump whole instances.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::error::{Error, ErrorItem, Result, ValidationErrors};
use crate::schema::ModelSchema;
use crate::schema::locate::Operation;

/// An immutable snapshot of field values, addressable by canonical name
/// only. Aliases are input/output names; they are not visible here.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    model: String,
    values: IndexMap<String, Value>,
}

impl ModelInstance {
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Value of a field, by canonical name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// (canonical name, value) pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ModelInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.model)?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

impl ModelSchema {
    /// Build an instance from keyword arguments. Keys are matched by plain
    /// alias (canonical names additionally when `populate_by_name` is set).
    pub fn construct(&self, kwargs: &Value) -> Result<ModelInstance> {
        self.assemble(kwargs, Operation::Construct)
    }

    /// Build an instance from a parsed document. Keys are matched by
    /// validation alias candidates, falling back per the locator rules.
    pub fn parse(&self, doc: &Value) -> Result<ModelInstance> {
        self.assemble(doc, Operation::Parse)
    }

    /// Parse a JSON text document.
    pub fn parse_json(&self, text: &str) -> Result<ModelInstance> {
        let doc: Value = serde_json::from_str(text)?;
        self.parse(&doc)
    }

    /// Produce the output mapping for an instance, keys in field declaration
    /// order. With `by_alias` the serialization alias (else plain alias,
    /// else canonical name) keys each entry; without it, canonical names
    /// are used throughout.
    pub fn dump(&self, instance: &ModelInstance, by_alias: bool) -> IndexMap<String, Value> {
        self.fields()
            .iter()
            .filter_map(|field| {
                instance
                    .get(field.name())
                    .map(|value| (field.dump_key(by_alias).to_string(), value.clone()))
            })
            .collect()
    }

    /// JSON-text rendering of [`dump`](Self::dump).
    pub fn dump_json(&self, instance: &ModelInstance, by_alias: bool) -> Result<String> {
        Ok(serde_json::to_string(&self.dump(instance, by_alias))?)
    }

    /// Drive the locator over every declared field. All fields are
    /// attempted even when earlier ones fail; missing-field errors
    /// aggregate into one ordered list and the operation fails atomically.
    fn assemble(&self, input: &Value, operation: Operation) -> Result<ModelInstance> {
        let doc = input.as_object().ok_or(Error::NotAnObject)?;

        let mut values = IndexMap::with_capacity(self.fields().len());
        let mut errors = Vec::new();

        for field in self.fields() {
            let located = match operation {
                Operation::Construct => field.locate_keyword(doc, self.populate_by_name()),
                Operation::Parse => field.locate_parse(input, self.populate_by_name()),
            };
            match located {
                Some(value) => {
                    values.insert(field.name().to_string(), value.clone());
                }
                None => {
                    if let Some(default) = &field.def.default {
                        values.insert(field.name().to_string(), default.clone());
                    } else if field.def.required {
                        errors.push(ErrorItem::missing(field.missing_loc(operation), input.clone()));
                    }
                }
            }
        }

        if !errors.is_empty() {
            debug!(
                model = self.name(),
                missing = errors.len(),
                "model assembly failed"
            );
            return Err(ValidationErrors::new(errors).into());
        }

        Ok(ModelInstance {
            model: self.name().to_string(),
            values,
        })
    }
}
