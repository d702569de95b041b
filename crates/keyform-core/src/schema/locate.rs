//! Key matching: which input key feeds which field, per operation.

use serde_json::{Map, Value};

use super::BoundField;

/// The operation an input key set is being matched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Construct,
    Parse,
}

impl BoundField {
    /// Construct-mode lookup over keyword arguments.
    ///
    /// The plain alias is the accepted key; the canonical name is accepted
    /// additionally only when `populate_by_name` is set, and the alias wins
    /// when both are supplied. A field with no plain alias accepts its
    /// canonical name regardless of the toggle. Validation candidates are
    /// not consulted here.
    pub fn locate_keyword<'a>(
        &self,
        kwargs: &'a Map<String, Value>,
        populate_by_name: bool,
    ) -> Option<&'a Value> {
        match &self.effective.plain {
            Some(alias) => kwargs.get(alias).or_else(|| {
                if populate_by_name {
                    kwargs.get(&self.def.name)
                } else {
                    None
                }
            }),
            None => kwargs.get(&self.def.name),
        }
    }

    /// Parse-mode lookup over a structured document.
    ///
    /// Validation candidates are tried in order; absent those, the plain
    /// alias. The canonical name is tried after the alias candidates when
    /// `populate_by_name` is set, so an alias-matched value silently wins
    /// over a simultaneously present canonical key.
    pub fn locate_parse<'a>(&self, doc: &'a Value, populate_by_name: bool) -> Option<&'a Value> {
        let by_alias = match (&self.effective.validation, &self.effective.plain) {
            (Some(validation), _) => validation.locate(doc),
            (None, Some(plain)) => doc.get(plain),
            (None, None) => return doc.get(&self.def.name),
        };
        by_alias.or_else(|| {
            if populate_by_name {
                doc.get(&self.def.name)
            } else {
                None
            }
        })
    }

    /// The output key for this field when dumping.
    pub fn dump_key(&self, by_alias: bool) -> &str {
        if !by_alias {
            return &self.def.name;
        }
        self.effective
            .serialization
            .as_deref()
            .or(self.effective.plain.as_deref())
            .unwrap_or(&self.def.name)
    }

    /// The diagnostic location reported when no candidate key matched: the
    /// first candidate that would have been tried for the operation.
    pub fn missing_loc(&self, operation: Operation) -> Vec<String> {
        match operation {
            Operation::Construct => match &self.effective.plain {
                Some(alias) => vec![alias.clone()],
                None => vec![self.def.name.clone()],
            },
            Operation::Parse => match (&self.effective.validation, &self.effective.plain) {
                (Some(validation), _) => validation.primary_loc(),
                (None, Some(plain)) => vec![plain.clone()],
                (None, None) => vec![self.def.name.clone()],
            },
        }
    }
}
