use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Base;
use crate::types::Type;

/// A named (or anonymous) value with a type: constants, variables,
/// parameters, results, and embedded interface slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Variable {
    #[serde(flatten)]
    pub base: Base,
    /// `None` when the type was neither written nor inferable from the
    /// initializer.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            base: Base::new(name),
            ty: Some(ty),
        }
    }

    /// A variable whose type could not be determined.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            base: Base::new(name),
            ty: None,
        }
    }

    #[must_use]
    pub fn with_docs(mut self, docs: Vec<String>) -> Self {
        self.base.docs = docs;
        self
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.ty, self.base.name.is_empty()) {
            (Some(ty), true) => write!(f, "{ty}"),
            (Some(ty), false) => write!(f, "{} {ty}", self.base.name),
            (None, _) => f.write_str(&self.base.name),
        }
    }
}

/// A struct field: a variable plus its tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StructField {
    #[serde(flatten)]
    pub variable: Variable,
    /// Tag key -> `[name, options...]`, in the order keys appear in the tag.
    /// Empty when the tag is absent or malformed.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, Vec<String>>,
    /// Tag literal exactly as written, delimiters included.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_tag: String,
}

impl StructField {
    #[must_use]
    pub fn untagged(variable: Variable) -> Self {
        Self {
            variable,
            tags: IndexMap::new(),
            raw_tag: String::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.variable.base.name
    }

    /// Whether the field is embedded (`T` or `*T` with no field name).
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.variable.base.is_anonymous()
    }

    /// Values of one tag key, e.g. `["name", "omitempty"]` for `json`.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&[String]> {
        self.tags.get(key).map(Vec::as_slice)
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variable)?;
        if !self.raw_tag.is_empty() {
            write!(f, " {}", self.raw_tag)?;
        }
        Ok(())
    }
}
