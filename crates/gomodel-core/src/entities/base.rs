use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name and documentation shared by every named entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Base {
    /// Identifier. Empty for anonymous parameters and embedded members.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Raw comment lines, markers included (`// ...`, `/* ... */`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

impl Base {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}
