use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Base;

/// An import declaration. `base.name` holds the alias the file uses for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Import {
    #[serde(flatten)]
    pub base: Base,
    /// Import path without quotes.
    pub package: String,
}

impl Import {
    pub fn new(alias: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            base: Base::new(alias),
            package: package.into(),
        }
    }

    /// Last segment of the import path (`"github.com/a/b"` -> `"b"`).
    #[must_use]
    pub fn last_segment(&self) -> &str {
        self.package.rsplit('/').next().unwrap_or(&self.package)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.base.name, self.package)
    }
}
