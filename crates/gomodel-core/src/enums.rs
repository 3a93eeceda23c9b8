//! Kind and direction enums for the type model.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TypeKind
// ---------------------------------------------------------------------------

/// Discriminant of a [`Type`](crate::Type) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Name,
    Pointer,
    Array,
    Map,
    Interface,
    Import,
    Ellipsis,
    Chan,
    Func,
    Struct,
}

impl TypeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Map => "map",
            Self::Interface => "interface",
            Self::Import => "import",
            Self::Ellipsis => "ellipsis",
            Self::Chan => "chan",
            Self::Func => "func",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChanDirection
// ---------------------------------------------------------------------------

/// Direction of a channel type.
///
/// ```text
/// chan<- T   send
/// <-chan T   receive
/// chan T     both
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChanDirection {
    Send,
    Receive,
    Both,
}

impl ChanDirection {
    /// Keyword form as written in Go source.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Send => "chan<-",
            Self::Receive => "<-chan",
            Self::Both => "chan",
        }
    }

    #[must_use]
    pub const fn can_send(self) -> bool {
        matches!(self, Self::Send | Self::Both)
    }

    #[must_use]
    pub const fn can_receive(self) -> bool {
        matches!(self, Self::Receive | Self::Both)
    }
}

impl fmt::Display for ChanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
