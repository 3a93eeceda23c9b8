//! Resolved type expressions.
//!
//! [`Type`] is a closed union with one variant per syntactic shape of a Go
//! type expression. Every `next`/`key`/`value` edge is exclusively owned, so a
//! `Type` is always a finite tree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Function, Import, StructField, Variable};
use crate::enums::{ChanDirection, TypeKind};

/// Length classification of an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArrayLength {
    /// `[N]T`. Unrecognized length expressions are recorded as `Fixed(0)`.
    Fixed(u64),
    /// `[]T`
    Slice,
    /// `[...]T`, only valid as a composite literal type.
    Ellipsis,
}

/// A resolved Go type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// A bare type name such as `int` or `Config`.
    Name { name: String },
    /// `count` consecutive `*` over `next`. `next` is never a pointer.
    Pointer { count: u32, next: Box<Type> },
    Array { length: ArrayLength, next: Box<Type> },
    Map { key: Box<Type>, value: Box<Type> },
    Interface {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        methods: Vec<Function>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        embedded: Vec<Variable>,
    },
    /// A package-qualified type. `qualifier` is `None` only when the alias
    /// could not be resolved and unresolved aliases were allowed.
    Import {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        qualifier: Option<Import>,
        next: Box<Type>,
    },
    /// Variadic parameter marker: `...T`.
    Ellipsis { next: Box<Type> },
    Chan {
        direction: ChanDirection,
        next: Box<Type>,
    },
    Func {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<Variable>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        results: Vec<Variable>,
    },
    Struct {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<StructField>,
    },
}

impl Type {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name { name: name.into() }
    }

    /// Wrap `next` in one more level of indirection.
    ///
    /// Pointers fold: wrapping a `Pointer { count, next }` yields
    /// `Pointer { count + 1, next }` rather than a nested pointer.
    #[must_use]
    pub fn pointer_to(next: Self) -> Self {
        match next {
            Self::Pointer { count, next } => Self::Pointer {
                count: count + 1,
                next,
            },
            other => Self::Pointer {
                count: 1,
                next: Box::new(other),
            },
        }
    }

    #[must_use]
    pub fn array(length: ArrayLength, next: Self) -> Self {
        Self::Array {
            length,
            next: Box::new(next),
        }
    }

    #[must_use]
    pub fn slice(next: Self) -> Self {
        Self::array(ArrayLength::Slice, next)
    }

    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub fn import(qualifier: Option<Import>, next: Self) -> Self {
        Self::Import {
            qualifier,
            next: Box::new(next),
        }
    }

    #[must_use]
    pub fn ellipsis(next: Self) -> Self {
        Self::Ellipsis {
            next: Box::new(next),
        }
    }

    #[must_use]
    pub fn chan(direction: ChanDirection, next: Self) -> Self {
        Self::Chan {
            direction,
            next: Box::new(next),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Name { .. } => TypeKind::Name,
            Self::Pointer { .. } => TypeKind::Pointer,
            Self::Array { .. } => TypeKind::Array,
            Self::Map { .. } => TypeKind::Map,
            Self::Interface { .. } => TypeKind::Interface,
            Self::Import { .. } => TypeKind::Import,
            Self::Ellipsis { .. } => TypeKind::Ellipsis,
            Self::Chan { .. } => TypeKind::Chan,
            Self::Func { .. } => TypeKind::Func,
            Self::Struct { .. } => TypeKind::Struct,
        }
    }

    /// The single wrapped type of a linear variant (pointer, array, import,
    /// ellipsis, chan). `None` for leaves and multi-edge variants.
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        match self {
            Self::Pointer { next, .. }
            | Self::Array { next, .. }
            | Self::Import { next, .. }
            | Self::Ellipsis { next }
            | Self::Chan { next, .. } => Some(next),
            Self::Name { .. }
            | Self::Map { .. }
            | Self::Interface { .. }
            | Self::Func { .. }
            | Self::Struct { .. } => None,
        }
    }

    /// The identifier of a `Name` variant.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { name } => f.write_str(name),
            Self::Pointer { count, next } => {
                for _ in 0..*count {
                    f.write_str("*")?;
                }
                write!(f, "{next}")
            }
            Self::Array { length, next } => match length {
                ArrayLength::Fixed(len) => write!(f, "[{len}]{next}"),
                ArrayLength::Slice => write!(f, "[]{next}"),
                ArrayLength::Ellipsis => write!(f, "...{next}"),
            },
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Interface { methods, embedded } => {
                f.write_str("interface ")?;
                write_interface_body(f, methods, embedded)
            }
            Self::Import { qualifier, next } => match qualifier {
                Some(import) => write!(f, "{}.{next}", import.base.name),
                None => write!(f, "{next}"),
            },
            Self::Ellipsis { next } => write!(f, "...{next}"),
            Self::Chan { direction, next } => write!(f, "{direction} {next}"),
            Self::Func { args, results } => {
                f.write_str("func")?;
                write_signature(f, args, results)
            }
            Self::Struct { fields } => {
                f.write_str("struct ")?;
                write_struct_body(f, fields)
            }
        }
    }
}

/// `(args) results` in Go syntax.
pub(crate) fn write_signature(
    f: &mut fmt::Formatter<'_>,
    args: &[Variable],
    results: &[Variable],
) -> fmt::Result {
    f.write_str("(")?;
    write_variables(f, args)?;
    f.write_str(")")?;
    match results {
        [] => Ok(()),
        [single] if single.base.name.is_empty() => write!(f, " {single}"),
        _ => {
            f.write_str(" (")?;
            write_variables(f, results)?;
            f.write_str(")")
        }
    }
}

fn write_variables(f: &mut fmt::Formatter<'_>, vars: &[Variable]) -> fmt::Result {
    for (i, var) in vars.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{var}")?;
    }
    Ok(())
}

pub(crate) fn write_struct_body(f: &mut fmt::Formatter<'_>, fields: &[StructField]) -> fmt::Result {
    f.write_str("{")?;
    if !fields.is_empty() {
        for field in fields {
            write!(f, "\n{field}")?;
        }
        f.write_str("\n")?;
    }
    f.write_str("}")
}

pub(crate) fn write_interface_body(
    f: &mut fmt::Formatter<'_>,
    methods: &[Function],
    embedded: &[Variable],
) -> fmt::Result {
    f.write_str("{")?;
    if !(methods.is_empty() && embedded.is_empty()) {
        for var in embedded {
            write!(f, "\n{var}")?;
        }
        for method in methods {
            write!(f, "\n{method}")?;
        }
        f.write_str("\n")?;
    }
    f.write_str("}")
}
