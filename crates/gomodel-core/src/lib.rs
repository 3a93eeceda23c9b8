//! # gomodel-core
//!
//! Semantic model of a Go source file's top-level declarations.
//!
//! This crate provides the data types shared by every gomodel crate:
//! - [`File`], the per-file container that owns every extracted entity
//! - Entity structs (imports, variables, structs, interfaces, functions,
//!   methods, named types)
//! - [`Type`], the closed ten-variant union of resolved type expressions
//! - Kind and direction enums
//!
//! All types derive `Serialize`, `Deserialize`, and `JsonSchema`. Empty
//! sequences, maps, and strings are omitted from serialized output.

pub mod entities;
pub mod enums;
pub mod types;

pub use entities::{
    Base, File, FileType, Function, Import, Interface, Method, MethodId, Struct, StructField,
    Variable,
};
pub use enums::{ChanDirection, TypeKind};
pub use types::{ArrayLength, Type};
