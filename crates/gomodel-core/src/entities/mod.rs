//! Entity structs for every top-level Go declaration kind.
//!
//! Each entity embeds a [`Base`] (name + raw doc comment lines), flattened
//! into its serialized form. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod base;
mod declarations;
mod file;
mod function;
mod import;
mod variable;

pub use base::Base;
pub use declarations::{FileType, Interface, Struct};
pub use file::File;
pub use function::{Function, Method, MethodId};
pub use import::Import;
pub use variable::{StructField, Variable};
