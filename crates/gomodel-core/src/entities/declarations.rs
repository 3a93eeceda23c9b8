use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Base, Function, MethodId, StructField, Variable};
use crate::types::{Type, write_interface_body, write_struct_body};

/// A named struct declaration: `type Name struct { ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Struct {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<StructField>,
    /// Methods whose receiver names this struct. Filled by the linker.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodId>,
}

impl Struct {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} struct ", self.base.name)?;
        write_struct_body(f, &self.fields)
    }
}

/// A named interface declaration: `type Name interface { ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Interface {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Function>,
    /// Embedded interfaces. Always anonymous.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded: Vec<Variable>,
}

impl Interface {
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Function> {
        self.methods.iter().find(|m| m.base.name == name)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} interface ", self.base.name)?;
        write_interface_body(f, &self.methods, &self.embedded)
    }
}

/// Any other named type: `type Celsius float64`, `type Handler func()`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileType {
    #[serde(flatten)]
    pub base: Base,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Methods whose receiver names this type. Filled by the linker.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodId>,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.base.name, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn struct_renders_fields_one_per_line() {
        let s = Struct {
            base: Base::new("Point"),
            fields: vec![
                StructField::untagged(Variable::new("X", Type::name("int"))),
                StructField {
                    variable: Variable::new("Y", Type::name("int")),
                    tags: IndexMap::new(),
                    raw_tag: "`json:\"y\"`".to_string(),
                },
            ],
            methods: Vec::new(),
        };
        assert_eq!(s.to_string(), "Point struct {\nX int\nY int `json:\"y\"`\n}");
        assert_eq!(s.field("Y").map(StructField::name), Some("Y"));
    }

    #[test]
    fn interface_renders_embedded_before_methods() {
        let i = Interface {
            base: Base::new("ReadCloser"),
            methods: vec![Function {
                base: Base::new("Close"),
                args: Vec::new(),
                results: vec![Variable::new("", Type::name("error"))],
            }],
            embedded: vec![Variable::new("", Type::name("Reader"))],
        };
        assert_eq!(i.to_string(), "ReadCloser interface {\nReader\nClose() error\n}");
    }

    #[test]
    fn file_type_renders_name_and_underlying() {
        let t = FileType {
            base: Base::new("Celsius"),
            ty: Type::name("float64"),
            methods: Vec::new(),
        };
        assert_eq!(t.to_string(), "Celsius float64");
    }
}
