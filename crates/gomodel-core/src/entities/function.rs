use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Base, Variable};
use crate::types::write_signature;

/// A free function, or a method signature inside an interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Function {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<Variable>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base.name)?;
        write_signature(f, &self.args, &self.results)
    }
}

/// A function declared with a receiver.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Method {
    #[serde(flatten)]
    pub function: Function,
    pub receiver: Variable,
}

impl Method {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.function.base.name
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func ({}) {}", self.receiver, self.function)
    }
}

/// Non-owning reference to a method, as an index into
/// [`File::methods`](super::File::methods).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct MethodId(usize);

impl MethodId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    #[test]
    fn method_renders_receiver_and_signature() {
        let method = Method {
            function: Function {
                base: Base::new("Run"),
                args: vec![Variable::new("ctx", Type::name("Context"))],
                results: vec![Variable::new("", Type::name("error"))],
            },
            receiver: Variable::new("c", Type::pointer_to(Type::name("Config"))),
        };
        assert_eq!(method.to_string(), "func (c *Config) Run(ctx Context) error");
    }

    #[test]
    fn method_id_serializes_as_bare_index() {
        let value = serde_json::to_value(MethodId::new(3)).expect("serialize id");
        assert_eq!(value, serde_json::json!(3));
    }
}
