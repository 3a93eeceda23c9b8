use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    Base, FileType, Function, Import, Interface, Method, MethodId, Struct, Variable,
};

/// The semantic model of one Go source file.
///
/// `base.name` is the package name and `base.docs` the package doc comment.
/// Every collection keeps source order. The file owns every entity; the
/// `methods` lists on [`Struct`] and [`FileType`] are indices into
/// [`File::methods`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct File {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constants: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<Struct>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Interface>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Function>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<FileType>,
}

impl File {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            base: Base::new(package),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.base.name
    }

    #[must_use]
    pub fn method(&self, id: MethodId) -> Option<&Method> {
        self.methods.get(id.index())
    }

    /// Resolve an owner's method references. Ids that do not point into
    /// this file are skipped.
    pub fn methods_of<'a>(&'a self, ids: &'a [MethodId]) -> impl Iterator<Item = &'a Method> + 'a {
        ids.iter().filter_map(|id| self.method(*id))
    }

    #[must_use]
    pub fn find_struct(&self, name: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.base.name == name)
    }

    #[must_use]
    pub fn find_interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.base.name == name)
    }

    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&FileType> {
        self.types.iter().find(|t| t.base.name == name)
    }

    #[must_use]
    pub fn find_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.base.name == name)
    }

    #[must_use]
    pub fn find_constant(&self, name: &str) -> Option<&Variable> {
        self.constants.iter().find(|c| c.base.name == name)
    }

    #[must_use]
    pub fn find_var(&self, name: &str) -> Option<&Variable> {
        self.vars.iter().find(|v| v.base.name == name)
    }

    /// Import by alias.
    #[must_use]
    pub fn find_import(&self, alias: &str) -> Option<&Import> {
        self.imports.iter().find(|i| i.base.name == alias)
    }
}
