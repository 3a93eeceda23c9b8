//! Per-file import alias table.

use gomodel_core::Import;

/// Predeclared identifiers an import alias must not shadow. A derived
/// alias matching one of these gets a `_` prefix.
const PREDECLARED: &[&str] = &[
    // types
    "any", "bool", "byte", "comparable", "complex64", "complex128", "error", "float32",
    "float64", "int", "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8",
    "uint16", "uint32", "uint64", "uintptr",
    // functions
    "append", "cap", "clear", "close", "complex", "copy", "delete", "imag", "len", "make",
    "max", "min", "new", "panic", "print", "println", "real", "recover",
];

const BLANK: &str = "_";

/// Alias for an import: the explicit name if any, else the last segment of
/// the path, `_`-prefixed when it collides with a predeclared identifier.
#[must_use]
pub fn derive_alias(explicit: Option<&str>, path: &str) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    let last = path.rsplit('/').next().unwrap_or(path);
    if PREDECLARED.contains(&last) {
        format!("_{last}")
    } else {
        last.to_string()
    }
}

/// Imports of one file, unique by alias.
///
/// Lookup tries the exact alias first, then the last path segment; the first
/// declared match wins either way. Blank imports are kept once per path and
/// never match a lookup.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    imports: Vec<Import>,
}

impl ImportTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            imports: Vec::new(),
        }
    }

    /// Add an import. Returns `false`, leaving the table unchanged, when the
    /// alias is already taken (or, for blank imports, the path is).
    pub fn insert(&mut self, import: Import) -> bool {
        let duplicate = if import.base.name == BLANK {
            self.imports
                .iter()
                .any(|i| i.base.name == BLANK && i.package == import.package)
        } else {
            self.imports.iter().any(|i| i.base.name == import.base.name)
        };
        if duplicate {
            return false;
        }
        self.imports.push(import);
        true
    }

    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<&Import> {
        if alias == BLANK {
            return None;
        }
        self.imports
            .iter()
            .find(|i| i.base.name == alias)
            .or_else(|| {
                self.imports
                    .iter()
                    .find(|i| i.base.name != BLANK && i.last_segment() == alias)
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }
}

impl FromIterator<Import> for ImportTable {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        let mut table = Self::new();
        for import in iter {
            table.insert(import);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::explicit(Some("ctx"), "context", "ctx")]
    #[case::last_segment(None, "github.com/vetcher/go-astra/types", "types")]
    #[case::flat(None, "fmt", "fmt")]
    #[case::builtin_type_clash(None, "example.com/string", "_string")]
    #[case::builtin_func_clash(None, "example.com/x/len", "_len")]
    #[case::explicit_builtin_kept(Some("error"), "example.com/errs", "error")]
    fn derives_aliases(#[case] explicit: Option<&str>, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(derive_alias(explicit, path), expected);
    }

    #[test]
    fn exact_alias_beats_last_segment() {
        let table: ImportTable = [
            Import::new("json", "github.com/other/json"),
            Import::new("stdjson", "encoding/json"),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.lookup("json").map(|i| i.package.as_str()), Some("github.com/other/json"));
    }

    #[test]
    fn falls_back_to_last_path_segment() {
        let table: ImportTable = [Import::new("yaml", "gopkg.in/yaml.v3"), Import::new("v", "example.com/x/errors")]
            .into_iter()
            .collect();
        assert_eq!(table.lookup("errors").map(|i| i.base.name.as_str()), Some("v"));
        assert!(table.lookup("missing").is_none());
    }

    #[test]
    fn duplicate_alias_is_rejected_first_wins() {
        let mut table = ImportTable::new();
        assert!(table.insert(Import::new("errors", "errors")));
        assert!(!table.insert(Import::new("errors", "github.com/pkg/errors")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("errors").map(|i| i.package.as_str()), Some("errors"));
    }

    #[test]
    fn blank_imports_dedupe_by_path_and_never_match() {
        let mut table = ImportTable::new();
        assert!(table.insert(Import::new("_", "embed")));
        assert!(table.insert(Import::new("_", "net/http/pprof")));
        assert!(!table.insert(Import::new("_", "embed")));
        assert_eq!(table.len(), 2);
        assert!(table.lookup("_").is_none());
        assert!(table.lookup("embed").is_none());
    }
}
