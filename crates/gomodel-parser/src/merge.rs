//! Merging scanned files of one package.

use gomodel_core::File;

use crate::imports::ImportTable;
use crate::linker::{LinkReport, link_methods};

/// Concatenate scanned files into one and relink methods.
///
/// Imports are deduplicated by alias, first occurrence winning; every other
/// collection is concatenated in input order. The package name comes from
/// the last input and the docs from the last input that has any. Method
/// references of the inputs are discarded and rebuilt, so a method in one
/// file links to a struct declared in another.
pub fn merge_files<I>(files: I) -> (File, LinkReport)
where
    I: IntoIterator<Item = File>,
{
    let mut merged = File::default();
    let mut imports = ImportTable::new();

    for file in files {
        merged.base.name = file.base.name;
        if !file.base.docs.is_empty() {
            merged.base.docs = file.base.docs;
        }
        for import in file.imports {
            if imports.insert(import.clone()) {
                merged.imports.push(import);
            } else {
                tracing::trace!(%import, "import already merged");
            }
        }
        merged.constants.extend(file.constants);
        merged.vars.extend(file.vars);
        merged.structs.extend(file.structs);
        merged.interfaces.extend(file.interfaces);
        merged.functions.extend(file.functions);
        merged.methods.extend(file.methods);
        merged.types.extend(file.types);
    }

    let report = link_methods(&mut merged);
    (merged, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomodel_core::{Base, Function, Import, Method, MethodId, Struct, Type, Variable};
    use pretty_assertions::assert_eq;

    fn file(package: &str, docs: &[&str]) -> File {
        let mut file = File::new(package);
        file.base.docs = docs.iter().map(|d| (*d).to_string()).collect();
        file
    }

    #[test]
    fn dedupes_imports_by_alias_first_wins() {
        let mut a = file("p", &[]);
        a.imports.push(Import::new("errors", "errors"));
        let mut b = file("p", &[]);
        b.imports.push(Import::new("errors", "github.com/pkg/errors"));
        b.imports.push(Import::new("fmt", "fmt"));

        let (merged, _) = merge_files([a, b]);
        let packages: Vec<&str> = merged.imports.iter().map(|i| i.package.as_str()).collect();
        assert_eq!(packages, vec!["errors", "fmt"]);
    }

    #[test]
    fn relinks_methods_across_files() {
        let mut decls = file("p", &[]);
        decls.structs.push(Struct {
            base: Base::new("S"),
            ..Struct::default()
        });
        let mut impls = file("p", &[]);
        impls.methods.push(Method {
            function: Function {
                base: Base::new("M"),
                ..Function::default()
            },
            receiver: Variable::new("s", Type::pointer_to(Type::name("S"))),
        });
        impls.functions.push(Function {
            base: Base::new("helper"),
            ..Function::default()
        });

        let (merged, report) = merge_files([decls, impls]);
        assert_eq!(merged.structs[0].methods, vec![MethodId::new(0)]);
        assert_eq!(report.linked, vec![MethodId::new(0)]);
        assert_eq!(merged.functions.len(), 1);
    }

    #[test]
    fn stale_references_are_rebuilt() {
        let mut a = file("p", &[]);
        a.structs.push(Struct {
            base: Base::new("S"),
            fields: Vec::new(),
            methods: vec![MethodId::new(5)],
        });
        let (merged, report) = merge_files([a]);
        assert!(merged.structs[0].methods.is_empty());
        assert!(report.linked.is_empty());
    }

    #[test]
    fn name_from_last_docs_from_last_non_empty() {
        let a = file("first", &["// Package first."]);
        let b = file("second", &["// Package second."]);
        let c = file("third", &[]);

        let (merged, _) = merge_files([a, b, c]);
        assert_eq!(merged.base.name, "third");
        assert_eq!(merged.base.docs, vec!["// Package second."]);
    }

    #[test]
    fn merging_nothing_yields_empty_file() {
        let (merged, report) = merge_files(Vec::new());
        assert_eq!(merged, File::default());
        assert_eq!(report, LinkReport::default());
    }
}
