use super::*;
use pretty_assertions::assert_eq;

#[test]
fn imports_in_declaration_order() {
    let file = parse_and_scan(FULL);
    let aliases: Vec<_> = file.imports.iter().map(|i| i.base.name.as_str()).collect();
    assert_eq!(aliases, vec!["context", "errs", "sync", "_", "time"]);
    assert_eq!(
        file.find_import("errs").map(|i| i.package.as_str()),
        Some("errors")
    );
}

#[test]
fn import_docs_merge_spec_doc_and_trailing() {
    let file = parse_and_scan(FULL);
    let errs = file.find_import("errs").expect("errs import");
    assert_eq!(errs.base.docs, docs(&["// errs wraps errors."]));
    let time = file.find_import("time").expect("time import");
    assert_eq!(time.base.docs, docs(&["// clock"]));
}

#[test]
fn derived_alias_avoids_predeclared_names() {
    let file = parse_and_scan("package p\n\nimport \"example.com/x/string\"\n");
    assert_eq!(file.imports[0].base.name, "_string");
    assert_eq!(file.imports[0].package, "example.com/x/string");
}

#[test]
fn duplicate_alias_keeps_first() {
    let source = "package p

import (
	\"errors\"
	errors \"github.com/pkg/errors\"
)
";
    let file = parse_and_scan(source);
    assert_eq!(file.imports.len(), 1);
    assert_eq!(file.imports[0].package, "errors");
}

#[test]
fn raw_string_import_path() {
    let file = parse_and_scan("package p\n\nimport `net/http`\n");
    assert_eq!(file.imports[0].base.name, "http");
    assert_eq!(file.imports[0].package, "net/http");
}

#[test]
fn qualified_types_resolve_against_imports() {
    let file = parse_and_scan(FULL);
    let timeout = file.find_var("DefaultTimeout").expect("DefaultTimeout");
    let Some(Type::Import { qualifier, next }) = &timeout.ty else {
        panic!("expected import type, got {:?}", timeout.ty);
    };
    assert_eq!(qualifier.as_ref().map(|i| i.package.as_str()), Some("time"));
    assert_eq!(**next, Type::name("Duration"));
}
