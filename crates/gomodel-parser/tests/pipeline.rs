use gomodel_config::{ScanOption, ScanOptions};
use gomodel_core::{MethodId, Type};
use gomodel_parser::batch::successful;
use gomodel_parser::{ParserError, merge_files, parse_source, scan_sources};
use pretty_assertions::assert_eq;

const TYPES_GO: &str = "// Package shop sells things.
package shop

import \"time\"

type Order struct {
	ID      int
	Created time.Time
}
";

const METHODS_GO: &str = "package shop

import (
	\"fmt\"
	\"time\"
)

func (o *Order) String() string { return fmt.Sprint(o.ID) }

func (o Order) Age(now time.Time) time.Duration { return now.Sub(o.Created) }
";

#[test]
fn package_split_across_files_links_after_merge() {
    let entries = scan_sources(
        [("types.go", TYPES_GO), ("methods.go", METHODS_GO)],
        &ScanOptions::default(),
    );
    let files: Vec<_> = successful(entries).collect();
    assert_eq!(files.len(), 2);
    assert!(files[1].methods.iter().all(|m| m.receiver.ty.is_some()));

    let (merged, report) = merge_files(files);
    assert_eq!(merged.base.name, "shop");
    assert_eq!(merged.base.docs, vec!["// Package shop sells things.".to_string()]);

    let aliases: Vec<_> = merged.imports.iter().map(|i| i.base.name.as_str()).collect();
    assert_eq!(aliases, vec!["time", "fmt"]);

    let order = merged.find_struct("Order").expect("Order");
    assert_eq!(order.methods, vec![MethodId::new(0), MethodId::new(1)]);
    assert_eq!(report.linked.len(), 2);
    assert!(report.unlinked.is_empty());
}

#[test]
fn single_file_methods_without_owner_are_unlinked() {
    let file = parse_source(METHODS_GO, &ScanOptions::default()).expect("scan");
    assert_eq!(file.methods.len(), 2);
    assert!(file.structs.is_empty());
    assert_eq!(
        file.methods[0].receiver.ty,
        Some(Type::pointer_to(Type::name("Order")))
    );
}

#[test]
fn options_parsed_from_config_list() {
    let options = ScanOptions::parse_list("suppress_methods,suppress_comments").expect("options");
    assert!(options.contains(ScanOption::SuppressMethods));
    let file = parse_source(TYPES_GO, &options).expect("scan");
    assert!(file.base.docs.is_empty());
}

#[test]
fn syntax_error_is_reported() {
    let err = parse_source("package shop\n\nfunc (\n", &ScanOptions::default())
        .expect_err("broken source");
    assert!(matches!(err, ParserError::Syntax { .. }), "got: {err}");
    assert!(err.to_string().starts_with("Syntax error at "));
}
