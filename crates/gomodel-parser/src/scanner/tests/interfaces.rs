use super::*;
use pretty_assertions::assert_eq;

#[test]
fn interface_methods_and_embedded_in_order() {
    let file = parse_and_scan(FULL);
    let store = file.find_interface("Store").expect("Store");
    assert_eq!(store.base.docs, docs(&["// Store persists items."]));
    let methods: Vec<_> = store.methods.iter().map(|m| m.base.name.as_str()).collect();
    assert_eq!(methods, vec!["Get", "Put"]);
    assert_eq!(store.embedded.len(), 1);
    assert_eq!(store.embedded[0].ty, Some(Type::name("Lister")));
}

#[test]
fn interface_method_docs_and_signature() {
    let file = parse_and_scan(FULL);
    let get = file
        .find_interface("Store")
        .and_then(|s| s.method("Get"))
        .expect("Store.Get");
    assert_eq!(get.base.docs, docs(&["// Get fetches one item."]));
    assert_eq!(
        get.to_string(),
        "Get(ctx context.Context, sku string) (*Item, error)"
    );
}

#[test]
fn embedded_slot_merges_trailing_comment() {
    let file = parse_and_scan(FULL);
    let store = file.find_interface("Store").expect("Store");
    assert_eq!(store.embedded[0].base.docs, docs(&["// embedded lister"]));
}

#[test]
fn qualified_embedded_interfaces() {
    let file = parse_and_scan(INTERFACES);
    let rc = file.find_interface("ReadCloser").expect("ReadCloser");
    let embedded: Vec<_> = rc
        .embedded
        .iter()
        .filter_map(|v| v.ty.as_ref())
        .map(ToString::to_string)
        .collect();
    assert_eq!(embedded, vec!["io.Reader", "io.Closer"]);
    assert!(rc.methods.is_empty());
}

#[test]
fn union_constraints_are_skipped() {
    let file = parse_and_scan(INTERFACES);
    let number = file.find_interface("Number").expect("Number");
    assert!(number.methods.is_empty());
    assert!(number.embedded.is_empty());
}

#[test]
fn empty_interface() {
    let file = parse_and_scan(INTERFACES);
    let empty = file.find_interface("Empty").expect("Empty");
    assert!(empty.methods.is_empty() && empty.embedded.is_empty());
}

#[test]
fn named_results_in_interface_method() {
    let file = parse_and_scan(INTERFACES);
    let visitor = file.find_interface("Visitor").expect("Visitor");
    let visit = visitor.method("Visit").expect("Visit");
    assert_eq!(visit.base.docs, docs(&["// Visit is called per node."]));
    assert_eq!(visit.results[0].base.name, "w");
    assert_eq!(visit.results[0].ty, Some(Type::name("Visitor")));
    assert!(visitor.method("Done").is_some_and(|d| d.base.docs.is_empty()));
}

#[test]
fn anonymous_interface_in_var() {
    let source = "package p\n\nvar sink interface{ Write(p []byte) (int, error) }\n";
    let file = parse_and_scan(source);
    let Some(Type::Interface { methods, embedded }) = &file.vars[0].ty else {
        panic!("expected interface type");
    };
    assert_eq!(methods[0].base.name, "Write");
    assert!(embedded.is_empty());
}
