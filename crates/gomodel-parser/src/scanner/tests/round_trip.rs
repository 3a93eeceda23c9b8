use super::*;
use pretty_assertions::assert_eq;
use gomodel_core::MethodId;

#[test]
fn struct_and_value_method() {
    let source = "package p

type S struct { F int }

func (s S) M() {}
";
    let file = parse_and_scan(source);
    assert_eq!(file.structs.len(), 1);
    let s = &file.structs[0];
    assert_eq!(s.base.name, "S");
    assert_eq!(s.fields.len(), 1);
    assert_eq!(s.fields[0].name(), "F");
    assert_eq!(s.fields[0].variable.ty, Some(Type::name("int")));

    assert_eq!(file.methods.len(), 1);
    assert_eq!(file.methods[0].name(), "M");
    assert_eq!(file.methods[0].receiver.ty, Some(Type::name("S")));
    assert_eq!(s.methods, vec![MethodId::new(0)]);
}

#[test]
fn unlinked_scan_leaves_references_empty() {
    let source = "package p\n\ntype S struct{}\n\nfunc (s *S) M() {}\n";
    let syntax = lower(&parse_go(source)).expect("lower");
    let file = scan(&syntax, &ScanOptions::default()).expect("scan");
    assert!(file.structs[0].methods.is_empty());
    assert_eq!(file.methods.len(), 1);
}

#[test]
fn scanned_file_serializes() {
    let file = parse_and_scan(FULL);
    let value = serde_json::to_value(&file).expect("serialize file");
    assert_eq!(value["name"], "inventory");
    let back: File = serde_json::from_value(value).expect("deserialize file");
    assert_eq!(back, file);
}
