use super::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const FUNCS_ONLY: &str = "package p

func F(x int) {}

func (s S) M() {}
";

#[test]
fn suppressing_functions_and_methods_yields_nothing() {
    let options: ScanOptions = [ScanOption::SuppressFunctions, ScanOption::SuppressMethods]
        .into_iter()
        .collect();
    let file = scan_with(FUNCS_ONLY, &options);
    assert!(file.functions.is_empty());
    assert!(file.methods.is_empty());
}

#[test]
fn both_suppressed_skips_unresolvable_signatures() {
    let options: ScanOptions = [ScanOption::SuppressFunctions, ScanOption::SuppressMethods]
        .into_iter()
        .collect();
    let source = "package p\n\nfunc F(r http.Request) {}\n";
    assert!(try_scan(source, &options).is_ok());
}

#[test]
fn suppressing_methods_keeps_functions() {
    let file = scan_with(FUNCS_ONLY, &ScanOptions::from(ScanOption::SuppressMethods));
    assert_eq!(file.functions.len(), 1);
    assert!(file.methods.is_empty());
}

#[test]
fn suppressing_functions_keeps_methods() {
    let file = scan_with(FUNCS_ONLY, &ScanOptions::from(ScanOption::SuppressFunctions));
    assert!(file.functions.is_empty());
    assert_eq!(file.methods.len(), 1);
}

#[rstest]
#[case::structs(ScanOption::SuppressStructs)]
#[case::interfaces(ScanOption::SuppressInterfaces)]
#[case::named_types(ScanOption::SuppressNamedTypes)]
#[case::constants(ScanOption::SuppressConstants)]
#[case::variables(ScanOption::SuppressVariables)]
fn each_kind_is_suppressed_alone(#[case] option: ScanOption) {
    let baseline = parse_and_scan(FULL);
    let file = scan_with(FULL, &ScanOptions::from(option));

    let counts = |f: &File| {
        [
            f.structs.len(),
            f.interfaces.len(),
            f.types.len(),
            f.constants.len(),
            f.vars.len(),
        ]
    };
    let suppressed = match option {
        ScanOption::SuppressStructs => 0,
        ScanOption::SuppressInterfaces => 1,
        ScanOption::SuppressNamedTypes => 2,
        ScanOption::SuppressConstants => 3,
        ScanOption::SuppressVariables => 4,
        other => panic!("unexpected case {other}"),
    };
    for (i, (got, want)) in counts(&file).into_iter().zip(counts(&baseline)).enumerate() {
        if i == suppressed {
            assert_eq!(got, 0, "{option} should empty its kind");
        } else {
            assert_eq!(got, want, "{option} should not touch kind #{i}");
        }
    }
    assert_eq!(file.imports, baseline.imports);
    assert_eq!(file.functions, baseline.functions);
}

#[test]
fn suppressed_struct_keeps_its_methods() {
    let baseline = parse_and_scan(FULL);
    let file = scan_with(FULL, &ScanOptions::from(ScanOption::SuppressStructs));
    assert_eq!(file.methods, baseline.methods);
    let quantity = file.find_type("Quantity").expect("Quantity");
    assert_eq!(quantity.methods.len(), 1);
}

#[test]
fn suppressed_kind_skips_resolution() {
    let source = "package p\n\ntype S struct {\n\tR http.Request\n}\n";
    let file = scan_with(source, &ScanOptions::from(ScanOption::SuppressStructs));
    assert!(file.structs.is_empty());
}

#[test]
fn lenient_imports_keep_unknown_alias() {
    let source = "package p\n\ntype H http.Handler\n";
    let file = scan_with(source, &ScanOptions::from(ScanOption::AllowUnresolvedImports));
    assert_eq!(
        file.types[0].ty,
        Type::import(None, Type::name("Handler"))
    );
}
