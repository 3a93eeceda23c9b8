//! Method-to-owner linking.

use gomodel_core::{File, MethodId, Type};

use crate::error::LinkError;

/// Outcome of one linking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Methods attached to a struct or named type.
    pub linked: Vec<MethodId>,
    /// Methods with a common receiver whose type is not declared in the file.
    pub unlinked: Vec<MethodId>,
    /// Methods whose receiver is neither `T` nor `*T`.
    pub rejected: Vec<LinkError>,
}

/// Whether a receiver type is `T` or `*T` for a bare name `T`.
#[must_use]
pub fn is_common_receiver(ty: &Type) -> bool {
    receiver_type_name(ty).is_some()
}

/// `T` for receivers `T` and `*T`.
#[must_use]
pub fn receiver_type_name(ty: &Type) -> Option<&str> {
    match ty {
        Type::Name { name } => Some(name),
        Type::Pointer { count: 1, next } => next.as_name(),
        _ => None,
    }
}

/// Attach every method of `file` to the struct or named type its receiver
/// names.
///
/// Owner lists are cleared first, so the pass is idempotent and can be
/// rerun after files are merged. Structs are searched before named types;
/// the first match wins.
pub fn link_methods(file: &mut File) -> LinkReport {
    for owner in &mut file.structs {
        owner.methods.clear();
    }
    for owner in &mut file.types {
        owner.methods.clear();
    }

    let mut report = LinkReport::default();
    for (index, method) in file.methods.iter().enumerate() {
        let id = MethodId::new(index);
        let Some(owner) = method.receiver.ty.as_ref().and_then(receiver_type_name) else {
            report.rejected.push(LinkError::UncommonReceiver {
                method: method.name().to_string(),
                receiver: method
                    .receiver
                    .ty
                    .as_ref()
                    .map_or_else(|| "<unknown>".to_string(), ToString::to_string),
            });
            continue;
        };

        if let Some(target) = file.structs.iter_mut().find(|s| s.base.name == owner) {
            target.methods.push(id);
        } else if let Some(target) = file.types.iter_mut().find(|t| t.base.name == owner) {
            target.methods.push(id);
        } else {
            tracing::trace!(method = method.name(), owner, "receiver type not declared in file");
            report.unlinked.push(id);
            continue;
        }
        report.linked.push(id);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomodel_core::{Base, FileType, Function, Method, Struct, Variable};
    use pretty_assertions::assert_eq;

    fn method(name: &str, receiver: Type) -> Method {
        Method {
            function: Function {
                base: Base::new(name),
                ..Function::default()
            },
            receiver: Variable::new("r", receiver),
        }
    }

    fn file_with_owners() -> File {
        let mut file = File::new("p");
        file.structs.push(Struct {
            base: Base::new("S"),
            ..Struct::default()
        });
        file.types.push(FileType {
            base: Base::new("Celsius"),
            ty: Type::name("float64"),
            methods: Vec::new(),
        });
        file
    }

    #[test]
    fn value_and_pointer_receivers_link_to_struct() {
        let mut file = file_with_owners();
        file.methods.push(method("M", Type::pointer_to(Type::name("S"))));
        file.methods.push(method("N", Type::name("S")));
        file.methods.push(method("String", Type::name("Celsius")));

        let report = link_methods(&mut file);
        assert_eq!(file.structs[0].methods, vec![MethodId::new(0), MethodId::new(1)]);
        assert_eq!(file.types[0].methods, vec![MethodId::new(2)]);
        assert_eq!(report.linked.len(), 3);
        assert!(report.unlinked.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn linking_twice_is_idempotent() {
        let mut file = file_with_owners();
        file.methods.push(method("M", Type::pointer_to(Type::name("S"))));

        let first = link_methods(&mut file);
        let snapshot = file.clone();
        let second = link_methods(&mut file);
        assert_eq!(file, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn undeclared_receiver_stays_unlinked() {
        let mut file = file_with_owners();
        file.methods.push(method("Elsewhere", Type::name("Remote")));

        let report = link_methods(&mut file);
        assert_eq!(report.unlinked, vec![MethodId::new(0)]);
        assert!(file.structs[0].methods.is_empty());
    }

    #[test]
    fn double_pointer_receiver_is_rejected() {
        let mut file = file_with_owners();
        let receiver = Type::pointer_to(Type::pointer_to(Type::name("S")));
        file.methods.push(method("Weird", receiver));

        let report = link_methods(&mut file);
        assert_eq!(
            report.rejected,
            vec![LinkError::UncommonReceiver {
                method: "Weird".to_string(),
                receiver: "**S".to_string(),
            }]
        );
        assert!(report.linked.is_empty());
        assert!(file.structs[0].methods.is_empty());
    }

    #[test]
    fn struct_wins_over_named_type_of_same_name() {
        let mut file = file_with_owners();
        file.types.push(FileType {
            base: Base::new("S"),
            ty: Type::name("int"),
            methods: Vec::new(),
        });
        file.methods.push(method("M", Type::name("S")));

        link_methods(&mut file);
        assert_eq!(file.structs[0].methods, vec![MethodId::new(0)]);
        assert!(file.types[1].methods.is_empty());
    }

    #[test]
    fn common_receiver_shapes() {
        assert!(is_common_receiver(&Type::name("T")));
        assert!(is_common_receiver(&Type::pointer_to(Type::name("T"))));
        assert!(!is_common_receiver(&Type::slice(Type::name("T"))));
        assert!(!is_common_receiver(&Type::pointer_to(Type::slice(Type::name("T")))));
    }
}
