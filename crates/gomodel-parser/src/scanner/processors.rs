use gomodel_core::{
    Base, FileType, Function, Import, Interface, Method, Struct, StructField, Type, Variable,
};

use super::ScanState;
use crate::comments::merge_comments;
use crate::error::{ResolutionError, ScanError};
use crate::imports::derive_alias;
use crate::resolver::{InterfaceMember, TypeResolver};
use crate::syntax::{
    Expr, ExprKind, Field, FieldList, FuncDecl, GenDecl, Spec, TypeSpec, ValueSpec,
};

fn context(context: String) -> impl FnOnce(ResolutionError) -> ScanError {
    move |source| ScanError::Type { context, source }
}

/// Label of a field entry for error context: its names, or the embedded
/// type's shape.
fn field_label(field: &Field) -> String {
    if field.names.is_empty() {
        format!("embedded {}", field.ty.kind.shape())
    } else {
        field
            .names
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ── import_declaration ────────────────────────────────────────────

pub(super) fn process_imports(state: &mut ScanState<'_>, decl: &GenDecl) {
    for spec in &decl.specs {
        let Spec::Import(spec) = spec else {
            continue;
        };
        let package = spec.path.value.trim_matches(['"', '`']).to_string();
        let alias = derive_alias(spec.name.as_ref().map(|n| n.name.as_str()), &package);
        let import = Import {
            base: Base::new(alias).with_docs(merge_comments(
                state.options,
                &[decl.doc.as_ref(), spec.doc.as_ref(), spec.comment.as_ref()],
            )),
            package,
        };
        tracing::trace!(%import, "import");
        if state.imports.insert(import.clone()) {
            state.file.imports.push(import);
        } else {
            tracing::debug!(%import, "dropping import with duplicate alias");
        }
    }
}

// ── const_declaration / var_declaration ───────────────────────────

pub(super) fn process_values(state: &ScanState<'_>, decl: &GenDecl) -> Result<Vec<Variable>, ScanError> {
    let resolver = state.resolver();
    let keyword = decl.keyword.as_str();
    let mut vars = Vec::new();
    for spec in &decl.specs {
        let Spec::Value(spec) = spec else {
            continue;
        };
        check_arity(spec)?;
        let docs = merge_comments(
            state.options,
            &[decl.doc.as_ref(), spec.doc.as_ref(), spec.comment.as_ref()],
        );
        for (i, name) in spec.names.iter().enumerate() {
            let ctx = || context(format!("{keyword} {}", name.name));
            let ty = match &spec.ty {
                Some(ty) => Some(resolver.resolve(ty).map_err(ctx())?),
                None => infer_type(&resolver, spec.values.get(i)).map_err(ctx())?,
            };
            if ty.is_none() {
                tracing::trace!(name = %name.name, "type not inferable from initializer");
            }
            vars.push(Variable {
                base: Base::new(name.name.as_str()).with_docs(docs.clone()),
                ty,
            });
        }
    }
    Ok(vars)
}

fn check_arity(spec: &ValueSpec) -> Result<(), ScanError> {
    let (names, values) = (spec.names.len(), spec.values.len());
    if values > 0 && values != names {
        return Err(ScanError::ArityMismatch {
            names,
            values,
            span: spec.span,
        });
    }
    Ok(())
}

/// Best-effort type of an initializer. `None` when it cannot be told
/// without type-checking, including a missing value (implicit repetition).
fn infer_type(resolver: &TypeResolver<'_>, value: Option<&Expr>) -> Result<Option<Type>, ResolutionError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match &value.kind {
        ExprKind::BasicLit(lit) => Ok(Some(Type::name(lit.kind.token()))),
        ExprKind::CompositeLit { ty: Some(ty) } => match resolver.resolve(ty) {
            Ok(ty) => Ok(Some(ty)),
            Err(ResolutionError::UnsupportedShape { shape, span }) => {
                tracing::debug!(%shape, %span, "composite literal type not modeled");
                Ok(None)
            }
            Err(err) => Err(err),
        },
        ExprKind::Selector { operand, field } if matches!(operand.kind, ExprKind::Ident(_)) => {
            resolver.qualified(operand, field, value.span).map(Some)
        }
        ExprKind::FuncLit(sig) => {
            let (args, results) = resolver.signature(sig)?;
            Ok(Some(Type::Func { args, results }))
        }
        _ => Ok(None),
    }
}

// ── type_declaration ──────────────────────────────────────────────

pub(super) fn process_types(state: &mut ScanState<'_>, decl: &GenDecl) -> Result<(), ScanError> {
    for spec in &decl.specs {
        let Spec::Type(spec) = spec else {
            continue;
        };
        let base = Base::new(spec.name.name.as_str()).with_docs(merge_comments(
            state.options,
            &[decl.doc.as_ref(), spec.doc.as_ref(), spec.comment.as_ref()],
        ));
        match &spec.ty.kind {
            ExprKind::Struct(body) => {
                if state.options.suppress_structs {
                    continue;
                }
                let fields = struct_fields(&state.resolver(), spec, body)?;
                tracing::trace!(name = %base.name, fields = fields.len(), "struct");
                state.file.structs.push(Struct {
                    base,
                    fields,
                    methods: Vec::new(),
                });
            }
            ExprKind::Interface(body) => {
                if state.options.suppress_interfaces {
                    continue;
                }
                let (methods, embedded) = interface_members(&state.resolver(), spec, body)?;
                tracing::trace!(name = %base.name, methods = methods.len(), "interface");
                state.file.interfaces.push(Interface {
                    base,
                    methods,
                    embedded,
                });
            }
            _ => {
                if state.options.suppress_named_types {
                    continue;
                }
                let ty = state
                    .resolver()
                    .resolve(&spec.ty)
                    .map_err(context(format!("type {}", spec.name.name)))?;
                tracing::trace!(name = %base.name, kind = %ty.kind(), "named type");
                state.file.types.push(FileType {
                    base,
                    ty,
                    methods: Vec::new(),
                });
            }
        }
    }
    Ok(())
}

fn struct_fields(
    resolver: &TypeResolver<'_>,
    spec: &TypeSpec,
    body: &FieldList,
) -> Result<Vec<StructField>, ScanError> {
    let mut fields = Vec::with_capacity(body.fields.len());
    for field in &body.fields {
        let resolved = resolver.struct_field(field).map_err(context(format!(
            "struct {} field {}",
            spec.name.name,
            field_label(field)
        )))?;
        fields.extend(resolved);
    }
    Ok(fields)
}

fn interface_members(
    resolver: &TypeResolver<'_>,
    spec: &TypeSpec,
    body: &FieldList,
) -> Result<(Vec<Function>, Vec<Variable>), ScanError> {
    let mut methods = Vec::new();
    let mut embedded = Vec::new();
    for field in &body.fields {
        let member = resolver.interface_member(field).map_err(context(format!(
            "interface {} {}",
            spec.name.name,
            field_label(field)
        )))?;
        match member {
            Some(InterfaceMember::Method(method)) => methods.push(method),
            Some(InterfaceMember::Embedded(var)) => embedded.push(var),
            None => {}
        }
    }
    Ok((methods, embedded))
}

// ── function_declaration / method_declaration ─────────────────────

pub(super) fn process_func(state: &mut ScanState<'_>, decl: &FuncDecl) -> Result<(), ScanError> {
    let is_method = decl.recv.is_some();
    if (is_method && state.options.suppress_methods)
        || (!is_method && state.options.suppress_functions)
    {
        return Ok(());
    }

    let label = if is_method { "method" } else { "func" };
    let name = &decl.name.name;
    let resolver = state.resolver();
    let args = resolver
        .params(&decl.ty.params)
        .map_err(context(format!("{label} {name} args")))?;
    let results = match &decl.ty.results {
        Some(list) => resolver
            .params(list)
            .map_err(context(format!("{label} {name} results")))?,
        None => Vec::new(),
    };
    let function = Function {
        base: Base::new(name.as_str())
            .with_docs(merge_comments(state.options, &[decl.doc.as_ref()])),
        args,
        results,
    };

    match &decl.recv {
        None => {
            tracing::trace!(%function, "function");
            state.file.functions.push(function);
        }
        Some(recv) => {
            let receiver = resolver
                .params(recv)
                .map_err(context(format!("method {name} receiver")))?
                .into_iter()
                .next()
                .ok_or_else(|| ScanError::MissingReceiver {
                    method: name.clone(),
                    span: recv.span,
                })?;
            let method = Method { function, receiver };
            tracing::trace!(%method, "method");
            state.file.methods.push(method);
        }
    }
    Ok(())
}
