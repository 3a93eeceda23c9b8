use ast_grep_core::{Doc, Node};

use super::comments::{doc_group, trailing_group};
use super::exprs::{lower_expr, lower_func_type, lower_params, lower_string_lit, lower_type};
use super::{has_token, ident, named_children, required, span};
use crate::error::ParserError;
use crate::syntax::{
    CommentGroup, DeclKeyword, FuncDecl, GenDecl, ImportSpec, Spec, TypeSpec, ValueSpec,
};

const SPEC_LISTS: &[&str] = &["import_spec_list", "var_spec_list"];

fn spec_kinds(keyword: DeclKeyword) -> &'static [&'static str] {
    match keyword {
        DeclKeyword::Import => &["import_spec"],
        DeclKeyword::Const => &["const_spec"],
        DeclKeyword::Var => &["var_spec"],
        DeclKeyword::Type => &["type_spec", "type_alias"],
    }
}

/// Lower an `import`/`const`/`var`/`type` declaration.
///
/// Specs of a parenthesized group carry their own doc and trailing
/// comments. A lone spec has no doc of its own (the declaration's doc
/// covers it) and its trailing comment may sit after the declaration.
pub(super) fn lower_gen_decl<D: Doc>(
    node: &Node<D>,
    keyword: DeclKeyword,
) -> Result<GenDecl, ParserError> {
    let grouped = has_token(node, "(")
        || node
            .children()
            .any(|c| SPEC_LISTS.contains(&c.kind().as_ref()));

    let kinds = spec_kinds(keyword);
    let mut spec_nodes = Vec::new();
    for child in named_children(node) {
        if SPEC_LISTS.contains(&child.kind().as_ref()) {
            spec_nodes.extend(named_children(&child).filter(|c| kinds.contains(&c.kind().as_ref())));
        } else if kinds.contains(&child.kind().as_ref()) {
            spec_nodes.push(child);
        }
    }

    let mut specs = Vec::with_capacity(spec_nodes.len());
    for spec in &spec_nodes {
        let (doc, comment) = if grouped {
            (doc_group(spec), trailing_group(spec))
        } else {
            (None, trailing_group(spec).or_else(|| trailing_group(node)))
        };
        specs.push(lower_spec(spec, keyword, doc, comment)?);
    }

    tracing::trace!(keyword = keyword.as_str(), grouped, specs = specs.len(), "lowered declaration");
    Ok(GenDecl {
        keyword,
        doc: doc_group(node),
        specs,
        span: span(node),
    })
}

fn lower_spec<D: Doc>(
    node: &Node<D>,
    keyword: DeclKeyword,
    doc: Option<CommentGroup>,
    comment: Option<CommentGroup>,
) -> Result<Spec, ParserError> {
    match keyword {
        DeclKeyword::Import => Ok(Spec::Import(ImportSpec {
            doc,
            comment,
            name: node.field("name").map(|n| ident(&n)),
            path: lower_string_lit(&required(node, "path")?),
            span: span(node),
        })),
        DeclKeyword::Const | DeclKeyword::Var => {
            let names = node
                .children()
                .filter(|c| c.kind().as_ref() == "identifier")
                .map(|n| ident(&n))
                .collect();
            let ty = node.field("type").map(|t| lower_type(&t)).transpose()?;
            let values = match node.field("value") {
                Some(list) => named_children(&list)
                    .map(|v| lower_expr(&v))
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            Ok(Spec::Value(ValueSpec {
                doc,
                comment,
                names,
                ty,
                values,
                span: span(node),
            }))
        }
        DeclKeyword::Type => {
            if node.field("type_parameters").is_some() {
                tracing::trace!(decl = %node.text(), "type parameters are not modeled");
            }
            Ok(Spec::Type(TypeSpec {
                doc,
                comment,
                name: ident(&required(node, "name")?),
                alias: node.kind().as_ref() == "type_alias",
                ty: lower_type(&required(node, "type")?)?,
                span: span(node),
            }))
        }
    }
}

/// Lower a `func` declaration, with or without a receiver.
pub(super) fn lower_func_decl<D: Doc>(node: &Node<D>) -> Result<FuncDecl, ParserError> {
    let recv = if node.kind().as_ref() == "method_declaration" {
        Some(lower_params(&required(node, "receiver")?)?)
    } else {
        None
    };
    Ok(FuncDecl {
        doc: doc_group(node),
        recv,
        name: ident(&required(node, "name")?),
        ty: lower_func_type(node)?,
        span: span(node),
    })
}
