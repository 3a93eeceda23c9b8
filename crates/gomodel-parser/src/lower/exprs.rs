use ast_grep_core::{Doc, Node};
use gomodel_core::ChanDirection;

use super::comments::{doc_group, trailing_group};
use super::{has_token, ident, missing, named_children, required, span};
use crate::error::ParserError;
use crate::syntax::{BasicLit, Expr, ExprKind, Field, FieldList, FuncType, Ident, LitKind};

/// Lower a node in type position.
pub(super) fn lower_type<D: Doc>(node: &Node<D>) -> Result<Expr, ParserError> {
    let kind = match node.kind().as_ref() {
        "type_identifier" | "identifier" => ExprKind::Ident(node.text().to_string()),
        "qualified_type" => {
            let package = required(node, "package")?;
            ExprKind::Selector {
                operand: Expr::ident(package.text().as_ref(), span(&package)).boxed(),
                field: ident(&required(node, "name")?),
            }
        }
        "pointer_type" => ExprKind::Star(lower_type(&only_child(node)?)?.boxed()),
        "parenthesized_type" => ExprKind::Paren(lower_type(&only_child(node)?)?.boxed()),
        "array_type" => ExprKind::Array {
            len: Some(lower_expr(&required(node, "length")?)?.boxed()),
            elem: lower_type(&required(node, "element")?)?.boxed(),
        },
        "implicit_length_array_type" => ExprKind::Array {
            len: Some(Expr::new(ExprKind::Ellipsis(None), span(node)).boxed()),
            elem: lower_type(&required(node, "element")?)?.boxed(),
        },
        "slice_type" => ExprKind::Array {
            len: None,
            elem: lower_type(&required(node, "element")?)?.boxed(),
        },
        "map_type" => ExprKind::Map {
            key: lower_type(&required(node, "key")?)?.boxed(),
            value: lower_type(&required(node, "value")?)?.boxed(),
        },
        "channel_type" => ExprKind::Chan {
            dir: chan_direction(node),
            value: lower_type(&required(node, "value")?)?.boxed(),
        },
        "function_type" => ExprKind::Func(lower_func_type(node)?),
        "struct_type" => ExprKind::Struct(lower_struct_fields(node)?),
        "interface_type" => ExprKind::Interface(lower_interface(node)?),
        other => ExprKind::Other(other.to_string()),
    };
    Ok(Expr::new(kind, span(node)))
}

/// Lower a node in expression position (initializers, array lengths).
pub(super) fn lower_expr<D: Doc>(node: &Node<D>) -> Result<Expr, ParserError> {
    let kind = match node.kind().as_ref() {
        "identifier" | "true" | "false" | "nil" | "iota" => {
            ExprKind::Ident(node.text().to_string())
        }
        "int_literal" => basic(node, LitKind::Int),
        "float_literal" => basic(node, LitKind::Float),
        "imaginary_literal" => basic(node, LitKind::Imag),
        "rune_literal" => basic(node, LitKind::Char),
        "interpreted_string_literal" | "raw_string_literal" => basic(node, LitKind::String),
        "selector_expression" => ExprKind::Selector {
            operand: lower_expr(&required(node, "operand")?)?.boxed(),
            field: ident(&required(node, "field")?),
        },
        "parenthesized_expression" => ExprKind::Paren(lower_expr(&only_child(node)?)?.boxed()),
        "composite_literal" => ExprKind::CompositeLit {
            ty: node
                .field("type")
                .map(|t| lower_type(&t))
                .transpose()?
                .map(Expr::boxed),
        },
        "func_literal" => ExprKind::FuncLit(lower_func_type(node)?),
        other => ExprKind::Other(other.to_string()),
    };
    Ok(Expr::new(kind, span(node)))
}

pub(super) fn lower_string_lit<D: Doc>(node: &Node<D>) -> BasicLit {
    BasicLit {
        kind: LitKind::String,
        value: node.text().to_string(),
        span: span(node),
    }
}

fn basic<D: Doc>(node: &Node<D>, kind: LitKind) -> ExprKind {
    ExprKind::BasicLit(BasicLit {
        kind,
        value: node.text().to_string(),
        span: span(node),
    })
}

fn only_child<'r, D: Doc>(node: &Node<'r, D>) -> Result<Node<'r, D>, ParserError> {
    named_children(node)
        .next()
        .ok_or_else(|| missing(node, "inner type"))
}

/// `<-chan T` receives, `chan<- T` sends. Only the node's own tokens count,
/// so `chan (<-chan T)` stays bidirectional.
fn chan_direction<D: Doc>(node: &Node<D>) -> ChanDirection {
    let tokens: Vec<String> = node
        .children()
        .filter(|c| !c.is_named())
        .take(2)
        .map(|c| c.kind().to_string())
        .collect();
    match tokens.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["<-", "chan"] => ChanDirection::Receive,
        ["chan", "<-"] => ChanDirection::Send,
        _ => ChanDirection::Both,
    }
}

// ── signatures ────────────────────────────────────────────────────

/// Signature of any node with `parameters`/`result` fields: function and
/// method declarations, function types and literals, interface methods.
pub(super) fn lower_func_type<D: Doc>(node: &Node<D>) -> Result<FuncType, ParserError> {
    let params = lower_params(&required(node, "parameters")?)?;
    let results = match node.field("result") {
        Some(result) if result.kind().as_ref() == "parameter_list" => Some(lower_params(&result)?),
        Some(result) => {
            let ty = lower_type(&result)?;
            Some(FieldList {
                span: ty.span,
                fields: vec![Field {
                    doc: None,
                    comment: None,
                    names: Vec::new(),
                    span: ty.span,
                    ty,
                    tag: None,
                }],
            })
        }
        None => None,
    };
    Ok(FuncType {
        params,
        results,
        span: span(node),
    })
}

/// Lower a `parameter_list`. Variadic parameters get an `Ellipsis` type.
pub(super) fn lower_params<D: Doc>(node: &Node<D>) -> Result<FieldList, ParserError> {
    let mut fields = Vec::new();
    for param in named_children(node) {
        let variadic = match param.kind().as_ref() {
            "parameter_declaration" => false,
            "variadic_parameter_declaration" => true,
            other => {
                tracing::debug!(kind = other, "skipping parameter list entry");
                continue;
            }
        };
        let names = identifiers(&param, "identifier");
        let declared = lower_type(&required(&param, "type")?)?;
        let ty = if variadic {
            Expr::new(ExprKind::Ellipsis(Some(declared.boxed())), span(&param))
        } else {
            declared
        };
        fields.push(Field {
            doc: doc_group(&param),
            comment: trailing_group(&param),
            names,
            ty,
            tag: None,
            span: span(&param),
        });
    }
    Ok(FieldList {
        fields,
        span: span(node),
    })
}

// ── struct and interface bodies ───────────────────────────────────

fn lower_struct_fields<D: Doc>(node: &Node<D>) -> Result<FieldList, ParserError> {
    let body = node
        .children()
        .find(|c| c.kind().as_ref() == "field_declaration_list")
        .ok_or_else(|| missing(node, "field list"))?;

    let mut fields = Vec::new();
    for decl in named_children(&body) {
        if decl.kind().as_ref() != "field_declaration" {
            continue;
        }
        let names = identifiers(&decl, "field_identifier");
        let declared = lower_type(&required(&decl, "type")?)?;
        // Embedded `*T`: the star is a token of the field, not of the type.
        let ty = if names.is_empty() && has_token(&decl, "*") {
            Expr::new(ExprKind::Star(declared.boxed()), span(&decl))
        } else {
            declared
        };
        fields.push(Field {
            doc: doc_group(&decl),
            comment: trailing_group(&decl),
            names,
            ty,
            tag: decl.field("tag").map(|t| lower_string_lit(&t)),
            span: span(&decl),
        });
    }
    Ok(FieldList {
        fields,
        span: span(&body),
    })
}

/// Interface elements: methods become named fields with a function type,
/// single-type elements become embedded fields, and unions or constraint
/// terms become embedded fields of an `Other` type.
fn lower_interface<D: Doc>(node: &Node<D>) -> Result<FieldList, ParserError> {
    let mut fields = Vec::new();
    for elem in named_children(node) {
        let (names, ty) = match elem.kind().as_ref() {
            "method_elem" | "method_spec" => {
                let name = ident(&required(&elem, "name")?);
                let sig = lower_func_type(&elem)?;
                (vec![name], Expr::new(ExprKind::Func(sig), span(&elem)))
            }
            "type_elem" => {
                let terms: Vec<_> = named_children(&elem).collect();
                match terms.as_slice() {
                    [single] => (Vec::new(), lower_type(single)?),
                    _ => (
                        Vec::new(),
                        Expr::new(ExprKind::Other("type_elem".to_string()), span(&elem)),
                    ),
                }
            }
            "type_identifier" | "qualified_type" => (Vec::new(), lower_type(&elem)?),
            other => (
                Vec::new(),
                Expr::new(ExprKind::Other(other.to_string()), span(&elem)),
            ),
        };
        fields.push(Field {
            doc: doc_group(&elem),
            comment: trailing_group(&elem),
            names,
            ty,
            tag: None,
            span: span(&elem),
        });
    }
    Ok(FieldList {
        fields,
        span: span(node),
    })
}

fn identifiers<D: Doc>(node: &Node<D>, kind: &str) -> Vec<Ident> {
    node.children()
        .filter(|c| c.kind().as_ref() == kind)
        .map(|n| ident(&n))
        .collect()
}
