//! Lowering: tree-sitter Go tree (via ast-grep) -> [`crate::syntax`] tree.
//!
//! Only the declaration subset is lowered. Function bodies and
//! initializer expressions beyond their outermost shape are dropped.
//! Comment groups are attached the way `go/parser` attaches them: a doc
//! group is the run of comments ending on the line right above a node, and
//! a trailing group is the comments starting on the node's last line.

use ast_grep_core::{AstGrep, Doc, Node};

use crate::error::ParserError;
use crate::syntax::{Decl, DeclKeyword, Ident, SourceFile, Span};

mod comments;
mod decls;
mod exprs;

/// Lower a whole source file.
///
/// # Errors
/// Returns [`ParserError::Syntax`] if the tree contains error or missing
/// nodes, has no package clause, or lacks a child the grammar requires.
pub fn lower<D: Doc>(root: &AstGrep<D>) -> Result<SourceFile, ParserError> {
    let file = root.root();
    if let Some(bad) = first_syntax_error(&file) {
        let message = if bad.is_missing() {
            format!("missing {}", bad.kind())
        } else {
            format!("unexpected `{}`", snippet(&bad.text()))
        };
        return Err(ParserError::Syntax {
            message,
            span: span(&bad),
        });
    }

    let clause = file
        .children()
        .find(|c| c.kind().as_ref() == "package_clause")
        .ok_or_else(|| ParserError::Syntax {
            message: "missing package clause".to_string(),
            span: span(&file),
        })?;
    let package = clause
        .children()
        .find(|c| c.kind().as_ref() == "package_identifier")
        .map(|n| ident(&n))
        .ok_or_else(|| missing(&clause, "package name"))?;
    let doc = comments::doc_group(&clause);

    let mut decls = Vec::new();
    for child in file.children() {
        let kind = child.kind();
        let decl = match kind.as_ref() {
            "import_declaration" => Decl::Gen(decls::lower_gen_decl(&child, DeclKeyword::Import)?),
            "const_declaration" => Decl::Gen(decls::lower_gen_decl(&child, DeclKeyword::Const)?),
            "var_declaration" => Decl::Gen(decls::lower_gen_decl(&child, DeclKeyword::Var)?),
            "type_declaration" => Decl::Gen(decls::lower_gen_decl(&child, DeclKeyword::Type)?),
            "function_declaration" | "method_declaration" => {
                Decl::Func(decls::lower_func_decl(&child)?)
            }
            "package_clause" | "comment" => continue,
            other => {
                if child.is_named() {
                    tracing::trace!(kind = other, "skipping top-level node");
                }
                continue;
            }
        };
        decls.push(decl);
    }

    Ok(SourceFile {
        package,
        doc,
        decls,
    })
}

fn first_syntax_error<'r, D: Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "ERROR" || node.is_missing() {
        return Some(node.clone());
    }
    node.children().find_map(|child| first_syntax_error(&child))
}

fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > 40 {
        let cut: String = line.chars().take(40).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

// ── shared node helpers ───────────────────────────────────────────

fn span<D: Doc>(node: &Node<D>) -> Span {
    node.range().into()
}

fn ident<D: Doc>(node: &Node<D>) -> Ident {
    Ident::new(node.text().as_ref(), span(node))
}

fn missing<D: Doc>(node: &Node<D>, what: &str) -> ParserError {
    ParserError::Syntax {
        message: format!("{} without {what}", node.kind()),
        span: span(node),
    }
}

/// Named children that are not comments.
fn named_children<'r, D: Doc>(node: &Node<'r, D>) -> impl Iterator<Item = Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
}

fn required<'r, D: Doc>(node: &Node<'r, D>, field: &str) -> Result<Node<'r, D>, ParserError> {
    node.field(field).ok_or_else(|| missing(node, field))
}

fn has_token<D: Doc>(node: &Node<D>, token: &str) -> bool {
    node.children()
        .any(|c| !c.is_named() && c.kind().as_ref() == token)
}
