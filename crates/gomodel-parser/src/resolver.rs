//! Type resolution: syntax type expressions -> [`Type`].
//!
//! Pure apart from reads of the file's [`ImportTable`]. Anonymous structs,
//! interfaces, and function types go through the same field-list helpers
//! the scanner uses for named declarations.

use gomodel_config::ScanOptions;
use gomodel_core::{ArrayLength, Base, Function, StructField, Type, Variable};

use crate::comments::merge_comments;
use crate::error::ResolutionError;
use crate::imports::ImportTable;
use crate::syntax::{Expr, ExprKind, Field, FieldList, FuncType, Ident, LitKind, Span};
use crate::tags::parse_struct_tag;

/// Resolve one type expression.
///
/// # Errors
/// See [`TypeResolver::resolve`].
pub fn resolve(
    expr: &Expr,
    imports: &ImportTable,
    options: &ScanOptions,
) -> Result<Type, ResolutionError> {
    TypeResolver::new(imports, options).resolve(expr)
}

/// One interface element after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceMember {
    Method(Function),
    Embedded(Variable),
}

#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    imports: &'a ImportTable,
    options: &'a ScanOptions,
}

impl<'a> TypeResolver<'a> {
    #[must_use]
    pub const fn new(imports: &'a ImportTable, options: &'a ScanOptions) -> Self {
        Self { imports, options }
    }

    /// # Errors
    /// [`ResolutionError::UnsupportedShape`] for expressions that are not
    /// types (literals, bad or unknown nodes) and
    /// [`ResolutionError::UnresolvedImport`] for a `pkg.Name` whose `pkg`
    /// matches no import, unless unresolved imports are allowed.
    pub fn resolve(&self, expr: &Expr) -> Result<Type, ResolutionError> {
        match &expr.kind {
            ExprKind::Ident(name) => Ok(Type::name(name.as_str())),
            ExprKind::Selector { operand, field } => self.qualified(operand, field, expr.span),
            ExprKind::Star(inner) => Ok(Type::pointer_to(self.resolve(inner)?)),
            ExprKind::Paren(inner) => self.resolve(inner),
            ExprKind::Array { len, elem } => Ok(Type::array(
                array_length(len.as_deref()),
                self.resolve(elem)?,
            )),
            ExprKind::Ellipsis(Some(elem)) => Ok(Type::ellipsis(self.resolve(elem)?)),
            ExprKind::Map { key, value } => Ok(Type::map(self.resolve(key)?, self.resolve(value)?)),
            ExprKind::Chan { dir, value } => Ok(Type::chan(*dir, self.resolve(value)?)),
            ExprKind::Func(sig) => {
                let (args, results) = self.signature(sig)?;
                Ok(Type::Func { args, results })
            }
            ExprKind::Struct(body) => Ok(Type::Struct {
                fields: self.struct_fields(body)?,
            }),
            ExprKind::Interface(body) => {
                let (methods, embedded) = self.interface_members(body)?;
                Ok(Type::Interface { methods, embedded })
            }
            ExprKind::Ellipsis(None)
            | ExprKind::BasicLit(_)
            | ExprKind::CompositeLit { .. }
            | ExprKind::FuncLit(_)
            | ExprKind::Bad
            | ExprKind::Other(_) => Err(unsupported(expr)),
        }
    }

    /// `pkg.Name` through the import table.
    pub(crate) fn qualified(
        &self,
        operand: &Expr,
        field: &Ident,
        span: Span,
    ) -> Result<Type, ResolutionError> {
        let ExprKind::Ident(alias) = &operand.kind else {
            return Err(unsupported(operand));
        };
        let next = Type::name(field.name.as_str());
        match self.imports.lookup(alias) {
            Some(import) => Ok(Type::import(Some(import.clone()), next)),
            None if self.options.allow_unresolved_imports => {
                tracing::debug!(alias = %alias, %span, "keeping unresolved import alias");
                Ok(Type::import(None, next))
            }
            None => Err(ResolutionError::UnresolvedImport {
                alias: alias.clone(),
                span,
            }),
        }
    }

    /// Argument and result lists of a signature.
    pub fn signature(&self, sig: &FuncType) -> Result<(Vec<Variable>, Vec<Variable>), ResolutionError> {
        let args = self.params(&sig.params)?;
        let results = match &sig.results {
            Some(list) => self.params(list)?,
            None => Vec::new(),
        };
        Ok((args, results))
    }

    pub fn params(&self, list: &FieldList) -> Result<Vec<Variable>, ResolutionError> {
        let mut vars = Vec::with_capacity(list.fields.len());
        for field in &list.fields {
            vars.extend(self.param(field)?);
        }
        Ok(vars)
    }

    /// One parameter entry. `a, b int` expands to one variable per name,
    /// each with its own copy of the type.
    pub fn param(&self, field: &Field) -> Result<Vec<Variable>, ResolutionError> {
        let ty = self.resolve(&field.ty)?;
        let docs = merge_comments(self.options, &[field.doc.as_ref()]);
        if field.names.is_empty() {
            return Ok(vec![Variable {
                base: Base::new("").with_docs(docs),
                ty: Some(ty),
            }]);
        }
        Ok(field
            .names
            .iter()
            .map(|name| Variable::new(name.name.as_str(), ty.clone()).with_docs(docs.clone()))
            .collect())
    }

    pub fn struct_fields(&self, body: &FieldList) -> Result<Vec<StructField>, ResolutionError> {
        let mut fields = Vec::with_capacity(body.fields.len());
        for field in &body.fields {
            fields.extend(self.struct_field(field)?);
        }
        Ok(fields)
    }

    /// One struct field entry. Every name of the entry shares its tag.
    pub fn struct_field(&self, field: &Field) -> Result<Vec<StructField>, ResolutionError> {
        let tag = field
            .tag
            .as_ref()
            .map(|lit| parse_struct_tag(&lit.value))
            .unwrap_or_default();
        Ok(self
            .param(field)?
            .into_iter()
            .map(|variable| StructField {
                variable,
                tags: tag.tags.clone(),
                raw_tag: tag.raw.clone(),
            })
            .collect())
    }

    pub fn interface_members(
        &self,
        body: &FieldList,
    ) -> Result<(Vec<Function>, Vec<Variable>), ResolutionError> {
        let mut methods = Vec::new();
        let mut embedded = Vec::new();
        for field in &body.fields {
            match self.interface_member(field)? {
                Some(InterfaceMember::Method(method)) => methods.push(method),
                Some(InterfaceMember::Embedded(var)) => embedded.push(var),
                None => {}
            }
        }
        Ok((methods, embedded))
    }

    /// Methods keep their own doc group; embedded interfaces merge doc and
    /// trailing comment. Elements that are neither (unions, approximation
    /// terms) yield `None`.
    pub fn interface_member(&self, field: &Field) -> Result<Option<InterfaceMember>, ResolutionError> {
        match (&field.ty.kind, field.names.as_slice()) {
            (ExprKind::Func(sig), [name]) => {
                let (args, results) = self.signature(sig)?;
                Ok(Some(InterfaceMember::Method(Function {
                    base: Base::new(name.name.as_str())
                        .with_docs(merge_comments(self.options, &[field.doc.as_ref()])),
                    args,
                    results,
                })))
            }
            (ExprKind::Ident(_) | ExprKind::Selector { .. }, []) => {
                let docs = merge_comments(self.options, &[field.doc.as_ref(), field.comment.as_ref()]);
                Ok(Some(InterfaceMember::Embedded(Variable {
                    base: Base::new("").with_docs(docs),
                    ty: Some(self.resolve(&field.ty)?),
                })))
            }
            (other, _) => {
                tracing::debug!(shape = other.shape(), span = %field.span, "skipping interface element");
                Ok(None)
            }
        }
    }
}

fn unsupported(expr: &Expr) -> ResolutionError {
    ResolutionError::UnsupportedShape {
        shape: expr.kind.shape().to_string(),
        span: expr.span,
    }
}

/// Classify an array length. Total: anything that is not an integer literal
/// or `...` maps to `Fixed(0)`.
#[must_use]
pub fn array_length(len: Option<&Expr>) -> ArrayLength {
    let Some(len) = len else {
        return ArrayLength::Slice;
    };
    match &len.kind {
        ExprKind::Ellipsis(None) => ArrayLength::Ellipsis,
        ExprKind::BasicLit(lit) if lit.kind == LitKind::Int => {
            ArrayLength::Fixed(parse_int_literal(&lit.value).unwrap_or_else(|| {
                tracing::debug!(literal = %lit.value, "array length out of range");
                0
            }))
        }
        other => {
            tracing::trace!(shape = other.shape(), "non-literal array length");
            ArrayLength::Fixed(0)
        }
    }
}

/// Value of a Go integer literal: decimal, `0x`, `0o`, `0b`, or legacy
/// leading-zero octal, with optional `_` separators.
#[must_use]
pub fn parse_int_literal(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (8, oct)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (2, bin)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };
    if body.is_empty() {
        return None;
    }
    u64::from_str_radix(body, radix).ok()
}
