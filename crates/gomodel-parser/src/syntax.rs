//! Closed syntax tree for the declaration subset of Go.
//!
//! The scanner consumes only these types. [`crate::lower`] builds them from
//! an ast-grep tree; callers with their own front end can construct them
//! directly.

use gomodel_core::ChanDirection;
use std::fmt;

/// Byte range in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// One `// ...` or `/* ... */` comment, markers included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

/// Adjacent comments with no blank line between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub list: Vec<Comment>,
}

impl CommentGroup {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.list.iter().map(|c| c.text.as_str())
    }
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: Ident,
    pub doc: Option<CommentGroup>,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKeyword {
    Import,
    Const,
    Var,
    Type,
}

impl DeclKeyword {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Var => "var",
            Self::Type => "type",
        }
    }
}

/// `import`, `const`, `var`, or `type` declaration, grouped or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub keyword: DeclKeyword,
    pub doc: Option<CommentGroup>,
    pub specs: Vec<Spec>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub doc: Option<CommentGroup>,
    pub comment: Option<CommentGroup>,
    /// Explicit alias, including `_` and `.`.
    pub name: Option<Ident>,
    /// Quoted import path as written.
    pub path: BasicLit,
    pub span: Span,
}

/// One `const` or `var` spec: `a, b T = x, y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub doc: Option<CommentGroup>,
    pub comment: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub comment: Option<CommentGroup>,
    pub name: Ident,
    /// `type A = B` rather than `type A B`.
    pub alias: bool,
    pub ty: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    /// Receiver list; `None` for free functions.
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub params: FieldList,
    pub results: Option<FieldList>,
    pub span: Span,
}

/// Parameter list, struct body, or interface body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    pub fields: Vec<Field>,
    pub span: Span,
}

/// One entry of a [`FieldList`]. `names` is empty for anonymous parameters,
/// embedded struct fields, and embedded interface elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    pub comment: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

impl LitKind {
    /// Go token name of the literal kind.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Imag => "IMAG",
            Self::Char => "CHAR",
            Self::String => "STRING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: LitKind,
    /// Literal text as written, quotes included.
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[must_use]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn ident(name: impl Into<String>, span: Span) -> Self {
        Self::new(ExprKind::Ident(name.into()), span)
    }

    #[must_use]
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

/// The expression shapes that can occur in declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Ident(String),
    BasicLit(BasicLit),
    /// `operand.field`; a qualified type name when `operand` is an identifier.
    Selector { operand: Box<Expr>, field: Ident },
    /// `*X`
    Star(Box<Expr>),
    Paren(Box<Expr>),
    /// `[len]elem`; `len` is `None` for slices and `Ellipsis(None)` for `[...]T`.
    Array {
        len: Option<Box<Expr>>,
        elem: Box<Expr>,
    },
    /// `...elem` in a parameter list, or bare `...` as an array length.
    Ellipsis(Option<Box<Expr>>),
    Map { key: Box<Expr>, value: Box<Expr> },
    Chan {
        dir: ChanDirection,
        value: Box<Expr>,
    },
    Func(FuncType),
    Struct(FieldList),
    Interface(FieldList),
    /// `T{...}`; only the type is kept.
    CompositeLit { ty: Option<Box<Expr>> },
    FuncLit(FuncType),
    Bad,
    /// Any other node, by its grammar kind name.
    Other(String),
}

impl ExprKind {
    /// Short name of the shape for diagnostics.
    #[must_use]
    pub fn shape(&self) -> &str {
        match self {
            Self::Ident(_) => "identifier",
            Self::BasicLit(_) => "basic literal",
            Self::Selector { .. } => "selector",
            Self::Star(_) => "star expression",
            Self::Paren(_) => "parenthesized expression",
            Self::Array { .. } => "array type",
            Self::Ellipsis(_) => "ellipsis",
            Self::Map { .. } => "map type",
            Self::Chan { .. } => "channel type",
            Self::Func(_) => "function type",
            Self::Struct(_) => "struct type",
            Self::Interface(_) => "interface type",
            Self::CompositeLit { .. } => "composite literal",
            Self::FuncLit(_) => "function literal",
            Self::Bad => "bad expression",
            Self::Other(kind) => kind,
        }
    }
}
