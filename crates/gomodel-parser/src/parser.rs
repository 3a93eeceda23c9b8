//! ast-grep wrapper for Go source text.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by [`parse_go`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Whether a path names a Go source file. Test files (`_test.go`) count.
#[must_use]
pub fn is_go_file(file_path: &str) -> bool {
    file_path
        .rsplit(['/', '\\'])
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(stem, ext)| ext == "go" && !stem.is_empty())
}

/// Parse Go source text into an ast-grep tree.
///
/// Never fails: syntax errors become `ERROR` nodes in the tree and are
/// reported by [`crate::lower::lower`].
#[must_use]
pub fn parse_go(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}
