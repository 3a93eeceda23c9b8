//! Declaration scanner: [`SourceFile`] -> [`File`].
//!
//! One pass over the top-level declarations in source order. Each kind is
//! routed to its processor, which appends to the matching collection of the
//! file being built. Per-kind suppression happens here, before any
//! resolution work for that declaration.

use gomodel_config::ScanOptions;
use gomodel_core::{Base, File};

use crate::comments::merge_comments;
use crate::error::ScanError;
use crate::imports::ImportTable;
use crate::linker::link_methods;
use crate::resolver::TypeResolver;
use crate::syntax::{Decl, DeclKeyword, SourceFile};

mod processors;

/// Mutable state of one scan.
struct ScanState<'o> {
    options: &'o ScanOptions,
    imports: ImportTable,
    file: File,
}

impl ScanState<'_> {
    fn resolver(&self) -> TypeResolver<'_> {
        TypeResolver::new(&self.imports, self.options)
    }
}

/// Scan a syntax tree into a [`File`] without linking methods.
///
/// # Errors
/// Returns the first structural error; no partial file is produced.
/// Generic instantiations such as `List[int]` or a `*G[T]` receiver are
/// not modeled: in any type position they fail the whole scan with
/// [`ResolutionError::UnsupportedShape`](crate::error::ResolutionError).
pub fn scan(source: &SourceFile, options: &ScanOptions) -> Result<File, ScanError> {
    let mut state = ScanState {
        options,
        imports: ImportTable::new(),
        file: File {
            base: Base::new(source.package.name.as_str())
                .with_docs(merge_comments(options, &[source.doc.as_ref()])),
            ..File::default()
        },
    };

    for decl in &source.decls {
        match decl {
            Decl::Gen(gen_decl) => match gen_decl.keyword {
                DeclKeyword::Import => processors::process_imports(&mut state, gen_decl),
                DeclKeyword::Const => {
                    if options.suppress_constants {
                        continue;
                    }
                    let constants = processors::process_values(&state, gen_decl)?;
                    state.file.constants.extend(constants);
                }
                DeclKeyword::Var => {
                    if options.suppress_variables {
                        continue;
                    }
                    let vars = processors::process_values(&state, gen_decl)?;
                    state.file.vars.extend(vars);
                }
                DeclKeyword::Type => processors::process_types(&mut state, gen_decl)?,
            },
            Decl::Func(func) => {
                if options.suppress_functions && options.suppress_methods {
                    continue;
                }
                processors::process_func(&mut state, func)?;
            }
        }
    }

    tracing::debug!(
        package = %state.file.base.name,
        imports = state.file.imports.len(),
        structs = state.file.structs.len(),
        interfaces = state.file.interfaces.len(),
        functions = state.file.functions.len(),
        methods = state.file.methods.len(),
        "scanned file"
    );
    Ok(state.file)
}

/// Scan and link: the usual entry point for a single file.
///
/// Methods the linker rejects stay in [`File::methods`] unattached.
///
/// # Errors
/// Same as [`scan`].
pub fn scan_file(source: &SourceFile, options: &ScanOptions) -> Result<File, ScanError> {
    let mut file = scan(source, options)?;
    let report = link_methods(&mut file);
    for rejected in &report.rejected {
        tracing::debug!(%rejected, "method left unlinked");
    }
    Ok(file)
}

#[cfg(test)]
mod tests;
