//! # gomodel-parser
//!
//! Go declaration scanner built on ast-grep.
//!
//! Pipeline: source text -> ast-grep tree ([`parser`]) -> closed syntax
//! tree ([`lower`], [`syntax`]) -> [`gomodel_core::File`] ([`scanner`],
//! using [`resolver`], [`imports`], [`tags`], [`comments`]) -> method
//! linking ([`linker`]). [`merge`] combines files of one package and
//! [`batch`] scans many sources without letting one failure stop the rest.

pub mod batch;
pub mod comments;
pub mod error;
pub mod imports;
pub mod linker;
pub mod lower;
pub mod merge;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod syntax;
pub mod tags;

pub use batch::{BatchEntry, scan_sources};
pub use error::{LinkError, ParserError, ResolutionError, ScanError};
pub use linker::{LinkReport, link_methods};
pub use merge::merge_files;
pub use scanner::{scan, scan_file};

use gomodel_config::ScanOptions;
use gomodel_core::File;

/// Parse, lower, scan, and link one Go source file.
///
/// # Errors
/// [`ParserError::Syntax`] if the source does not parse cleanly,
/// [`ParserError::Scan`] for structural scan errors.
pub fn parse_source(source: &str, options: &ScanOptions) -> Result<File, ParserError> {
    let tree = parser::parse_go(source);
    let syntax = lower::lower(&tree)?;
    Ok(scan_file(&syntax, options)?)
}
