//! Error types for lowering, resolution, scanning, and linking.

use crate::syntax::Span;

/// A type expression that could not be turned into a [`gomodel_core::Type`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("unsupported type expression: {shape} at {span}")]
    UnsupportedShape { shape: String, span: Span },

    #[error("could not resolve import alias '{alias}' at {span}")]
    UnresolvedImport { alias: String, span: Span },
}

/// Structural errors that abort a scan. No partial file is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("{names} names but {values} values at {span}")]
    ArityMismatch {
        names: usize,
        values: usize,
        span: Span,
    },

    #[error("method {method} has an empty receiver list at {span}")]
    MissingReceiver { method: String, span: Span },

    #[error("{context}: {source}")]
    Type {
        context: String,
        #[source]
        source: ResolutionError,
    },
}

/// A method the linker declined to attach. Recorded, never returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("method {method} has an uncommon receiver type {receiver}")]
    UncommonReceiver { method: String, receiver: String },
}

/// Errors from the source-text entry points.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Syntax error at {span}: {message}")]
    Syntax { message: String, span: Span },

    #[error(transparent)]
    Scan(#[from] ScanError),
}
