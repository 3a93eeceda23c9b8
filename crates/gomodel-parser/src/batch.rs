//! Scanning several sources independently.

use gomodel_config::ScanOptions;
use gomodel_core::File;

use crate::error::ParserError;
use crate::parse_source;

/// Result of scanning one named source.
#[derive(Debug)]
pub struct BatchEntry {
    pub name: String,
    pub result: Result<File, ParserError>,
}

impl BatchEntry {
    #[must_use]
    pub fn file(&self) -> Option<&File> {
        self.result.as_ref().ok()
    }
}

/// Scan each `(name, source)` pair in order.
///
/// A failing source is logged and recorded in its entry; it never stops the
/// remaining sources from being scanned.
pub fn scan_sources<I, N, S>(inputs: I, options: &ScanOptions) -> Vec<BatchEntry>
where
    I: IntoIterator<Item = (N, S)>,
    N: Into<String>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|(name, source)| {
            let name = name.into();
            let result = parse_source(source.as_ref(), options);
            if let Err(err) = &result {
                tracing::warn!(file = %name, error = %err, "failed to scan source");
            }
            BatchEntry { name, result }
        })
        .collect()
}

/// Files of the entries that scanned successfully, in input order.
pub fn successful(entries: Vec<BatchEntry>) -> impl Iterator<Item = File> {
    entries.into_iter().filter_map(|entry| entry.result.ok())
}
