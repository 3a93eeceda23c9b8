//! Comment merging.

use gomodel_config::ScanOptions;

use crate::syntax::CommentGroup;

/// Flatten up to three comment groups (declaration doc, spec doc, trailing
/// comment) into one ordered list of raw comment lines.
///
/// Missing groups contribute nothing. With `suppress_comments` set the
/// result is always empty.
#[must_use]
pub fn merge_comments(options: &ScanOptions, groups: &[Option<&CommentGroup>]) -> Vec<String> {
    if options.suppress_comments {
        return Vec::new();
    }
    groups
        .iter()
        .flatten()
        .flat_map(|group| group.lines())
        .map(str::to_string)
        .collect()
}
