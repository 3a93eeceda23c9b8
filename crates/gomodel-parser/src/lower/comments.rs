use ast_grep_core::{Doc, Node};

use super::span;
use crate::syntax::{Comment, CommentGroup};

/// Newline terminators and other whitespace-only tokens.
fn is_layout<D: Doc>(node: &Node<D>) -> bool {
    !node.is_named() && node.text().trim().is_empty()
}

fn is_comment<D: Doc>(node: &Node<D>) -> bool {
    node.kind().as_ref() == "comment"
}

fn comment<D: Doc>(node: &Node<D>) -> Comment {
    Comment {
        text: node.text().trim_end().to_string(),
        span: span(node),
    }
}

/// Doc comment group of `node`: the comments immediately above it.
///
/// The group must end on the line right before `node`, with no blank line
/// between its comments. Comments that start on the line of the preceding
/// token belong to that token and are left out.
pub(super) fn doc_group<D: Doc>(node: &Node<D>) -> Option<CommentGroup> {
    let mut found = Vec::new();
    let mut next_line = node.start_pos().line();
    let mut boundary = None;
    let mut current = node.prev();

    while let Some(sibling) = current {
        if is_layout(&sibling) {
            current = sibling.prev();
            continue;
        }
        if !is_comment(&sibling) {
            boundary = Some(sibling.end_pos().line());
            break;
        }
        let end = sibling.end_pos().line();
        let adjacent = if found.is_empty() {
            end + 1 == next_line
        } else {
            end + 1 >= next_line
        };
        if !adjacent {
            break;
        }
        next_line = sibling.start_pos().line();
        found.push(sibling.clone());
        current = sibling.prev();
    }
    found.reverse();

    if let Some(mut line) = boundary {
        let owned_by_previous = found
            .iter()
            .take_while(|c| {
                let same_line = c.start_pos().line() == line;
                if same_line {
                    line = c.end_pos().line();
                }
                same_line
            })
            .count();
        found.drain(..owned_by_previous);
    }

    group(&found)
}

/// Trailing comment group of `node`: comments starting on its last line.
pub(super) fn trailing_group<D: Doc>(node: &Node<D>) -> Option<CommentGroup> {
    let mut line = node.end_pos().line();
    let mut found = Vec::new();
    let mut current = node.next();

    while let Some(sibling) = current {
        if sibling.start_pos().line() != line {
            break;
        }
        if is_comment(&sibling) {
            line = sibling.end_pos().line();
            found.push(sibling.clone());
        } else if sibling.is_named() || is_layout(&sibling) {
            break;
        }
        current = sibling.next();
    }

    group(&found)
}

fn group<D: Doc>(nodes: &[Node<D>]) -> Option<CommentGroup> {
    if nodes.is_empty() {
        return None;
    }
    Some(CommentGroup {
        list: nodes.iter().map(comment).collect(),
    })
}
