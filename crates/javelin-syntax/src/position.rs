//! Conversions from Tree-sitter coordinates.
//!
//! Typed-tree spans keep Tree-sitter's zero-based rows and columns. Error
//! reports use one-based line and column numbers.

use javelin_tree::{LineCol, Span};

/// Narrows a Tree-sitter offset, saturating on sources beyond 4 GiB.
fn narrow(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn line_col(point: tree_sitter::Point) -> LineCol {
    LineCol::new(narrow(point.row), narrow(point.column))
}

/// Returns the one-based line and column of `point`.
#[must_use]
pub(crate) fn one_based(point: tree_sitter::Point) -> (u32, u32) {
    let position = line_col(point);
    (
        position.line().saturating_add(1),
        position.column().saturating_add(1),
    )
}

/// Copies the span of a Tree-sitter node.
#[must_use]
pub(crate) fn span_of(node: tree_sitter::Node<'_>) -> Span {
    Span::new(
        narrow(node.start_byte()),
        narrow(node.end_byte()),
        line_col(node.start_position()),
        line_col(node.end_position()),
    )
}
