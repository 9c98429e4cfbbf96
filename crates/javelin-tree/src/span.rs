//! Where a node sits in its source file.
//!
//! Spans are copied out of the raw parse tree when a node is built, so a
//! typed tree never borrows the parser's memory.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A zero-based row and byte column, as Tree-sitter reports them.
///
/// Ordering is by line, then column, so positions compare in document order.
///
/// ```
/// use javelin_tree::LineCol;
///
/// assert!(LineCol::new(1, 9) < LineCol::new(2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineCol {
    line: u32,
    column: u32,
}

impl LineCol {
    /// Creates a position from a zero-based line and byte column.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Zero-based line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Zero-based byte offset within the line.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// The half-open byte range `start_byte..end_byte` of a node, together with
/// the positions of both ends.
///
/// ```
/// use javelin_tree::{LineCol, Span};
///
/// let qualifier = Span::new(0, 1, LineCol::new(0, 0), LineCol::new(0, 1));
/// let name = Span::new(2, 3, LineCol::new(0, 2), LineCol::new(0, 3));
/// let select = qualifier.to(&name);
/// assert_eq!(select.text("a.b"), "a.b");
/// assert!(select.contains(&name));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    start_byte: u32,
    end_byte: u32,
    start: LineCol,
    end: LineCol,
}

impl Span {
    /// Creates a span. `end_byte` is exclusive.
    #[must_use]
    pub const fn new(start_byte: u32, end_byte: u32, start: LineCol, end: LineCol) -> Self {
        Self {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    /// First byte of the node.
    #[must_use]
    pub const fn start_byte(&self) -> u32 {
        self.start_byte
    }

    /// One past the last byte of the node.
    #[must_use]
    pub const fn end_byte(&self) -> u32 {
        self.end_byte
    }

    /// Position of the first byte.
    #[must_use]
    pub const fn start(&self) -> &LineCol {
        &self.start
    }

    /// Position one past the last byte.
    #[must_use]
    pub const fn end(&self) -> &LineCol {
        &self.end
    }

    /// Number of bytes covered. Zero for nodes inserted by error recovery.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end_byte.saturating_sub(self.start_byte)
    }

    /// Returns whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `inner` lies within this span.
    #[must_use]
    pub const fn contains(&self, inner: &Self) -> bool {
        self.start_byte <= inner.start_byte && inner.end_byte <= self.end_byte
    }

    /// Joins this span with a later one, as for a member select built from
    /// a qualifier and a separately parsed name.
    #[must_use]
    pub const fn to(&self, later: &Self) -> Self {
        Self::new(self.start_byte, later.end_byte, self.start, later.end)
    }

    /// Returns the byte range as `usize` offsets for slicing.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        let widen = |offset: u32| usize::try_from(offset).unwrap_or(usize::MAX);
        widen(self.start_byte)..widen(self.end_byte)
    }

    /// Slices the covered text out of `source`, or returns `""` when the span
    /// does not belong to `source`.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.byte_range()).unwrap_or_default()
    }
}
