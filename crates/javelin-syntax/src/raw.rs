//! Read-only view over Tree-sitter nodes.
//!
//! [`RawNode`] pairs a Tree-sitter node with the source it was parsed from.
//! It is the only surface the tree builder reads: grammar tag, span, text,
//! fields, ordered named children and ordered anonymous tokens. Comments are
//! grammar extras and never appear as children. ERROR nodes are extras too,
//! but they stay visible so the builder can refuse them.

use javelin_tree::{Span, SyntaxToken};

use crate::error::SyntaxError;
use crate::position::{one_based, span_of};

/// A Tree-sitter node together with its source text.
#[derive(Clone, Copy)]
pub struct RawNode<'t> {
    node: tree_sitter::Node<'t>,
    source: &'t str,
}

impl<'t> RawNode<'t> {
    /// Wraps a Tree-sitter node.
    #[must_use]
    pub const fn new(node: tree_sitter::Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }

    /// Returns the grammar tag, for example `field_access`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.node.kind()
    }

    /// Returns the node's span.
    #[must_use]
    pub fn span(&self) -> Span {
        span_of(self.node)
    }

    /// Returns the source text covered by the node.
    #[must_use]
    pub fn text(&self) -> &'t str {
        self.node
            .utf8_text(self.source.as_bytes())
            .unwrap_or_default()
    }

    /// Returns the one-based line and column of the node's start.
    #[must_use]
    pub fn position(&self) -> (u32, u32) {
        one_based(self.node.start_position())
    }

    /// Returns whether the node is an ERROR node.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.node.is_error()
    }

    /// Returns whether the node was inserted by error recovery.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.node.is_missing()
    }

    /// Returns whether the node or anything below it failed to parse.
    #[must_use]
    pub fn contains_errors(&self) -> bool {
        self.node.has_error()
    }

    /// Returns whether the node is a named grammar rule rather than a token.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    /// Returns the child stored under `name`, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Self> {
        self.node
            .child_by_field_name(name)
            .map(|node| Self::new(node, self.source))
    }

    /// Returns every child stored under `name`, in source order.
    #[must_use]
    pub fn fields(&self, name: &str) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children_by_field_name(name, &mut cursor)
            .map(|node| Self::new(node, self.source))
            .collect()
    }

    /// Returns every child, named or not, excluding comments.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .filter(|node| node.is_error() || !node.is_extra())
            .map(|node| Self::new(node, self.source))
            .collect()
    }

    /// Returns the named children, excluding comments.
    #[must_use]
    pub fn named_children(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(Self::is_named)
            .collect()
    }

    /// Returns the anonymous children: keywords and punctuation.
    #[must_use]
    pub fn tokens(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| !child.is_named())
            .collect()
    }

    /// Returns the first anonymous child spelled `text`.
    #[must_use]
    pub fn find_token(&self, text: &str) -> Option<Self> {
        self.tokens().into_iter().find(|token| token.tag() == text)
    }

    /// Returns whether an anonymous child spelled `text` is present.
    #[must_use]
    pub fn has_token(&self, text: &str) -> bool {
        self.find_token(text).is_some()
    }

    /// Returns the first named child with grammar tag `tag`.
    #[must_use]
    pub fn child_of_tag(&self, tag: &str) -> Option<Self> {
        self.named_children()
            .into_iter()
            .find(|child| child.tag() == tag)
    }

    /// Returns every named child with grammar tag `tag`.
    #[must_use]
    pub fn children_of_tag(&self, tag: &str) -> Vec<Self> {
        self.named_children()
            .into_iter()
            .filter(|child| child.tag() == tag)
            .collect()
    }

    /// Copies the node's text and span into an owned token.
    #[must_use]
    pub fn token(&self) -> SyntaxToken {
        SyntaxToken::new(self.text(), self.span())
    }

    /// Builds the error reported when the builder meets this node
    /// somewhere it cannot lower it.
    #[must_use]
    pub fn unsupported(&self) -> SyntaxError {
        let (line, column) = self.position();
        SyntaxError::unsupported(self.tag(), line, column)
    }
}

impl std::fmt::Debug for RawNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawNode")
            .field("tag", &self.tag())
            .field("span", &self.span())
            .finish()
    }
}
