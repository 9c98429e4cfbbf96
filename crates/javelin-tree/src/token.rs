//! Lexical tokens attached to typed nodes.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A single lexical token: its source text and where it was found.
///
/// Tokens are owned copies taken from the raw tree when a node is built.
/// They are never reported as children; only trees are.
///
/// # Example
///
/// ```
/// use javelin_tree::{LineCol, Span, SyntaxToken};
///
/// let token = SyntaxToken::new("+", Span::new(2, 3, LineCol::new(0, 2), LineCol::new(0, 3)));
/// assert_eq!(token.text(), "+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntaxToken {
    text: String,
    span: Span,
}

impl SyntaxToken {
    /// Creates a token from its text and span.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Returns the token text exactly as written in the source.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the token's span.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }
}
