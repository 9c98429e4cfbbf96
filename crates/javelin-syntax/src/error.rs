//! Error types for parsing and tree building.
//!
//! Every failure of the parser facade or the tree builder is reported as a
//! [`SyntaxError`]. Building is fail-fast: the first error aborts the build
//! and no partial tree is returned.

use javelin_tree::TreeError;
use thiserror::Error;

/// Errors from parsing Java source and building typed trees.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser with the Java grammar.
    #[error("failed to initialise Java parser: {message}")]
    ParserInitError {
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter did not produce a tree at all.
    #[error("failed to parse Java source: {message}")]
    ParseError {
        /// Description of the failure.
        message: String,
    },

    /// The source contains syntax errors and the build refuses them.
    #[error("source has {count} syntax error(s); first at {line}:{column}: {message}")]
    SyntaxErrors {
        /// Number of error or missing nodes in the raw tree.
        count: usize,
        /// One-based line of the first error.
        line: u32,
        /// One-based column of the first error.
        column: u32,
        /// Description of the first error.
        message: String,
    },

    /// The raw tree contains a construct the builder does not lower.
    #[error("unsupported construct `{tag}` at {line}:{column}")]
    Unsupported {
        /// Grammar tag of the raw node.
        tag: String,
        /// One-based line of the raw node.
        line: u32,
        /// One-based column of the raw node.
        column: u32,
    },

    /// The raw tree nests deeper than the configured limit.
    #[error("nesting exceeds the maximum depth of {max_depth} at {line}:{column}")]
    NestingTooDeep {
        /// The configured limit.
        max_depth: usize,
        /// One-based line where the limit was hit.
        line: u32,
        /// One-based column where the limit was hit.
        column: u32,
    },

    /// A snippet did not have the shape the entry point expects.
    #[error("expected {expected}, found {found}")]
    SnippetShape {
        /// What the entry point expected.
        expected: &'static str,
        /// What the snippet contained.
        found: String,
    },

    /// A typed node rejected its inputs.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInitError {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Creates an unsupported construct error.
    #[must_use]
    pub fn unsupported(tag: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Unsupported {
            tag: tag.into(),
            line,
            column,
        }
    }

    /// Creates a nesting depth error.
    #[must_use]
    pub const fn nesting_too_deep(max_depth: usize, line: u32, column: u32) -> Self {
        Self::NestingTooDeep {
            max_depth,
            line,
            column,
        }
    }

    /// Creates a snippet shape error.
    #[must_use]
    pub fn snippet_shape(expected: &'static str, found: impl Into<String>) -> Self {
        Self::SnippetShape {
            expected,
            found: found.into(),
        }
    }
}
