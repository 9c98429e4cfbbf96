//! Tree-sitter powered construction of typed Java syntax trees.
//!
//! This crate turns Java source into the immutable trees defined by
//! `javelin-tree`:
//!
//! - **Parsing** via [`Parser`], a thin wrapper over the Tree-sitter Java
//!   grammar that reports syntax errors with one-based positions
//! - **Raw access** via [`RawNode`], the read-only view the builder lowers
//!   from
//! - **Building** via [`TreeBuilder`], which lowers raw trees bottom-up and
//!   fails fast on the first problem, tuned by [`BuildConfig`]
//!
//! # Example
//!
//! ```
//! use javelin_syntax::parse_expression;
//! use javelin_tree::Kind;
//!
//! let select = parse_expression("a.b")?;
//! assert_eq!(select.kind(), Kind::MemberSelect);
//! assert!(select.operator_token().is_err());
//! # Ok::<(), javelin_syntax::SyntaxError>(())
//! ```

mod builder;
mod config;
mod error;
mod parser;
mod position;
mod raw;

pub use builder::TreeBuilder;
pub use config::BuildConfig;
pub use error::SyntaxError;
use javelin_tree::{CompilationUnit, Expression, Statement};
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use raw::RawNode;

/// Parses and builds a whole source file with the default configuration.
///
/// # Errors
///
/// Returns an error if parsing fails, the source has syntax errors, or the
/// builder refuses the tree.
pub fn parse_compilation_unit(source: &str) -> Result<CompilationUnit, SyntaxError> {
    let parsed = Parser::new()?.parse(source)?;
    TreeBuilder::new(BuildConfig::default()).build_compilation_unit(&parsed)
}

/// Parses and builds a single expression such as `a.b.c`.
///
/// A trailing `;` is supplied on a new line when absent, so a closing line
/// comment cannot swallow it. It lies after every node of the expression,
/// so spans are those of the original text.
///
/// # Errors
///
/// Returns an error if parsing fails, the snippet is not exactly one
/// expression, or the builder refuses the tree.
pub fn parse_expression(source: &str) -> Result<Expression, SyntaxError> {
    let statement = if source.trim_end().ends_with(';') {
        source.to_owned()
    } else {
        format!("{source}\n;")
    };
    let parsed = Parser::new()?.parse(&statement)?;
    TreeBuilder::new(BuildConfig::default()).build_expression(&parsed)
}

/// Parses and builds a sequence of statements such as `int x = 1; f(x);`.
///
/// # Errors
///
/// Returns an error if parsing fails, the source has syntax errors, or the
/// builder refuses the tree.
pub fn parse_statements(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    let parsed = Parser::new()?.parse(source)?;
    TreeBuilder::new(BuildConfig::default()).build_statements(&parsed)
}

#[cfg(test)]
mod tests;
