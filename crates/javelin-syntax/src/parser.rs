//! Tree-sitter front end for Java source.
//!
//! Parsing never fails on bad Java: Tree-sitter recovers and marks the
//! damage with ERROR and MISSING nodes. [`ParseResult::errors`] reports that
//! damage; the tree builder decides whether to refuse it.

use javelin_tree::Span;
use tracing::trace;

use crate::error::SyntaxError;
use crate::raw::RawNode;

const PARSE_TARGET: &str = "javelin_syntax::parser";

/// Longest excerpt, in characters, kept for a syntax error.
const EXCERPT_LIMIT: usize = 40;

/// A parsed Java source file and the raw tree Tree-sitter built for it.
#[derive(Debug)]
pub struct ParseResult {
    source: String,
    tree: tree_sitter::Tree,
}

impl ParseResult {
    /// Returns the parsed source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns whether error recovery touched any part of the tree.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.root().contains_errors()
    }

    /// Reports each damaged region in document order.
    ///
    /// Regions nest: an ERROR node is reported once, not once per damaged
    /// node inside it.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut found = Vec::new();
        let mut pending = vec![self.root()];
        while let Some(raw) = pending.pop() {
            if raw.is_error() || raw.is_missing() {
                found.push(SyntaxErrorInfo::from_raw(raw));
            } else if raw.contains_errors() {
                pending.extend(raw.children().into_iter().rev());
            }
        }
        found
    }

    /// Returns the `program` node at the root of the raw tree.
    #[must_use]
    pub fn root(&self) -> RawNode<'_> {
        RawNode::new(self.tree.root_node(), &self.source)
    }
}

/// One damaged region of a parsed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Where the damage lies. Empty for a MISSING node.
    pub span: Span,
    /// One-based line of the start of the damage.
    pub line: u32,
    /// One-based column of the start of the damage.
    pub column: u32,
    /// The first line of the damaged text, shortened to a readable length.
    pub context: String,
    /// What went wrong, such as ``expected `;` `` or ``unexpected `)` ``.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_raw(raw: RawNode<'_>) -> Self {
        let (line, column) = raw.position();
        let context = excerpt(raw.text());
        let message = if raw.is_missing() {
            format!("expected `{}`", raw.tag())
        } else if context.is_empty() {
            String::from("unexpected end of input")
        } else {
            format!("unexpected `{context}`")
        };
        Self {
            span: raw.span(),
            line,
            column,
            context,
            message,
        }
    }
}

/// Keeps the first line of `text`, cut at [`EXCERPT_LIMIT`] characters.
fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim_end();
    if first_line.chars().count() <= EXCERPT_LIMIT {
        return first_line.to_owned();
    }
    let mut shortened: String = first_line
        .chars()
        .take(EXCERPT_LIMIT.saturating_sub(3))
        .collect();
    shortened.push_str("...");
    shortened
}

/// A reusable Tree-sitter parser loaded with the Java grammar.
///
/// # Example
///
/// ```
/// use javelin_syntax::Parser;
///
/// let mut parser = Parser::new()?;
/// let parsed = parser.parse("class A { int x = ; }")?;
/// assert!(parsed.has_errors());
/// # Ok::<(), javelin_syntax::SyntaxError>(())
/// ```
pub struct Parser {
    java: tree_sitter::Parser,
}

impl Parser {
    /// Loads the Java grammar.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ParserInitError`] when the grammar was built
    /// for an ABI the linked Tree-sitter runtime does not accept.
    pub fn new() -> Result<Self, SyntaxError> {
        let mut java = tree_sitter::Parser::new();
        java.set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|err| SyntaxError::parser_init(err.to_string()))?;
        Ok(Self { java })
    }

    /// Parses one Java source text.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ParseError`] only when Tree-sitter hands back
    /// no tree at all. Malformed Java still yields a result.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let Some(tree) = self.java.parse(source, None) else {
            return Err(SyntaxError::parse("Tree-sitter returned no tree"));
        };
        let parsed = ParseResult {
            source: source.to_owned(),
            tree,
        };
        trace!(
            target: PARSE_TARGET,
            bytes = source.len(),
            damaged = parsed.has_errors(),
            "parsed source"
        );
        Ok(parsed)
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("language", &"java")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::short("int x", "int x")]
    #[case::multi_line("foo(\n  bar", "foo(")]
    #[case::long(
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa..."
    )]
    fn excerpt_keeps_a_readable_prefix(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(excerpt(text), expected);
    }

    #[rstest]
    fn clean_source_has_no_errors() {
        let mut parser = Parser::new().expect("parser");
        let parsed = parser.parse("class A { void f() { } }").expect("parse");

        assert!(!parsed.has_errors());
        assert!(parsed.errors().is_empty());
        assert_eq!(parsed.root().tag(), "program");
    }

    #[rstest]
    fn missing_token_is_reported_as_expected() {
        let mut parser = Parser::new().expect("parser");
        let parsed = parser.parse("class A { int x = 1 }").expect("parse");

        let errors = parsed.errors();
        let first = errors.first().expect("one error");
        assert_eq!(first.message, "expected `;`");
        assert_eq!(first.span.start_byte(), first.span.end_byte());
    }
}
