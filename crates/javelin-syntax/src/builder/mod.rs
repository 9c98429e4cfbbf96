//! Lowering of raw Tree-sitter trees into typed Java trees.
//!
//! The builder walks the raw tree top-down and constructs typed nodes
//! bottom-up. Every typed constructor validates its own invariants, so the
//! builder passes optional children straight through and lets the model
//! report what is missing. Building is fail-fast: the first error aborts and
//! nothing partial is returned.

mod declarations;
mod expressions;
mod statements;
mod types;

use javelin_tree::{
    CompilationUnit, EmptyStatement, Expression, Identifier, MemberSelectExpression, NodeRef,
    Statement,
};
use tracing::{debug, warn};

use crate::config::BuildConfig;
use crate::error::SyntaxError;
use crate::parser::ParseResult;
use crate::raw::RawNode;

const BUILD_TARGET: &str = "javelin_syntax::builder";

/// Builds typed trees from parse results.
///
/// A builder may be reused for any number of builds; each build starts
/// from depth zero.
///
/// # Example
///
/// ```
/// use javelin_syntax::{BuildConfig, Parser, TreeBuilder};
///
/// let mut parser = Parser::new()?;
/// let parsed = parser.parse("class A {}")?;
/// let unit = TreeBuilder::new(BuildConfig::default()).build_compilation_unit(&parsed)?;
/// assert_eq!(unit.types().len(), 1);
/// # Ok::<(), javelin_syntax::SyntaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    config: BuildConfig,
    depth: usize,
}

impl TreeBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub const fn new(config: BuildConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Returns the builder configuration.
    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds the compilation unit of a whole source file.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has syntax errors and the
    /// configuration refuses them, if the tree contains an unsupported
    /// construct, if nesting exceeds the configured depth, or if a typed
    /// node rejects its children.
    pub fn build_compilation_unit(
        &mut self,
        parsed: &ParseResult,
    ) -> Result<CompilationUnit, SyntaxError> {
        self.begin(parsed, "compilation unit")?;
        let root = parsed.root();
        let unit = self.compilation_unit(root)?;
        finish("compilation unit", NodeRef::from(&unit));
        Ok(unit)
    }

    /// Builds the single expression of a snippet such as `a.b;`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::SnippetShape`] unless the snippet is exactly
    /// one expression statement, plus every error of
    /// [`TreeBuilder::build_compilation_unit`].
    pub fn build_expression(&mut self, parsed: &ParseResult) -> Result<Expression, SyntaxError> {
        self.begin(parsed, "expression")?;
        let root = parsed.root();
        let children = root.named_children();
        let statement = match children.as_slice() {
            [only] if only.tag() == "expression_statement" => *only,
            _ => {
                return Err(SyntaxError::snippet_shape(
                    "a single expression statement",
                    describe(&children),
                ));
            }
        };
        let Some(inner) = statement.named_children().into_iter().next() else {
            return Err(SyntaxError::snippet_shape(
                "a single expression statement",
                "an empty statement",
            ));
        };
        let expression = self.expression(inner)?;
        finish("expression", expression.as_node());
        Ok(expression)
    }

    /// Builds the statements of a snippet such as `int x = 1; f(x);`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`TreeBuilder::build_compilation_unit`].
    pub fn build_statements(&mut self, parsed: &ParseResult) -> Result<Vec<Statement>, SyntaxError> {
        self.begin(parsed, "statements")?;
        let statements = self.statement_list(parsed.root())?;
        debug!(
            target: BUILD_TARGET,
            entry = "statements",
            statements = statements.len(),
            nodes = statements
                .iter()
                .map(|statement| statement.as_node().descendants().count())
                .sum::<usize>(),
            "build finished"
        );
        Ok(statements)
    }

    fn begin(&mut self, parsed: &ParseResult, entry: &'static str) -> Result<(), SyntaxError> {
        self.depth = 0;
        debug!(
            target: BUILD_TARGET,
            entry,
            bytes = parsed.source().len(),
            "build started"
        );
        if !parsed.has_errors() {
            return Ok(());
        }
        if !self.config.reject_syntax_errors() {
            // Recovered MISSING tokens are tolerated; ERROR regions are not.
            return first_error(parsed.root()).map_or(Ok(()), unsupported);
        }
        let errors = parsed.errors();
        let count = errors.len();
        let (line, column, message) = errors.into_iter().next().map_or_else(
            || (1, 1, String::from("syntax error")),
            |first| (first.line, first.column, first.message),
        );
        warn!(
            target: BUILD_TARGET,
            entry,
            count,
            line,
            column,
            "refusing source with syntax errors"
        );
        Err(SyntaxError::SyntaxErrors {
            count,
            line,
            column,
            message,
        })
    }

    /// Runs `build` one level deeper, failing once the depth limit is hit.
    fn nested<T>(
        &mut self,
        raw: RawNode<'_>,
        build: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= self.config.max_depth() {
            let (line, column) = raw.position();
            debug!(
                target: BUILD_TARGET,
                tag = raw.tag(),
                line,
                column,
                "nesting limit reached"
            );
            return Err(SyntaxError::nesting_too_deep(
                self.config.max_depth(),
                line,
                column,
            ));
        }
        self.depth = self.depth.saturating_add(1);
        let result = build(self);
        self.depth = self.depth.saturating_sub(1);
        result
    }

    /// Lowers the statements directly inside `raw`.
    ///
    /// A bare `;` among the children is an empty statement.
    fn statement_list(&mut self, raw: RawNode<'_>) -> Result<Vec<Statement>, SyntaxError> {
        let mut statements = Vec::new();
        for child in raw.children() {
            if child.is_named() {
                self.statement_into(child, &mut statements)?;
            } else if child.tag() == ";" {
                statements.push(EmptyStatement::new(child.span()).into());
            }
        }
        Ok(statements)
    }
}

/// Builds an identifier from a raw `identifier`, `type_identifier`, `this`,
/// `super` or keyword node.
fn identifier(raw: RawNode<'_>) -> Identifier {
    Identifier::new(raw.token())
}

/// Selects `name` from `scope` through a member select spanning both.
fn select(scope: Expression, name: RawNode<'_>) -> Result<Expression, SyntaxError> {
    let span = scope.span().to(&name.span());
    Ok(MemberSelectExpression::new(span, Some(scope), Some(identifier(name)))?.into())
}

/// Finds the first ERROR node in document order.
fn first_error(root: RawNode<'_>) -> Option<RawNode<'_>> {
    let mut pending = vec![root];
    while let Some(raw) = pending.pop() {
        if raw.is_error() {
            return Some(raw);
        }
        if raw.contains_errors() {
            pending.extend(raw.children().into_iter().rev());
        }
    }
    None
}

fn unsupported<T>(raw: RawNode<'_>) -> Result<T, SyntaxError> {
    debug!(
        target: BUILD_TARGET,
        tag = raw.tag(),
        text = raw.text(),
        "unsupported construct"
    );
    Err(raw.unsupported())
}

fn describe(children: &[RawNode<'_>]) -> String {
    if children.is_empty() {
        return String::from("nothing");
    }
    children
        .iter()
        .map(RawNode::tag)
        .collect::<Vec<_>>()
        .join(", ")
}

fn finish(entry: &'static str, root: NodeRef<'_>) {
    debug!(
        target: BUILD_TARGET,
        entry,
        nodes = root.descendants().count(),
        "build finished"
    );
}
