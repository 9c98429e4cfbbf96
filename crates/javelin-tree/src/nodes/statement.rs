//! Statement nodes and the clauses that only appear inside statements.

use crate::category::{Expression, Statement};
use crate::error::TreeError;
use crate::kind::Kind;
use crate::nodes::{Identifier, VariableTree, check_kind, require};
use crate::span::Span;
use crate::tree::{Children, Tree, many, one, opt};
use crate::visitor::Visitor;

/// `{ ... }`, also used for instance and static initializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: Kind,
    span: Span,
    body: Vec<Statement>,
}

impl Block {
    /// Creates a plain `BLOCK`.
    #[must_use]
    pub const fn new(span: Span, body: Vec<Statement>) -> Self {
        Self {
            kind: Kind::Block,
            span,
            body,
        }
    }

    /// Creates a block of a specific kind.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] unless `kind` is `BLOCK`,
    /// `INITIALIZER` or `STATIC_INITIALIZER`.
    pub fn with_kind(kind: Kind, span: Span, body: Vec<Statement>) -> Result<Self, TreeError> {
        check_kind(
            kind,
            |kind| matches!(kind, Kind::Block | Kind::Initializer | Kind::StaticInitializer),
            "Block",
        )?;
        Ok(Self { kind, span, body })
    }

    /// Returns the statements in order.
    #[must_use]
    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

impl Tree for Block {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_block(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(many(&self.body))
    }
}

/// A lone `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStatement {
    span: Span,
}

impl EmptyStatement {
    /// Creates an empty statement.
    #[must_use]
    pub const fn new(span: Span) -> Self {
        Self { span }
    }
}

impl Tree for EmptyStatement {
    fn kind(&self) -> Kind {
        Kind::EmptyStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_empty_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::empty()
    }
}

/// `label: statement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledStatement {
    span: Span,
    label: Identifier,
    statement: Statement,
}

impl LabeledStatement {
    /// Creates a labeled statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the label or the statement is
    /// absent.
    pub fn new(
        span: Span,
        label: Option<Identifier>,
        statement: Option<Statement>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            label: require(label, Kind::LabeledStatement, "label")?,
            statement: require(statement, Kind::LabeledStatement, "statement")?,
        })
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &Identifier {
        &self.label
    }

    /// Returns the labeled statement.
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl Tree for LabeledStatement {
    fn kind(&self) -> Kind {
        Kind::LabeledStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_labeled_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.label).chain(one(&self.statement)))
    }
}

/// An expression evaluated for its side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    span: Span,
    expression: Expression,
}

impl ExpressionStatement {
    /// Creates an expression statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the expression is absent.
    pub fn new(span: Span, expression: Option<Expression>) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::ExpressionStatement, "expression")?,
        })
    }

    /// Returns the expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Tree for ExpressionStatement {
    fn kind(&self) -> Kind {
        Kind::ExpressionStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_expression_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression))
    }
}

/// `if (condition) then else otherwise`
///
/// `else if` chains nest: the else statement is another `IfStatement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    span: Span,
    condition: Expression,
    then_statement: Statement,
    else_statement: Option<Statement>,
}

impl IfStatement {
    /// Creates an if statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the condition or the then
    /// branch is absent.
    pub fn new(
        span: Span,
        condition: Option<Expression>,
        then_statement: Option<Statement>,
        else_statement: Option<Statement>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            condition: require(condition, Kind::IfStatement, "condition")?,
            then_statement: require(then_statement, Kind::IfStatement, "then_statement")?,
            else_statement,
        })
    }

    /// Returns the condition, without its parentheses.
    #[must_use]
    pub const fn condition(&self) -> &Expression {
        &self.condition
    }

    /// Returns the then branch.
    #[must_use]
    pub const fn then_statement(&self) -> &Statement {
        &self.then_statement
    }

    /// Returns the else branch, if any.
    #[must_use]
    pub const fn else_statement(&self) -> Option<&Statement> {
        self.else_statement.as_ref()
    }
}

impl Tree for IfStatement {
    fn kind(&self) -> Kind {
        Kind::IfStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_if_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            one(&self.condition)
                .chain(one(&self.then_statement))
                .chain(opt(self.else_statement.as_ref())),
        )
    }
}

/// `assert condition : detail;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertStatement {
    span: Span,
    condition: Expression,
    detail: Option<Expression>,
}

impl AssertStatement {
    /// Creates an assert statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the condition is absent.
    pub fn new(
        span: Span,
        condition: Option<Expression>,
        detail: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            condition: require(condition, Kind::AssertStatement, "condition")?,
            detail,
        })
    }

    /// Returns the asserted condition.
    #[must_use]
    pub const fn condition(&self) -> &Expression {
        &self.condition
    }

    /// Returns the detail message expression, if any.
    #[must_use]
    pub const fn detail(&self) -> Option<&Expression> {
        self.detail.as_ref()
    }
}

impl Tree for AssertStatement {
    fn kind(&self) -> Kind {
        Kind::AssertStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_assert_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.condition).chain(opt(self.detail.as_ref())))
    }
}

/// `switch (expression) { cases }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchStatement {
    span: Span,
    expression: Expression,
    cases: Vec<CaseGroup>,
}

impl SwitchStatement {
    /// Creates a switch statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the selector is absent.
    pub fn new(
        span: Span,
        expression: Option<Expression>,
        cases: Vec<CaseGroup>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::SwitchStatement, "expression")?,
            cases,
        })
    }

    /// Returns the selector expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the case groups in order.
    #[must_use]
    pub fn cases(&self) -> &[CaseGroup] {
        &self.cases
    }
}

impl Tree for SwitchStatement {
    fn kind(&self) -> Kind {
        Kind::SwitchStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_switch_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression).chain(many(&self.cases)))
    }
}

/// Consecutive case labels and the statements that follow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseGroup {
    span: Span,
    labels: Vec<CaseLabel>,
    body: Vec<Statement>,
}

impl CaseGroup {
    /// Creates a case group.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if no label is given.
    pub fn new(span: Span, labels: Vec<CaseLabel>, body: Vec<Statement>) -> Result<Self, TreeError> {
        if labels.is_empty() {
            return Err(TreeError::missing_child(Kind::CaseGroup, "labels"));
        }
        Ok(Self { span, labels, body })
    }

    /// Returns the labels in order. Never empty.
    #[must_use]
    pub fn labels(&self) -> &[CaseLabel] {
        &self.labels
    }

    /// Returns the statements guarded by the labels.
    #[must_use]
    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

impl Tree for CaseGroup {
    fn kind(&self) -> Kind {
        Kind::CaseGroup
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_case_group(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(many(&self.labels).chain(many(&self.body)))
    }
}

/// `case a, b:` or `default:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLabel {
    span: Span,
    expressions: Vec<Expression>,
}

impl CaseLabel {
    /// Creates a case label. An empty expression list means `default`.
    #[must_use]
    pub const fn new(span: Span, expressions: Vec<Expression>) -> Self {
        Self { span, expressions }
    }

    /// Returns the case expressions.
    #[must_use]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    /// Returns whether this is the `default` label.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl Tree for CaseLabel {
    fn kind(&self) -> Kind {
        Kind::CaseLabel
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_case_label(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(many(&self.expressions))
    }
}

/// `while (condition) statement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStatement {
    span: Span,
    condition: Expression,
    statement: Statement,
}

impl WhileStatement {
    /// Creates a while loop.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the condition or the body is
    /// absent.
    pub fn new(
        span: Span,
        condition: Option<Expression>,
        statement: Option<Statement>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            condition: require(condition, Kind::WhileStatement, "condition")?,
            statement: require(statement, Kind::WhileStatement, "statement")?,
        })
    }

    /// Returns the loop condition.
    #[must_use]
    pub const fn condition(&self) -> &Expression {
        &self.condition
    }

    /// Returns the loop body.
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl Tree for WhileStatement {
    fn kind(&self) -> Kind {
        Kind::WhileStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_while_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.condition).chain(one(&self.statement)))
    }
}

/// `do statement while (condition);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoWhileStatement {
    span: Span,
    statement: Statement,
    condition: Expression,
}

impl DoWhileStatement {
    /// Creates a do-while loop.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the body or the condition is
    /// absent.
    pub fn new(
        span: Span,
        statement: Option<Statement>,
        condition: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            statement: require(statement, Kind::DoStatement, "statement")?,
            condition: require(condition, Kind::DoStatement, "condition")?,
        })
    }

    /// Returns the loop body.
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Returns the loop condition.
    #[must_use]
    pub const fn condition(&self) -> &Expression {
        &self.condition
    }
}

impl Tree for DoWhileStatement {
    fn kind(&self) -> Kind {
        Kind::DoStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_do_while_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.statement).chain(one(&self.condition)))
    }
}

/// `for (initializer; condition; update) statement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStatement {
    span: Span,
    initializer: Vec<Statement>,
    condition: Option<Expression>,
    update: Vec<ExpressionStatement>,
    statement: Statement,
}

impl ForStatement {
    /// Creates a classic for loop.
    ///
    /// The initializer holds either expression statements or variable
    /// declarations.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the body is absent.
    pub fn new(
        span: Span,
        initializer: Vec<Statement>,
        condition: Option<Expression>,
        update: Vec<ExpressionStatement>,
        statement: Option<Statement>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            initializer,
            condition,
            update,
            statement: require(statement, Kind::ForStatement, "statement")?,
        })
    }

    /// Returns the initializer clause.
    #[must_use]
    pub fn initializer(&self) -> &[Statement] {
        &self.initializer
    }

    /// Returns the loop condition, absent for `for (;;)`.
    #[must_use]
    pub const fn condition(&self) -> Option<&Expression> {
        self.condition.as_ref()
    }

    /// Returns the update clause.
    #[must_use]
    pub fn update(&self) -> &[ExpressionStatement] {
        &self.update
    }

    /// Returns the loop body.
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl Tree for ForStatement {
    fn kind(&self) -> Kind {
        Kind::ForStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_for_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            many(&self.initializer)
                .chain(opt(self.condition.as_ref()))
                .chain(many(&self.update))
                .chain(one(&self.statement)),
        )
    }
}

/// `for (Type variable : expression) statement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForEachStatement {
    span: Span,
    variable: VariableTree,
    expression: Expression,
    statement: Statement,
}

impl ForEachStatement {
    /// Creates an enhanced for loop.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if any slot is absent.
    pub fn new(
        span: Span,
        variable: Option<VariableTree>,
        expression: Option<Expression>,
        statement: Option<Statement>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            variable: require(variable, Kind::ForEachStatement, "variable")?,
            expression: require(expression, Kind::ForEachStatement, "expression")?,
            statement: require(statement, Kind::ForEachStatement, "statement")?,
        })
    }

    /// Returns the loop variable.
    #[must_use]
    pub const fn variable(&self) -> &VariableTree {
        &self.variable
    }

    /// Returns the iterated expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the loop body.
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl Tree for ForEachStatement {
    fn kind(&self) -> Kind {
        Kind::ForEachStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_for_each_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            one(&self.variable)
                .chain(one(&self.expression))
                .chain(one(&self.statement)),
        )
    }
}

/// `break label;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakStatement {
    span: Span,
    label: Option<Identifier>,
}

impl BreakStatement {
    /// Creates a break statement.
    #[must_use]
    pub const fn new(span: Span, label: Option<Identifier>) -> Self {
        Self { span, label }
    }

    /// Returns the target label, if any.
    #[must_use]
    pub const fn label(&self) -> Option<&Identifier> {
        self.label.as_ref()
    }
}

impl Tree for BreakStatement {
    fn kind(&self) -> Kind {
        Kind::BreakStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_break_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(opt(self.label.as_ref()))
    }
}

/// `continue label;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueStatement {
    span: Span,
    label: Option<Identifier>,
}

impl ContinueStatement {
    /// Creates a continue statement.
    #[must_use]
    pub const fn new(span: Span, label: Option<Identifier>) -> Self {
        Self { span, label }
    }

    /// Returns the target label, if any.
    #[must_use]
    pub const fn label(&self) -> Option<&Identifier> {
        self.label.as_ref()
    }
}

impl Tree for ContinueStatement {
    fn kind(&self) -> Kind {
        Kind::ContinueStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_continue_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(opt(self.label.as_ref()))
    }
}

/// `return expression;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    span: Span,
    expression: Option<Expression>,
}

impl ReturnStatement {
    /// Creates a return statement.
    #[must_use]
    pub const fn new(span: Span, expression: Option<Expression>) -> Self {
        Self { span, expression }
    }

    /// Returns the returned value, if any.
    #[must_use]
    pub const fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }
}

impl Tree for ReturnStatement {
    fn kind(&self) -> Kind {
        Kind::ReturnStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_return_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(opt(self.expression.as_ref()))
    }
}

/// `throw expression;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowStatement {
    span: Span,
    expression: Expression,
}

impl ThrowStatement {
    /// Creates a throw statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the thrown expression is
    /// absent.
    pub fn new(span: Span, expression: Option<Expression>) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::ThrowStatement, "expression")?,
        })
    }

    /// Returns the thrown expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Tree for ThrowStatement {
    fn kind(&self) -> Kind {
        Kind::ThrowStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_throw_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression))
    }
}

/// `synchronized (expression) block`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynchronizedStatement {
    span: Span,
    expression: Expression,
    block: Block,
}

impl SynchronizedStatement {
    /// Creates a synchronized statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the lock or the block is
    /// absent.
    pub fn new(
        span: Span,
        expression: Option<Expression>,
        block: Option<Block>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::SynchronizedStatement, "expression")?,
            block: require(block, Kind::SynchronizedStatement, "block")?,
        })
    }

    /// Returns the lock expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the guarded block.
    #[must_use]
    pub const fn block(&self) -> &Block {
        &self.block
    }
}

impl Tree for SynchronizedStatement {
    fn kind(&self) -> Kind {
        Kind::SynchronizedStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_synchronized_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression).chain(one(&self.block)))
    }
}

/// `try (resources) block catches finally`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryStatement {
    span: Span,
    resources: Vec<VariableTree>,
    block: Block,
    catches: Vec<Catch>,
    finally_block: Option<Block>,
}

impl TryStatement {
    /// Creates a try statement.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the block is absent, or if a
    /// try without resources has neither catches nor a finally block.
    pub fn new(
        span: Span,
        resources: Vec<VariableTree>,
        block: Option<Block>,
        catches: Vec<Catch>,
        finally_block: Option<Block>,
    ) -> Result<Self, TreeError> {
        let block = require(block, Kind::TryStatement, "block")?;
        if resources.is_empty() && catches.is_empty() && finally_block.is_none() {
            return Err(TreeError::missing_child(Kind::TryStatement, "catches"));
        }
        Ok(Self {
            span,
            resources,
            block,
            catches,
            finally_block,
        })
    }

    /// Returns the try-with-resources declarations.
    #[must_use]
    pub fn resources(&self) -> &[VariableTree] {
        &self.resources
    }

    /// Returns the guarded block.
    #[must_use]
    pub const fn block(&self) -> &Block {
        &self.block
    }

    /// Returns the catch clauses in order.
    #[must_use]
    pub fn catches(&self) -> &[Catch] {
        &self.catches
    }

    /// Returns the finally block, if any.
    #[must_use]
    pub const fn finally_block(&self) -> Option<&Block> {
        self.finally_block.as_ref()
    }
}

impl Tree for TryStatement {
    fn kind(&self) -> Kind {
        Kind::TryStatement
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_try_statement(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            many(&self.resources)
                .chain(one(&self.block))
                .chain(many(&self.catches))
                .chain(opt(self.finally_block.as_ref())),
        )
    }
}

/// `catch (Type parameter) block`
///
/// A multi-catch parameter has a union type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catch {
    span: Span,
    parameter: VariableTree,
    block: Block,
}

impl Catch {
    /// Creates a catch clause.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the parameter or the block is
    /// absent.
    pub fn new(
        span: Span,
        parameter: Option<VariableTree>,
        block: Option<Block>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            parameter: require(parameter, Kind::Catch, "parameter")?,
            block: require(block, Kind::Catch, "block")?,
        })
    }

    /// Returns the caught exception parameter.
    #[must_use]
    pub const fn parameter(&self) -> &VariableTree {
        &self.parameter
    }

    /// Returns the handler block.
    #[must_use]
    pub const fn block(&self) -> &Block {
        &self.block
    }
}

impl Tree for Catch {
    fn kind(&self) -> Kind {
        Kind::Catch
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_catch(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.parameter).chain(one(&self.block)))
    }
}
