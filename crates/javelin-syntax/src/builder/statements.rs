//! Lowering of statements and blocks.

use javelin_tree::{
    AssertStatement, Block, BreakStatement, CaseGroup, CaseLabel, Catch, ContinueStatement,
    DoWhileStatement, EmptyStatement, Expression, ExpressionStatement, ForEachStatement,
    ForStatement, IfStatement, LabeledStatement, MethodInvocation, ReturnStatement, Span,
    Statement, SwitchStatement, SynchronizedStatement, ThrowStatement, TryStatement, UnionType,
    VariableTree, WhileStatement,
};

use super::declarations::is_type_declaration;
use super::expressions::parenthesized_inner;
use super::{TreeBuilder, identifier, select, unsupported};
use crate::error::SyntaxError;
use crate::raw::RawNode;

impl TreeBuilder {
    /// Lowers a `block` or `constructor_body`.
    pub(super) fn block(&mut self, raw: RawNode<'_>) -> Result<Block, SyntaxError> {
        let body = self.block_statements(raw)?;
        Ok(Block::new(raw.span(), body))
    }

    /// Lowers the statements of a block one level deeper.
    pub(super) fn block_statements(&mut self, raw: RawNode<'_>) -> Result<Vec<Statement>, SyntaxError> {
        self.nested(raw, |this| this.statement_list(raw))
    }

    /// Appends the statements `raw` lowers to.
    ///
    /// A local variable declaration yields one statement per declarator.
    pub(super) fn statement_into(
        &mut self,
        raw: RawNode<'_>,
        statements: &mut Vec<Statement>,
    ) -> Result<(), SyntaxError> {
        match raw.tag() {
            "local_variable_declaration" => {
                statements.extend(self.variables(raw)?.into_iter().map(Statement::from));
            }
            "explicit_constructor_invocation" => {
                statements.push(self.constructor_call(raw)?.into());
            }
            tag if is_type_declaration(tag) => {
                statements.push(self.class_declaration(raw)?.into());
            }
            _ => statements.push(self.statement(raw)?),
        }
        Ok(())
    }

    /// Lowers one statement in a position that holds exactly one, such as
    /// the body of a loop.
    fn statement(&mut self, raw: RawNode<'_>) -> Result<Statement, SyntaxError> {
        self.nested(raw, |this| this.statement_inner(raw))
    }

    fn opt_statement(&mut self, raw: Option<RawNode<'_>>) -> Result<Option<Statement>, SyntaxError> {
        raw.map(|found| self.statement(found)).transpose()
    }

    fn statement_inner(&mut self, raw: RawNode<'_>) -> Result<Statement, SyntaxError> {
        if !raw.is_named() {
            return if raw.tag() == ";" {
                Ok(EmptyStatement::new(raw.span()).into())
            } else {
                unsupported(raw)
            };
        }
        match raw.tag() {
            "block" => Ok(Block::new(raw.span(), self.statement_list(raw)?).into()),
            "expression_statement" => {
                let expression = self.opt_expression(raw.named_children().into_iter().next())?;
                Ok(ExpressionStatement::new(raw.span(), expression)?.into())
            }
            "labeled_statement" => {
                let children = raw.named_children();
                let label = children.first().copied().map(identifier);
                let statement = self.opt_statement(children.get(1).copied())?;
                Ok(LabeledStatement::new(raw.span(), label, statement)?.into())
            }
            "if_statement" => {
                let condition = self.condition(raw)?;
                let then_statement = self.opt_statement(raw.field("consequence"))?;
                // `else if` is an if statement in the else slot.
                let else_statement = self.opt_statement(raw.field("alternative"))?;
                Ok(IfStatement::new(raw.span(), condition, then_statement, else_statement)?.into())
            }
            "while_statement" | "do_statement" | "for_statement" | "enhanced_for_statement" => {
                self.loop_statement(raw)
            }
            "break_statement" => {
                let label = raw.child_of_tag("identifier").map(identifier);
                Ok(BreakStatement::new(raw.span(), label).into())
            }
            "continue_statement" => {
                let label = raw.child_of_tag("identifier").map(identifier);
                Ok(ContinueStatement::new(raw.span(), label).into())
            }
            "return_statement" => {
                let value = self.opt_expression(raw.named_children().into_iter().next())?;
                Ok(ReturnStatement::new(raw.span(), value).into())
            }
            "throw_statement" => {
                let thrown = self.opt_expression(raw.named_children().into_iter().next())?;
                Ok(ThrowStatement::new(raw.span(), thrown)?.into())
            }
            "assert_statement" => {
                let mut parts = raw.named_children().into_iter();
                let condition = self.opt_expression(parts.next())?;
                let detail = self.opt_expression(parts.next())?;
                Ok(AssertStatement::new(raw.span(), condition, detail)?.into())
            }
            "synchronized_statement" => {
                let lock = raw
                    .child_of_tag("parenthesized_expression")
                    .and_then(parenthesized_inner);
                let monitor = self.opt_expression(lock)?;
                let body = raw.field("body").map(|block| self.block(block)).transpose()?;
                Ok(SynchronizedStatement::new(raw.span(), monitor, body)?.into())
            }
            "try_statement" | "try_with_resources_statement" => self.try_statement(raw),
            "switch_expression" => self.switch_statement(raw),
            "local_variable_declaration" | "explicit_constructor_invocation" => {
                let mut lowered = Vec::new();
                self.statement_into(raw, &mut lowered)?;
                match (lowered.pop(), lowered.is_empty()) {
                    (Some(single), true) => Ok(single),
                    _ => unsupported(raw),
                }
            }
            tag if is_type_declaration(tag) => Ok(self.class_declaration(raw)?.into()),
            _ => unsupported(raw),
        }
    }

    /// Lowers the parenthesized `condition` field without its parentheses.
    fn condition(&mut self, raw: RawNode<'_>) -> Result<Option<Expression>, SyntaxError> {
        let inner = raw.field("condition").and_then(parenthesized_inner);
        self.opt_expression(inner)
    }

    /// Lowers `this(x)`, `super(x)` and `outer.super(x)` as a call statement.
    fn constructor_call(&mut self, raw: RawNode<'_>) -> Result<ExpressionStatement, SyntaxError> {
        let constructor = raw.field("constructor");
        let object = self.opt_expression(raw.field("object"))?;
        let method_select = match (object, constructor) {
            (Some(outer), Some(keyword)) => Some(select(outer, keyword)?),
            (None, Some(keyword)) => Some(identifier(keyword).into()),
            (_, None) => None,
        };
        let type_arguments = self.type_arguments(raw.field("type_arguments"))?;
        let arguments_raw = raw.field("arguments");
        let arguments = self.arguments(arguments_raw)?;
        let call_span = arguments_raw.map_or_else(|| raw.span(), |list| raw.span().to(&list.span()));
        let call = MethodInvocation::new(call_span, method_select, type_arguments, arguments)?;
        Ok(ExpressionStatement::new(raw.span(), Some(call.into()))?)
    }

    fn loop_statement(&mut self, raw: RawNode<'_>) -> Result<Statement, SyntaxError> {
        match raw.tag() {
            "while_statement" => {
                let condition = self.condition(raw)?;
                let body = self.opt_statement(raw.field("body"))?;
                Ok(WhileStatement::new(raw.span(), condition, body)?.into())
            }
            "do_statement" => {
                let body = self.opt_statement(raw.field("body"))?;
                let condition = self.condition(raw)?;
                Ok(DoWhileStatement::new(raw.span(), body, condition)?.into())
            }
            "enhanced_for_statement" => {
                let variable = self.declared_variable(raw, None)?;
                let iterable = self.opt_expression(raw.field("value"))?;
                let body = self.opt_statement(raw.field("body"))?;
                Ok(ForEachStatement::new(raw.span(), Some(variable), iterable, body)?.into())
            }
            _ => self.for_statement(raw),
        }
    }

    fn for_statement(&mut self, raw: RawNode<'_>) -> Result<Statement, SyntaxError> {
        let mut initializer = Vec::new();
        for init in raw.fields("init") {
            if init.tag() == "local_variable_declaration" {
                initializer.extend(self.variables(init)?.into_iter().map(Statement::from));
            } else {
                initializer.push(self.expression_statement(init)?.into());
            }
        }
        let condition = self.opt_expression(raw.field("condition"))?;
        let update = raw
            .fields("update")
            .into_iter()
            .map(|step| self.expression_statement(step))
            .collect::<Result<Vec<_>, _>>()?;
        let body = self.opt_statement(raw.field("body"))?;
        Ok(ForStatement::new(raw.span(), initializer, condition, update, body)?.into())
    }

    /// Wraps a bare expression, such as a for-loop update, in a statement
    /// spanning just the expression.
    fn expression_statement(&mut self, raw: RawNode<'_>) -> Result<ExpressionStatement, SyntaxError> {
        let expression = self.expression(raw)?;
        Ok(ExpressionStatement::new(raw.span(), Some(expression))?)
    }

    fn try_statement(&mut self, raw: RawNode<'_>) -> Result<Statement, SyntaxError> {
        let resources = raw
            .field("resources")
            .map(|specification| {
                specification
                    .children_of_tag("resource")
                    .into_iter()
                    .map(|resource| self.resource(resource))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();
        let body = raw.field("body").map(|block| self.block(block)).transpose()?;
        let catches = raw
            .children_of_tag("catch_clause")
            .into_iter()
            .map(|clause| self.catch_clause(clause))
            .collect::<Result<Vec<_>, _>>()?;
        let finally_block = raw
            .child_of_tag("finally_clause")
            .and_then(|clause| clause.child_of_tag("block"))
            .map(|block| self.block(block))
            .transpose()?;
        Ok(TryStatement::new(raw.span(), resources, body, catches, finally_block)?.into())
    }

    /// Lowers a declared resource. Resources naming an existing variable
    /// are not modelled.
    fn resource(&mut self, raw: RawNode<'_>) -> Result<VariableTree, SyntaxError> {
        if raw.field("type").is_none() {
            return unsupported(raw);
        }
        self.declared_variable(raw, raw.field("value"))
    }

    /// Lowers `catch (A | B e) { ... }`. Several caught types form a union.
    fn catch_clause(&mut self, raw: RawNode<'_>) -> Result<Catch, SyntaxError> {
        let parameter = raw
            .child_of_tag("catch_formal_parameter")
            .map(|declaration| self.catch_parameter(declaration))
            .transpose()?;
        let body = raw.field("body").map(|block| self.block(block)).transpose()?;
        Ok(Catch::new(raw.span(), parameter, body)?)
    }

    fn catch_parameter(&mut self, raw: RawNode<'_>) -> Result<VariableTree, SyntaxError> {
        let modifiers = self.modifiers_of(raw)?;
        let caught = match raw.child_of_tag("catch_type") {
            Some(list) => {
                let mut alternatives = self.types(list.named_children())?;
                if alternatives.len() > 1 {
                    Some(UnionType::new(list.span(), alternatives)?.into())
                } else {
                    alternatives.pop()
                }
            }
            None => None,
        };
        Ok(VariableTree::new(
            raw.span(),
            modifiers,
            caught,
            raw.field("name").map(identifier),
            None,
        )?)
    }

    /// Lowers a `switch` used as a statement with `case x:` groups.
    ///
    /// Tree-sitter gives every label its own group, so a fall-through label
    /// arrives as a group with no statements. Its labels join the next
    /// group; a label-only group at the end of the switch stays a group of
    /// its own. Arrow-form rules, patterns and guards are refused.
    fn switch_statement(&mut self, raw: RawNode<'_>) -> Result<Statement, SyntaxError> {
        let selector = self.condition(raw)?;
        let mut cases = Vec::new();
        let mut pending: Option<(Span, Vec<CaseLabel>)> = None;
        for group in raw.field("body").map(|body| body.named_children()).unwrap_or_default() {
            if group.tag() != "switch_block_statement_group" {
                return unsupported(group);
            }
            let (labels, body) = self.case_group(group)?;
            let (span, all_labels) = match pending.take() {
                Some((first, mut earlier)) => {
                    earlier.extend(labels);
                    (first.to(&group.span()), earlier)
                }
                None => (group.span(), labels),
            };
            if body.is_empty() {
                pending = Some((span, all_labels));
                continue;
            }
            cases.push(CaseGroup::new(span, all_labels, body)?);
        }
        if let Some((span, labels)) = pending {
            cases.push(CaseGroup::new(span, labels, Vec::new())?);
        }
        Ok(SwitchStatement::new(raw.span(), selector, cases)?.into())
    }

    /// Lowers the labels and statements of one raw group.
    fn case_group(
        &mut self,
        raw: RawNode<'_>,
    ) -> Result<(Vec<CaseLabel>, Vec<Statement>), SyntaxError> {
        self.nested(raw, |this| {
            let mut labels = Vec::new();
            let mut body = Vec::new();
            for child in raw.children() {
                if child.tag() == "switch_label" {
                    labels.push(this.case_label(child)?);
                } else if child.is_named() {
                    this.statement_into(child, &mut body)?;
                } else if child.tag() == ";" {
                    body.push(EmptyStatement::new(child.span()).into());
                }
            }
            Ok((labels, body))
        })
    }

    /// Lowers `case a, b` or `default`. A default label has no expressions.
    fn case_label(&mut self, raw: RawNode<'_>) -> Result<CaseLabel, SyntaxError> {
        let mut expressions = Vec::new();
        for value in raw.named_children() {
            if matches!(value.tag(), "pattern" | "guard" | "record_pattern" | "type_pattern") {
                return unsupported(value);
            }
            expressions.push(self.expression(value)?);
        }
        Ok(CaseLabel::new(raw.span(), expressions))
    }
}
