//! Unit tests for `javelin_tree` types.

mod construction_tests;
mod kind_tests;
mod outline_tests;
mod span_tests;

mod behaviour;

use crate::{
    Block, Expression, Identifier, Kind, LineCol, Literal, MemberSelectExpression, PrimitiveType,
    Span, Statement, SyntaxToken, VariableTree,
};

/// A single-line span covering `start..end`.
pub(crate) const fn span(start: u32, end: u32) -> Span {
    Span::new(start, end, LineCol::new(0, start), LineCol::new(0, end))
}

pub(crate) fn token(text: &str, start: u32) -> SyntaxToken {
    let len = u32::try_from(text.len()).expect("short token");
    SyntaxToken::new(text, span(start, start + len))
}

pub(crate) fn ident(name: &str, start: u32) -> Identifier {
    Identifier::new(token(name, start))
}

pub(crate) fn ident_expr(name: &str, start: u32) -> Expression {
    Expression::from(ident(name, start))
}

pub(crate) fn int_literal(text: &str, start: u32) -> Expression {
    Expression::from(Literal::new(Kind::IntLiteral, token(text, start)).expect("int literal"))
}

pub(crate) fn primitive(name: &str, start: u32) -> Expression {
    Expression::from(PrimitiveType::new(token(name, start)))
}

/// `a.b` with `a` at 0 and `b` at 2.
pub(crate) fn select_a_b() -> MemberSelectExpression {
    MemberSelectExpression::new(span(0, 3), Some(ident_expr("a", 0)), Some(ident("b", 2)))
        .expect("member select")
}

/// `int x = 1` starting at 0.
pub(crate) fn int_variable() -> VariableTree {
    VariableTree::new(
        span(0, 9),
        None,
        Some(primitive("int", 0)),
        Some(ident("x", 4)),
        Some(int_literal("1", 8)),
    )
    .expect("variable")
}

pub(crate) fn empty_block(start: u32) -> Block {
    Block::new(span(start, start + 2), Vec::new())
}

pub(crate) fn block_statement(start: u32) -> Statement {
    Statement::from(empty_block(start))
}
