//! Tests for [`outline`].

use super::{ident, int_variable, select_a_b, span};
use crate::{Block, Expression, MemberSelectExpression, NodeRef, Statement, outline};

#[test]
fn outline_of_a_leaf_is_one_line() {
    let name = ident("value", 0);
    assert_eq!(outline(NodeRef::from(&name)), "IDENTIFIER value");
}

#[test]
fn outline_indents_children() {
    let outer = MemberSelectExpression::new(
        span(0, 5),
        Some(Expression::from(select_a_b())),
        Some(ident("c", 4)),
    )
    .expect("select");
    insta::assert_snapshot!(outline(NodeRef::from(&outer)), @r"
    MEMBER_SELECT
      MEMBER_SELECT
        IDENTIFIER a
        IDENTIFIER b
      IDENTIFIER c
    ");
}

#[test]
fn outline_shows_literal_and_primitive_text() {
    let block = Block::new(span(0, 20), vec![Statement::from(int_variable())]);
    let text = outline(NodeRef::from(&block));
    assert_eq!(
        text,
        "BLOCK\n  VARIABLE\n    PRIMITIVE_TYPE int\n    IDENTIFIER x\n    INT_LITERAL 1"
    );
    assert!(!text.ends_with('\n'));
}
