//! Construction invariants: required children, forbidden children and kind
//! families.

use rstest::rstest;

use super::{
    block_statement, empty_block, ident, ident_expr, int_literal, int_variable, primitive, span,
    token,
};
use crate::{
    Annotation, ArrayAccessExpression, ArrayType, AssertStatement, AssignmentExpression,
    BinaryExpression, Block, CaseGroup, CaseLabel, Catch, ClassTree, CompilationUnit,
    ConditionalExpression, DoWhileStatement, EnumConstant, Expression, ExpressionStatement,
    ForEachStatement, ForStatement, IfStatement, Import, InstanceOf, Kind, LabeledStatement,
    LambdaExpression, Literal, MemberSelectExpression, MethodInvocation, MethodReference,
    MethodTree, NewArray, NewClass, ParameterizedType, ParenthesizedExpression,
    SwitchStatement, SynchronizedStatement, ThrowStatement, TreeError, TryStatement, TypeCast,
    TypeParameter, UnaryExpression, UnionType, VariableTree, WhileStatement, Wildcard,
};

fn missing(kind: Kind, slot: &'static str) -> Result<(), TreeError> {
    Err(TreeError::missing_child(kind, slot))
}

#[rstest]
#[case::member_select_expression(
    MemberSelectExpression::new(span(0, 2), None, Some(ident("b", 1))).map(drop),
    missing(Kind::MemberSelect, "expression")
)]
#[case::member_select_identifier(
    MemberSelectExpression::new(span(0, 2), Some(ident_expr("a", 0)), None).map(drop),
    missing(Kind::MemberSelect, "identifier")
)]
#[case::method_invocation(
    MethodInvocation::new(span(0, 3), None, vec![], vec![]).map(drop),
    missing(Kind::MethodInvocation, "method_select")
)]
#[case::new_class(
    NewClass::new(span(0, 7), None, vec![], None, vec![], None).map(drop),
    missing(Kind::NewClass, "identifier")
)]
#[case::new_array_dimensions_without_type(
    NewArray::new(span(0, 7), None, vec![int_literal("1", 0)], vec![]).map(drop),
    missing(Kind::NewArray, "element_type")
)]
#[case::array_access(
    ArrayAccessExpression::new(span(0, 4), Some(ident_expr("a", 0)), None).map(drop),
    missing(Kind::ArrayAccessExpression, "index")
)]
#[case::parenthesized(
    ParenthesizedExpression::new(span(0, 2), None).map(drop),
    missing(Kind::ParenthesizedExpression, "expression")
)]
#[case::type_cast(
    TypeCast::new(span(0, 6), Some(primitive("int", 1)), None).map(drop),
    missing(Kind::TypeCast, "expression")
)]
#[case::instance_of(
    InstanceOf::new(span(0, 12), Some(ident_expr("a", 0)), token("instanceof", 2), None).map(drop),
    missing(Kind::InstanceOf, "type")
)]
#[case::conditional(
    ConditionalExpression::new(span(0, 5), Some(ident_expr("c", 0)), None, Some(ident_expr("b", 4)))
        .map(drop),
    missing(Kind::ConditionalExpression, "true_expression")
)]
#[case::unary(
    UnaryExpression::new(Kind::UnaryMinus, span(0, 1), token("-", 0), None).map(drop),
    missing(Kind::UnaryMinus, "expression")
)]
#[case::binary(
    BinaryExpression::new(Kind::Plus, span(0, 3), Some(ident_expr("a", 0)), token("+", 1), None)
        .map(drop),
    missing(Kind::Plus, "right_operand")
)]
#[case::assignment(
    AssignmentExpression::new(Kind::Assignment, span(0, 3), None, token("=", 1), Some(ident_expr("b", 2)))
        .map(drop),
    missing(Kind::Assignment, "variable")
)]
#[case::lambda(
    LambdaExpression::new(span(0, 4), vec![], None).map(drop),
    missing(Kind::LambdaExpression, "body")
)]
#[case::method_reference(
    MethodReference::new(span(0, 4), Some(ident_expr("a", 0)), None).map(drop),
    missing(Kind::MethodReference, "method")
)]
#[case::array_type(
    ArrayType::new(span(0, 2), None).map(drop),
    missing(Kind::ArrayType, "type")
)]
#[case::parameterized_type(
    ParameterizedType::new(span(0, 2), None, vec![]).map(drop),
    missing(Kind::ParameterizedType, "type")
)]
#[case::union_type_single_alternative(
    UnionType::new(span(0, 1), vec![ident_expr("A", 0)]).map(drop),
    missing(Kind::UnionType, "alternatives")
)]
#[case::extends_wildcard_without_bound(
    Wildcard::new(Kind::ExtendsWildcard, span(0, 1), None).map(drop),
    missing(Kind::ExtendsWildcard, "bound")
)]
fn expressions_require_their_children(
    #[case] built: Result<(), TreeError>,
    #[case] expected: Result<(), TreeError>,
) {
    assert_eq!(built, expected);
}

#[rstest]
#[case::import(
    Import::new(span(0, 9), false, None).map(drop),
    missing(Kind::Import, "qualified_identifier")
)]
#[case::compilation_unit_annotations_without_package(
    CompilationUnit::new(
        span(0, 4),
        vec![Annotation::new(span(0, 4), Some(ident_expr("A", 1)), vec![]).expect("annotation")],
        None,
        vec![],
        vec![],
    )
    .map(drop),
    missing(Kind::CompilationUnit, "package_name")
)]
#[case::annotation(
    Annotation::new(span(0, 1), None, vec![]).map(drop),
    missing(Kind::Annotation, "annotation_type")
)]
#[case::class_without_name(
    ClassTree::new(Kind::Class, span(0, 8), None, None, vec![], None, vec![], vec![]).map(drop),
    missing(Kind::Class, "simple_name")
)]
#[case::enum_constant(
    EnumConstant::new(span(0, 1), None, None, vec![], None).map(drop),
    missing(Kind::EnumConstant, "simple_name")
)]
#[case::method_without_return_type(
    MethodTree::new(
        Kind::Method,
        span(0, 10),
        None,
        vec![],
        None,
        Some(ident("m", 0)),
        vec![],
        vec![],
        Some(empty_block(4)),
        None,
    )
    .map(drop),
    missing(Kind::Method, "return_type")
)]
#[case::constructor_without_body(
    MethodTree::new(
        Kind::Constructor,
        span(0, 4),
        None,
        vec![],
        None,
        Some(ident("C", 0)),
        vec![],
        vec![],
        None,
        None,
    )
    .map(drop),
    missing(Kind::Constructor, "block")
)]
#[case::variable_without_type(
    VariableTree::new(span(0, 1), None, None, Some(ident("x", 0)), None).map(drop),
    missing(Kind::Variable, "type")
)]
#[case::type_parameter(
    TypeParameter::new(span(0, 1), None, vec![]).map(drop),
    missing(Kind::TypeParameter, "identifier")
)]
fn declarations_require_their_children(
    #[case] built: Result<(), TreeError>,
    #[case] expected: Result<(), TreeError>,
) {
    assert_eq!(built, expected);
}

#[rstest]
#[case::labeled(
    LabeledStatement::new(span(0, 4), Some(ident("l", 0)), None).map(drop),
    missing(Kind::LabeledStatement, "statement")
)]
#[case::expression_statement(
    ExpressionStatement::new(span(0, 1), None).map(drop),
    missing(Kind::ExpressionStatement, "expression")
)]
#[case::if_statement(
    IfStatement::new(span(0, 8), Some(ident_expr("c", 4)), None, None).map(drop),
    missing(Kind::IfStatement, "then_statement")
)]
#[case::assert_statement(
    AssertStatement::new(span(0, 7), None, None).map(drop),
    missing(Kind::AssertStatement, "condition")
)]
#[case::switch_statement(
    SwitchStatement::new(span(0, 12), None, vec![]).map(drop),
    missing(Kind::SwitchStatement, "expression")
)]
#[case::case_group_without_labels(
    CaseGroup::new(span(0, 1), vec![], vec![]).map(drop),
    missing(Kind::CaseGroup, "labels")
)]
#[case::while_statement(
    WhileStatement::new(span(0, 9), None, Some(block_statement(7))).map(drop),
    missing(Kind::WhileStatement, "condition")
)]
#[case::do_statement(
    DoWhileStatement::new(span(0, 9), Some(block_statement(3)), None).map(drop),
    missing(Kind::DoStatement, "condition")
)]
#[case::for_statement(
    ForStatement::new(span(0, 8), vec![], None, vec![], None).map(drop),
    missing(Kind::ForStatement, "statement")
)]
#[case::for_each_statement(
    ForEachStatement::new(span(0, 8), None, Some(ident_expr("xs", 4)), Some(block_statement(8)))
        .map(drop),
    missing(Kind::ForEachStatement, "variable")
)]
#[case::throw_statement(
    ThrowStatement::new(span(0, 6), None).map(drop),
    missing(Kind::ThrowStatement, "expression")
)]
#[case::synchronized_statement(
    SynchronizedStatement::new(span(0, 16), Some(ident_expr("lock", 13)), None).map(drop),
    missing(Kind::SynchronizedStatement, "block")
)]
#[case::bare_try(
    TryStatement::new(span(0, 6), vec![], Some(empty_block(4)), vec![], None).map(drop),
    missing(Kind::TryStatement, "catches")
)]
#[case::catch(
    Catch::new(span(0, 10), None, Some(empty_block(8))).map(drop),
    missing(Kind::Catch, "parameter")
)]
fn statements_require_their_children(
    #[case] built: Result<(), TreeError>,
    #[case] expected: Result<(), TreeError>,
) {
    assert_eq!(built, expected);
}

#[test]
fn constructor_rejects_return_type() {
    let result = MethodTree::new(
        Kind::Constructor,
        span(0, 10),
        None,
        vec![],
        Some(primitive("int", 0)),
        Some(ident("C", 4)),
        vec![],
        vec![],
        Some(empty_block(8)),
        None,
    );
    assert_eq!(
        result.map(drop),
        Err(TreeError::unexpected_child(Kind::Constructor, "return_type"))
    );
}

#[test]
fn interface_rejects_superclass() {
    let result = ClassTree::new(
        Kind::Interface,
        span(0, 20),
        None,
        Some(ident("I", 10)),
        vec![],
        Some(ident_expr("Base", 20)),
        vec![],
        vec![],
    );
    assert_eq!(
        result.map(drop),
        Err(TreeError::unexpected_child(Kind::Interface, "superclass"))
    );
}

#[test]
fn unbounded_wildcard_rejects_bound() {
    let result = Wildcard::new(Kind::UnboundedWildcard, span(0, 1), Some(ident_expr("T", 0)));
    assert_eq!(
        result.map(drop),
        Err(TreeError::unexpected_child(Kind::UnboundedWildcard, "bound"))
    );
}

#[rstest]
#[case::literal(Literal::new(Kind::Plus, token("1", 0)).map(drop), "Literal")]
#[case::unary(
    UnaryExpression::new(Kind::Plus, span(0, 2), token("+", 0), Some(ident_expr("a", 1))).map(drop),
    "UnaryExpression"
)]
#[case::binary(
    BinaryExpression::new(
        Kind::Assignment,
        span(0, 3),
        Some(ident_expr("a", 0)),
        token("=", 1),
        Some(ident_expr("b", 2)),
    )
    .map(drop),
    "BinaryExpression"
)]
#[case::block(Block::with_kind(Kind::IfStatement, span(0, 2), vec![]).map(drop), "Block")]
#[case::wildcard(Wildcard::new(Kind::ArrayType, span(0, 1), None).map(drop), "Wildcard")]
fn shapes_reject_foreign_kinds(#[case] built: Result<(), TreeError>, #[case] shape: &str) {
    match built {
        Err(TreeError::KindMismatch { shape: actual, .. }) => assert_eq!(actual, shape),
        other => panic!("expected a kind mismatch, got {other:?}"),
    }
}

#[test]
fn anonymous_class_has_no_name() {
    let body = ClassTree::anonymous(span(0, 2), vec![]);
    assert!(body.is_anonymous());
    assert_eq!(body.simple_name(), None);
}

#[test]
fn try_with_resources_needs_no_catch() {
    let result = TryStatement::new(span(0, 20), vec![int_variable()], Some(empty_block(18)), vec![], None);
    assert!(result.is_ok());
}

#[test]
fn diamond_has_no_type_arguments() {
    let diamond = ParameterizedType::new(span(0, 11), Some(ident_expr("ArrayList", 0)), vec![])
        .expect("diamond");
    assert!(diamond.is_diamond());
}

#[test]
fn default_case_label_has_no_expressions() {
    assert!(CaseLabel::new(span(0, 8), vec![]).is_default());
    assert!(!CaseLabel::new(span(0, 7), vec![int_literal("1", 5)]).is_default());
}

#[test]
fn error_messages_name_kind_and_slot() {
    let error = TreeError::missing_child(Kind::MemberSelect, "identifier");
    assert_eq!(error.to_string(), "MEMBER_SELECT requires a `identifier` child");
}

#[test]
fn unary_expression_keeps_its_kind_when_wrapped() {
    let negated = UnaryExpression::new(
        Kind::UnaryMinus,
        span(0, 2),
        token("-", 0),
        Some(ident_expr("a", 1)),
    )
    .expect("unary");
    let expression = Expression::from(negated);
    assert_eq!(expression.kind(), Kind::UnaryMinus);
}
