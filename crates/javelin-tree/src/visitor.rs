//! Double-dispatch visitor protocol.
//!
//! [`Tree::accept`](crate::Tree::accept) calls exactly one method of
//! [`Visitor`]: the one declared for the node's shape. Every method defaults
//! to [`Visitor::visit_default`], which itself does nothing. Rules override
//! only the methods they care about; a rule that handles a whole category
//! overrides `visit_default` and checks [`Kind::category`].
//!
//! Dispatch never recurses. Combine it with [`walk`](crate::walk) or
//! [`NodeRef::descendants`] to cover a subtree.
//!
//! # Example
//!
//! ```
//! use javelin_tree::{Identifier, LineCol, NodeRef, Span, SyntaxToken, Tree, Visitor};
//!
//! #[derive(Default)]
//! struct Names<'ast>(Vec<&'ast str>);
//!
//! impl<'ast> Visitor<'ast> for Names<'ast> {
//!     fn visit_identifier(&mut self, tree: &'ast Identifier) {
//!         self.0.push(tree.name());
//!     }
//! }
//!
//! let span = Span::new(0, 1, LineCol::new(0, 0), LineCol::new(0, 1));
//! let id = Identifier::new(SyntaxToken::new("x", span));
//! let mut names = Names::default();
//! id.accept(&mut names);
//! assert_eq!(names.0, ["x"]);
//! ```
//!
//! [`Kind::category`]: crate::Kind::category
//! [`NodeRef::descendants`]: crate::NodeRef::descendants

use crate::nodes::{
    Annotation, ArrayAccessExpression, ArrayType, AssertStatement, AssignmentExpression,
    BinaryExpression, Block, BreakStatement, CaseGroup, CaseLabel, Catch, ClassTree,
    CompilationUnit, ConditionalExpression, ContinueStatement, DoWhileStatement, EmptyStatement,
    EnumConstant, ExpressionStatement, ForEachStatement, ForStatement, Identifier, IfStatement,
    Import, InstanceOf, LabeledStatement, LambdaExpression, Literal, MemberSelectExpression,
    MethodInvocation, MethodReference, MethodTree, Modifiers, NewArray, NewClass,
    ParameterizedType, ParenthesizedExpression, PrimitiveType, ReturnStatement, SwitchStatement,
    SynchronizedStatement, ThrowStatement, TryStatement, TypeCast, TypeParameter, UnaryExpression,
    UnionType, VariableTree, WhileStatement, Wildcard,
};
use crate::tree::NodeRef;

/// Receives one callback per node shape.
pub trait Visitor<'ast> {
    /// Fallback for every shape whose method is not overridden.
    fn visit_default(&mut self, _node: NodeRef<'ast>) {}

    /// `COMPILATION_UNIT`
    fn visit_compilation_unit(&mut self, tree: &'ast CompilationUnit) {
        self.visit_default(tree.into());
    }

    /// `IMPORT`
    fn visit_import(&mut self, tree: &'ast Import) {
        self.visit_default(tree.into());
    }

    /// `CLASS`, `ENUM`, `INTERFACE`, `ANNOTATION_TYPE`
    fn visit_class(&mut self, tree: &'ast ClassTree) {
        self.visit_default(tree.into());
    }

    /// `ENUM_CONSTANT`
    fn visit_enum_constant(&mut self, tree: &'ast EnumConstant) {
        self.visit_default(tree.into());
    }

    /// `METHOD`, `CONSTRUCTOR`
    fn visit_method(&mut self, tree: &'ast MethodTree) {
        self.visit_default(tree.into());
    }

    /// `VARIABLE`
    fn visit_variable(&mut self, tree: &'ast VariableTree) {
        self.visit_default(tree.into());
    }

    /// `TYPE_PARAMETER`
    fn visit_type_parameter(&mut self, tree: &'ast TypeParameter) {
        self.visit_default(tree.into());
    }

    /// `MODIFIERS`
    fn visit_modifiers(&mut self, tree: &'ast Modifiers) {
        self.visit_default(tree.into());
    }

    /// `ANNOTATION`
    fn visit_annotation(&mut self, tree: &'ast Annotation) {
        self.visit_default(tree.into());
    }

    /// `BLOCK`, `INITIALIZER`, `STATIC_INITIALIZER`
    fn visit_block(&mut self, tree: &'ast Block) {
        self.visit_default(tree.into());
    }

    /// `EMPTY_STATEMENT`
    fn visit_empty_statement(&mut self, tree: &'ast EmptyStatement) {
        self.visit_default(tree.into());
    }

    /// `LABELED_STATEMENT`
    fn visit_labeled_statement(&mut self, tree: &'ast LabeledStatement) {
        self.visit_default(tree.into());
    }

    /// `EXPRESSION_STATEMENT`
    fn visit_expression_statement(&mut self, tree: &'ast ExpressionStatement) {
        self.visit_default(tree.into());
    }

    /// `IF_STATEMENT`
    fn visit_if_statement(&mut self, tree: &'ast IfStatement) {
        self.visit_default(tree.into());
    }

    /// `ASSERT_STATEMENT`
    fn visit_assert_statement(&mut self, tree: &'ast AssertStatement) {
        self.visit_default(tree.into());
    }

    /// `SWITCH_STATEMENT`
    fn visit_switch_statement(&mut self, tree: &'ast SwitchStatement) {
        self.visit_default(tree.into());
    }

    /// `CASE_GROUP`
    fn visit_case_group(&mut self, tree: &'ast CaseGroup) {
        self.visit_default(tree.into());
    }

    /// `CASE_LABEL`
    fn visit_case_label(&mut self, tree: &'ast CaseLabel) {
        self.visit_default(tree.into());
    }

    /// `WHILE_STATEMENT`
    fn visit_while_statement(&mut self, tree: &'ast WhileStatement) {
        self.visit_default(tree.into());
    }

    /// `DO_STATEMENT`
    fn visit_do_while_statement(&mut self, tree: &'ast DoWhileStatement) {
        self.visit_default(tree.into());
    }

    /// `FOR_STATEMENT`
    fn visit_for_statement(&mut self, tree: &'ast ForStatement) {
        self.visit_default(tree.into());
    }

    /// `FOR_EACH_STATEMENT`
    fn visit_for_each_statement(&mut self, tree: &'ast ForEachStatement) {
        self.visit_default(tree.into());
    }

    /// `BREAK_STATEMENT`
    fn visit_break_statement(&mut self, tree: &'ast BreakStatement) {
        self.visit_default(tree.into());
    }

    /// `CONTINUE_STATEMENT`
    fn visit_continue_statement(&mut self, tree: &'ast ContinueStatement) {
        self.visit_default(tree.into());
    }

    /// `RETURN_STATEMENT`
    fn visit_return_statement(&mut self, tree: &'ast ReturnStatement) {
        self.visit_default(tree.into());
    }

    /// `THROW_STATEMENT`
    fn visit_throw_statement(&mut self, tree: &'ast ThrowStatement) {
        self.visit_default(tree.into());
    }

    /// `SYNCHRONIZED_STATEMENT`
    fn visit_synchronized_statement(&mut self, tree: &'ast SynchronizedStatement) {
        self.visit_default(tree.into());
    }

    /// `TRY_STATEMENT`
    fn visit_try_statement(&mut self, tree: &'ast TryStatement) {
        self.visit_default(tree.into());
    }

    /// `CATCH`
    fn visit_catch(&mut self, tree: &'ast Catch) {
        self.visit_default(tree.into());
    }

    /// `IDENTIFIER`
    fn visit_identifier(&mut self, tree: &'ast Identifier) {
        self.visit_default(tree.into());
    }

    /// All literal kinds.
    fn visit_literal(&mut self, tree: &'ast Literal) {
        self.visit_default(tree.into());
    }

    /// `MEMBER_SELECT`
    fn visit_member_select_expression(&mut self, tree: &'ast MemberSelectExpression) {
        self.visit_default(tree.into());
    }

    /// `METHOD_INVOCATION`
    fn visit_method_invocation(&mut self, tree: &'ast MethodInvocation) {
        self.visit_default(tree.into());
    }

    /// `NEW_CLASS`
    fn visit_new_class(&mut self, tree: &'ast NewClass) {
        self.visit_default(tree.into());
    }

    /// `NEW_ARRAY`
    fn visit_new_array(&mut self, tree: &'ast NewArray) {
        self.visit_default(tree.into());
    }

    /// `ARRAY_ACCESS_EXPRESSION`
    fn visit_array_access_expression(&mut self, tree: &'ast ArrayAccessExpression) {
        self.visit_default(tree.into());
    }

    /// `PARENTHESIZED_EXPRESSION`
    fn visit_parenthesized(&mut self, tree: &'ast ParenthesizedExpression) {
        self.visit_default(tree.into());
    }

    /// `TYPE_CAST`
    fn visit_type_cast(&mut self, tree: &'ast TypeCast) {
        self.visit_default(tree.into());
    }

    /// `INSTANCE_OF`
    fn visit_instance_of(&mut self, tree: &'ast InstanceOf) {
        self.visit_default(tree.into());
    }

    /// `CONDITIONAL_EXPRESSION`
    fn visit_conditional_expression(&mut self, tree: &'ast ConditionalExpression) {
        self.visit_default(tree.into());
    }

    /// All prefix and postfix unary kinds.
    fn visit_unary_expression(&mut self, tree: &'ast UnaryExpression) {
        self.visit_default(tree.into());
    }

    /// All binary operator kinds.
    fn visit_binary_expression(&mut self, tree: &'ast BinaryExpression) {
        self.visit_default(tree.into());
    }

    /// All assignment kinds.
    fn visit_assignment_expression(&mut self, tree: &'ast AssignmentExpression) {
        self.visit_default(tree.into());
    }

    /// `LAMBDA_EXPRESSION`
    fn visit_lambda_expression(&mut self, tree: &'ast LambdaExpression) {
        self.visit_default(tree.into());
    }

    /// `METHOD_REFERENCE`
    fn visit_method_reference(&mut self, tree: &'ast MethodReference) {
        self.visit_default(tree.into());
    }

    /// `PRIMITIVE_TYPE`
    fn visit_primitive_type(&mut self, tree: &'ast PrimitiveType) {
        self.visit_default(tree.into());
    }

    /// `ARRAY_TYPE`
    fn visit_array_type(&mut self, tree: &'ast ArrayType) {
        self.visit_default(tree.into());
    }

    /// `PARAMETERIZED_TYPE`
    fn visit_parameterized_type(&mut self, tree: &'ast ParameterizedType) {
        self.visit_default(tree.into());
    }

    /// All wildcard kinds.
    fn visit_wildcard(&mut self, tree: &'ast Wildcard) {
        self.visit_default(tree.into());
    }

    /// `UNION_TYPE`
    fn visit_union_type(&mut self, tree: &'ast UnionType) {
        self.visit_default(tree.into());
    }
}
