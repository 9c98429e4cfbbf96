//! Expression nodes.

use crate::category::Expression;
use crate::error::{NotApplicable, TreeError};
use crate::kind::Kind;
use crate::nodes::{Block, VariableTree, check_kind, require};
use crate::span::Span;
use crate::token::SyntaxToken;
use crate::tree::{Children, NodeRef, Tree, many, one, opt};
use crate::visitor::Visitor;

/// A simple name such as `a` in `a.b`.
///
/// `this`, `super`, the `*` of an on-demand import and the `class` of a
/// class literal are also represented as identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    token: SyntaxToken,
}

impl Identifier {
    /// Creates an identifier from its token. The span is the token's span.
    #[must_use]
    pub const fn new(token: SyntaxToken) -> Self {
        Self { token }
    }

    /// Returns the name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        self.token.text()
    }

    /// Returns the identifier token.
    #[must_use]
    pub const fn identifier_token(&self) -> &SyntaxToken {
        &self.token
    }
}

impl Tree for Identifier {
    fn kind(&self) -> Kind {
        Kind::Identifier
    }

    fn span(&self) -> &Span {
        self.token.span()
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_identifier(self);
    }

    fn children(&self) -> Children<'_> {
        Children::empty()
    }
}

/// A literal value. The kind tells which literal family it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    kind: Kind,
    token: SyntaxToken,
}

impl Literal {
    /// Creates a literal of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] if `kind` is not a literal kind.
    pub fn new(kind: Kind, token: SyntaxToken) -> Result<Self, TreeError> {
        check_kind(kind, Kind::is_literal, "Literal")?;
        Ok(Self { kind, token })
    }

    /// Returns the literal text exactly as written, quotes and suffixes
    /// included.
    #[must_use]
    pub fn value(&self) -> &str {
        self.token.text()
    }

    /// Returns the literal token.
    #[must_use]
    pub const fn token(&self) -> &SyntaxToken {
        &self.token
    }
}

impl Tree for Literal {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        self.token.span()
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_literal(self);
    }

    fn children(&self) -> Children<'_> {
        Children::empty()
    }
}

/// `expression.identifier`
///
/// Member selection is pure syntax, not an operator application, so it has
/// no operator token. [`MemberSelectExpression::operator_token`] always
/// reports [`NotApplicable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSelectExpression {
    span: Span,
    expression: Expression,
    identifier: Identifier,
}

impl MemberSelectExpression {
    /// Creates a member select.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the qualifier or the selected
    /// identifier is absent.
    pub fn new(
        span: Span,
        expression: Option<Expression>,
        identifier: Option<Identifier>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::MemberSelect, "expression")?,
            identifier: require(identifier, Kind::MemberSelect, "identifier")?,
        })
    }

    /// Returns the qualifier, `a` in `a.b`.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the selected member name, `b` in `a.b`.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Member selection has no operator token.
    ///
    /// # Errors
    ///
    /// Always returns [`NotApplicable`].
    pub const fn operator_token(&self) -> Result<&SyntaxToken, NotApplicable> {
        Err(NotApplicable::new(Kind::MemberSelect, "operator_token"))
    }
}

impl Tree for MemberSelectExpression {
    fn kind(&self) -> Kind {
        Kind::MemberSelect
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_member_select_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression).chain(one(&self.identifier)))
    }
}

/// `select(arguments)`
///
/// For a qualified call `a.b(c)` the method select is a member select
/// spanning `a.b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInvocation {
    span: Span,
    method_select: Expression,
    type_arguments: Vec<Expression>,
    arguments: Vec<Expression>,
}

impl MethodInvocation {
    /// Creates a method invocation.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the method select is absent.
    pub fn new(
        span: Span,
        method_select: Option<Expression>,
        type_arguments: Vec<Expression>,
        arguments: Vec<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            method_select: require(method_select, Kind::MethodInvocation, "method_select")?,
            type_arguments,
            arguments,
        })
    }

    /// Returns the invoked method: an identifier or a member select.
    #[must_use]
    pub const fn method_select(&self) -> &Expression {
        &self.method_select
    }

    /// Returns explicit type arguments, as in `a.<T>b()`.
    #[must_use]
    pub fn type_arguments(&self) -> &[Expression] {
        &self.type_arguments
    }

    /// Returns the call arguments in order.
    #[must_use]
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    /// Returns the simple name of the invoked method.
    #[must_use]
    pub fn method_name(&self) -> Option<&Identifier> {
        match &self.method_select {
            Expression::Identifier(identifier) => Some(identifier),
            Expression::MemberSelect(select) => Some(select.identifier()),
            _ => None,
        }
    }
}

impl Tree for MethodInvocation {
    fn kind(&self) -> Kind {
        Kind::MethodInvocation
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_method_invocation(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            one(&self.method_select)
                .chain(many(&self.type_arguments))
                .chain(many(&self.arguments)),
        )
    }
}

/// `new T(arguments) { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    span: Span,
    enclosing_expression: Option<Expression>,
    type_arguments: Vec<Expression>,
    identifier: Expression,
    arguments: Vec<Expression>,
    class_body: Option<crate::nodes::ClassTree>,
}

impl NewClass {
    /// Creates an instance creation expression.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the instantiated type is
    /// absent.
    pub fn new(
        span: Span,
        enclosing_expression: Option<Expression>,
        type_arguments: Vec<Expression>,
        identifier: Option<Expression>,
        arguments: Vec<Expression>,
        class_body: Option<crate::nodes::ClassTree>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            enclosing_expression,
            type_arguments,
            identifier: require(identifier, Kind::NewClass, "identifier")?,
            arguments,
            class_body,
        })
    }

    /// Returns the outer instance in `outer.new Inner()`.
    #[must_use]
    pub const fn enclosing_expression(&self) -> Option<&Expression> {
        self.enclosing_expression.as_ref()
    }

    /// Returns constructor type arguments, as in `new <T>C()`.
    #[must_use]
    pub fn type_arguments(&self) -> &[Expression] {
        &self.type_arguments
    }

    /// Returns the instantiated type.
    #[must_use]
    pub const fn identifier(&self) -> &Expression {
        &self.identifier
    }

    /// Returns the constructor arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    /// Returns the anonymous class body, if any.
    #[must_use]
    pub const fn class_body(&self) -> Option<&crate::nodes::ClassTree> {
        self.class_body.as_ref()
    }
}

impl Tree for NewClass {
    fn kind(&self) -> Kind {
        Kind::NewClass
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_new_class(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            opt(self.enclosing_expression.as_ref())
                .chain(many(&self.type_arguments))
                .chain(one(&self.identifier))
                .chain(many(&self.arguments))
                .chain(opt(self.class_body.as_ref())),
        )
    }
}

/// `new T[d1][d2]`, `new T[] { a, b }` or a bare initializer `{ a, b }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArray {
    span: Span,
    element_type: Option<Expression>,
    dimensions: Vec<Expression>,
    initializers: Vec<Expression>,
}

impl NewArray {
    /// Creates an array creation expression.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if dimension expressions are given
    /// without an element type.
    pub fn new(
        span: Span,
        element_type: Option<Expression>,
        dimensions: Vec<Expression>,
        initializers: Vec<Expression>,
    ) -> Result<Self, TreeError> {
        if element_type.is_none() && !dimensions.is_empty() {
            return Err(TreeError::missing_child(Kind::NewArray, "element_type"));
        }
        Ok(Self {
            span,
            element_type,
            dimensions,
            initializers,
        })
    }

    /// Returns the element type; absent for a bare `{ a, b }` initializer.
    #[must_use]
    pub const fn element_type(&self) -> Option<&Expression> {
        self.element_type.as_ref()
    }

    /// Returns the dimension expressions, `n` in `new int[n]`.
    #[must_use]
    pub fn dimensions(&self) -> &[Expression] {
        &self.dimensions
    }

    /// Returns the initializer elements.
    #[must_use]
    pub fn initializers(&self) -> &[Expression] {
        &self.initializers
    }
}

impl Tree for NewArray {
    fn kind(&self) -> Kind {
        Kind::NewArray
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_new_array(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            opt(self.element_type.as_ref())
                .chain(many(&self.dimensions))
                .chain(many(&self.initializers)),
        )
    }
}

/// `expression[index]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayAccessExpression {
    span: Span,
    expression: Expression,
    index: Expression,
}

impl ArrayAccessExpression {
    /// Creates an array access.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the array or the index is
    /// absent.
    pub fn new(
        span: Span,
        expression: Option<Expression>,
        index: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::ArrayAccessExpression, "expression")?,
            index: require(index, Kind::ArrayAccessExpression, "index")?,
        })
    }

    /// Returns the accessed array.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the index expression.
    #[must_use]
    pub const fn index(&self) -> &Expression {
        &self.index
    }
}

impl Tree for ArrayAccessExpression {
    fn kind(&self) -> Kind {
        Kind::ArrayAccessExpression
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_array_access_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression).chain(one(&self.index)))
    }
}

/// `(expression)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesizedExpression {
    span: Span,
    expression: Expression,
}

impl ParenthesizedExpression {
    /// Creates a parenthesized expression.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the inner expression is absent.
    pub fn new(span: Span, expression: Option<Expression>) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::ParenthesizedExpression, "expression")?,
        })
    }

    /// Returns the wrapped expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Tree for ParenthesizedExpression {
    fn kind(&self) -> Kind {
        Kind::ParenthesizedExpression
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_parenthesized(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression))
    }
}

/// `(Type) expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCast {
    span: Span,
    cast_type: Expression,
    expression: Expression,
}

impl TypeCast {
    /// Creates a cast.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the type or the operand is
    /// absent.
    pub fn new(
        span: Span,
        cast_type: Option<Expression>,
        expression: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            cast_type: require(cast_type, Kind::TypeCast, "type")?,
            expression: require(expression, Kind::TypeCast, "expression")?,
        })
    }

    /// Returns the target type.
    #[must_use]
    pub const fn cast_type(&self) -> &Expression {
        &self.cast_type
    }

    /// Returns the cast operand.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Tree for TypeCast {
    fn kind(&self) -> Kind {
        Kind::TypeCast
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_type_cast(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.cast_type).chain(one(&self.expression)))
    }
}

/// `expression instanceof Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceOf {
    span: Span,
    expression: Expression,
    instanceof_keyword: SyntaxToken,
    instance_type: Expression,
}

impl InstanceOf {
    /// Creates an `instanceof` test.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the operand or the type is
    /// absent.
    pub fn new(
        span: Span,
        expression: Option<Expression>,
        instanceof_keyword: SyntaxToken,
        instance_type: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::InstanceOf, "expression")?,
            instanceof_keyword,
            instance_type: require(instance_type, Kind::InstanceOf, "type")?,
        })
    }

    /// Returns the tested operand.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the `instanceof` keyword token.
    #[must_use]
    pub const fn instanceof_keyword(&self) -> &SyntaxToken {
        &self.instanceof_keyword
    }

    /// Returns the tested type.
    #[must_use]
    pub const fn instance_type(&self) -> &Expression {
        &self.instance_type
    }
}

impl Tree for InstanceOf {
    fn kind(&self) -> Kind {
        Kind::InstanceOf
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_instance_of(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression).chain(one(&self.instance_type)))
    }
}

/// `condition ? true_expression : false_expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalExpression {
    span: Span,
    condition: Expression,
    true_expression: Expression,
    false_expression: Expression,
}

impl ConditionalExpression {
    /// Creates a conditional expression.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if any operand is absent.
    pub fn new(
        span: Span,
        condition: Option<Expression>,
        true_expression: Option<Expression>,
        false_expression: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            condition: require(condition, Kind::ConditionalExpression, "condition")?,
            true_expression: require(
                true_expression,
                Kind::ConditionalExpression,
                "true_expression",
            )?,
            false_expression: require(
                false_expression,
                Kind::ConditionalExpression,
                "false_expression",
            )?,
        })
    }

    /// Returns the condition.
    #[must_use]
    pub const fn condition(&self) -> &Expression {
        &self.condition
    }

    /// Returns the value when the condition holds.
    #[must_use]
    pub const fn true_expression(&self) -> &Expression {
        &self.true_expression
    }

    /// Returns the value when the condition does not hold.
    #[must_use]
    pub const fn false_expression(&self) -> &Expression {
        &self.false_expression
    }
}

impl Tree for ConditionalExpression {
    fn kind(&self) -> Kind {
        Kind::ConditionalExpression
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_conditional_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            one(&self.condition)
                .chain(one(&self.true_expression))
                .chain(one(&self.false_expression)),
        )
    }
}

/// A prefix or postfix unary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpression {
    kind: Kind,
    span: Span,
    operator: SyntaxToken,
    expression: Expression,
}

impl UnaryExpression {
    /// Creates a unary expression.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] for a non-unary kind and
    /// [`TreeError::MissingChild`] if the operand is absent.
    pub fn new(
        kind: Kind,
        span: Span,
        operator: SyntaxToken,
        expression: Option<Expression>,
    ) -> Result<Self, TreeError> {
        check_kind(kind, Kind::is_unary, "UnaryExpression")?;
        Ok(Self {
            kind,
            span,
            operator,
            expression: require(expression, kind, "expression")?,
        })
    }

    /// Returns the operator token.
    #[must_use]
    pub const fn operator_token(&self) -> &SyntaxToken {
        &self.operator
    }

    /// Returns the operand.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Tree for UnaryExpression {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_unary_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression))
    }
}

/// `left operator right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    kind: Kind,
    span: Span,
    left: Expression,
    operator: SyntaxToken,
    right: Expression,
}

impl BinaryExpression {
    /// Creates a binary expression.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] for a non-binary kind and
    /// [`TreeError::MissingChild`] if either operand is absent.
    pub fn new(
        kind: Kind,
        span: Span,
        left: Option<Expression>,
        operator: SyntaxToken,
        right: Option<Expression>,
    ) -> Result<Self, TreeError> {
        check_kind(kind, Kind::is_binary, "BinaryExpression")?;
        Ok(Self {
            kind,
            span,
            left: require(left, kind, "left_operand")?,
            operator,
            right: require(right, kind, "right_operand")?,
        })
    }

    /// Returns the left operand.
    #[must_use]
    pub const fn left_operand(&self) -> &Expression {
        &self.left
    }

    /// Returns the operator token.
    #[must_use]
    pub const fn operator_token(&self) -> &SyntaxToken {
        &self.operator
    }

    /// Returns the right operand.
    #[must_use]
    pub const fn right_operand(&self) -> &Expression {
        &self.right
    }
}

impl Tree for BinaryExpression {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_binary_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.left).chain(one(&self.right)))
    }
}

/// `variable operator expression`, for `=` and every compound assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentExpression {
    kind: Kind,
    span: Span,
    variable: Expression,
    operator: SyntaxToken,
    expression: Expression,
}

impl AssignmentExpression {
    /// Creates an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] for a non-assignment kind and
    /// [`TreeError::MissingChild`] if either side is absent.
    pub fn new(
        kind: Kind,
        span: Span,
        variable: Option<Expression>,
        operator: SyntaxToken,
        expression: Option<Expression>,
    ) -> Result<Self, TreeError> {
        check_kind(kind, Kind::is_assignment, "AssignmentExpression")?;
        Ok(Self {
            kind,
            span,
            variable: require(variable, kind, "variable")?,
            operator,
            expression: require(expression, kind, "expression")?,
        })
    }

    /// Returns the assigned location.
    #[must_use]
    pub const fn variable(&self) -> &Expression {
        &self.variable
    }

    /// Returns the operator token.
    #[must_use]
    pub const fn operator_token(&self) -> &SyntaxToken {
        &self.operator
    }

    /// Returns the assigned value.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Tree for AssignmentExpression {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_assignment_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.variable).chain(one(&self.expression)))
    }
}

/// A lambda parameter: a bare name or a typed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LambdaParameter {
    /// `x` in `x -> x + 1`
    Inferred(Identifier),
    /// `int x` in `(int x) -> x + 1`
    Declared(VariableTree),
}

impl<'a> From<&'a LambdaParameter> for NodeRef<'a> {
    fn from(parameter: &'a LambdaParameter) -> Self {
        match parameter {
            LambdaParameter::Inferred(identifier) => identifier.into(),
            LambdaParameter::Declared(variable) => variable.into(),
        }
    }
}

/// The body of a lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LambdaBody {
    /// `-> expression`
    Expression(Expression),
    /// `-> { statements }`
    Block(Block),
}

impl<'a> From<&'a LambdaBody> for NodeRef<'a> {
    fn from(body: &'a LambdaBody) -> Self {
        match body {
            LambdaBody::Expression(expression) => expression.into(),
            LambdaBody::Block(block) => block.into(),
        }
    }
}

/// `(parameters) -> body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaExpression {
    span: Span,
    parameters: Vec<LambdaParameter>,
    body: LambdaBody,
}

impl LambdaExpression {
    /// Creates a lambda.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the body is absent.
    pub fn new(
        span: Span,
        parameters: Vec<LambdaParameter>,
        body: Option<LambdaBody>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            parameters,
            body: require(body, Kind::LambdaExpression, "body")?,
        })
    }

    /// Returns the parameters in order.
    #[must_use]
    pub fn parameters(&self) -> &[LambdaParameter] {
        &self.parameters
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &LambdaBody {
        &self.body
    }
}

impl Tree for LambdaExpression {
    fn kind(&self) -> Kind {
        Kind::LambdaExpression
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_lambda_expression(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(many(&self.parameters).chain(one(&self.body)))
    }
}

/// `expression::method`; `new` is represented as an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodReference {
    span: Span,
    expression: Expression,
    method: Identifier,
}

impl MethodReference {
    /// Creates a method reference.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the qualifier or the method
    /// name is absent.
    pub fn new(
        span: Span,
        expression: Option<Expression>,
        method: Option<Identifier>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            expression: require(expression, Kind::MethodReference, "expression")?,
            method: require(method, Kind::MethodReference, "method")?,
        })
    }

    /// Returns the qualifier before `::`.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the referenced method name.
    #[must_use]
    pub const fn method(&self) -> &Identifier {
        &self.method
    }
}

impl Tree for MethodReference {
    fn kind(&self) -> Kind {
        Kind::MethodReference
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_method_reference(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.expression).chain(one(&self.method)))
    }
}
