//! Type expression nodes.
//!
//! Class and interface types are plain identifiers or member selects; only
//! constructs with their own syntax get a node here.

use crate::category::Expression;
use crate::error::TreeError;
use crate::kind::Kind;
use crate::nodes::{check_kind, forbid, require};
use crate::span::Span;
use crate::token::SyntaxToken;
use crate::tree::{Children, Tree, many, one, opt};
use crate::visitor::Visitor;

/// A primitive type keyword, `void` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveType {
    keyword: SyntaxToken,
}

impl PrimitiveType {
    /// Creates a primitive type from its keyword.
    #[must_use]
    pub const fn new(keyword: SyntaxToken) -> Self {
        Self { keyword }
    }

    /// Returns the keyword token.
    #[must_use]
    pub const fn keyword(&self) -> &SyntaxToken {
        &self.keyword
    }

    /// Returns the type name, such as `int`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.keyword.text()
    }
}

impl Tree for PrimitiveType {
    fn kind(&self) -> Kind {
        Kind::PrimitiveType
    }

    fn span(&self) -> &Span {
        self.keyword.span()
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_primitive_type(self);
    }

    fn children(&self) -> Children<'_> {
        Children::empty()
    }
}

/// `Type[]`; each extra dimension adds a level of nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    span: Span,
    element_type: Expression,
}

impl ArrayType {
    /// Creates an array type.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the element type is absent.
    pub fn new(span: Span, element_type: Option<Expression>) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            element_type: require(element_type, Kind::ArrayType, "type")?,
        })
    }

    /// Returns the element type.
    #[must_use]
    pub const fn element_type(&self) -> &Expression {
        &self.element_type
    }
}

impl Tree for ArrayType {
    fn kind(&self) -> Kind {
        Kind::ArrayType
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_array_type(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.element_type))
    }
}

/// `Type<Arguments>`; the argument list is empty for the diamond `<>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterizedType {
    span: Span,
    raw_type: Expression,
    type_arguments: Vec<Expression>,
}

impl ParameterizedType {
    /// Creates a parameterized type.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the raw type is absent.
    pub fn new(
        span: Span,
        raw_type: Option<Expression>,
        type_arguments: Vec<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            raw_type: require(raw_type, Kind::ParameterizedType, "type")?,
            type_arguments,
        })
    }

    /// Returns the generic type being applied.
    #[must_use]
    pub const fn raw_type(&self) -> &Expression {
        &self.raw_type
    }

    /// Returns the type arguments in order.
    #[must_use]
    pub fn type_arguments(&self) -> &[Expression] {
        &self.type_arguments
    }

    /// Returns whether this is a diamond, `new ArrayList<>()`.
    #[must_use]
    pub fn is_diamond(&self) -> bool {
        self.type_arguments.is_empty()
    }
}

impl Tree for ParameterizedType {
    fn kind(&self) -> Kind {
        Kind::ParameterizedType
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_parameterized_type(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.raw_type).chain(many(&self.type_arguments)))
    }
}

/// `?`, `? extends Bound` or `? super Bound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    kind: Kind,
    span: Span,
    bound: Option<Expression>,
}

impl Wildcard {
    /// Creates a wildcard type argument.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] for a non-wildcard kind,
    /// [`TreeError::MissingChild`] for a bounded kind without a bound and
    /// [`TreeError::UnexpectedChild`] for an unbounded kind with one.
    pub fn new(kind: Kind, span: Span, bound: Option<Expression>) -> Result<Self, TreeError> {
        check_kind(kind, Kind::is_wildcard, "Wildcard")?;
        if kind == Kind::UnboundedWildcard {
            forbid(bound.as_ref(), kind, "bound")?;
        } else if bound.is_none() {
            return Err(TreeError::missing_child(kind, "bound"));
        }
        Ok(Self { kind, span, bound })
    }

    /// Returns the bound of an `extends` or `super` wildcard.
    #[must_use]
    pub const fn bound(&self) -> Option<&Expression> {
        self.bound.as_ref()
    }
}

impl Tree for Wildcard {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_wildcard(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(opt(self.bound.as_ref()))
    }
}

/// `A | B`, the type of a multi-catch parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    span: Span,
    alternatives: Vec<Expression>,
}

impl UnionType {
    /// Creates a union type.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] with fewer than two alternatives.
    pub fn new(span: Span, alternatives: Vec<Expression>) -> Result<Self, TreeError> {
        if alternatives.len() < 2 {
            return Err(TreeError::missing_child(Kind::UnionType, "alternatives"));
        }
        Ok(Self { span, alternatives })
    }

    /// Returns the alternatives in order.
    #[must_use]
    pub fn alternatives(&self) -> &[Expression] {
        &self.alternatives
    }
}

impl Tree for UnionType {
    fn kind(&self) -> Kind {
        Kind::UnionType
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_union_type(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(many(&self.alternatives))
    }
}
