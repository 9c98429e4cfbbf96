//! Closed category sums.
//!
//! A child slot that accepts "any expression" holds an [`Expression`], one
//! that accepts "any statement" a [`Statement`], and a class body holds
//! [`Member`]s. The sums are closed, so a slot can never be filled with a
//! node of the wrong category, and matches over them are exhaustive.

use crate::error::NotApplicable;
use crate::kind::Kind;
use crate::nodes::{
    Annotation, ArrayAccessExpression, ArrayType, AssertStatement, AssignmentExpression,
    BinaryExpression, Block, BreakStatement, ClassTree, ConditionalExpression, ContinueStatement,
    DoWhileStatement, EmptyStatement, EnumConstant, ExpressionStatement, ForEachStatement,
    ForStatement, Identifier, IfStatement, InstanceOf, LabeledStatement, LambdaExpression, Literal,
    MemberSelectExpression, MethodInvocation, MethodReference, MethodTree, NewArray, NewClass,
    ParameterizedType, ParenthesizedExpression, PrimitiveType, ReturnStatement, SwitchStatement,
    SynchronizedStatement, ThrowStatement, TryStatement, TypeCast, UnaryExpression, UnionType,
    VariableTree, WhileStatement, Wildcard,
};
use crate::span::Span;
use crate::token::SyntaxToken;
use crate::tree::{Children, NodeRef};
use crate::visitor::Visitor;

macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            inline { $($inline:ident($inline_ty:ty)),* $(,)? }
            boxed { $($boxed:ident($boxed_ty:ty)),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $(
                #[doc = concat!("A [`", stringify!($inline_ty), "`].")]
                $inline($inline_ty),
            )*
            $(
                #[doc = concat!("A [`", stringify!($boxed_ty), "`].")]
                $boxed(Box<$boxed_ty>),
            )*
        }

        impl $name {
            /// Returns this node as a general tree view.
            #[must_use]
            pub fn as_node(&self) -> NodeRef<'_> {
                match self {
                    $(Self::$inline(node) => NodeRef::from(node),)*
                    $(Self::$boxed(node) => {
                        let node: &$boxed_ty = node;
                        NodeRef::from(node)
                    })*
                }
            }

            /// Returns the kind of the wrapped node.
            #[must_use]
            pub fn kind(&self) -> Kind {
                self.as_node().kind()
            }

            /// Returns the span of the wrapped node.
            #[must_use]
            pub fn span(&self) -> &Span {
                self.as_node().span()
            }

            /// Dispatches to the visitor method of the wrapped node.
            pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
                self.as_node().accept(visitor);
            }

            /// Returns the immediate children of the wrapped node.
            #[must_use]
            pub fn children(&self) -> Children<'_> {
                self.as_node().children()
            }
        }

        impl<'a> From<&'a $name> for NodeRef<'a> {
            fn from(node: &'a $name) -> Self {
                node.as_node()
            }
        }

        $(
            impl From<$inline_ty> for $name {
                fn from(node: $inline_ty) -> Self {
                    Self::$inline(node)
                }
            }
        )*

        $(
            impl From<$boxed_ty> for $name {
                fn from(node: $boxed_ty) -> Self {
                    Self::$boxed(Box::new(node))
                }
            }
        )*
    };
}

category! {
    /// Any node that can fill an expression slot.
    ///
    /// Type expressions are included: `List<String>` in a variable
    /// declaration is an expression of kind `PARAMETERIZED_TYPE`.
    pub enum Expression {
        inline {
            Identifier(Identifier),
            Literal(Literal),
            PrimitiveType(PrimitiveType),
        }
        boxed {
            MemberSelect(MemberSelectExpression),
            MethodInvocation(MethodInvocation),
            NewClass(NewClass),
            NewArray(NewArray),
            ArrayAccess(ArrayAccessExpression),
            Parenthesized(ParenthesizedExpression),
            TypeCast(TypeCast),
            InstanceOf(InstanceOf),
            Conditional(ConditionalExpression),
            Unary(UnaryExpression),
            Binary(BinaryExpression),
            Assignment(AssignmentExpression),
            Lambda(LambdaExpression),
            MethodReference(MethodReference),
            ArrayType(ArrayType),
            ParameterizedType(ParameterizedType),
            Wildcard(Wildcard),
            UnionType(UnionType),
            Annotation(Annotation),
        }
    }
}

category! {
    /// Any node that can appear in a statement position.
    ///
    /// Local variable and local class declarations are included.
    pub enum Statement {
        inline {
            Block(Block),
            Empty(EmptyStatement),
        }
        boxed {
            Labeled(LabeledStatement),
            Expression(ExpressionStatement),
            If(IfStatement),
            Assert(AssertStatement),
            Switch(SwitchStatement),
            While(WhileStatement),
            DoWhile(DoWhileStatement),
            For(ForStatement),
            ForEach(ForEachStatement),
            Break(BreakStatement),
            Continue(ContinueStatement),
            Return(ReturnStatement),
            Throw(ThrowStatement),
            Synchronized(SynchronizedStatement),
            Try(TryStatement),
            Variable(VariableTree),
            Class(ClassTree),
        }
    }
}

category! {
    /// A member of a class, enum, interface or annotation type body.
    pub enum Member {
        inline {
            Initializer(Block),
            Empty(EmptyStatement),
        }
        boxed {
            Variable(VariableTree),
            Method(MethodTree),
            Class(ClassTree),
            EnumConstant(EnumConstant),
        }
    }
}

impl Expression {
    /// Returns the operator token of an operator application.
    ///
    /// Unary, binary, assignment and `instanceof` expressions have one.
    /// Everything else, member selection included, is not an operator
    /// application.
    ///
    /// # Errors
    ///
    /// Returns [`NotApplicable`] for kinds without an operator token.
    pub fn operator_token(&self) -> Result<&SyntaxToken, NotApplicable> {
        match self {
            Self::Unary(tree) => Ok(tree.operator_token()),
            Self::Binary(tree) => Ok(tree.operator_token()),
            Self::Assignment(tree) => Ok(tree.operator_token()),
            Self::InstanceOf(tree) => Ok(tree.instanceof_keyword()),
            Self::MemberSelect(tree) => tree.operator_token(),
            _ => Err(NotApplicable::new(self.kind(), "operator_token")),
        }
    }

    /// Returns the wrapped identifier, if this is one.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(tree) => Some(tree),
            _ => None,
        }
    }

    /// Returns the wrapped literal, if this is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(tree) => Some(tree),
            _ => None,
        }
    }

    /// Returns the wrapped member select, if this is one.
    #[must_use]
    pub fn as_member_select(&self) -> Option<&MemberSelectExpression> {
        match self {
            Self::MemberSelect(tree) => Some(tree.as_ref()),
            _ => None,
        }
    }

    /// Returns the wrapped method invocation, if this is one.
    #[must_use]
    pub fn as_method_invocation(&self) -> Option<&MethodInvocation> {
        match self {
            Self::MethodInvocation(tree) => Some(tree.as_ref()),
            _ => None,
        }
    }

    /// Returns the wrapped binary expression, if this is one.
    #[must_use]
    pub fn as_binary(&self) -> Option<&BinaryExpression> {
        match self {
            Self::Binary(tree) => Some(tree.as_ref()),
            _ => None,
        }
    }

    /// Strips any number of enclosing parentheses.
    #[must_use]
    pub fn skip_parentheses(&self) -> &Self {
        let mut current = self;
        while let Self::Parenthesized(tree) = current {
            current = tree.expression();
        }
        current
    }

    /// Renders a name made of identifiers and member selects as dotted text,
    /// such as `java.util.List`.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        match self {
            Self::Identifier(tree) => Some(tree.name().to_owned()),
            Self::MemberSelect(tree) => {
                let qualifier = tree.expression().qualified_name()?;
                Some(format!("{qualifier}.{}", tree.identifier().name()))
            }
            _ => None,
        }
    }
}

impl Statement {
    /// Returns the wrapped block, if this is one.
    #[must_use]
    pub const fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(tree) => Some(tree),
            _ => None,
        }
    }

    /// Returns the wrapped expression statement, if this is one.
    #[must_use]
    pub fn as_expression_statement(&self) -> Option<&ExpressionStatement> {
        match self {
            Self::Expression(tree) => Some(tree.as_ref()),
            _ => None,
        }
    }
}

impl Member {
    /// Returns the wrapped method or constructor, if this is one.
    #[must_use]
    pub fn as_method(&self) -> Option<&MethodTree> {
        match self {
            Self::Method(tree) => Some(tree.as_ref()),
            _ => None,
        }
    }

    /// Returns the wrapped field, if this is one.
    #[must_use]
    pub fn as_variable(&self) -> Option<&VariableTree> {
        match self {
            Self::Variable(tree) => Some(tree.as_ref()),
            _ => None,
        }
    }
}
