//! Typed syntax tree model for Java source code.
//!
//! This crate defines the immutable, strongly kinded tree that analysis
//! rules traverse: the [`Kind`] taxonomy, one node struct per construct
//! shape, the closed [`Expression`], [`Statement`] and [`Member`] sums, the
//! [`Visitor`] double-dispatch protocol and lazy [`Tree::children`]
//! iteration. Trees are produced by the `javelin-syntax` builder and are
//! never mutated afterwards.
//!
//! # Core types
//!
//! - [`Kind`] and [`Category`]: what a node is
//! - [`Tree`] and [`NodeRef`]: the general tree capability
//! - [`Visitor`], [`walk`] and [`NodeRef::descendants`]: traversal
//! - [`Span`], [`LineCol`] and [`SyntaxToken`]: source positions and tokens
//! - [`TreeError`] and [`NotApplicable`]: construction and accessor errors
//! - [`outline`]: a stable textual rendering for debugging
//!
//! # Example
//!
//! ```
//! use javelin_tree::{
//!     Expression, Identifier, Kind, LineCol, MemberSelectExpression, NodeRef, Span, SyntaxToken,
//!     Tree,
//! };
//!
//! let span = |start: u32, end: u32| Span::new(start, end, LineCol::new(0, start), LineCol::new(0, end));
//! let a = Identifier::new(SyntaxToken::new("a", span(0, 1)));
//! let b = Identifier::new(SyntaxToken::new("b", span(2, 3)));
//! let select = MemberSelectExpression::new(span(0, 3), Some(Expression::from(a)), Some(b))?;
//!
//! assert_eq!(select.kind(), Kind::MemberSelect);
//! assert!(select.operator_token().is_err());
//! assert_eq!(NodeRef::from(&select).children().count(), 2);
//! # Ok::<(), javelin_tree::TreeError>(())
//! ```

mod category;
mod error;
mod kind;
mod nodes;
mod outline;
mod span;
mod token;
mod tree;
mod visitor;

pub use category::{Expression, Member, Statement};
pub use error::{NotApplicable, TreeError};
pub use kind::{Category, Kind};
pub use nodes::{
    Annotation, ArrayAccessExpression, ArrayType, AssertStatement, AssignmentExpression,
    BinaryExpression, Block, BreakStatement, CaseGroup, CaseLabel, Catch, ClassTree,
    CompilationUnit, ConditionalExpression, ContinueStatement, DoWhileStatement, EmptyStatement,
    EnumConstant, ExpressionStatement, ForEachStatement, ForStatement, Identifier, IfStatement,
    Import, InstanceOf, LabeledStatement, LambdaBody, LambdaExpression, LambdaParameter, Literal,
    MemberSelectExpression, MethodInvocation, MethodReference, MethodTree, Modifier, Modifiers,
    NewArray, NewClass, ParameterizedType, ParenthesizedExpression, PrimitiveType,
    ReturnStatement, SwitchStatement, SynchronizedStatement, ThrowStatement, TryStatement,
    TypeCast, TypeParameter, UnaryExpression, UnionType, VariableTree, WhileStatement, Wildcard,
};
pub use outline::outline;
pub use span::{LineCol, Span};
pub use token::SyntaxToken;
pub use tree::{Children, Descendants, NodeRef, Tree, walk};
pub use visitor::Visitor;

#[cfg(test)]
mod tests;
