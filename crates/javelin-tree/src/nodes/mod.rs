//! Concrete node implementations, one struct per node shape.
//!
//! Constructors take the span of the backing raw node plus the already
//! built children. Required slots are passed as `Option` and checked on the
//! way in, so a missing child fails construction with
//! [`TreeError::MissingChild`] instead of surfacing later as a confusing
//! rule failure.

mod declaration;
mod expression;
mod statement;
mod types;

pub use declaration::{
    Annotation, ClassTree, CompilationUnit, EnumConstant, Import, MethodTree, Modifier, Modifiers,
    TypeParameter, VariableTree,
};
pub use expression::{
    ArrayAccessExpression, AssignmentExpression, BinaryExpression, ConditionalExpression,
    Identifier, InstanceOf, LambdaBody, LambdaExpression, LambdaParameter, Literal,
    MemberSelectExpression, MethodInvocation, MethodReference, NewArray, NewClass,
    ParenthesizedExpression, TypeCast, UnaryExpression,
};
pub use statement::{
    AssertStatement, Block, BreakStatement, CaseGroup, CaseLabel, Catch, ContinueStatement,
    DoWhileStatement, EmptyStatement, ExpressionStatement, ForEachStatement, ForStatement,
    IfStatement, LabeledStatement, ReturnStatement, SwitchStatement, SynchronizedStatement,
    ThrowStatement, TryStatement, WhileStatement,
};
pub use types::{ArrayType, ParameterizedType, PrimitiveType, UnionType, Wildcard};

use crate::error::TreeError;
use crate::kind::Kind;

/// Unwraps a required slot or fails with [`TreeError::MissingChild`].
pub(crate) fn require<T>(value: Option<T>, kind: Kind, slot: &'static str) -> Result<T, TreeError> {
    value.ok_or(TreeError::MissingChild { kind, slot })
}

/// Fails with [`TreeError::UnexpectedChild`] when a forbidden slot is filled.
pub(crate) fn forbid<T>(
    value: Option<&T>,
    kind: Kind,
    slot: &'static str,
) -> Result<(), TreeError> {
    match value {
        Some(_) => Err(TreeError::UnexpectedChild { kind, slot }),
        None => Ok(()),
    }
}

/// Fails with [`TreeError::KindMismatch`] unless `accepts(kind)` holds.
pub(crate) fn check_kind(
    kind: Kind,
    accepts: fn(Kind) -> bool,
    shape: &'static str,
) -> Result<(), TreeError> {
    if accepts(kind) {
        Ok(())
    } else {
        Err(TreeError::KindMismatch { kind, shape })
    }
}
