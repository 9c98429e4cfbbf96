//! The general tree capability shared by every node.
//!
//! Every node struct implements [`Tree`]. When a caller needs to hold "some
//! node" without knowing its shape, it uses [`NodeRef`], a borrowed view
//! over all node shapes. Children iteration and the generic walkers are
//! defined in terms of `NodeRef`, so a rule can recurse through a whole
//! tree without a single kind-specific branch.

use std::fmt;
use std::iter;

use crate::kind::Kind;
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
use crate::span::Span;
use crate::visitor::Visitor;

/// Capabilities shared by every typed node.
pub trait Tree {
    /// Returns the kind of this node. Fixed at construction.
    fn kind(&self) -> Kind;

    /// Returns the span of the raw node this node was built from.
    fn span(&self) -> &Span;

    /// Invokes the single visitor method matching this node's shape.
    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V);

    /// Returns the immediate structural children in source order.
    ///
    /// Absent optional children and punctuation are omitted. Each call
    /// yields a fresh iterator.
    fn children(&self) -> Children<'_>;
}

/// Lazy, ordered sequence of a node's immediate children.
pub struct Children<'a> {
    inner: Box<dyn Iterator<Item = NodeRef<'a>> + 'a>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(inner: impl Iterator<Item = NodeRef<'a>> + 'a) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(iter::empty())
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children").finish_non_exhaustive()
    }
}

/// A single required child.
pub(crate) fn one<'a, T>(node: &'a T) -> iter::Once<NodeRef<'a>>
where
    &'a T: Into<NodeRef<'a>>,
{
    iter::once(node.into())
}

/// An optional child; contributes nothing when absent.
pub(crate) fn opt<'a, T>(node: Option<&'a T>) -> impl Iterator<Item = NodeRef<'a>> + 'a
where
    &'a T: Into<NodeRef<'a>>,
    T: 'a,
{
    node.into_iter().map(Into::into)
}

/// A list of children in order.
pub(crate) fn many<'a, T>(nodes: &'a [T]) -> impl Iterator<Item = NodeRef<'a>> + 'a
where
    &'a T: Into<NodeRef<'a>>,
{
    nodes.iter().map(Into::into)
}

macro_rules! node_ref {
    ($($variant:ident($node:ty)),+ $(,)?) => {
        /// A borrowed view of any node, typed as the general tree capability.
        ///
        /// Category information is recovered by matching on the variant or
        /// through [`NodeRef::accept`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum NodeRef<'a> {
            $(
                #[doc = concat!("A [`", stringify!($node), "`] node.")]
                $variant(&'a $node),
            )+
        }

        impl<'a> NodeRef<'a> {
            /// Returns the kind of the referenced node.
            #[must_use]
            pub fn kind(self) -> Kind {
                match self {
                    $(Self::$variant(node) => node.kind(),)+
                }
            }

            /// Returns the span of the referenced node.
            #[must_use]
            pub fn span(self) -> &'a Span {
                match self {
                    $(Self::$variant(node) => node.span(),)+
                }
            }

            /// Dispatches to the visitor method for the referenced node.
            pub fn accept<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) {
                match self {
                    $(Self::$variant(node) => node.accept(visitor),)+
                }
            }

            /// Returns the immediate children of the referenced node.
            #[must_use]
            pub fn children(self) -> Children<'a> {
                match self {
                    $(Self::$variant(node) => node.children(),)+
                }
            }

            /// Returns whether both views point at the same node instance.
            #[must_use]
            pub fn ptr_eq(self, other: Self) -> bool {
                match (self, other) {
                    $((Self::$variant(left), Self::$variant(right)) => std::ptr::eq(left, right),)+
                    _ => false,
                }
            }
        }

        $(
            impl<'a> From<&'a $node> for NodeRef<'a> {
                fn from(node: &'a $node) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

node_ref! {
    CompilationUnit(CompilationUnit),
    Import(Import),
    Class(ClassTree),
    EnumConstant(EnumConstant),
    Method(MethodTree),
    Variable(VariableTree),
    TypeParameter(TypeParameter),
    Modifiers(Modifiers),
    Annotation(Annotation),
    Block(Block),
    EmptyStatement(EmptyStatement),
    LabeledStatement(LabeledStatement),
    ExpressionStatement(ExpressionStatement),
    IfStatement(IfStatement),
    AssertStatement(AssertStatement),
    SwitchStatement(SwitchStatement),
    CaseGroup(CaseGroup),
    CaseLabel(CaseLabel),
    WhileStatement(WhileStatement),
    DoWhileStatement(DoWhileStatement),
    ForStatement(ForStatement),
    ForEachStatement(ForEachStatement),
    BreakStatement(BreakStatement),
    ContinueStatement(ContinueStatement),
    ReturnStatement(ReturnStatement),
    ThrowStatement(ThrowStatement),
    SynchronizedStatement(SynchronizedStatement),
    TryStatement(TryStatement),
    Catch(Catch),
    Identifier(Identifier),
    Literal(Literal),
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
    PrimitiveType(PrimitiveType),
    ArrayType(ArrayType),
    ParameterizedType(ParameterizedType),
    Wildcard(Wildcard),
    UnionType(UnionType),
}

impl<'a> NodeRef<'a> {
    /// Returns a pre-order iterator over this node and all its descendants.
    ///
    /// The iterator is built solely on [`NodeRef::children`], so it covers
    /// every kind without special cases.
    ///
    /// # Example
    ///
    /// ```
    /// use javelin_tree::{Identifier, Kind, LineCol, MemberSelectExpression, NodeRef, Span, SyntaxToken};
    ///
    /// let span = |start: u32, end: u32| Span::new(start, end, LineCol::new(0, start), LineCol::new(0, end));
    /// let a = Identifier::new(SyntaxToken::new("a", span(0, 1)));
    /// let b = Identifier::new(SyntaxToken::new("b", span(2, 3)));
    /// let select = MemberSelectExpression::new(span(0, 3), Some(a.into()), Some(b))?;
    ///
    /// let kinds: Vec<Kind> = NodeRef::from(&select).descendants().map(NodeRef::kind).collect();
    /// assert_eq!(kinds, [Kind::MemberSelect, Kind::Identifier, Kind::Identifier]);
    /// # Ok::<(), javelin_tree::TreeError>(())
    /// ```
    #[must_use]
    pub fn descendants(self) -> Descendants<'a> {
        Descendants {
            root: Some(self),
            stack: Vec::new(),
        }
    }
}

/// Pre-order iterator returned by [`NodeRef::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    root: Option<NodeRef<'a>>,
    stack: Vec<Children<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.children());
            return Some(root);
        }
        loop {
            let top = self.stack.last_mut()?;
            if let Some(node) = top.next() {
                self.stack.push(node.children());
                return Some(node);
            }
            self.stack.pop();
        }
    }
}

/// Dispatches `visitor` on every node of the subtree rooted at `node`, in
/// pre-order.
pub fn walk<'ast, V: Visitor<'ast> + ?Sized>(node: NodeRef<'ast>, visitor: &mut V) {
    for descendant in node.descendants() {
        descendant.accept(visitor);
    }
}
