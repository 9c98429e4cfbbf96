//! The closed taxonomy of Java syntax constructs.
//!
//! Every typed node reports exactly one [`Kind`]. Several kinds may share a
//! node shape (all binary operators are [`BinaryExpression`] nodes, for
//! example), but each kind belongs to exactly one shape and one
//! [`Category`]. Matches over `Kind` are exhaustive, so adding a construct is
//! a compile error everywhere a rule claims to handle "all kinds".
//!
//! [`BinaryExpression`]: crate::BinaryExpression

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Broad syntactic category a [`Kind`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    /// Compilation units, type and member declarations, imports.
    Declaration,
    /// Statements and statement-level clauses.
    Statement,
    /// Expressions, including identifiers and literals.
    Expression,
    /// Type expressions such as `int[]` or `List<? extends T>`.
    Type,
    /// Structural nodes that are neither of the above (modifiers,
    /// annotations, switch case groups, catch clauses).
    Other,
}

/// Identifies which Java construct a node represents.
///
/// Kinds render in `SCREAMING_SNAKE_CASE` and parse back from that form.
///
/// # Example
///
/// ```
/// use javelin_tree::{Category, Kind};
///
/// assert_eq!(Kind::MemberSelect.to_string(), "MEMBER_SELECT");
/// assert_eq!("MEMBER_SELECT".parse::<Kind>(), Ok(Kind::MemberSelect));
/// assert_eq!(Kind::MemberSelect.category(), Category::Expression);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    // Declarations
    /// A whole source file.
    CompilationUnit,
    /// `import a.b.C;`
    Import,
    /// `class C { }`
    Class,
    /// `enum E { }`
    Enum,
    /// `interface I { }`
    Interface,
    /// `@interface A { }`
    AnnotationType,
    /// A constant inside an enum body.
    EnumConstant,
    /// A method declaration.
    Method,
    /// A constructor declaration.
    Constructor,
    /// A field, local variable, parameter or resource declaration.
    Variable,
    /// `T extends Bound` in a type parameter list.
    TypeParameter,

    // Statements
    /// `{ ... }`
    Block,
    /// An instance initializer block in a class body.
    Initializer,
    /// `static { ... }`
    StaticInitializer,
    /// A lone `;`.
    EmptyStatement,
    /// `label: statement`
    LabeledStatement,
    /// An expression followed by `;`.
    ExpressionStatement,
    /// `if (c) a else b`
    IfStatement,
    /// `assert c : detail;`
    AssertStatement,
    /// `switch (e) { ... }`
    SwitchStatement,
    /// One or more case labels followed by the statements they guard.
    CaseGroup,
    /// `case x:` or `default:`
    CaseLabel,
    /// `while (c) s`
    WhileStatement,
    /// `do s while (c);`
    DoStatement,
    /// `for (init; cond; update) s`
    ForStatement,
    /// `for (T x : xs) s`
    ForEachStatement,
    /// `break label;`
    BreakStatement,
    /// `continue label;`
    ContinueStatement,
    /// `return e;`
    ReturnStatement,
    /// `throw e;`
    ThrowStatement,
    /// `synchronized (e) { ... }`
    SynchronizedStatement,
    /// `try { } catch (E e) { } finally { }`
    TryStatement,
    /// `catch (E e) { }`
    Catch,

    // Expressions
    /// A simple name.
    Identifier,
    /// `a.b`
    MemberSelect,
    /// `a.b(c)`
    MethodInvocation,
    /// `new C(args)`
    NewClass,
    /// `new T[n]` or `{a, b}`
    NewArray,
    /// `a[i]`
    ArrayAccessExpression,
    /// `(e)`
    ParenthesizedExpression,
    /// `(T) e`
    TypeCast,
    /// `e instanceof T`
    InstanceOf,
    /// `c ? a : b`
    ConditionalExpression,
    /// `(a, b) -> body`
    LambdaExpression,
    /// `Type::method`
    MethodReference,

    // Literals
    /// `42`
    IntLiteral,
    /// `42L`
    LongLiteral,
    /// `1.0f`
    FloatLiteral,
    /// `1.0`
    DoubleLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// `'c'`
    CharLiteral,
    /// `"text"`
    StringLiteral,
    /// `null`
    NullLiteral,

    // Unary operators
    /// `e++`
    PostfixIncrement,
    /// `e--`
    PostfixDecrement,
    /// `++e`
    PrefixIncrement,
    /// `--e`
    PrefixDecrement,
    /// `+e`
    UnaryPlus,
    /// `-e`
    UnaryMinus,
    /// `~e`
    BitwiseComplement,
    /// `!e`
    LogicalComplement,

    // Binary operators
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a % b`
    Remainder,
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `a << b`
    LeftShift,
    /// `a >> b`
    RightShift,
    /// `a >>> b`
    UnsignedRightShift,
    /// `a < b`
    LessThan,
    /// `a > b`
    GreaterThan,
    /// `a <= b`
    LessThanOrEqualTo,
    /// `a >= b`
    GreaterThanOrEqualTo,
    /// `a == b`
    EqualTo,
    /// `a != b`
    NotEqualTo,
    /// `a & b`
    And,
    /// `a ^ b`
    Xor,
    /// `a | b`
    Or,
    /// `a && b`
    ConditionalAnd,
    /// `a || b`
    ConditionalOr,

    // Assignment operators
    /// `a = b`
    Assignment,
    /// `a *= b`
    MultiplyAssignment,
    /// `a /= b`
    DivideAssignment,
    /// `a %= b`
    RemainderAssignment,
    /// `a += b`
    PlusAssignment,
    /// `a -= b`
    MinusAssignment,
    /// `a <<= b`
    LeftShiftAssignment,
    /// `a >>= b`
    RightShiftAssignment,
    /// `a >>>= b`
    UnsignedRightShiftAssignment,
    /// `a &= b`
    AndAssignment,
    /// `a ^= b`
    XorAssignment,
    /// `a |= b`
    OrAssignment,

    // Types
    /// `int`, `boolean`, `void`, ...
    PrimitiveType,
    /// `T[]`
    ArrayType,
    /// `List<T>`
    ParameterizedType,
    /// `?`
    UnboundedWildcard,
    /// `? extends T`
    ExtendsWildcard,
    /// `? super T`
    SuperWildcard,
    /// `A | B` in a multi-catch clause.
    UnionType,

    // Other
    /// Modifier keywords and annotations preceding a declaration.
    Modifiers,
    /// `@Annotation(args)`
    Annotation,
}

const BINARY_OPERATORS: &[(&str, Kind)] = &[
    ("*", Kind::Multiply),
    ("/", Kind::Divide),
    ("%", Kind::Remainder),
    ("+", Kind::Plus),
    ("-", Kind::Minus),
    ("<<", Kind::LeftShift),
    (">>", Kind::RightShift),
    (">>>", Kind::UnsignedRightShift),
    ("<", Kind::LessThan),
    (">", Kind::GreaterThan),
    ("<=", Kind::LessThanOrEqualTo),
    (">=", Kind::GreaterThanOrEqualTo),
    ("==", Kind::EqualTo),
    ("!=", Kind::NotEqualTo),
    ("&", Kind::And),
    ("^", Kind::Xor),
    ("|", Kind::Or),
    ("&&", Kind::ConditionalAnd),
    ("||", Kind::ConditionalOr),
];

const ASSIGNMENT_OPERATORS: &[(&str, Kind)] = &[
    ("=", Kind::Assignment),
    ("*=", Kind::MultiplyAssignment),
    ("/=", Kind::DivideAssignment),
    ("%=", Kind::RemainderAssignment),
    ("+=", Kind::PlusAssignment),
    ("-=", Kind::MinusAssignment),
    ("<<=", Kind::LeftShiftAssignment),
    (">>=", Kind::RightShiftAssignment),
    (">>>=", Kind::UnsignedRightShiftAssignment),
    ("&=", Kind::AndAssignment),
    ("^=", Kind::XorAssignment),
    ("|=", Kind::OrAssignment),
];

const PREFIX_OPERATORS: &[(&str, Kind)] = &[
    ("++", Kind::PrefixIncrement),
    ("--", Kind::PrefixDecrement),
    ("+", Kind::UnaryPlus),
    ("-", Kind::UnaryMinus),
    ("~", Kind::BitwiseComplement),
    ("!", Kind::LogicalComplement),
];

const POSTFIX_OPERATORS: &[(&str, Kind)] = &[
    ("++", Kind::PostfixIncrement),
    ("--", Kind::PostfixDecrement),
];

fn lookup(table: &[(&str, Kind)], operator: &str) -> Option<Kind> {
    table
        .iter()
        .find(|(text, _)| *text == operator)
        .map(|(_, kind)| *kind)
}

impl Kind {
    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::CompilationUnit
            | Self::Import
            | Self::Class
            | Self::Enum
            | Self::Interface
            | Self::AnnotationType
            | Self::EnumConstant
            | Self::Method
            | Self::Constructor
            | Self::Variable
            | Self::TypeParameter => Category::Declaration,

            Self::Block
            | Self::Initializer
            | Self::StaticInitializer
            | Self::EmptyStatement
            | Self::LabeledStatement
            | Self::ExpressionStatement
            | Self::IfStatement
            | Self::AssertStatement
            | Self::SwitchStatement
            | Self::WhileStatement
            | Self::DoStatement
            | Self::ForStatement
            | Self::ForEachStatement
            | Self::BreakStatement
            | Self::ContinueStatement
            | Self::ReturnStatement
            | Self::ThrowStatement
            | Self::SynchronizedStatement
            | Self::TryStatement => Category::Statement,

            Self::Identifier
            | Self::MemberSelect
            | Self::MethodInvocation
            | Self::NewClass
            | Self::NewArray
            | Self::ArrayAccessExpression
            | Self::ParenthesizedExpression
            | Self::TypeCast
            | Self::InstanceOf
            | Self::ConditionalExpression
            | Self::LambdaExpression
            | Self::MethodReference
            | Self::IntLiteral
            | Self::LongLiteral
            | Self::FloatLiteral
            | Self::DoubleLiteral
            | Self::BooleanLiteral
            | Self::CharLiteral
            | Self::StringLiteral
            | Self::NullLiteral
            | Self::PostfixIncrement
            | Self::PostfixDecrement
            | Self::PrefixIncrement
            | Self::PrefixDecrement
            | Self::UnaryPlus
            | Self::UnaryMinus
            | Self::BitwiseComplement
            | Self::LogicalComplement
            | Self::Multiply
            | Self::Divide
            | Self::Remainder
            | Self::Plus
            | Self::Minus
            | Self::LeftShift
            | Self::RightShift
            | Self::UnsignedRightShift
            | Self::LessThan
            | Self::GreaterThan
            | Self::LessThanOrEqualTo
            | Self::GreaterThanOrEqualTo
            | Self::EqualTo
            | Self::NotEqualTo
            | Self::And
            | Self::Xor
            | Self::Or
            | Self::ConditionalAnd
            | Self::ConditionalOr
            | Self::Assignment
            | Self::MultiplyAssignment
            | Self::DivideAssignment
            | Self::RemainderAssignment
            | Self::PlusAssignment
            | Self::MinusAssignment
            | Self::LeftShiftAssignment
            | Self::RightShiftAssignment
            | Self::UnsignedRightShiftAssignment
            | Self::AndAssignment
            | Self::XorAssignment
            | Self::OrAssignment => Category::Expression,

            Self::PrimitiveType
            | Self::ArrayType
            | Self::ParameterizedType
            | Self::UnboundedWildcard
            | Self::ExtendsWildcard
            | Self::SuperWildcard
            | Self::UnionType => Category::Type,

            Self::CaseGroup
            | Self::CaseLabel
            | Self::Catch
            | Self::Modifiers
            | Self::Annotation => Category::Other,
        }
    }

    /// Returns whether nodes of this kind can fill an expression slot.
    ///
    /// Type kinds count as expressions, as do annotations (which appear as
    /// annotation element values).
    #[must_use]
    pub const fn is_expression(self) -> bool {
        matches!(self.category(), Category::Expression | Category::Type)
            || matches!(self, Self::Annotation)
    }

    /// Returns whether this kind is a statement.
    ///
    /// Local variable and local class declarations also occupy statement
    /// positions but belong to [`Category::Declaration`].
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(self.category(), Category::Statement)
    }

    /// Returns whether this kind is a type expression.
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(self.category(), Category::Type)
    }

    /// Returns whether this kind is one of the literal kinds.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLiteral
                | Self::LongLiteral
                | Self::FloatLiteral
                | Self::DoubleLiteral
                | Self::BooleanLiteral
                | Self::CharLiteral
                | Self::StringLiteral
                | Self::NullLiteral
        )
    }

    /// Returns whether this kind is a prefix or postfix unary operator.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(
            self,
            Self::PostfixIncrement
                | Self::PostfixDecrement
                | Self::PrefixIncrement
                | Self::PrefixDecrement
                | Self::UnaryPlus
                | Self::UnaryMinus
                | Self::BitwiseComplement
                | Self::LogicalComplement
        )
    }

    /// Returns whether this kind is a binary operator.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Multiply
                | Self::Divide
                | Self::Remainder
                | Self::Plus
                | Self::Minus
                | Self::LeftShift
                | Self::RightShift
                | Self::UnsignedRightShift
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessThanOrEqualTo
                | Self::GreaterThanOrEqualTo
                | Self::EqualTo
                | Self::NotEqualTo
                | Self::And
                | Self::Xor
                | Self::Or
                | Self::ConditionalAnd
                | Self::ConditionalOr
        )
    }

    /// Returns whether this kind is a simple or compound assignment.
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assignment
                | Self::MultiplyAssignment
                | Self::DivideAssignment
                | Self::RemainderAssignment
                | Self::PlusAssignment
                | Self::MinusAssignment
                | Self::LeftShiftAssignment
                | Self::RightShiftAssignment
                | Self::UnsignedRightShiftAssignment
                | Self::AndAssignment
                | Self::XorAssignment
                | Self::OrAssignment
        )
    }

    /// Returns whether this kind is a wildcard type argument.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(
            self,
            Self::UnboundedWildcard | Self::ExtendsWildcard | Self::SuperWildcard
        )
    }

    /// Maps a binary operator spelling to its kind.
    ///
    /// ```
    /// use javelin_tree::Kind;
    ///
    /// assert_eq!(Kind::from_binary_operator("&&"), Some(Kind::ConditionalAnd));
    /// assert_eq!(Kind::from_binary_operator("="), None);
    /// ```
    #[must_use]
    pub fn from_binary_operator(operator: &str) -> Option<Self> {
        lookup(BINARY_OPERATORS, operator)
    }

    /// Maps an assignment operator spelling to its kind.
    #[must_use]
    pub fn from_assignment_operator(operator: &str) -> Option<Self> {
        lookup(ASSIGNMENT_OPERATORS, operator)
    }

    /// Maps a unary operator spelling to its kind.
    ///
    /// `prefix` distinguishes `++e` from `e++`.
    #[must_use]
    pub fn from_unary_operator(operator: &str, prefix: bool) -> Option<Self> {
        if prefix {
            lookup(PREFIX_OPERATORS, operator)
        } else {
            lookup(POSTFIX_OPERATORS, operator)
        }
    }

    /// Returns the Java spelling of an operator kind.
    ///
    /// Returns `None` for kinds that are not unary, binary or assignment
    /// operators.
    #[must_use]
    pub fn operator_text(self) -> Option<&'static str> {
        [
            BINARY_OPERATORS,
            ASSIGNMENT_OPERATORS,
            PREFIX_OPERATORS,
            POSTFIX_OPERATORS,
        ]
        .into_iter()
        .flatten()
        .find(|(_, kind)| *kind == self)
        .map(|(text, _)| *text)
    }

    /// Returns the `SCREAMING_SNAKE_CASE` name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
