//! Declaration nodes: compilation units, types, members and their parts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::category::{Expression, Member};
use crate::error::TreeError;
use crate::kind::Kind;
use crate::nodes::{Block, Identifier, check_kind, forbid, require};
use crate::span::Span;
use crate::token::SyntaxToken;
use crate::tree::{Children, Tree, many, one, opt};
use crate::visitor::Visitor;

/// A whole source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    span: Span,
    package_annotations: Vec<Annotation>,
    package_name: Option<Expression>,
    imports: Vec<Import>,
    types: Vec<ClassTree>,
}

impl CompilationUnit {
    /// Creates a compilation unit.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if package annotations are given
    /// without a package name.
    pub fn new(
        span: Span,
        package_annotations: Vec<Annotation>,
        package_name: Option<Expression>,
        imports: Vec<Import>,
        types: Vec<ClassTree>,
    ) -> Result<Self, TreeError> {
        if package_name.is_none() && !package_annotations.is_empty() {
            return Err(TreeError::missing_child(
                Kind::CompilationUnit,
                "package_name",
            ));
        }
        Ok(Self {
            span,
            package_annotations,
            package_name,
            imports,
            types,
        })
    }

    /// Returns the annotations on the package declaration.
    #[must_use]
    pub fn package_annotations(&self) -> &[Annotation] {
        &self.package_annotations
    }

    /// Returns the package name, absent in the default package.
    #[must_use]
    pub const fn package_name(&self) -> Option<&Expression> {
        self.package_name.as_ref()
    }

    /// Returns the import declarations in order.
    #[must_use]
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Returns the top-level type declarations in order.
    #[must_use]
    pub fn types(&self) -> &[ClassTree] {
        &self.types
    }
}

impl Tree for CompilationUnit {
    fn kind(&self) -> Kind {
        Kind::CompilationUnit
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_compilation_unit(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            many(&self.package_annotations)
                .chain(opt(self.package_name.as_ref()))
                .chain(many(&self.imports))
                .chain(many(&self.types)),
        )
    }
}

/// `import [static] qualified.Name[.*];`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    span: Span,
    is_static: bool,
    qualified_identifier: Expression,
}

impl Import {
    /// Creates an import declaration.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the imported name is absent.
    pub fn new(
        span: Span,
        is_static: bool,
        qualified_identifier: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            is_static,
            qualified_identifier: require(
                qualified_identifier,
                Kind::Import,
                "qualified_identifier",
            )?,
        })
    }

    /// Returns whether this is an `import static`.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Returns the imported name, a member select for qualified names.
    #[must_use]
    pub const fn qualified_identifier(&self) -> &Expression {
        &self.qualified_identifier
    }

    /// Returns whether the import ends in `.*`.
    #[must_use]
    pub fn is_on_demand(&self) -> bool {
        match &self.qualified_identifier {
            Expression::MemberSelect(select) => select.identifier().name() == "*",
            _ => false,
        }
    }
}

impl Tree for Import {
    fn kind(&self) -> Kind {
        Kind::Import
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_import(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.qualified_identifier))
    }
}

/// A Java modifier keyword.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `abstract`
    Abstract,
    /// `final`
    Final,
    /// `native`
    Native,
    /// `synchronized`
    Synchronized,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `strictfp`
    Strictfp,
    /// `default`, on interface methods.
    Default,
    /// `sealed`
    Sealed,
    /// `non-sealed`
    #[serde(rename = "non-sealed")]
    #[strum(serialize = "non-sealed")]
    NonSealed,
}

/// The modifier list of a declaration: keywords and annotations.
///
/// Keywords are tokens, so only the annotations are reported as children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifiers {
    span: Span,
    keywords: Vec<SyntaxToken>,
    annotations: Vec<Annotation>,
}

impl Modifiers {
    /// Creates a modifier list.
    #[must_use]
    pub const fn new(span: Span, keywords: Vec<SyntaxToken>, annotations: Vec<Annotation>) -> Self {
        Self {
            span,
            keywords,
            annotations,
        }
    }

    /// Returns the keyword tokens in order.
    #[must_use]
    pub fn keywords(&self) -> &[SyntaxToken] {
        &self.keywords
    }

    /// Returns the annotations in order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Returns whether `modifier` is present.
    #[must_use]
    pub fn contains(&self, modifier: Modifier) -> bool {
        let wanted: &'static str = modifier.into();
        self.keywords.iter().any(|token| token.text() == wanted)
    }

    /// Returns whether the list carries neither keywords nor annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.annotations.is_empty()
    }
}

impl Tree for Modifiers {
    fn kind(&self) -> Kind {
        Kind::Modifiers
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_modifiers(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(many(&self.annotations))
    }
}

/// `@Type(arguments)`
///
/// Named element values `name = value` are assignment expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    span: Span,
    annotation_type: Expression,
    arguments: Vec<Expression>,
}

impl Annotation {
    /// Creates an annotation.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the annotation type is absent.
    pub fn new(
        span: Span,
        annotation_type: Option<Expression>,
        arguments: Vec<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            annotation_type: require(annotation_type, Kind::Annotation, "annotation_type")?,
            arguments,
        })
    }

    /// Returns the annotation type name.
    #[must_use]
    pub const fn annotation_type(&self) -> &Expression {
        &self.annotation_type
    }

    /// Returns the element values in order.
    #[must_use]
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}

impl Tree for Annotation {
    fn kind(&self) -> Kind {
        Kind::Annotation
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_annotation(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.annotation_type).chain(many(&self.arguments)))
    }
}

/// A class, enum, interface or annotation type declaration, or the body of
/// an anonymous class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTree {
    kind: Kind,
    span: Span,
    modifiers: Option<Modifiers>,
    simple_name: Option<Identifier>,
    type_parameters: Vec<TypeParameter>,
    superclass: Option<Expression>,
    super_interfaces: Vec<Expression>,
    members: Vec<Member>,
}

impl ClassTree {
    /// Creates a named type declaration.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] for a kind other than `CLASS`,
    /// `ENUM`, `INTERFACE` or `ANNOTATION_TYPE`, [`TreeError::MissingChild`]
    /// without a name, and [`TreeError::UnexpectedChild`] when an enum,
    /// interface or annotation type is given a superclass.
    #[expect(
        clippy::too_many_arguments,
        reason = "one parameter per child slot of the declaration"
    )]
    pub fn new(
        kind: Kind,
        span: Span,
        modifiers: Option<Modifiers>,
        simple_name: Option<Identifier>,
        type_parameters: Vec<TypeParameter>,
        superclass: Option<Expression>,
        super_interfaces: Vec<Expression>,
        members: Vec<Member>,
    ) -> Result<Self, TreeError> {
        check_kind(
            kind,
            |kind| {
                matches!(
                    kind,
                    Kind::Class | Kind::Enum | Kind::Interface | Kind::AnnotationType
                )
            },
            "ClassTree",
        )?;
        if kind != Kind::Class {
            forbid(superclass.as_ref(), kind, "superclass")?;
        }
        Ok(Self {
            kind,
            span,
            modifiers,
            simple_name: Some(require(simple_name, kind, "simple_name")?),
            type_parameters,
            superclass,
            super_interfaces,
            members,
        })
    }

    /// Creates the body of an anonymous class: a nameless `CLASS`.
    #[must_use]
    pub const fn anonymous(span: Span, members: Vec<Member>) -> Self {
        Self {
            kind: Kind::Class,
            span,
            modifiers: None,
            simple_name: None,
            type_parameters: Vec::new(),
            superclass: None,
            super_interfaces: Vec::new(),
            members,
        }
    }

    /// Returns the modifier list, if the declaration has one.
    #[must_use]
    pub const fn modifiers(&self) -> Option<&Modifiers> {
        self.modifiers.as_ref()
    }

    /// Returns the declared name; absent only for anonymous class bodies.
    #[must_use]
    pub const fn simple_name(&self) -> Option<&Identifier> {
        self.simple_name.as_ref()
    }

    /// Returns the type parameters in order.
    #[must_use]
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    /// Returns the `extends` clause of a class.
    #[must_use]
    pub const fn superclass(&self) -> Option<&Expression> {
        self.superclass.as_ref()
    }

    /// Returns the `implements` types, or the `extends` list of an
    /// interface.
    #[must_use]
    pub fn super_interfaces(&self) -> &[Expression] {
        &self.super_interfaces
    }

    /// Returns the body members in order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns whether this is an anonymous class body.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.simple_name.is_none()
    }
}

impl Tree for ClassTree {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_class(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            opt(self.modifiers.as_ref())
                .chain(opt(self.simple_name.as_ref()))
                .chain(many(&self.type_parameters))
                .chain(opt(self.superclass.as_ref()))
                .chain(many(&self.super_interfaces))
                .chain(many(&self.members)),
        )
    }
}

/// A constant inside an enum body, optionally with arguments and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    span: Span,
    modifiers: Option<Modifiers>,
    simple_name: Identifier,
    arguments: Vec<Expression>,
    class_body: Option<ClassTree>,
}

impl EnumConstant {
    /// Creates an enum constant.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the name is absent.
    pub fn new(
        span: Span,
        modifiers: Option<Modifiers>,
        simple_name: Option<Identifier>,
        arguments: Vec<Expression>,
        class_body: Option<ClassTree>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            modifiers,
            simple_name: require(simple_name, Kind::EnumConstant, "simple_name")?,
            arguments,
            class_body,
        })
    }

    /// Returns the annotations on the constant, if any.
    #[must_use]
    pub const fn modifiers(&self) -> Option<&Modifiers> {
        self.modifiers.as_ref()
    }

    /// Returns the constant's name.
    #[must_use]
    pub const fn simple_name(&self) -> &Identifier {
        &self.simple_name
    }

    /// Returns the constructor arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    /// Returns the constant-specific class body.
    #[must_use]
    pub const fn class_body(&self) -> Option<&ClassTree> {
        self.class_body.as_ref()
    }
}

impl Tree for EnumConstant {
    fn kind(&self) -> Kind {
        Kind::EnumConstant
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_enum_constant(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            opt(self.modifiers.as_ref())
                .chain(one(&self.simple_name))
                .chain(many(&self.arguments))
                .chain(opt(self.class_body.as_ref())),
        )
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTree {
    kind: Kind,
    span: Span,
    modifiers: Option<Modifiers>,
    type_parameters: Vec<TypeParameter>,
    return_type: Option<Expression>,
    simple_name: Identifier,
    parameters: Vec<VariableTree>,
    throws: Vec<Expression>,
    block: Option<Block>,
    default_value: Option<Expression>,
}

impl MethodTree {
    /// Creates a method or constructor.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KindMismatch`] unless `kind` is `METHOD` or
    /// `CONSTRUCTOR`. A method requires a return type. A constructor
    /// requires a body and rejects a return type or a default value.
    #[expect(
        clippy::too_many_arguments,
        reason = "one parameter per child slot of the declaration"
    )]
    pub fn new(
        kind: Kind,
        span: Span,
        modifiers: Option<Modifiers>,
        type_parameters: Vec<TypeParameter>,
        return_type: Option<Expression>,
        simple_name: Option<Identifier>,
        parameters: Vec<VariableTree>,
        throws: Vec<Expression>,
        block: Option<Block>,
        default_value: Option<Expression>,
    ) -> Result<Self, TreeError> {
        check_kind(
            kind,
            |kind| matches!(kind, Kind::Method | Kind::Constructor),
            "MethodTree",
        )?;
        if kind == Kind::Constructor {
            forbid(return_type.as_ref(), kind, "return_type")?;
            forbid(default_value.as_ref(), kind, "default_value")?;
            if block.is_none() {
                return Err(TreeError::missing_child(kind, "block"));
            }
        } else if return_type.is_none() {
            return Err(TreeError::missing_child(kind, "return_type"));
        }
        Ok(Self {
            kind,
            span,
            modifiers,
            type_parameters,
            return_type,
            simple_name: require(simple_name, kind, "simple_name")?,
            parameters,
            throws,
            block,
            default_value,
        })
    }

    /// Returns the modifier list, if the declaration has one.
    #[must_use]
    pub const fn modifiers(&self) -> Option<&Modifiers> {
        self.modifiers.as_ref()
    }

    /// Returns the type parameters in order.
    #[must_use]
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    /// Returns the return type; always absent for constructors.
    #[must_use]
    pub const fn return_type(&self) -> Option<&Expression> {
        self.return_type.as_ref()
    }

    /// Returns the declared name.
    #[must_use]
    pub const fn simple_name(&self) -> &Identifier {
        &self.simple_name
    }

    /// Returns the formal parameters in order.
    #[must_use]
    pub fn parameters(&self) -> &[VariableTree] {
        &self.parameters
    }

    /// Returns the types in the `throws` clause.
    #[must_use]
    pub fn throws_clauses(&self) -> &[Expression] {
        &self.throws
    }

    /// Returns the body; absent for abstract and native methods.
    #[must_use]
    pub const fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    /// Returns the `default` value of an annotation type element.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Expression> {
        self.default_value.as_ref()
    }
}

impl Tree for MethodTree {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_method(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            opt(self.modifiers.as_ref())
                .chain(many(&self.type_parameters))
                .chain(opt(self.return_type.as_ref()))
                .chain(one(&self.simple_name))
                .chain(many(&self.parameters))
                .chain(many(&self.throws))
                .chain(opt(self.block.as_ref()))
                .chain(opt(self.default_value.as_ref())),
        )
    }
}

/// A field, local variable, parameter, catch parameter or resource.
///
/// `int a, b;` declares two variables that each carry their own copy of the
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableTree {
    span: Span,
    modifiers: Option<Modifiers>,
    var_type: Expression,
    simple_name: Identifier,
    initializer: Option<Expression>,
}

impl VariableTree {
    /// Creates a variable declaration.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the type or the name is
    /// absent.
    pub fn new(
        span: Span,
        modifiers: Option<Modifiers>,
        var_type: Option<Expression>,
        simple_name: Option<Identifier>,
        initializer: Option<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            modifiers,
            var_type: require(var_type, Kind::Variable, "type")?,
            simple_name: require(simple_name, Kind::Variable, "simple_name")?,
            initializer,
        })
    }

    /// Returns the modifier list, if the declaration has one.
    #[must_use]
    pub const fn modifiers(&self) -> Option<&Modifiers> {
        self.modifiers.as_ref()
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn var_type(&self) -> &Expression {
        &self.var_type
    }

    /// Returns the declared name.
    #[must_use]
    pub const fn simple_name(&self) -> &Identifier {
        &self.simple_name
    }

    /// Returns the initializer, if any.
    #[must_use]
    pub const fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }
}

impl Tree for VariableTree {
    fn kind(&self) -> Kind {
        Kind::Variable
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_variable(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(
            opt(self.modifiers.as_ref())
                .chain(one(&self.var_type))
                .chain(one(&self.simple_name))
                .chain(opt(self.initializer.as_ref())),
        )
    }
}

/// `T extends A & B`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    span: Span,
    identifier: Identifier,
    bounds: Vec<Expression>,
}

impl TypeParameter {
    /// Creates a type parameter.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if the name is absent.
    pub fn new(
        span: Span,
        identifier: Option<Identifier>,
        bounds: Vec<Expression>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            span,
            identifier: require(identifier, Kind::TypeParameter, "identifier")?,
            bounds,
        })
    }

    /// Returns the parameter name.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Returns the bounds in order.
    #[must_use]
    pub fn bounds(&self) -> &[Expression] {
        &self.bounds
    }
}

impl Tree for TypeParameter {
    fn kind(&self) -> Kind {
        Kind::TypeParameter
    }

    fn span(&self) -> &Span {
        &self.span
    }

    fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_type_parameter(self);
    }

    fn children(&self) -> Children<'_> {
        Children::new(one(&self.identifier).chain(many(&self.bounds)))
    }
}
