//! Lowering of declarations: compilation units, imports, type declarations
//! and their members, modifiers, annotations and variables.

use javelin_tree::{
    Annotation, AssignmentExpression, Block, ClassTree, CompilationUnit, EmptyStatement,
    EnumConstant, Expression, Import, Kind, Member, MethodTree, Modifiers, NewArray,
    TypeParameter, VariableTree,
};

use super::types::{array_of, with_dimensions};
use super::{TreeBuilder, identifier, select, unsupported};
use crate::error::SyntaxError;
use crate::raw::RawNode;

const TYPE_DECLARATIONS: [&str; 4] = [
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "annotation_type_declaration",
];

pub(super) fn is_type_declaration(tag: &str) -> bool {
    TYPE_DECLARATIONS.contains(&tag)
}

fn is_annotation(raw: RawNode<'_>) -> bool {
    matches!(raw.tag(), "annotation" | "marker_annotation")
}

impl TreeBuilder {
    pub(super) fn compilation_unit(
        &mut self,
        raw: RawNode<'_>,
    ) -> Result<CompilationUnit, SyntaxError> {
        let mut package_annotations = Vec::new();
        let mut package_name = None;
        let mut imports = Vec::new();
        let mut types = Vec::new();
        for child in raw.named_children() {
            match child.tag() {
                "package_declaration" => {
                    for part in child.named_children() {
                        if is_annotation(part) {
                            package_annotations.push(self.annotation(part)?);
                        } else {
                            package_name = Some(self.expression(part)?);
                        }
                    }
                }
                "import_declaration" => imports.push(self.import(child)?),
                tag if is_type_declaration(tag) => types.push(self.class_declaration(child)?),
                _ => return unsupported(child),
            }
        }
        Ok(CompilationUnit::new(
            raw.span(),
            package_annotations,
            package_name,
            imports,
            types,
        )?)
    }

    fn import(&mut self, raw: RawNode<'_>) -> Result<Import, SyntaxError> {
        let name = raw
            .named_children()
            .into_iter()
            .find(|child| child.tag() != "asterisk");
        let prefix = self.opt_expression(name)?;
        // `import a.b.*;` selects the identifier `*` from `a.b`.
        let qualified = match (prefix, raw.child_of_tag("asterisk")) {
            (Some(package), Some(asterisk)) => Some(select(package, asterisk)?),
            (plain, _) => plain,
        };
        Ok(Import::new(raw.span(), raw.has_token("static"), qualified)?)
    }

    /// Lowers a class, interface, enum or annotation type declaration.
    pub(super) fn class_declaration(&mut self, raw: RawNode<'_>) -> Result<ClassTree, SyntaxError> {
        self.nested(raw, |this| this.class_declaration_inner(raw))
    }

    fn class_declaration_inner(&mut self, raw: RawNode<'_>) -> Result<ClassTree, SyntaxError> {
        let kind = match raw.tag() {
            "class_declaration" => Kind::Class,
            "interface_declaration" => Kind::Interface,
            "enum_declaration" => Kind::Enum,
            "annotation_type_declaration" => Kind::AnnotationType,
            _ => return unsupported(raw),
        };
        if let Some(permits) = raw.field("permits") {
            return unsupported(permits);
        }
        let modifiers = self.modifiers_of(raw)?;
        let type_parameters = self.type_parameters(raw.field("type_parameters"))?;
        let extends = raw
            .field("superclass")
            .and_then(|clause| clause.named_children().into_iter().next());
        let superclass = self.opt_type(extends)?;
        let super_interfaces = raw
            .field("interfaces")
            .or_else(|| raw.child_of_tag("extends_interfaces"))
            .and_then(|clause| clause.child_of_tag("type_list"))
            .map(|list| self.types(list.named_children()))
            .transpose()?
            .unwrap_or_default();
        let members = raw
            .field("body")
            .map(|body| self.class_body(body))
            .transpose()?
            .unwrap_or_default();
        Ok(ClassTree::new(
            kind,
            raw.span(),
            modifiers,
            raw.field("name").map(identifier),
            type_parameters,
            superclass,
            super_interfaces,
            members,
        )?)
    }

    /// Lowers the members of a class, interface, enum or annotation body.
    ///
    /// A bare `;` in a body is an empty member, except the one separating
    /// enum constants from the remaining enum members.
    pub(super) fn class_body(&mut self, body: RawNode<'_>) -> Result<Vec<Member>, SyntaxError> {
        let mut members = Vec::new();
        self.members_into(body, false, &mut members)?;
        Ok(members)
    }

    fn members_into(
        &mut self,
        body: RawNode<'_>,
        skip_separator: bool,
        members: &mut Vec<Member>,
    ) -> Result<(), SyntaxError> {
        let mut separator_pending = skip_separator;
        for child in body.children() {
            if !child.is_named() {
                if child.tag() == ";" && !std::mem::take(&mut separator_pending) {
                    members.push(EmptyStatement::new(child.span()).into());
                }
                continue;
            }
            self.member_into(child, members)?;
        }
        Ok(())
    }

    fn member_into(&mut self, raw: RawNode<'_>, members: &mut Vec<Member>) -> Result<(), SyntaxError> {
        match raw.tag() {
            "field_declaration" | "constant_declaration" => {
                members.extend(self.variables(raw)?.into_iter().map(Member::from));
            }
            "method_declaration" | "annotation_type_element_declaration" => {
                members.push(self.method(raw, Kind::Method)?.into());
            }
            "constructor_declaration" => {
                members.push(self.method(raw, Kind::Constructor)?.into());
            }
            "enum_constant" => members.push(self.enum_constant(raw)?.into()),
            "enum_body_declarations" => self.members_into(raw, true, members)?,
            "block" => {
                let body = self.block_statements(raw)?;
                members.push(Block::with_kind(Kind::Initializer, raw.span(), body)?.into());
            }
            "static_initializer" => {
                let body = raw
                    .child_of_tag("block")
                    .map(|block| self.block_statements(block))
                    .transpose()?
                    .unwrap_or_default();
                members.push(Block::with_kind(Kind::StaticInitializer, raw.span(), body)?.into());
            }
            tag if is_type_declaration(tag) => {
                members.push(self.class_declaration(raw)?.into());
            }
            _ => return unsupported(raw),
        }
        Ok(())
    }

    fn enum_constant(&mut self, raw: RawNode<'_>) -> Result<EnumConstant, SyntaxError> {
        let modifiers = self.modifiers_of(raw)?;
        let arguments = self.arguments(raw.field("arguments"))?;
        let class_body = raw
            .field("body")
            .map(|body| self.anonymous_class(body))
            .transpose()?;
        Ok(EnumConstant::new(
            raw.span(),
            modifiers,
            raw.field("name").map(identifier),
            arguments,
            class_body,
        )?)
    }

    /// Lowers a class body without a header into a nameless class.
    pub(super) fn anonymous_class(&mut self, body: RawNode<'_>) -> Result<ClassTree, SyntaxError> {
        self.nested(body, |this| {
            let members = this.class_body(body)?;
            Ok(ClassTree::anonymous(body.span(), members))
        })
    }

    /// Lowers a method, constructor or annotation type element.
    fn method(&mut self, raw: RawNode<'_>, kind: Kind) -> Result<MethodTree, SyntaxError> {
        let modifiers = self.modifiers_of(raw)?;
        let type_parameters = self.type_parameters(raw.field("type_parameters"))?;
        let declared = self.opt_type(raw.field("type"))?;
        let return_type = with_dimensions(declared, raw.field("dimensions"))?;
        let parameters = self.formal_parameters(raw.field("parameters"))?;
        let throws = raw
            .child_of_tag("throws")
            .map(|clause| self.types(clause.named_children()))
            .transpose()?
            .unwrap_or_default();
        let block = raw
            .field("body")
            .map(|body| self.block(body))
            .transpose()?;
        let default_value = raw
            .field("value")
            .map(|value| self.element_value(value))
            .transpose()?;
        Ok(MethodTree::new(
            kind,
            raw.span(),
            modifiers,
            type_parameters,
            return_type,
            raw.field("name").map(identifier),
            parameters,
            throws,
            block,
            default_value,
        )?)
    }

    pub(super) fn formal_parameters(
        &mut self,
        raw: Option<RawNode<'_>>,
    ) -> Result<Vec<VariableTree>, SyntaxError> {
        let Some(list) = raw else {
            return Ok(Vec::new());
        };
        list.named_children()
            .into_iter()
            .map(|parameter| match parameter.tag() {
                "formal_parameter" => self.declared_variable(parameter, None),
                "spread_parameter" => self.spread_parameter(parameter),
                _ => unsupported(parameter),
            })
            .collect()
    }

    /// Lowers a variable declared through `modifiers`, `type`, `name` and
    /// `dimensions`: formal parameters, enhanced-for variables and
    /// resources.
    ///
    /// The variable spans from its modifiers or type to its initializer or
    /// name, so an enhanced-for variable does not cover the loop.
    pub(super) fn declared_variable<'t>(
        &mut self,
        raw: RawNode<'t>,
        initializer: Option<RawNode<'t>>,
    ) -> Result<VariableTree, SyntaxError> {
        let modifiers = self.modifiers_of(raw)?;
        let declared = self.opt_type(raw.field("type"))?;
        let var_type = with_dimensions(declared, raw.field("dimensions"))?;
        let name = raw.field("name");
        let start = raw
            .child_of_tag("modifiers")
            .or_else(|| raw.field("type"))
            .map_or_else(|| raw.span(), |first| first.span());
        let end = initializer
            .or_else(|| raw.field("dimensions"))
            .or(name)
            .map_or_else(|| raw.span(), |last| last.span());
        let value = self.opt_expression(initializer)?;
        Ok(VariableTree::new(
            start.to(&end),
            modifiers,
            var_type,
            name.map(identifier),
            value,
        )?)
    }

    /// Lowers `String... args`: the declared type becomes an array type.
    fn spread_parameter(&mut self, raw: RawNode<'_>) -> Result<VariableTree, SyntaxError> {
        let modifiers = self.modifiers_of(raw)?;
        let element_raw = raw
            .named_children()
            .into_iter()
            .find(|child| !matches!(child.tag(), "modifiers" | "variable_declarator"));
        let variadic = match (self.opt_type(element_raw)?, raw.find_token("...")) {
            (Some(element), Some(ellipsis)) => Some(array_of(element, ellipsis.span())?),
            (other, _) => other,
        };
        let declarator = raw.child_of_tag("variable_declarator");
        let var_type = with_dimensions(
            variadic,
            declarator.and_then(|found| found.field("dimensions")),
        )?;
        let initializer = declarator
            .and_then(|found| found.field("value"))
            .map(|value| self.variable_initializer(value))
            .transpose()?;
        Ok(VariableTree::new(
            raw.span(),
            modifiers,
            var_type,
            declarator.and_then(|found| found.field("name")).map(identifier),
            initializer,
        )?)
    }

    /// Lowers a field, constant or local variable declaration into one
    /// variable per declarator.
    ///
    /// Each variable spans from the start of the declaration to the end of
    /// its declarator and carries its own copy of the modifiers and type.
    pub(super) fn variables(&mut self, raw: RawNode<'_>) -> Result<Vec<VariableTree>, SyntaxError> {
        let modifiers = self.modifiers_of(raw)?;
        let declared = self.opt_type(raw.field("type"))?;
        let span = raw.span();
        raw.fields("declarator")
            .into_iter()
            .map(|declarator| {
                let var_type =
                    with_dimensions(declared.clone(), declarator.field("dimensions"))?;
                let initializer = declarator
                    .field("value")
                    .map(|value| self.variable_initializer(value))
                    .transpose()?;
                Ok(VariableTree::new(
                    span.to(&declarator.span()),
                    modifiers.clone(),
                    var_type,
                    declarator.field("name").map(identifier),
                    initializer,
                )?)
            })
            .collect()
    }

    /// Lowers the right-hand side of a declarator, where a bare `{1, 2}` is
    /// an array creation without a type.
    fn variable_initializer(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        if raw.tag() != "array_initializer" {
            return self.expression(raw);
        }
        self.nested(raw, |this| {
            let initializers = raw
                .named_children()
                .into_iter()
                .map(|element| this.variable_initializer(element))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(NewArray::new(raw.span(), None, Vec::new(), initializers)?.into())
        })
    }

    /// Lowers the `modifiers` child of a declaration, if present.
    pub(super) fn modifiers_of(&mut self, raw: RawNode<'_>) -> Result<Option<Modifiers>, SyntaxError> {
        let Some(list) = raw.child_of_tag("modifiers") else {
            return Ok(None);
        };
        let keywords = list.tokens().iter().map(RawNode::token).collect();
        let annotations = list
            .named_children()
            .into_iter()
            .filter(|child| is_annotation(*child))
            .map(|child| self.annotation(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Modifiers::new(list.span(), keywords, annotations)))
    }

    /// Lowers `@A`, `@A(x)` or `@A(k = v, ...)`.
    pub(super) fn annotation(&mut self, raw: RawNode<'_>) -> Result<Annotation, SyntaxError> {
        self.nested(raw, |this| {
            let annotation_type = this.opt_expression(raw.field("name"))?;
            let arguments = raw
                .field("arguments")
                .map(|list| {
                    list.named_children()
                        .into_iter()
                        .map(|argument| this.element_value(argument))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?
                .unwrap_or_default();
            Ok(Annotation::new(raw.span(), annotation_type, arguments)?)
        })
    }

    /// Lowers an annotation argument. `k = v` pairs become assignments.
    fn element_value(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        match raw.tag() {
            "element_value_pair" => {
                let Some(operator) = raw.find_token("=") else {
                    return unsupported(raw);
                };
                let key = raw.field("key").map(|key| identifier(key).into());
                let value = raw
                    .field("value")
                    .map(|value| self.element_value(value))
                    .transpose()?;
                Ok(AssignmentExpression::new(
                    Kind::Assignment,
                    raw.span(),
                    key,
                    operator.token(),
                    value,
                )?
                .into())
            }
            "element_value_array_initializer" => self.nested(raw, |this| {
                let elements = raw
                    .named_children()
                    .into_iter()
                    .map(|element| this.element_value(element))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(NewArray::new(raw.span(), None, Vec::new(), elements)?.into())
            }),
            "annotation" | "marker_annotation" => Ok(self.annotation(raw)?.into()),
            _ => self.expression(raw),
        }
    }

    fn type_parameters(
        &mut self,
        raw: Option<RawNode<'_>>,
    ) -> Result<Vec<TypeParameter>, SyntaxError> {
        let Some(list) = raw else {
            return Ok(Vec::new());
        };
        list.children_of_tag("type_parameter")
            .into_iter()
            .map(|parameter| {
                let bounds = parameter
                    .child_of_tag("type_bound")
                    .map(|bound| self.types(bound.named_children()))
                    .transpose()?
                    .unwrap_or_default();
                Ok(TypeParameter::new(
                    parameter.span(),
                    parameter.child_of_tag("type_identifier").map(identifier),
                    bounds,
                )?)
            })
            .collect()
    }
}
