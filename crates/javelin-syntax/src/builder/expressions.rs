//! Lowering of expressions.

use javelin_tree::{
    ArrayAccessExpression, AssignmentExpression, BinaryExpression, ConditionalExpression,
    Expression, InstanceOf, Kind, LambdaBody, LambdaExpression, LambdaParameter, Literal,
    MemberSelectExpression, MethodInvocation, MethodReference, NewArray, NewClass,
    ParenthesizedExpression, TypeCast, UnaryExpression,
};

use super::types::{array_of, is_type_tag};
use super::{TreeBuilder, identifier, select, unsupported};
use crate::error::SyntaxError;
use crate::raw::RawNode;

/// Maps a literal tag to its kind, looking at the suffix of numbers.
fn literal_kind(raw: RawNode<'_>) -> Option<Kind> {
    let text = raw.text();
    let kind = match raw.tag() {
        "decimal_integer_literal"
        | "hex_integer_literal"
        | "octal_integer_literal"
        | "binary_integer_literal" => {
            if text.ends_with(['l', 'L']) {
                Kind::LongLiteral
            } else {
                Kind::IntLiteral
            }
        }
        "decimal_floating_point_literal" | "hex_floating_point_literal" => {
            if text.ends_with(['f', 'F']) {
                Kind::FloatLiteral
            } else {
                Kind::DoubleLiteral
            }
        }
        "true" | "false" => Kind::BooleanLiteral,
        "character_literal" => Kind::CharLiteral,
        "string_literal" => Kind::StringLiteral,
        "null_literal" => Kind::NullLiteral,
        _ => return None,
    };
    Some(kind)
}

/// Returns the single expression inside `(e)`, as used by `if`, `while`
/// and `switch` conditions.
pub(super) fn parenthesized_inner(raw: RawNode<'_>) -> Option<RawNode<'_>> {
    if raw.tag() == "parenthesized_expression" {
        raw.named_children().into_iter().next()
    } else {
        Some(raw)
    }
}

impl TreeBuilder {
    /// Lowers an expression.
    pub(super) fn expression(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        self.nested(raw, |this| this.expression_inner(raw))
    }

    pub(super) fn opt_expression(
        &mut self,
        raw: Option<RawNode<'_>>,
    ) -> Result<Option<Expression>, SyntaxError> {
        raw.map(|found| self.expression(found)).transpose()
    }

    /// Lowers the expressions of an `argument_list`.
    pub(super) fn arguments(&mut self, raw: Option<RawNode<'_>>) -> Result<Vec<Expression>, SyntaxError> {
        let Some(list) = raw else {
            return Ok(Vec::new());
        };
        list.named_children()
            .into_iter()
            .map(|argument| self.expression(argument))
            .collect()
    }

    pub(super) fn expression_inner(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        if let Some(kind) = literal_kind(raw) {
            return Ok(Literal::new(kind, raw.token())?.into());
        }
        match raw.tag() {
            "identifier" | "this" | "super" => Ok(identifier(raw).into()),
            "field_access" => self.field_access(raw),
            "scoped_identifier" => {
                let scope = self.opt_expression(raw.field("scope"))?;
                let name = raw.field("name").map(identifier);
                Ok(MemberSelectExpression::new(raw.span(), scope, name)?.into())
            }
            "parenthesized_expression" => {
                let inner = self.opt_expression(raw.named_children().into_iter().next())?;
                Ok(ParenthesizedExpression::new(raw.span(), inner)?.into())
            }
            "method_invocation" => self.method_invocation(raw),
            "object_creation_expression" => self.object_creation(raw),
            "array_creation_expression" => self.array_creation(raw),
            "array_access" => {
                let array = self.opt_expression(raw.field("array"))?;
                let index = self.opt_expression(raw.field("index"))?;
                Ok(ArrayAccessExpression::new(raw.span(), array, index)?.into())
            }
            "cast_expression" => self.cast(raw),
            "instanceof_expression" => self.instance_of(raw),
            "ternary_expression" => {
                let condition = self.opt_expression(raw.field("condition"))?;
                let consequence = self.opt_expression(raw.field("consequence"))?;
                let alternative = self.opt_expression(raw.field("alternative"))?;
                Ok(ConditionalExpression::new(raw.span(), condition, consequence, alternative)?.into())
            }
            "unary_expression" | "binary_expression" | "assignment_expression" => {
                self.operation(raw)
            }
            "update_expression" => self.update(raw),
            "lambda_expression" => self.lambda(raw),
            "method_reference" => self.method_reference(raw),
            "class_literal" => {
                let (Some(class_type), Some(keyword)) = (
                    raw.named_children().into_iter().next(),
                    raw.find_token("class"),
                ) else {
                    return unsupported(raw);
                };
                let target = self.type_expr(class_type)?;
                select(target, keyword)
            }
            tag if is_type_tag(tag) => self.type_inner(raw),
            _ => unsupported(raw),
        }
    }

    /// Lowers unary, binary and assignment operations. The kind follows
    /// from the spelling of the operator.
    fn operation(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let Some(operator) = raw.field("operator") else {
            return unsupported(raw);
        };
        let spelling = operator.text();
        let resolved = match raw.tag() {
            "unary_expression" => Kind::from_unary_operator(spelling, true),
            "binary_expression" => Kind::from_binary_operator(spelling),
            _ => Kind::from_assignment_operator(spelling),
        };
        let Some(kind) = resolved else {
            return unsupported(operator);
        };
        let expression = match raw.tag() {
            "unary_expression" => {
                let operand = self.opt_expression(raw.field("operand"))?;
                UnaryExpression::new(kind, raw.span(), operator.token(), operand)?.into()
            }
            "binary_expression" => {
                let left = self.opt_expression(raw.field("left"))?;
                let right = self.opt_expression(raw.field("right"))?;
                BinaryExpression::new(kind, raw.span(), left, operator.token(), right)?.into()
            }
            _ => {
                let variable = self.opt_expression(raw.field("left"))?;
                let value = self.opt_expression(raw.field("right"))?;
                AssignmentExpression::new(kind, raw.span(), variable, operator.token(), value)?
                    .into()
            }
        };
        Ok(expression)
    }

    /// Lowers `(T) e`. Intersection casts such as `(A & B) e` are refused.
    fn cast(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let mut cast_types = raw.fields("type");
        if cast_types.len() > 1 {
            return unsupported(raw);
        }
        let cast_type = self.opt_type(cast_types.pop())?;
        let value = self.opt_expression(raw.field("value"))?;
        Ok(TypeCast::new(raw.span(), cast_type, value)?.into())
    }

    /// Lowers `a.b`, `this.x`, `A.this` and `A.super.x`.
    fn field_access(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let object = self.opt_expression(raw.field("object"))?;
        let children = raw.named_children();
        let scope = match (object, children.get(1)) {
            (Some(qualifier), Some(middle)) if children.len() == 3 && middle.tag() == "super" => {
                Some(select(qualifier, *middle)?)
            }
            (other, _) => other,
        };
        let field = raw.field("field").map(identifier);
        Ok(MemberSelectExpression::new(raw.span(), scope, field)?.into())
    }

    /// Lowers `f(x)`, `a.f(x)` and `a.<T>f(x)`.
    ///
    /// A qualified call selects its name from the object through a member
    /// select spanning both.
    fn method_invocation(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let name = raw.field("name");
        let object_raw = raw.field("object");
        let object = self.opt_expression(object_raw)?;
        // `A.super.f()` names the qualified super between object and name.
        let qualified_super = raw
            .children_of_tag("super")
            .into_iter()
            .find(|candidate| object_raw.is_none_or(|found| found.span() != candidate.span()));
        let scope = match (object, qualified_super) {
            (Some(qualifier), Some(keyword)) => Some(select(qualifier, keyword)?),
            (other, _) => other,
        };
        let method_select = match (scope, name) {
            (Some(target), Some(method)) => Some(select(target, method)?),
            (None, Some(method)) => Some(identifier(method).into()),
            (_, None) => None,
        };
        let type_arguments = self.type_arguments(raw.field("type_arguments"))?;
        let arguments = self.arguments(raw.field("arguments"))?;
        Ok(MethodInvocation::new(raw.span(), method_select, type_arguments, arguments)?.into())
    }

    /// Lowers `new T(x)`, `outer.new T(x)` and anonymous classes.
    fn object_creation(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let enclosing_raw = raw
            .children()
            .into_iter()
            .next()
            .filter(RawNode::is_named);
        let enclosing = self.opt_expression(enclosing_raw)?;
        let type_arguments = self.type_arguments(raw.field("type_arguments"))?;
        let class_type = self.opt_type(raw.field("type"))?;
        let arguments = self.arguments(raw.field("arguments"))?;
        let class_body = raw
            .child_of_tag("class_body")
            .map(|body| self.anonymous_class(body))
            .transpose()?;
        Ok(NewClass::new(
            raw.span(),
            enclosing,
            type_arguments,
            class_type,
            arguments,
            class_body,
        )?
        .into())
    }

    /// Lowers `new int[n][]` and `new int[][] {{1}}`.
    ///
    /// The element type is the type of the array's elements, so brackets
    /// beyond the outermost level wrap it in array types.
    fn array_creation(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let base = self.opt_type(raw.field("type"))?;
        let mut dimensions = Vec::new();
        let mut empty_dimensions = None;
        for dimension in raw.fields("dimensions") {
            if dimension.tag() == "dimensions_expr" {
                let size = dimension
                    .named_children()
                    .into_iter()
                    .rfind(|child| !matches!(child.tag(), "annotation" | "marker_annotation"));
                let Some(size_expression) = self.opt_expression(size)? else {
                    return unsupported(dimension);
                };
                dimensions.push(size_expression);
            } else {
                empty_dimensions = Some(dimension);
            }
        }
        let brackets: Vec<RawNode<'_>> = empty_dimensions
            .map(|dims| {
                dims.tokens()
                    .into_iter()
                    .filter(|token| token.tag() == "]")
                    .collect()
            })
            .unwrap_or_default();
        // With an initializer the first `[]` is the array itself.
        let mut element_type = base;
        for bracket in brackets.into_iter().skip(usize::from(dimensions.is_empty())) {
            element_type = wrap(element_type, bracket)?;
        }
        let initializers = raw
            .field("value")
            .map(|list| {
                list.named_children()
                    .into_iter()
                    .map(|element| self.array_element(element))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();
        Ok(NewArray::new(raw.span(), element_type, dimensions, initializers)?.into())
    }

    fn array_element(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        if raw.tag() != "array_initializer" {
            return self.expression(raw);
        }
        self.nested(raw, |this| {
            let elements = raw
                .named_children()
                .into_iter()
                .map(|element| this.array_element(element))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(NewArray::new(raw.span(), None, Vec::new(), elements)?.into())
        })
    }

    fn instance_of(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        if let Some(pattern) = raw.field("pattern").or_else(|| raw.field("name")) {
            return unsupported(pattern);
        }
        let Some(keyword) = raw.find_token("instanceof") else {
            return unsupported(raw);
        };
        let operand = self.opt_expression(raw.field("left"))?;
        let instance_type = self.opt_type(raw.field("right"))?;
        Ok(InstanceOf::new(raw.span(), operand, keyword.token(), instance_type)?.into())
    }

    /// Lowers `++i`, `--i`, `i++` and `i--`.
    fn update(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let prefix = raw
            .children()
            .into_iter()
            .next()
            .is_some_and(|first| !first.is_named());
        let Some(operator) = raw
            .tokens()
            .into_iter()
            .find(|token| matches!(token.tag(), "++" | "--"))
        else {
            return unsupported(raw);
        };
        let Some(kind) = Kind::from_unary_operator(operator.text(), prefix) else {
            return unsupported(operator);
        };
        let operand = self.opt_expression(raw.named_children().into_iter().next())?;
        Ok(UnaryExpression::new(kind, raw.span(), operator.token(), operand)?.into())
    }

    /// Lowers `x -> e`, `(x, y) -> e` and `(int x) -> { ... }`.
    fn lambda(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let parameters = match raw.field("parameters") {
            None => Vec::new(),
            Some(single) if single.tag() == "identifier" => {
                vec![LambdaParameter::Inferred(identifier(single))]
            }
            Some(list) if list.tag() == "inferred_parameters" => list
                .named_children()
                .into_iter()
                .map(|name| LambdaParameter::Inferred(identifier(name)))
                .collect(),
            Some(list) => self
                .formal_parameters(Some(list))?
                .into_iter()
                .map(LambdaParameter::Declared)
                .collect(),
        };
        let body = match raw.field("body") {
            Some(block) if block.tag() == "block" => Some(LambdaBody::Block(self.block(block)?)),
            Some(expression) => Some(LambdaBody::Expression(self.expression(expression)?)),
            None => None,
        };
        Ok(LambdaExpression::new(raw.span(), parameters, body)?.into())
    }

    /// Lowers `Type::method`, `expr::method` and `Type::new`.
    fn method_reference(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        if let Some(arguments) = raw.child_of_tag("type_arguments") {
            return unsupported(arguments);
        }
        let named = raw.named_children();
        let target = self.opt_expression(named.first().copied())?;
        let method = raw
            .find_token("new")
            .or_else(|| named.get(1).copied())
            .map(identifier);
        Ok(MethodReference::new(raw.span(), target, method)?.into())
    }
}

fn wrap(element: Option<Expression>, bracket: RawNode<'_>) -> Result<Option<Expression>, SyntaxError> {
    element
        .map(|inner| array_of(inner, bracket.span()))
        .transpose()
}
