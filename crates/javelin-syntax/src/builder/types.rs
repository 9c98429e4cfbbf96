//! Lowering of type expressions.

use javelin_tree::{ArrayType, Expression, Kind, ParameterizedType, PrimitiveType, Span, Wildcard};

use super::{TreeBuilder, identifier, select, unsupported};
use crate::error::SyntaxError;
use crate::raw::RawNode;

/// Returns whether `tag` names a type in the Java grammar.
pub(super) fn is_type_tag(tag: &str) -> bool {
    matches!(
        tag,
        "integral_type"
            | "floating_point_type"
            | "boolean_type"
            | "void_type"
            | "type_identifier"
            | "scoped_type_identifier"
            | "generic_type"
            | "array_type"
            | "annotated_type"
            | "wildcard"
    )
}

impl TreeBuilder {
    /// Lowers a type.
    pub(super) fn type_expr(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        self.nested(raw, |this| this.type_inner(raw))
    }

    pub(super) fn opt_type(&mut self, raw: Option<RawNode<'_>>) -> Result<Option<Expression>, SyntaxError> {
        raw.map(|found| self.type_expr(found)).transpose()
    }

    pub(super) fn types(&mut self, raws: Vec<RawNode<'_>>) -> Result<Vec<Expression>, SyntaxError> {
        raws.into_iter().map(|raw| self.type_expr(raw)).collect()
    }

    pub(super) fn type_inner(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        match raw.tag() {
            "integral_type" | "floating_point_type" | "boolean_type" | "void_type" => {
                Ok(PrimitiveType::new(raw.token()).into())
            }
            "type_identifier" | "identifier" => Ok(identifier(raw).into()),
            "scoped_type_identifier" => {
                // Annotations between the qualifier and the name are dropped.
                let children = raw.named_children();
                let (Some(qualifier), Some(name)) = (children.first(), children.last()) else {
                    return unsupported(raw);
                };
                if children.len() < 2 {
                    return unsupported(raw);
                }
                let scope = self.type_expr(*qualifier)?;
                select(scope, *name)
            }
            "generic_type" => {
                let raw_type = raw
                    .named_children()
                    .into_iter()
                    .find(|child| child.tag() != "type_arguments");
                let base = self.opt_type(raw_type)?;
                let arguments = self.type_arguments(raw.child_of_tag("type_arguments"))?;
                Ok(ParameterizedType::new(raw.span(), base, arguments)?.into())
            }
            "array_type" => {
                let element = self.opt_type(raw.field("element"))?;
                match with_dimensions(element, raw.field("dimensions"))? {
                    Some(array) => Ok(array),
                    None => Ok(ArrayType::new(raw.span(), None)?.into()),
                }
            }
            // Type annotations are not modelled; the annotated type stands alone.
            "annotated_type" => {
                let Some(inner) = raw.named_children().pop() else {
                    return unsupported(raw);
                };
                self.type_expr(inner)
            }
            "wildcard" => self.wildcard(raw),
            "scoped_identifier" => self.expression_inner(raw),
            _ => unsupported(raw),
        }
    }

    fn wildcard(&mut self, raw: RawNode<'_>) -> Result<Expression, SyntaxError> {
        let kind = if raw.has_token("extends") {
            Kind::ExtendsWildcard
        } else if raw.has_token("super") || raw.child_of_tag("super").is_some() {
            Kind::SuperWildcard
        } else {
            Kind::UnboundedWildcard
        };
        let bound = raw
            .named_children()
            .into_iter()
            .rfind(|child| !matches!(child.tag(), "super" | "annotation" | "marker_annotation"));
        let bound_type = self.opt_type(bound)?;
        Ok(Wildcard::new(kind, raw.span(), bound_type)?.into())
    }

    /// Lowers `<A, B>`. An empty list is the diamond.
    pub(super) fn type_arguments(
        &mut self,
        raw: Option<RawNode<'_>>,
    ) -> Result<Vec<Expression>, SyntaxError> {
        raw.map(|list| self.types(list.named_children()))
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

/// Wraps `element` in one array type per `[]` pair of `dimensions`.
///
/// Each layer spans from the element to its closing bracket.
pub(super) fn with_dimensions(
    element: Option<Expression>,
    dimensions: Option<RawNode<'_>>,
) -> Result<Option<Expression>, SyntaxError> {
    let Some(dims) = dimensions else {
        return Ok(element);
    };
    element
        .map(|mut current| {
            for bracket in dims.tokens().into_iter().filter(|token| token.tag() == "]") {
                current = array_of(current, bracket.span())?;
            }
            Ok(current)
        })
        .transpose()
}

/// Wraps `element` in an array type ending at `end`.
pub(super) fn array_of(element: Expression, end: Span) -> Result<Expression, SyntaxError> {
    let span = element.span().to(&end);
    Ok(ArrayType::new(span, Some(element))?.into())
}
