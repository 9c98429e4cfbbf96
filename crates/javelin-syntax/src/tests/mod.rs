//! Unit and behaviour tests for `javelin_syntax`.

mod behaviour;

use javelin_tree::{CompilationUnit, Expression, Statement};

use crate::{parse_compilation_unit, parse_expression, parse_statements};

pub(crate) fn expression(source: &str) -> Expression {
    parse_expression(source).unwrap_or_else(|err| panic!("expression `{source}`: {err}"))
}

pub(crate) fn statements(source: &str) -> Vec<Statement> {
    parse_statements(source).unwrap_or_else(|err| panic!("statements `{source}`: {err}"))
}

pub(crate) fn unit(source: &str) -> CompilationUnit {
    parse_compilation_unit(source).unwrap_or_else(|err| panic!("compilation unit: {err}"))
}

/// Names of the identifiers under `expression`, in pre-order.
pub(crate) fn identifier_names(expression: &Expression) -> Vec<String> {
    expression
        .as_node()
        .descendants()
        .filter_map(|node| match node {
            javelin_tree::NodeRef::Identifier(identifier) => Some(identifier.name().to_owned()),
            _ => None,
        })
        .collect()
}
