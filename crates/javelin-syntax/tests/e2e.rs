//! End-to-end tests for javelin-syntax using insta for snapshot testing.
//!
//! These tests drive the public API from Java source to typed trees and
//! render the results through the tree outline.

use insta::assert_snapshot;
use javelin_syntax::{
    BuildConfig, Parser, SyntaxError, TreeBuilder, parse_compilation_unit, parse_expression,
    parse_statements,
};
use javelin_tree::{Kind, NodeRef, Statement, outline};
use rstest::{fixture, rstest};

const ARCHITECTURE_USE_PROPERTIES: &str = r#"package org.sonar.java.checks.targets;

import java.util.Properties;

public class ArchitectureUseProperties {

    public Properties produceProperties() {
        Properties props = new Properties();
        props.put("java.naming.factory.initial", "weblogic.jndi.WLInitialContextFactory");
        return props;
    }
}
"#;

#[fixture]
fn parser() -> Parser {
    Parser::new().unwrap_or_else(|err| panic!("parser init: {err}"))
}

// =============================================================================
// Happy Path: Expressions
// =============================================================================

#[rstest]
fn member_select_outline() {
    let select = parse_expression("a.b").unwrap_or_else(|err| panic!("expression: {err}"));

    assert_snapshot!(outline(select.as_node()), @r"
    MEMBER_SELECT
      IDENTIFIER a
      IDENTIFIER b
    ");
}

#[rstest]
fn nested_member_select_outline() {
    let select = parse_expression("a.b.c").unwrap_or_else(|err| panic!("expression: {err}"));

    assert_snapshot!(outline(select.as_node()), @r"
    MEMBER_SELECT
      MEMBER_SELECT
        IDENTIFIER a
        IDENTIFIER b
      IDENTIFIER c
    ");
}

#[rstest]
fn method_chain_outline() {
    let call = parse_expression("builder.add(1).build()")
        .unwrap_or_else(|err| panic!("expression: {err}"));

    assert_snapshot!(outline(call.as_node()), @r"
    METHOD_INVOCATION
      MEMBER_SELECT
        METHOD_INVOCATION
          MEMBER_SELECT
            IDENTIFIER builder
            IDENTIFIER add
          INT_LITERAL 1
        IDENTIFIER build
    ");
}

// =============================================================================
// Happy Path: Source files
// =============================================================================

#[rstest]
fn source_file_outline() {
    let unit = parse_compilation_unit(ARCHITECTURE_USE_PROPERTIES)
        .unwrap_or_else(|err| panic!("compilation unit: {err}"));

    assert_snapshot!(outline(NodeRef::from(&unit)), @r#"
    COMPILATION_UNIT
      MEMBER_SELECT
        MEMBER_SELECT
          MEMBER_SELECT
            MEMBER_SELECT
              IDENTIFIER org
              IDENTIFIER sonar
            IDENTIFIER java
          IDENTIFIER checks
        IDENTIFIER targets
      IMPORT
        MEMBER_SELECT
          MEMBER_SELECT
            IDENTIFIER java
            IDENTIFIER util
          IDENTIFIER Properties
      CLASS
        MODIFIERS
        IDENTIFIER ArchitectureUseProperties
        METHOD
          MODIFIERS
          IDENTIFIER Properties
          IDENTIFIER produceProperties
          BLOCK
            VARIABLE
              IDENTIFIER Properties
              IDENTIFIER props
              NEW_CLASS
                IDENTIFIER Properties
            EXPRESSION_STATEMENT
              METHOD_INVOCATION
                MEMBER_SELECT
                  IDENTIFIER props
                  IDENTIFIER put
                STRING_LITERAL "java.naming.factory.initial"
                STRING_LITERAL "weblogic.jndi.WLInitialContextFactory"
            RETURN_STATEMENT
              IDENTIFIER props
    "#);
}

#[rstest]
fn source_spans_map_back_to_text() {
    let unit = parse_compilation_unit(ARCHITECTURE_USE_PROPERTIES)
        .unwrap_or_else(|err| panic!("compilation unit: {err}"));

    let selects: Vec<&str> = NodeRef::from(&unit)
        .descendants()
        .filter(|node| node.kind() == Kind::MemberSelect)
        .map(|node| node.span().text(ARCHITECTURE_USE_PROPERTIES))
        .collect();

    assert!(selects.contains(&"org.sonar.java.checks.targets"));
    assert!(selects.contains(&"java.util.Properties"));
    assert!(selects.contains(&"props.put"));
}

#[rstest]
fn statements_keep_source_order() {
    let statements = parse_statements("int total = 0;\nfor (int i : xs) total += i;\nreturn total;")
        .unwrap_or_else(|err| panic!("statements: {err}"));

    let kinds: Vec<Kind> = statements.iter().map(Statement::kind).collect();
    assert_eq!(
        kinds,
        [Kind::Variable, Kind::ForEachStatement, Kind::ReturnStatement]
    );
    assert_eq!(statements[1].span().start().line(), 1);
}

// =============================================================================
// Unhappy Path: Parsing
// =============================================================================

#[rstest]
fn parser_reports_syntax_errors_with_positions(mut parser: Parser) {
    let parsed = parser
        .parse("class A {\n  int x = ;\n}")
        .unwrap_or_else(|err| panic!("parse: {err}"));

    assert!(parsed.has_errors());
    let errors = parsed.errors();
    let first = errors.first().unwrap_or_else(|| panic!("expected an error"));
    assert_eq!(first.line, 2);
}

#[rstest]
fn lenient_builds_still_refuse_error_nodes(mut parser: Parser) {
    let parsed = parser
        .parse("class A { ) }")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let mut builder = TreeBuilder::new(BuildConfig::new(512, false));

    let err = builder
        .build_compilation_unit(&parsed)
        .expect_err("error node in class body");

    assert!(matches!(err, SyntaxError::Unsupported { .. }), "unexpected error: {err}");
}

#[rstest]
#[case::statement("int x = 1;", "local_variable_declaration")]
#[case::two_expressions("a; b;", "expression_statement, expression_statement")]
#[case::empty("", "nothing")]
fn expression_entry_point_rejects_other_shapes(#[case] source: &str, #[case] found: &str) {
    let err = parse_expression(source).expect_err("not a single expression");

    let message = err.to_string();
    assert!(message.ends_with(found), "unexpected message: {message}");
}

#[rstest]
#[case::record("record R(int x) { }", "record_declaration")]
#[case::switch_rule(
    "class A { void f(int x) { switch (x) { case 1 -> f(2); default -> { } } } }",
    "switch_rule"
)]
#[case::module("module m { }", "module_declaration")]
fn unsupported_constructs_fail_fast(#[case] source: &str, #[case] tag: &str) {
    let err = parse_compilation_unit(source).expect_err("unsupported construct");

    match err {
        SyntaxError::Unsupported { tag: actual, .. } => assert_eq!(actual, tag),
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[rstest]
fn config_fills_missing_fields_with_defaults() {
    let config: BuildConfig = serde_json::from_str(r#"{ "max_depth": 8 }"#)
        .unwrap_or_else(|err| panic!("config: {err}"));

    assert_eq!(config, BuildConfig::new(8, true));
}

#[rstest]
fn config_rejects_unknown_fields() {
    let result = serde_json::from_str::<BuildConfig>(r#"{ "max_depth": 8, "depth": 2 }"#);

    assert!(result.is_err());
}
