//! Behaviour-driven tests for lowering Java source.

use std::str::FromStr;

use javelin_tree::{CompilationUnit, Expression, Kind, NodeRef, NotApplicable, outline};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{BuildConfig, Parser, SyntaxError, TreeBuilder, parse_compilation_unit, parse_expression};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    source: Option<String>,
    config: Option<BuildConfig>,
    expression: Option<Result<Expression, SyntaxError>>,
    unit: Option<Result<CompilationUnit, SyntaxError>>,
    operator_result: Option<Result<String, NotApplicable>>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

impl TestWorld {
    fn source(&self) -> &str {
        self.source.as_deref().expect("source should be set")
    }

    fn built_expression(&self) -> &Expression {
        match self.expression.as_ref().expect("expression should be built") {
            Ok(expression) => expression,
            Err(err) => panic!("expression should build: {err}"),
        }
    }

    fn built_unit(&self) -> &CompilationUnit {
        match self.unit.as_ref().expect("unit should be built") {
            Ok(unit) => unit,
            Err(err) => panic!("unit should build: {err}"),
        }
    }

    fn failure(&self) -> &SyntaxError {
        let result = self
            .unit
            .as_ref()
            .map(|unit| unit.as_ref().err())
            .or_else(|| self.expression.as_ref().map(|expression| expression.as_ref().err()));
        match result {
            Some(Some(err)) => err,
            Some(None) => panic!("build should have failed"),
            None => panic!("nothing was built"),
        }
    }
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the Java source {source}")]
fn given_source(world: &mut TestWorld, source: QuotedString) {
    world.source = Some(source.as_str().to_owned());
}

#[given("a builder limited to a depth of {depth}")]
fn given_depth_limit(world: &mut TestWorld, depth: usize) {
    world.config = Some(BuildConfig::new(depth, true));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the source is built as an expression")]
fn when_built_as_expression(world: &mut TestWorld) {
    let built = match world.config.clone() {
        Some(config) => Parser::new()
            .and_then(|mut parser| parser.parse(&format!("{};", world.source())))
            .and_then(|parsed| TreeBuilder::new(config).build_expression(&parsed)),
        None => parse_expression(world.source()),
    };
    world.expression = Some(built);
}

#[when("the source is built as a compilation unit")]
fn when_built_as_unit(world: &mut TestWorld) {
    world.unit = Some(parse_compilation_unit(world.source()));
}

#[when("the operator token is requested")]
fn when_operator_token(world: &mut TestWorld) {
    let result = world
        .built_expression()
        .operator_token()
        .map(|token| token.text().to_owned());
    world.operator_result = Some(result);
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the expression kind is {kind}")]
fn then_expression_kind(world: &mut TestWorld, kind: QuotedString) {
    let expected: Kind = kind.as_str().parse().expect("known kind");
    assert_eq!(world.built_expression().kind(), expected);
}

#[then("the expression spans bytes {start} to {end}")]
fn then_expression_span(world: &mut TestWorld, start: u32, end: u32) {
    let span = world.built_expression().span();
    assert_eq!((span.start_byte(), span.end_byte()), (start, end));
}

#[then("the identifiers in pre-order are {names}")]
fn then_identifiers_in_order(world: &mut TestWorld, names: QuotedString) {
    let found: Vec<&str> = world
        .built_expression()
        .as_node()
        .descendants()
        .filter_map(|node| match node {
            NodeRef::Identifier(identifier) => Some(identifier.name()),
            _ => None,
        })
        .collect();
    let expected: Vec<&str> = names.as_str().split(',').map(str::trim).collect();
    assert_eq!(found, expected);
}

#[then("the operator text is {operator}")]
fn then_operator_token(world: &mut TestWorld, operator: QuotedString) {
    let result = world
        .operator_result
        .as_ref()
        .expect("operator result should be set");
    assert_eq!(result.as_deref(), Ok(operator.as_str()));
}

#[then("no operator token applies")]
fn then_operator_not_applicable(world: &mut TestWorld) {
    let result = world
        .operator_result
        .as_ref()
        .expect("operator result should be set");
    assert!(result.is_err());
}

#[then("the number of declared types is {count}")]
fn then_type_count(world: &mut TestWorld, count: usize) {
    assert_eq!(world.built_unit().types().len(), count);
}

#[then("the package is {name}")]
fn then_package(world: &mut TestWorld, name: QuotedString) {
    let package = world
        .built_unit()
        .package_name()
        .and_then(Expression::qualified_name);
    assert_eq!(package.as_deref(), Some(name.as_str()));
}

#[then("the outline mentions {kind}")]
fn then_outline_mentions(world: &mut TestWorld, kind: QuotedString) {
    let rendered = outline(NodeRef::from(world.built_unit()));
    assert!(
        rendered.lines().any(|line| line.trim_start().starts_with(kind.as_str())),
        "outline lacks {}:\n{rendered}",
        kind.as_str()
    );
}

#[then("the build fails as unsupported {tag}")]
fn then_unsupported(world: &mut TestWorld, tag: QuotedString) {
    match world.failure() {
        SyntaxError::Unsupported { tag: actual, .. } => assert_eq!(actual, tag.as_str()),
        other => panic!("unexpected error: {other}"),
    }
}

#[then("the build fails with syntax errors")]
fn then_syntax_errors(world: &mut TestWorld) {
    assert!(matches!(world.failure(), SyntaxError::SyntaxErrors { .. }));
}

#[then("the build fails for nesting deeper than {depth}")]
fn then_too_deep(world: &mut TestWorld, depth: usize) {
    match world.failure() {
        SyntaxError::NestingTooDeep { max_depth, .. } => assert_eq!(*max_depth, depth),
        other => panic!("unexpected error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/java_lowering.feature")]
fn java_lowering_behaviour(world: TestWorld) {
    let _ = world;
}
