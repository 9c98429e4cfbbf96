//! Behaviour-driven tests for the typed tree model.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::{ident, ident_expr, span};
use crate::{Expression, Kind, MemberSelectExpression, NodeRef, NotApplicable, TreeError, outline};

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
    select: Option<MemberSelectExpression>,
    construction_error: Option<TreeError>,
    operator_result: Option<Result<String, NotApplicable>>,
    kind: Option<Kind>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

/// Builds a left-nested member select chain from a dotted name.
fn dotted(name: &str) -> Option<MemberSelectExpression> {
    let mut parts = name.split('.');
    let mut offset = 0_u32;
    let first = parts.next()?;
    let mut qualifier = ident_expr(first, offset);
    offset += u32::try_from(first.len()).ok()? + 1;
    let mut select = None;
    for part in parts {
        let end = offset + u32::try_from(part.len()).ok()?;
        let built = MemberSelectExpression::new(span(0, end), Some(qualifier), Some(ident(part, offset)))
            .ok()?;
        qualifier = Expression::from(built.clone());
        select = Some(built);
        offset = end + 1;
    }
    select
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the member select {name}")]
fn given_member_select(world: &mut TestWorld, name: QuotedString) {
    world.select = Some(dotted(name.as_str()).expect("dotted name with at least one dot"));
}

#[given("a member select without a selected identifier")]
fn given_member_select_without_identifier(world: &mut TestWorld) {
    world.construction_error =
        MemberSelectExpression::new(span(0, 2), Some(ident_expr("a", 0)), None).err();
}

#[given("the kind name {name}")]
fn given_kind_name(world: &mut TestWorld, name: QuotedString) {
    world.kind = Some(name.as_str().parse().expect("known kind"));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the operator token is requested")]
fn when_operator_token(world: &mut TestWorld) {
    let select = world.select.as_ref().expect("select should be set");
    world.operator_result = Some(select.operator_token().map(|token| token.text().to_owned()));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the qualifier is the identifier {name}")]
fn then_qualifier(world: &mut TestWorld, name: QuotedString) {
    let select = world.select.as_ref().expect("select should be set");
    let qualifier = select
        .expression()
        .as_identifier()
        .expect("qualifier should be an identifier");
    assert_eq!(qualifier.name(), name.as_str());
}

#[then("the selected identifier is {name}")]
fn then_selected(world: &mut TestWorld, name: QuotedString) {
    let select = world.select.as_ref().expect("select should be set");
    assert_eq!(select.identifier().name(), name.as_str());
}

#[then("the identifiers in pre-order are {names}")]
fn then_identifiers_in_order(world: &mut TestWorld, names: QuotedString) {
    let select = world.select.as_ref().expect("select should be set");
    let found: Vec<&str> = NodeRef::from(select)
        .descendants()
        .filter_map(|node| match node {
            NodeRef::Identifier(identifier) => Some(identifier.name()),
            _ => None,
        })
        .collect();
    let expected: Vec<&str> = names.as_str().split(',').map(str::trim).collect();
    assert_eq!(found, expected);
}

#[then("the result is not applicable")]
fn then_not_applicable(world: &mut TestWorld) {
    let result = world
        .operator_result
        .as_ref()
        .expect("operator result should be set");
    assert_eq!(
        result,
        &Err(NotApplicable::new(Kind::MemberSelect, "operator_token"))
    );
}

#[then("construction fails for the missing slot {slot}")]
fn then_construction_fails(world: &mut TestWorld, slot: QuotedString) {
    let error = world
        .construction_error
        .as_ref()
        .expect("construction should have failed");
    match error {
        TreeError::MissingChild { slot: actual, .. } => assert_eq!(*actual, slot.as_str()),
        other => panic!("unexpected error: {other}"),
    }
}

#[then("the kind belongs to the category {category}")]
fn then_kind_category(world: &mut TestWorld, category: QuotedString) {
    let kind = world.kind.expect("kind should be set");
    assert_eq!(kind.category().to_string(), category.as_str());
}

#[then("the outline has {count} lines")]
fn then_outline_lines(world: &mut TestWorld, count: usize) {
    let select = world.select.as_ref().expect("select should be set");
    assert_eq!(outline(NodeRef::from(select)).lines().count(), count);
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/tree_model.feature")]
fn tree_model_behaviour(world: TestWorld) {
    let _ = world;
}
