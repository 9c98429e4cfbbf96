//! Tests for [`Kind`] and [`Category`].

use rstest::rstest;
use strum::IntoEnumIterator;

use crate::{Category, Kind};

#[rstest]
#[case(Kind::CompilationUnit, "COMPILATION_UNIT")]
#[case(Kind::MemberSelect, "MEMBER_SELECT")]
#[case(Kind::LessThanOrEqualTo, "LESS_THAN_OR_EQUAL_TO")]
#[case(Kind::UnsignedRightShiftAssignment, "UNSIGNED_RIGHT_SHIFT_ASSIGNMENT")]
#[case(Kind::DoStatement, "DO_STATEMENT")]
fn kinds_render_in_screaming_snake_case(#[case] kind: Kind, #[case] text: &str) {
    assert_eq!(kind.to_string(), text);
    assert_eq!(kind.as_str(), text);
    assert_eq!(text.parse::<Kind>(), Ok(kind));
}

#[test]
fn every_kind_parses_back_from_its_display_form() {
    for kind in Kind::iter() {
        assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
    }
}

#[test]
fn unknown_kind_name_is_rejected() {
    assert!("MEMBER_SELECTION".parse::<Kind>().is_err());
}

#[rstest]
#[case(Kind::CompilationUnit, Category::Declaration)]
#[case(Kind::Method, Category::Declaration)]
#[case(Kind::Block, Category::Statement)]
#[case(Kind::TryStatement, Category::Statement)]
#[case(Kind::Identifier, Category::Expression)]
#[case(Kind::StringLiteral, Category::Expression)]
#[case(Kind::PrimitiveType, Category::Type)]
#[case(Kind::ExtendsWildcard, Category::Type)]
#[case(Kind::CaseGroup, Category::Other)]
#[case(Kind::Modifiers, Category::Other)]
fn categories_are_assigned(#[case] kind: Kind, #[case] category: Category) {
    assert_eq!(kind.category(), category);
}

#[test]
fn operator_families_are_disjoint() {
    for kind in Kind::iter() {
        let families = [
            kind.is_literal(),
            kind.is_unary(),
            kind.is_binary(),
            kind.is_assignment(),
            kind.is_wildcard(),
        ];
        assert!(
            families.iter().filter(|member| **member).count() <= 1,
            "{kind} belongs to more than one family"
        );
    }
}

#[test]
fn family_sizes_match_the_java_operator_set() {
    assert_eq!(Kind::iter().filter(|kind| kind.is_literal()).count(), 8);
    assert_eq!(Kind::iter().filter(|kind| kind.is_unary()).count(), 8);
    assert_eq!(Kind::iter().filter(|kind| kind.is_binary()).count(), 19);
    assert_eq!(Kind::iter().filter(|kind| kind.is_assignment()).count(), 12);
}

#[test]
fn type_kinds_are_also_expressions() {
    for kind in Kind::iter().filter(|kind| kind.is_type()) {
        assert!(kind.is_expression(), "{kind} should fill expression slots");
    }
    assert!(Kind::Annotation.is_expression());
    assert!(!Kind::Block.is_expression());
}

#[rstest]
#[case("+", Some(Kind::Plus))]
#[case(">>>", Some(Kind::UnsignedRightShift))]
#[case("&&", Some(Kind::ConditionalAnd))]
#[case("^", Some(Kind::Xor))]
#[case("=", None)]
#[case("instanceof", None)]
fn binary_operators_map_to_kinds(#[case] operator: &str, #[case] expected: Option<Kind>) {
    assert_eq!(Kind::from_binary_operator(operator), expected);
}

#[rstest]
#[case("++", true, Some(Kind::PrefixIncrement))]
#[case("++", false, Some(Kind::PostfixIncrement))]
#[case("!", true, Some(Kind::LogicalComplement))]
#[case("!", false, None)]
#[case("~", true, Some(Kind::BitwiseComplement))]
fn unary_operators_respect_position(
    #[case] operator: &str,
    #[case] prefix: bool,
    #[case] expected: Option<Kind>,
) {
    assert_eq!(Kind::from_unary_operator(operator, prefix), expected);
}

#[test]
fn operator_text_inverts_the_lookup_tables() {
    for kind in Kind::iter().filter(|kind| kind.is_binary()) {
        let text = kind.operator_text().expect("binary kinds have a spelling");
        assert_eq!(Kind::from_binary_operator(text), Some(kind));
    }
    for kind in Kind::iter().filter(|kind| kind.is_assignment()) {
        let text = kind.operator_text().expect("assignment kinds have a spelling");
        assert_eq!(Kind::from_assignment_operator(text), Some(kind));
    }
    assert_eq!(Kind::MemberSelect.operator_text(), None);
}

#[test]
fn kind_serde_uses_display_names() {
    let json = serde_json::to_string(&Kind::MemberSelect).expect("serialize");
    assert_eq!(json, "\"MEMBER_SELECT\"");
    let kind: Kind = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(kind, Kind::MemberSelect);
}
