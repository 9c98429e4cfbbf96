//! Tests for [`LineCol`], [`Span`] and [`SyntaxToken`].

use crate::{LineCol, Span, SyntaxToken};

#[test]
fn span_accessors() {
    let span = Span::new(10, 42, LineCol::new(2, 0), LineCol::new(4, 3));
    assert_eq!(span.start_byte(), 10);
    assert_eq!(span.end_byte(), 42);
    assert_eq!(span.start().line(), 2);
    assert_eq!(span.end().column(), 3);
    assert_eq!(span.len(), 32);
    assert!(!span.is_empty());
}

#[test]
fn span_to_covers_both_ends() {
    let left = Span::new(4, 6, LineCol::new(1, 4), LineCol::new(1, 6));
    let right = Span::new(9, 12, LineCol::new(2, 1), LineCol::new(2, 4));
    let joined = left.to(&right);
    assert_eq!(joined.start_byte(), 4);
    assert_eq!(joined.end_byte(), 12);
    assert_eq!(*joined.start(), LineCol::new(1, 4));
    assert_eq!(*joined.end(), LineCol::new(2, 4));
    assert!(joined.contains(&left));
    assert!(joined.contains(&right));
}

#[test]
fn span_text_slices_source() {
    let source = "a.b(c)";
    let span = Span::new(2, 3, LineCol::new(0, 2), LineCol::new(0, 3));
    assert_eq!(span.text(source), "b");
}

#[test]
fn span_text_out_of_range_is_empty() {
    let span = Span::new(2, 30, LineCol::new(0, 2), LineCol::new(0, 30));
    assert_eq!(span.text("abc"), "");
}

#[test]
fn span_json_contains_expected_fields() {
    let span = Span::new(12, 42, LineCol::new(2, 0), LineCol::new(4, 0));
    let json = serde_json::to_string(&span).expect("serialize");
    assert!(json.contains("\"start_byte\":12"));
    assert!(json.contains("\"end_byte\":42"));
    let back: Span = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, span);
}

#[test]
fn token_keeps_text_and_span() {
    let span = Span::new(0, 6, LineCol::new(0, 0), LineCol::new(0, 6));
    let token = SyntaxToken::new("\"text\"", span);
    assert_eq!(token.text(), "\"text\"");
    assert_eq!(*token.span(), span);
}

#[test]
fn byte_range_widens_offsets() {
    let span = Span::new(4, 9, LineCol::new(1, 0), LineCol::new(1, 5));
    assert_eq!(span.byte_range(), 4..9);
}

#[test]
fn positions_order_by_line_then_column() {
    assert!(LineCol::new(0, 40) < LineCol::new(1, 0));
    assert!(LineCol::new(3, 2) < LineCol::new(3, 7));
}
