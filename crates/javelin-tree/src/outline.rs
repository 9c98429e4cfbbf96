//! Indented textual rendering of a typed tree.
//!
//! The outline is stable across runs and is what snapshot tests compare.

use crate::tree::NodeRef;

/// Renders `node` and its descendants, one line per node.
///
/// Each line holds the kind, indented two spaces per depth. Identifiers,
/// literals and primitive types also show their token text. There is no
/// trailing newline.
///
/// # Example
///
/// ```
/// use javelin_tree::{Identifier, LineCol, MemberSelectExpression, NodeRef, Span, SyntaxToken, outline};
///
/// let span = |start: u32, end: u32| Span::new(start, end, LineCol::new(0, start), LineCol::new(0, end));
/// let a = Identifier::new(SyntaxToken::new("a", span(0, 1)));
/// let b = Identifier::new(SyntaxToken::new("b", span(2, 3)));
/// let select = MemberSelectExpression::new(span(0, 3), Some(a.into()), Some(b))?;
///
/// assert_eq!(
///     outline(NodeRef::from(&select)),
///     "MEMBER_SELECT\n  IDENTIFIER a\n  IDENTIFIER b",
/// );
/// # Ok::<(), javelin_tree::TreeError>(())
/// ```
#[must_use]
pub fn outline(node: NodeRef<'_>) -> String {
    let mut out = String::new();
    let mut stack = vec![(node, 0_usize)];
    while let Some((current, depth)) = stack.pop() {
        if !out.is_empty() {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(current.kind().as_str());
        if let Some(text) = token_text(current) {
            out.push(' ');
            out.push_str(text);
        }
        let children: Vec<_> = current.children().collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

fn token_text(node: NodeRef<'_>) -> Option<&str> {
    match node {
        NodeRef::Identifier(tree) => Some(tree.name()),
        NodeRef::Literal(tree) => Some(tree.value()),
        NodeRef::PrimitiveType(tree) => Some(tree.name()),
        _ => None,
    }
}
