//! Error types raised by node construction and category accessors.

use thiserror::Error;

use crate::kind::Kind;

/// Errors raised while constructing a typed node.
///
/// Every variant signals a defect in whatever produced the node's inputs
/// (normally the tree builder). A node that fails construction never enters
/// a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A required child slot was empty.
    #[error("{kind} requires a `{slot}` child")]
    MissingChild {
        /// Kind of the node being constructed.
        kind: Kind,
        /// Name of the empty slot.
        slot: &'static str,
    },

    /// A child slot that this kind never carries was filled.
    #[error("{kind} cannot have a `{slot}` child")]
    UnexpectedChild {
        /// Kind of the node being constructed.
        kind: Kind,
        /// Name of the filled slot.
        slot: &'static str,
    },

    /// A node shape was asked to carry a kind outside its family.
    #[error("{kind} is not a valid kind for a {shape} node")]
    KindMismatch {
        /// The rejected kind.
        kind: Kind,
        /// Name of the node shape.
        shape: &'static str,
    },
}

impl TreeError {
    /// Creates a missing child error.
    #[must_use]
    pub const fn missing_child(kind: Kind, slot: &'static str) -> Self {
        Self::MissingChild { kind, slot }
    }

    /// Creates an unexpected child error.
    #[must_use]
    pub const fn unexpected_child(kind: Kind, slot: &'static str) -> Self {
        Self::UnexpectedChild { kind, slot }
    }

    /// Creates a kind mismatch error.
    #[must_use]
    pub const fn kind_mismatch(kind: Kind, shape: &'static str) -> Self {
        Self::KindMismatch { kind, shape }
    }
}

/// Signals that an accessor cannot be answered for a node's kind.
///
/// Category accessors such as [`Expression::operator_token`] are declared
/// for a whole category but only some kinds can supply them. Callers that
/// do not check the kind first receive this error instead of a fabricated
/// value.
///
/// [`Expression::operator_token`]: crate::Expression::operator_token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{accessor}` is not applicable to {kind}")]
pub struct NotApplicable {
    kind: Kind,
    accessor: &'static str,
}

impl NotApplicable {
    /// Creates a new not-applicable signal.
    #[must_use]
    pub const fn new(kind: Kind, accessor: &'static str) -> Self {
        Self { kind, accessor }
    }

    /// Returns the kind the accessor was invoked on.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the name of the accessor.
    #[must_use]
    pub const fn accessor(&self) -> &'static str {
        self.accessor
    }
}
