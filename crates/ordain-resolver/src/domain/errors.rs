//! Error types for order resolution.

use super::value_objects::{DirectiveKind, ItemName};
use std::fmt;

/// All errors that can occur during order resolution.
///
/// Every variant is terminal: resolution stops at the first error detected
/// and never returns a partial order.
///
/// `Display` and `Error` are implemented by hand: the `UnknownTarget` payload
/// names its originating item `source`, which the thiserror derive would
/// misread as an error-source field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderingError {
    /// Relative directive with no usable side (both absent or a target empty).
    MalformedDirective { item: ItemName },

    /// A before/after target that names no declared item.
    UnknownTarget {
        source: ItemName,
        target: ItemName,
        kind: DirectiveKind,
    },

    /// The same precedence asserted from both ends via opposite kinds.
    /// The pair is ordered lexicographically, smaller name first.
    SymmetricConflict { pair: (ItemName, ItemName) },

    /// Circular before positions. The chain starts and ends with the same
    /// item and lists every member of the cycle once in between.
    BeforeCycle { chain: Vec<ItemName> },

    /// Circular after positions, same chain shape as [`Self::BeforeCycle`].
    AfterCycle { chain: Vec<ItemName> },
}

impl fmt::Display for OrderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDirective { item } => write!(
                f,
                "Malformed position on item `{item}`: relative placement requires a non-empty before or after target"
            ),
            Self::UnknownTarget {
                source,
                target,
                kind,
            } => write!(f, "Unknown {kind} target `{target}` on item `{source}`"),
            Self::SymmetricConflict { pair } => write!(
                f,
                "Symmetric before/after positions between `{}` and `{}`",
                pair.0, pair.1
            ),
            Self::BeforeCycle { chain } => write!(
                f,
                "Cycle detected in before positions: {}",
                chain.join(" => ")
            ),
            Self::AfterCycle { chain } => write!(
                f,
                "Cycle detected in after positions: {}",
                chain.join(" => ")
            ),
        }
    }
}

impl std::error::Error for OrderingError {}
