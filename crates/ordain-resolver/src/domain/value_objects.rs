//! Value objects for order resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque item identifier, unique within one resolution call.
pub type ItemName = String;

/// Placement directive attached to a declared item.
///
/// `None` and `Relative` items belong to the middle group and are subject to
/// the stable topological sort; `First` and `Last` items are pinned by the
/// composer and never sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    /// No placement constraint, keep the baseline slot.
    #[default]
    None,
    /// Pin to the head of the order, in declaration order among `First` items.
    First,
    /// Pin to the tail of the order, in declaration order among `Last` items.
    Last,
    /// Order relative to other named items. At least one side must be present
    /// and non-empty for the directive to be well-formed.
    Relative {
        before: Option<ItemName>,
        after: Option<ItemName>,
    },
}

impl Directive {
    /// Place ahead of the named item.
    pub fn before(target: impl Into<ItemName>) -> Self {
        Self::Relative {
            before: Some(target.into()),
            after: None,
        }
    }

    /// Place behind the named item.
    pub fn after(target: impl Into<ItemName>) -> Self {
        Self::Relative {
            before: None,
            after: Some(target.into()),
        }
    }

    /// Place behind one item and ahead of another.
    pub fn between(after: impl Into<ItemName>, before: impl Into<ItemName>) -> Self {
        Self::Relative {
            before: Some(before.into()),
            after: Some(after.into()),
        }
    }

    /// Whether this directive keeps the item in the middle group.
    pub fn is_middle(&self) -> bool {
        matches!(self, Self::None | Self::Relative { .. })
    }
}

/// Which side of a `Relative` directive produced a constraint edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    /// Produced by `before: target` declared on the edge source.
    Before,
    /// Produced by `after: target` declared on the edge destination.
    After,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// Raw, caller-facing form of a position option: the keyword `"first"` /
/// `"last"`, or a map with optional `before` / `after` targets.
///
/// Mirrors the loosely-typed configuration collaborators collect positions
/// from. Converting into [`Directive`] never fails; shape problems surface
/// during resolution as `MalformedDirective`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPosition {
    /// `"first"` or `"last"`.
    Keyword(PositionKeyword),
    /// `{ "before": .. , "after": .. }` with either side optional.
    Relative {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before: Option<ItemName>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after: Option<ItemName>,
    },
}

/// Keyword positions accepted in raw configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKeyword {
    First,
    Last,
}

impl From<RawPosition> for Directive {
    fn from(raw: RawPosition) -> Self {
        match raw {
            RawPosition::Keyword(PositionKeyword::First) => Directive::First,
            RawPosition::Keyword(PositionKeyword::Last) => Directive::Last,
            RawPosition::Relative { before, after } => Directive::Relative { before, after },
        }
    }
}

impl From<Option<RawPosition>> for Directive {
    fn from(raw: Option<RawPosition>) -> Self {
        raw.map(Directive::from).unwrap_or(Directive::None)
    }
}
