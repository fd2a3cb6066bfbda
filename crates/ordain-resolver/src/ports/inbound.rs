//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{ConstraintGraph, DeclaredItem};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::ItemName;

/// Primary order resolution API.
///
/// Implementations behave as pure functions of the supplied items: no
/// retained state between calls, safe to share across threads.
pub trait OrderResolutionApi: Send + Sync {
    /// Resolve one deterministic total order over the supplied items.
    ///
    /// This is the main entry point. It:
    /// 1. Validates directive shape
    /// 2. Classifies items into First / Middle / Last groups
    /// 3. Builds and checks the constraint graph
    /// 4. Sorts the middle group and composes the final order
    ///
    /// Names must be unique within `items`; the outcome for duplicates is
    /// unspecified. On success the result is a permutation of the input
    /// names honoring every directive. On failure no partial order is
    /// returned.
    fn resolve_order(&self, items: Vec<DeclaredItem>) -> Result<Vec<ItemName>, OrderingError>;

    /// Build and check the middle-group constraint graph without sorting.
    ///
    /// Runs directive validation, classification, target validation, and
    /// symmetric conflict detection, then stops. Useful for inspecting what
    /// the sorter would be given.
    fn constraint_graph(&self, items: Vec<DeclaredItem>) -> Result<ConstraintGraph, OrderingError>;
}
