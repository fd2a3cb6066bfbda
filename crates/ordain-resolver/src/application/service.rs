//! Order Resolution Service
//!
//! Main service implementing OrderResolutionApi.

use crate::algorithms::{
    build_constraint_graph, classify_groups, detect_symmetric_conflict, stable_topological_sort,
};
use crate::domain::entities::{ConstraintGraph, DeclaredItem, GroupPartition};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::ItemName;
use crate::ports::inbound::OrderResolutionApi;

use tracing::{debug, info, warn};

/// Order Resolution Service
///
/// Orchestrates the resolution pipeline:
/// 1. Validate directive shape
/// 2. Classify items into First / Middle / Last groups
/// 3. Build the constraint graph (targets validated here)
/// 4. Reject symmetric before/after declarations
/// 5. Stable topological sort of the middle group
/// 6. Compose first, middle, last into the final order
///
/// The service holds no state; one instance can serve any number of calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderResolverService;

impl OrderResolverService {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }

    /// Stages 1-4: everything ahead of the sort.
    fn checked_graph(
        &self,
        items: &[DeclaredItem],
    ) -> Result<(GroupPartition, ConstraintGraph), OrderingError> {
        // 1. Directive shape, in declaration order.
        for item in items {
            item.validate()?;
        }

        // 2. Placement groups.
        let partition = classify_groups(items);
        debug!(
            first = partition.first.len(),
            middle = partition.middle.len(),
            last = partition.last.len(),
            "Classified placement groups"
        );

        // 3. Constraint graph, unknown targets rejected here.
        let graph = build_constraint_graph(&partition)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built constraint graph"
        );

        // 4. Symmetric declarations are authoring errors, not duplicates.
        detect_symmetric_conflict(&graph)?;

        Ok((partition, graph))
    }
}

impl OrderResolutionApi for OrderResolverService {
    fn resolve_order(&self, items: Vec<DeclaredItem>) -> Result<Vec<ItemName>, OrderingError> {
        info!(item_count = items.len(), "Resolving placement order");

        let result = self
            .checked_graph(&items)
            .and_then(|(partition, graph)| {
                // 5. Deterministic Kahn order over the middle group.
                let sorted_middle = stable_topological_sort(&graph)?;

                // 6. Compose the final order.
                Ok(partition.compose(sorted_middle))
            });

        match result {
            Ok(order) => {
                info!(item_count = order.len(), "Placement order resolved");
                Ok(order)
            }
            Err(err) => {
                warn!(error = %err, "Placement order cannot be resolved");
                Err(err)
            }
        }
    }

    fn constraint_graph(
        &self,
        items: Vec<DeclaredItem>,
    ) -> Result<ConstraintGraph, OrderingError> {
        let (_, graph) = self.checked_graph(&items)?;
        Ok(graph)
    }
}
