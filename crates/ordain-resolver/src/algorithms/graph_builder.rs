//! Constraint graph construction.
//!
//! Turns the before/after sides of middle-group directives into directed
//! precedence edges and validates every target against the full item set.

use crate::domain::entities::{ConstraintGraph, GroupPartition};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{Directive, DirectiveKind};
use std::collections::HashSet;

/// Build the middle-group constraint graph.
///
/// Targets are validated against the full item set, in baseline order and
/// before-side then after-side per item, so the first unknown target is
/// deterministic. Targets pinned `First` or `Last` pass validation but
/// contribute no edge: the composer places them, and a relative wish never
/// overrides a pin.
pub fn build_constraint_graph(
    partition: &GroupPartition,
) -> Result<ConstraintGraph, OrderingError> {
    let known: HashSet<&str> = partition.names().map(String::as_str).collect();
    let mut graph = ConstraintGraph::new();

    // Nodes first, in baseline order, so node ids match middle positions.
    for item in &partition.middle {
        graph.add_node(item.name.clone(), item.baseline);
    }

    for (id, item) in partition.middle.iter().enumerate() {
        let Directive::Relative { before, after } = &item.directive else {
            continue;
        };

        if let Some(target) = before {
            if !known.contains(target.as_str()) {
                return Err(OrderingError::UnknownTarget {
                    source: item.name.clone(),
                    target: target.clone(),
                    kind: DirectiveKind::Before,
                });
            }
            // `id` wants to precede the target.
            if let Some(target_id) = graph.id_of(target) {
                graph.add_edge(id, target_id, DirectiveKind::Before);
            }
        }

        if let Some(target) = after {
            if !known.contains(target.as_str()) {
                return Err(OrderingError::UnknownTarget {
                    source: item.name.clone(),
                    target: target.clone(),
                    kind: DirectiveKind::After,
                });
            }
            // The target must precede `id`.
            if let Some(target_id) = graph.id_of(target) {
                graph.add_edge(target_id, id, DirectiveKind::After);
            }
        }
    }

    Ok(graph)
}
