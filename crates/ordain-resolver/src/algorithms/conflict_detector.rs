//! Symmetric conflict detection.
//!
//! Two items may assert the same precedence from opposite ends: `a` declares
//! `before: b` while `b` declares `after: a`. Both sides collapse onto the
//! identical edge `a -> b`, which signals redundant or confused authoring
//! and is rejected rather than silently absorbed.

use crate::domain::entities::ConstraintGraph;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::DirectiveKind;
use std::collections::HashMap;

/// Scan the edge list for a pair asserted via opposite directive kinds.
///
/// Edges are visited in construction order, so the first conflicting pair is
/// deterministic. The reported pair is ordered lexicographically.
pub fn detect_symmetric_conflict(graph: &ConstraintGraph) -> Result<(), OrderingError> {
    let mut seen: HashMap<(usize, usize), DirectiveKind> = HashMap::new();

    for edge in &graph.edges {
        match seen.get(&(edge.from, edge.to)) {
            Some(&kind) if kind != edge.kind => {
                let mut a = graph.name_of(edge.from).to_string();
                let mut b = graph.name_of(edge.to).to_string();
                if b < a {
                    std::mem::swap(&mut a, &mut b);
                }
                return Err(OrderingError::SymmetricConflict { pair: (a, b) });
            }
            Some(_) => {}
            None => {
                seen.insert((edge.from, edge.to), edge.kind);
            }
        }
    }

    Ok(())
}
