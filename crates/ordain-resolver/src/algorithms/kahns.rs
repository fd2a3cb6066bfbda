//! Stable topological sort.
//!
//! Kahn's algorithm with a deterministic tie-break: among ready nodes the
//! one with the smallest baseline index is always emitted next. Runs in
//! O(V log V + E) and reports residual cycles as a chain of item names.

use crate::domain::entities::ConstraintGraph;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{DirectiveKind, ItemName};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Order the middle group so every precedence edge is satisfied.
///
/// Returns the node names in emission order, or the cycle diagnostic when
/// the graph is not a DAG. Identical input always yields identical output.
pub fn stable_topological_sort(graph: &ConstraintGraph) -> Result<Vec<ItemName>, OrderingError> {
    if graph.nodes.is_empty() {
        return Ok(Vec::new());
    }

    // 1. Copy in-degrees (the graph keeps the originals).
    let mut in_degree = graph.in_degree.clone();

    // 2. Ready heap keyed by baseline index, smallest first.
    let mut ready: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();
    for (id, node) in graph.nodes.iter().enumerate() {
        if in_degree[id] == 0 {
            ready.push(Reverse((node.baseline, id)));
        }
    }

    // 3. Emit the smallest ready node, release its successors.
    let mut order: Vec<ItemName> = Vec::with_capacity(graph.nodes.len());
    let mut emitted = vec![false; graph.nodes.len()];
    while let Some(Reverse((_, id))) = ready.pop() {
        order.push(graph.nodes[id].name.clone());
        emitted[id] = true;
        for &successor in &graph.adjacency[id] {
            in_degree[successor] -= 1;
            if in_degree[successor] == 0 {
                ready.push(Reverse((graph.nodes[successor].baseline, successor)));
            }
        }
    }

    // 4. Nodes never emitted sit on or behind a cycle.
    if order.len() < graph.nodes.len() {
        return Err(cycle_error(graph, &emitted));
    }

    Ok(order)
}

/// Build the cycle diagnostic from the residual graph.
///
/// Starting at the residual node with the smallest baseline index, walk
/// predecessors (smallest baseline first) until a node repeats. The visited
/// stretch between the two encounters, reversed, is the forward cycle. The
/// chain begins and ends with the same name and lists every member once in
/// between.
fn cycle_error(graph: &ConstraintGraph, emitted: &[bool]) -> OrderingError {
    let start = graph
        .nodes
        .iter()
        .enumerate()
        .filter(|(id, _)| !emitted[*id])
        .min_by_key(|(_, node)| node.baseline)
        .map(|(id, _)| id)
        .unwrap_or(0);

    let mut sequence = vec![start];
    let mut seen: HashMap<usize, usize> = HashMap::from([(start, 0)]);

    let (repeat_at, repeated) = loop {
        let cursor = sequence[sequence.len() - 1];
        // Every residual node keeps at least one residual predecessor.
        let predecessor = graph.predecessors[cursor]
            .iter()
            .copied()
            .filter(|&p| !emitted[p])
            .min_by_key(|&p| graph.nodes[p].baseline)
            .unwrap_or(cursor);
        if let Some(&at) = seen.get(&predecessor) {
            break (at, predecessor);
        }
        seen.insert(predecessor, sequence.len());
        sequence.push(predecessor);
    };

    // The walk ran against edge direction; reverse the loop for the
    // forward-facing chain.
    let mut cycle = vec![repeated];
    cycle.extend(sequence[repeat_at + 1..].iter().rev().copied());
    cycle.push(repeated);

    let mut before_edges = 0usize;
    let mut after_edges = 0usize;
    for window in cycle.windows(2) {
        match graph.kind_of(window[0], window[1]) {
            Some(DirectiveKind::After) => after_edges += 1,
            _ => before_edges += 1,
        }
    }

    let chain: Vec<ItemName> = cycle
        .iter()
        .map(|&id| graph.nodes[id].name.clone())
        .collect();

    // Mixed cycles go to the majority side; ties read as before.
    if after_edges > before_edges {
        OrderingError::AfterCycle { chain }
    } else {
        OrderingError::BeforeCycle { chain }
    }
}
