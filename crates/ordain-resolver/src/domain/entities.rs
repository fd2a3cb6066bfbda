//! Core entities for order resolution.

use super::errors::OrderingError;
use super::value_objects::{Directive, DirectiveKind, ItemName, RawPosition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An item as declared by the caller: a unique name plus its placement
/// directive. The baseline order is the order items are handed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredItem {
    /// Opaque unique name.
    pub name: ItemName,
    /// Placement directive, `Directive::None` when the caller set none.
    pub directive: Directive,
}

impl DeclaredItem {
    pub fn new(name: impl Into<ItemName>) -> Self {
        Self {
            name: name.into(),
            directive: Directive::None,
        }
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directive = directive;
        self
    }

    /// Item built from a raw configuration position.
    pub fn from_raw(name: impl Into<ItemName>, raw: Option<RawPosition>) -> Self {
        Self::new(name).with_directive(Directive::from(raw))
    }

    /// Item pinned to the head group.
    pub fn first(name: impl Into<ItemName>) -> Self {
        Self::new(name).with_directive(Directive::First)
    }

    /// Item pinned to the tail group.
    pub fn last(name: impl Into<ItemName>) -> Self {
        Self::new(name).with_directive(Directive::Last)
    }

    /// Item placed ahead of `target`.
    pub fn before(name: impl Into<ItemName>, target: impl Into<ItemName>) -> Self {
        Self::new(name).with_directive(Directive::before(target))
    }

    /// Item placed behind `target`.
    pub fn after(name: impl Into<ItemName>, target: impl Into<ItemName>) -> Self {
        Self::new(name).with_directive(Directive::after(target))
    }

    /// Item placed behind `after` and ahead of `before`.
    pub fn between(
        name: impl Into<ItemName>,
        after: impl Into<ItemName>,
        before: impl Into<ItemName>,
    ) -> Self {
        Self::new(name).with_directive(Directive::between(after, before))
    }

    /// Check the directive shape: a `Relative` directive must carry at least
    /// one side, and no side may name an empty target.
    pub fn validate(&self) -> Result<(), OrderingError> {
        if let Directive::Relative { before, after } = &self.directive {
            let blank = |side: &Option<ItemName>| matches!(side.as_deref(), Some(""));
            if (before.is_none() && after.is_none()) || blank(before) || blank(after) {
                return Err(OrderingError::MalformedDirective {
                    item: self.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// An item after classification: its directive plus the baseline index the
/// stable sort breaks ties with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedItem {
    /// Opaque unique name.
    pub name: ItemName,
    /// Placement directive carried over from the declaration.
    pub directive: Directive,
    /// Position in the baseline declaration sequence.
    pub baseline: usize,
}

/// The three placement groups, each preserving baseline order.
#[derive(Clone, Debug, Default)]
pub struct GroupPartition {
    /// Items pinned to the head, in declaration order.
    pub first: Vec<ClassifiedItem>,
    /// Items subject to the stable topological sort.
    pub middle: Vec<ClassifiedItem>,
    /// Items pinned to the tail, in declaration order.
    pub last: Vec<ClassifiedItem>,
}

impl GroupPartition {
    /// Total number of items across the three groups.
    pub fn len(&self) -> usize {
        self.first.len() + self.middle.len() + self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.middle.is_empty() && self.last.is_empty()
    }

    /// Every item name across the three groups.
    pub fn names(&self) -> impl Iterator<Item = &ItemName> {
        self.first
            .iter()
            .chain(&self.middle)
            .chain(&self.last)
            .map(|item| &item.name)
    }

    /// Final composition: first group, then the sorted middle, then the
    /// last group.
    pub fn compose(&self, sorted_middle: Vec<ItemName>) -> Vec<ItemName> {
        let mut order = Vec::with_capacity(self.len());
        order.extend(self.first.iter().map(|item| item.name.clone()));
        order.extend(sorted_middle);
        order.extend(self.last.iter().map(|item| item.name.clone()));
        order
    }
}

/// A node of the constraint graph: one middle-group item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
    /// Item name.
    pub name: ItemName,
    /// Baseline declaration index, the tie-break key.
    pub baseline: usize,
}

/// A directed precedence edge: `from` must appear before `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstraintEdge {
    /// Node id that must come earlier.
    pub from: usize,
    /// Node id that must come later.
    pub to: usize,
    /// Which directive side produced the edge.
    pub kind: DirectiveKind,
}

/// Constraint graph over the middle group.
///
/// Node ids are dense indices into `nodes`, assigned in baseline order.
/// Edges keep their directive kind so cycle and conflict diagnostics can
/// name the side that caused them.
#[derive(Clone, Debug, Default)]
pub struct ConstraintGraph {
    /// Nodes in baseline order; positions double as node ids.
    pub nodes: Vec<GraphNode>,
    /// Name -> node id.
    pub ids: HashMap<ItemName, usize>,
    /// All edges in construction order.
    pub edges: Vec<ConstraintEdge>,
    /// Successor lists by node id.
    pub adjacency: Vec<Vec<usize>>,
    /// Predecessor lists by node id.
    pub predecessors: Vec<Vec<usize>>,
    /// Incoming edge count by node id.
    pub in_degree: Vec<usize>,
}

impl ConstraintGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self, name: ItemName, baseline: usize) -> usize {
        let id = self.nodes.len();
        self.ids.insert(name.clone(), id);
        self.nodes.push(GraphNode { name, baseline });
        self.adjacency.push(Vec::new());
        self.predecessors.push(Vec::new());
        self.in_degree.push(0);
        id
    }

    /// Add a precedence edge between two existing nodes.
    pub fn add_edge(&mut self, from: usize, to: usize, kind: DirectiveKind) {
        self.adjacency[from].push(to);
        self.predecessors[to].push(from);
        self.in_degree[to] += 1;
        self.edges.push(ConstraintEdge { from, to, kind });
    }

    /// Look up a node id by name.
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Name of a node id.
    pub fn name_of(&self, id: usize) -> &str {
        &self.nodes[id].name
    }

    /// Check if an edge exists from -> to.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency[from].contains(&to)
    }

    /// Directive kind of the first edge from -> to, if any.
    pub fn kind_of(&self, from: usize, to: usize) -> Option<DirectiveKind> {
        self.edges
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
            .map(|edge| edge.kind)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
