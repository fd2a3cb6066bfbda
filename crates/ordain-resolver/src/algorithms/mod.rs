//! Algorithms module for order resolution.
//!
//! Contains:
//! - Group classifier
//! - Constraint graph builder
//! - Symmetric conflict detector
//! - Stable topological sort (Kahn's algorithm)

pub mod classifier;
pub mod conflict_detector;
pub mod graph_builder;
pub mod kahns;

pub use classifier::classify_groups;
pub use conflict_detector::detect_symmetric_conflict;
pub use graph_builder::build_constraint_graph;
pub use kahns::stable_topological_sort;
