//! # Ordain Resolver
//!
//! Deterministic placement ordering for uniquely-named items. Callers
//! declare items in a baseline order, each optionally carrying a position
//! directive (first, last, before another item, after another item, or
//! both), and the resolver computes one total order honoring every
//! directive or fails with a typed diagnostic naming the conflict.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (DeclaredItem, GroupPartition, ConstraintGraph), errors, invariants
//! - **Algorithms**: Group classifier, graph builder, conflict detector, stable Kahn sort
//! - **Ports**: Inbound (OrderResolutionApi)
//! - **Application**: Service orchestration
//!
//! ## Example
//!
//! ```
//! use ordain_resolver::{resolve_order, DeclaredItem};
//!
//! # fn main() -> Result<(), ordain_resolver::OrderingError> {
//! let order = resolve_order(vec![
//!     DeclaredItem::new("body"),
//!     DeclaredItem::first("header"),
//!     DeclaredItem::last("footer"),
//! ])?;
//! assert_eq!(order, vec!["header", "body", "footer"]);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::service::OrderResolverService;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::*;
pub use ports::inbound::OrderResolutionApi;

/// Resolve a placement order with the default service.
///
/// Free-function form of [`OrderResolutionApi::resolve_order`].
pub fn resolve_order(items: Vec<DeclaredItem>) -> Result<Vec<ItemName>, OrderingError> {
    OrderResolverService::new().resolve_order(items)
}
