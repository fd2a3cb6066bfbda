//! Application module for order resolution.
//!
//! Service orchestration over the domain and algorithms layers.

pub mod service;

pub use service::OrderResolverService;
