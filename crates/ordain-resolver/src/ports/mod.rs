//! Ports module for order resolution.
//!
//! Defines the inbound (API) port trait.

pub mod inbound;

pub use inbound::OrderResolutionApi;
