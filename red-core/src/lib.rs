//! # red-core
//!
//! Ports and use cases of the location field.
//! Platform specific adapters implement the gateway traits.

pub mod gateways;
pub mod usecases;
