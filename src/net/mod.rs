//! Networking modules for the product API and assistant service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls behind the `CatalogBackend` seam and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
