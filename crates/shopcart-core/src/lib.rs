//! Core domain types and ports for the shopcart client.
//!
//! This crate owns the data model (cart items, targets, search filters)
//! and the `CartApiPort` trait that adapters implement. It performs no
//! I/O itself; the HTTP implementation lives in `shopcart-client`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{CartItem, CartTarget, SearchFilter};
pub use ports::{CartApiPort, CartPortError, CartPortResult};
