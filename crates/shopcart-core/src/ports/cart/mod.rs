//! Cart API port definitions.
//!
//! This module defines the port trait and error type for talking to the
//! shopcart REST service. The actual implementation lives in
//! `shopcart-client`.

mod client;
mod error;

pub use client::CartApiPort;
pub use error::{CartPortError, CartPortResult};
