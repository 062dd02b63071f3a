//! HTTP client adapter for the shopcart REST API.
//!
//! Implements the `CartApiPort` trait from `shopcart-core` on top of
//! reqwest. External code interacts with this crate through
//! [`DefaultCartClient`] and the port trait; wire types, URL construction,
//! and error mapping are internal.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCartClient;

// Configuration
pub use config::CartClientConfig;

// Silence unused dev-dependency warnings (used via #[tokio::test])
#[cfg(test)]
use tokio as _;
