//! CLI frontend for the shopcart REST API.
//!
//! The form controller in [`form`] mirrors the web form this tool stands
//! in for: a fixed set of fields, a flash message area, and a results
//! table, driven by one REST call per operation. Subcommands run a single
//! operation; the console keeps field state across operations.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by the binary entry point
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod form;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use form::{FormController, FormField, FormState};
pub use parser::Cli;
