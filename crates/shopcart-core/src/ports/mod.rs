//! Port traits owned by the core domain.

pub mod cart;

pub use cart::{CartApiPort, CartPortError, CartPortResult};
