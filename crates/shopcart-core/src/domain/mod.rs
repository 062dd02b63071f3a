//! Core domain types shared across adapters.

mod item;

pub use item::{CartItem, CartTarget, SearchFilter};
