//! Cart API port trait.

use async_trait::async_trait;

use super::error::CartPortResult;
use crate::domain::{CartItem, CartTarget, SearchFilter};

/// Port trait for shopcart REST API operations.
///
/// This trait defines the interface the core domain uses to talk to the
/// cart service. The implementation lives in `shopcart-client`.
///
/// # Design
///
/// - Uses core-owned types, not wire types
/// - Returns `CartPortError` for all failures
/// - Async methods for network operations
/// - No implementation details leak through this interface
#[async_trait]
pub trait CartApiPort: Send + Sync {
    /// Create an item in the customer's cart.
    ///
    /// The customer identifier inside `item` scopes the request; the
    /// server's stored record is returned.
    async fn create_item(&self, item: &CartItem) -> CartPortResult<CartItem>;

    /// Update the item addressed by the identifiers inside `item`.
    async fn update_item(&self, item: &CartItem) -> CartPortResult<CartItem>;

    /// Retrieve the cart or a single item, per the target.
    async fn retrieve(&self, target: &CartTarget) -> CartPortResult<CartItem>;

    /// Delete the cart or a single item, per the target.
    async fn delete(&self, target: &CartTarget) -> CartPortResult<()>;

    /// Check out (terminate) the cart or a single item, per the target.
    async fn checkout(&self, target: &CartTarget) -> CartPortResult<()>;

    /// List items matching the filter, in server response order.
    async fn search(&self, filter: &SearchFilter) -> CartPortResult<Vec<CartItem>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn CartApiPort>) {}
}
