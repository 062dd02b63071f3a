//! Cart item, target addressing, and search filter types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Cart Item
// ============================================================================

/// A single product line in a customer's shopping cart.
///
/// All fields are opaque strings on the client side; the server is the
/// source of truth for types and invariants. Numeric JSON values coming
/// back from the API are stringified before they reach this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Customer identifier (cart key)
    pub customer_id: String,
    /// Product identifier (item key within the cart)
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Quantity in the cart
    pub quantity: String,
    /// Unit price
    pub price: String,
}

// ============================================================================
// Cart Target
// ============================================================================

/// Addressing for retrieve, delete, and checkout operations.
///
/// The item-scoped form is chosen if and only if the product identifier
/// is non-empty; otherwise the whole cart is addressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartTarget {
    /// The whole cart for one customer
    Cart {
        /// Customer identifier
        customer_id: String,
    },
    /// A single item within a customer's cart
    Item {
        /// Customer identifier
        customer_id: String,
        /// Product identifier
        product_id: String,
    },
}

impl CartTarget {
    /// Build a target from raw form fields.
    ///
    /// An empty product identifier selects the cart-scoped form.
    pub fn from_fields(customer_id: impl Into<String>, product_id: &str) -> Self {
        let customer_id = customer_id.into();
        if product_id.is_empty() {
            Self::Cart { customer_id }
        } else {
            Self::Item {
                customer_id,
                product_id: product_id.to_string(),
            }
        }
    }

    /// The customer identifier for this target.
    pub fn customer_id(&self) -> &str {
        match self {
            Self::Cart { customer_id } | Self::Item { customer_id, .. } => customer_id,
        }
    }

    /// The product identifier, when the target is item-scoped.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Self::Cart { .. } => None,
            Self::Item { product_id, .. } => Some(product_id),
        }
    }
}

impl std::fmt::Display for CartTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cart { customer_id } => write!(f, "cart {customer_id}"),
            Self::Item {
                customer_id,
                product_id,
            } => write!(f, "cart {customer_id} item {product_id}"),
        }
    }
}

// ============================================================================
// Search Filter
// ============================================================================

/// Filter for the cart search listing.
///
/// Each field contributes a query parameter only when set: `name` and
/// `quantity` when non-empty, `priced` when true (it becomes the literal
/// `price=true` parameter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Match on product name
    pub name: Option<String>,
    /// Match on quantity
    pub quantity: Option<String>,
    /// Add the `price=true` parameter
    pub priced: bool,
}

impl SearchFilter {
    /// Create an empty filter (lists everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the quantity filter.
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Set the price flag.
    pub const fn with_priced(mut self, priced: bool) -> Self {
        self.priced = priced;
        self
    }

    /// Whether the filter contributes no query parameters.
    pub fn is_empty(&self) -> bool {
        !self.priced
            && self.name.as_deref().is_none_or(str::is_empty)
            && self.quantity.as_deref().is_none_or(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_fields_cart_when_product_empty() {
        let target = CartTarget::from_fields("301", "");
        assert_eq!(
            target,
            CartTarget::Cart {
                customer_id: "301".to_string()
            }
        );
        assert_eq!(target.customer_id(), "301");
        assert!(target.product_id().is_none());
    }

    #[test]
    fn test_target_from_fields_item_when_product_set() {
        let target = CartTarget::from_fields("301", "17");
        assert_eq!(
            target,
            CartTarget::Item {
                customer_id: "301".to_string(),
                product_id: "17".to_string()
            }
        );
        assert_eq!(target.product_id(), Some("17"));
    }

    #[test]
    fn test_search_filter_builder() {
        let filter = SearchFilter::new()
            .with_name("soap")
            .with_quantity("2")
            .with_priced(true);
        assert_eq!(filter.name, Some("soap".to_string()));
        assert_eq!(filter.quantity, Some("2".to_string()));
        assert!(filter.priced);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_search_filter_empty() {
        assert!(SearchFilter::new().is_empty());
        assert!(SearchFilter::new().with_name("").is_empty());
        assert!(!SearchFilter::new().with_priced(true).is_empty());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(CartTarget::from_fields("3", "").to_string(), "cart 3");
        assert_eq!(
            CartTarget::from_fields("3", "7").to_string(),
            "cart 3 item 7"
        );
    }
}
