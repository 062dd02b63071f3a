//! Main commands enum and primary subcommands.
//!
//! Each subcommand mirrors one trigger of the form this tool stands in
//! for. Field arguments default to the empty string, matching an empty
//! form input.

use clap::Subcommand;

/// Available commands for the shopcart tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Create an item in a customer's cart
    Create {
        /// Customer identifier (cart key)
        customer_id: String,
        /// Product identifier
        product_id: String,
        /// Product name
        #[arg(long, default_value = "")]
        name: String,
        /// Quantity in the cart
        #[arg(long, default_value = "")]
        quantity: String,
        /// Unit price
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Update an existing item in a customer's cart
    Update {
        /// Customer identifier (cart key)
        customer_id: String,
        /// Product identifier
        product_id: String,
        /// Product name
        #[arg(long, default_value = "")]
        name: String,
        /// Quantity in the cart
        #[arg(long, default_value = "")]
        quantity: String,
        /// Unit price
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Retrieve a cart, or one item when a product identifier is given
    Retrieve {
        /// Customer identifier (cart key)
        customer_id: String,
        /// Product identifier (empty selects the whole cart)
        #[arg(default_value = "")]
        product_id: String,
    },

    /// Delete a cart, or one item when a product identifier is given
    Delete {
        /// Customer identifier (cart key)
        customer_id: String,
        /// Product identifier (empty selects the whole cart)
        #[arg(default_value = "")]
        product_id: String,
    },

    /// Check out a cart, or one item when a product identifier is given
    Checkout {
        /// Customer identifier (cart key)
        customer_id: String,
        /// Product identifier (empty selects the whole cart)
        #[arg(default_value = "")]
        product_id: String,
    },

    /// List carts matching the given filters
    Search {
        /// Match on product name
        #[arg(long)]
        name: Option<String>,
        /// Match on quantity
        #[arg(long)]
        quantity: Option<String>,
        /// Raw price field; the literal value "true" adds price=true
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Interactive console; field state persists across operations
    Console,
}
