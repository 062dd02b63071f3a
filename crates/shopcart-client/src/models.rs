//! Internal wire types for the shopcart REST API.
//!
//! These types are internal to `shopcart-client` and are not exposed to
//! consumers. External code uses the domain types from `shopcart-core`.

use std::time::Duration;

use serde::Serialize;
use shopcart_core::CartItem;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the shopcart client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the shopcart API (default: `http://localhost:8080/shopcarts`)
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8080/shopcarts")
                .expect("default shopcart API URL is valid"),
            user_agent: concat!("shopcart-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Request Payload
// ============================================================================

/// JSON body for create and update requests.
///
/// The five keys are fixed by the API contract; values are sent exactly as
/// read from the form fields, without client-side coercion (the server
/// coerces to its own column types).
#[derive(Debug, Clone, Serialize)]
pub struct ItemPayload {
    pub customer_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl From<&CartItem> for ItemPayload {
    fn from(item: &CartItem) -> Self {
        Self {
            customer_id: item.customer_id.clone(),
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            price: item.price.clone(),
        }
    }
}

// ============================================================================
// Response Record
// ============================================================================

/// One item as decoded from an API response.
///
/// Built leniently by `parsing`: numeric JSON values are stringified,
/// missing or null fields become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub customer_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl From<ItemRecord> for CartItem {
    fn from(record: ItemRecord) -> Self {
        Self {
            customer_id: record.customer_id,
            product_id: record.product_id,
            name: record.name,
            quantity: record.quantity,
            price: record.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/shopcarts");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_payload_mirrors_item_fields() {
        let item = CartItem {
            customer_id: "301".to_string(),
            product_id: "17".to_string(),
            name: "soap".to_string(),
            quantity: "2".to_string(),
            price: "3.50".to_string(),
        };
        let payload = ItemPayload::from(&item);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "customer_id": "301",
                "product_id": "17",
                "name": "soap",
                "quantity": "2",
                "price": "3.50",
            })
        );
    }

    #[test]
    fn test_record_into_item() {
        let record = ItemRecord {
            customer_id: "1".to_string(),
            product_id: "2".to_string(),
            name: "tea".to_string(),
            quantity: "4".to_string(),
            price: "1.25".to_string(),
        };
        let item: CartItem = record.into();
        assert_eq!(item.customer_id, "1");
        assert_eq!(item.price, "1.25");
    }
}
