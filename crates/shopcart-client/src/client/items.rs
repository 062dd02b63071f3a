//! Single-item operations: create, update, retrieve, delete, checkout.

use tracing::debug;

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::models::{ItemPayload, ItemRecord};
use crate::parsing::parse_item;
use crate::url::{build_checkout_url, build_create_url, build_target_url, build_update_url};
use shopcart_core::CartTarget;

use super::CartClient;

impl<B: HttpBackend> CartClient<B> {
    /// POST a new item into the customer's cart.
    pub(crate) async fn create_item(&self, payload: &ItemPayload) -> ClientResult<ItemRecord> {
        let url = build_create_url(&self.config, &payload.customer_id);
        debug!(url = %url, "request to create a cart item");

        let body = serde_json::to_value(payload)?;
        let value = self.backend.post_json(&url, &body).await?;
        parse_item(&value)
    }

    /// PUT updated fields onto an existing item.
    pub(crate) async fn update_item(&self, payload: &ItemPayload) -> ClientResult<ItemRecord> {
        let url = build_update_url(&self.config, &payload.customer_id, &payload.product_id);
        debug!(url = %url, "request to update a cart item");

        let body = serde_json::to_value(payload)?;
        let value = self.backend.put_json(&url, &body).await?;
        parse_item(&value)
    }

    /// GET the cart or a single item.
    pub(crate) async fn retrieve(&self, target: &CartTarget) -> ClientResult<ItemRecord> {
        let url = build_target_url(&self.config, target);
        debug!(url = %url, "request to retrieve {target}");

        let value = self.backend.get_json(&url).await?;
        parse_item(&value)
    }

    /// DELETE the cart or a single item.
    pub(crate) async fn delete(&self, target: &CartTarget) -> ClientResult<()> {
        let url = build_target_url(&self.config, target);
        debug!(url = %url, "request to delete {target}");

        self.backend.delete(&url).await
    }

    /// DELETE the checkout endpoint for the cart or a single item.
    pub(crate) async fn checkout(&self, target: &CartTarget) -> ClientResult<()> {
        let url = build_checkout_url(&self.config, target);
        debug!(url = %url, "request to check out {target}");

        self.backend.delete(&url).await
    }
}
