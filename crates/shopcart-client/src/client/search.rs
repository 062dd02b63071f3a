//! Search (list) operations for the shopcart client.

use tracing::debug;

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::models::ItemRecord;
use crate::parsing::parse_item_list;
use crate::url::build_search_url;
use shopcart_core::SearchFilter;

use super::CartClient;

impl<B: HttpBackend> CartClient<B> {
    /// GET the cart listing, optionally narrowed by the filter.
    ///
    /// Returns items in server response order.
    pub(crate) async fn search(&self, filter: &SearchFilter) -> ClientResult<Vec<ItemRecord>> {
        let url = build_search_url(&self.config, filter);
        debug!(url = %url, "request to list shopcarts");

        let value = self.backend.get_json(&url).await?;
        parse_item_list(&value)
    }
}
