//! The form controller: one REST call per operation, display contract
//! applied to the outcome.
//!
//! Semantics preserved from the form this stands in for:
//!
//! - Create/Update: success repopulates the fields and flashes `Success`;
//!   failure flashes the server's message.
//! - Retrieve: success populates; failure clears the fields and flashes
//!   the server's message.
//! - Delete/Checkout: success clears the fields and flashes
//!   `ShopCart has been Deleted!`; failure flashes the literal
//!   `Server error!` and discards the server's message (a known
//!   inconsistency in the original contract, kept as observed).
//! - Search: success stores the results, copies the first item into the
//!   fields (none returned leaves them unchanged), flashes `Success`;
//!   failure flashes the server's message.
//!
//! Every operation clears the flash before its request. The price field
//! participates in search as a flag: the raw value `"true"` and nothing
//! else adds the `price=true` parameter.

use std::sync::Arc;

use shopcart_core::{CartApiPort, CartItem, CartTarget, SearchFilter};

use super::state::FormState;

/// Flash shown after a successful create, update, retrieve, or search.
pub const FLASH_SUCCESS: &str = "Success";
/// Flash shown after a successful delete or checkout.
pub const FLASH_DELETED: &str = "ShopCart has been Deleted!";
/// Flash shown after a failed delete or checkout, whatever the server said.
pub const FLASH_SERVER_ERROR: &str = "Server error!";

/// Stateful controller over the form fields and flash message.
pub struct FormController {
    api: Arc<dyn CartApiPort>,
    state: FormState,
    flash: String,
    results: Vec<CartItem>,
}

impl FormController {
    /// Create a controller with empty fields.
    pub fn new(api: Arc<dyn CartApiPort>) -> Self {
        Self {
            api,
            state: FormState::default(),
            flash: String::new(),
            results: Vec::new(),
        }
    }

    /// Current field values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Mutable access to the field values.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Current flash message (empty when none).
    pub fn flash(&self) -> &str {
        &self.flash
    }

    /// Results of the last successful search.
    pub fn results(&self) -> &[CartItem] {
        &self.results
    }

    /// Create an item from the current fields.
    pub async fn create(&mut self) {
        self.flash.clear();
        match self.api.create_item(&self.state.to_item()).await {
            Ok(stored) => {
                self.state.populate(&stored);
                self.flash = FLASH_SUCCESS.to_string();
            }
            Err(err) => self.flash = err.to_string(),
        }
    }

    /// Update the item addressed by the current identifier fields.
    pub async fn update(&mut self) {
        self.flash.clear();
        match self.api.update_item(&self.state.to_item()).await {
            Ok(stored) => {
                self.state.populate(&stored);
                self.flash = FLASH_SUCCESS.to_string();
            }
            Err(err) => self.flash = err.to_string(),
        }
    }

    /// Retrieve the cart, or one item when the product field is set.
    pub async fn retrieve(&mut self) {
        self.flash.clear();
        match self.api.retrieve(&self.target()).await {
            Ok(item) => {
                self.state.populate(&item);
                self.flash = FLASH_SUCCESS.to_string();
            }
            Err(err) => {
                self.state.clear();
                self.flash = err.to_string();
            }
        }
    }

    /// Delete the cart, or one item when the product field is set.
    pub async fn delete(&mut self) {
        self.flash.clear();
        match self.api.delete(&self.target()).await {
            Ok(()) => {
                self.state.clear();
                self.flash = FLASH_DELETED.to_string();
            }
            Err(_) => self.flash = FLASH_SERVER_ERROR.to_string(),
        }
    }

    /// Check out the cart, or one item when the product field is set.
    pub async fn checkout(&mut self) {
        self.flash.clear();
        match self.api.checkout(&self.target()).await {
            Ok(()) => {
                self.state.clear();
                self.flash = FLASH_DELETED.to_string();
            }
            Err(_) => self.flash = FLASH_SERVER_ERROR.to_string(),
        }
    }

    /// Search with the filter implied by the current fields.
    pub async fn search(&mut self) {
        self.flash.clear();
        let mut filter = SearchFilter::new().with_priced(self.state.price == "true");
        if !self.state.name.is_empty() {
            filter = filter.with_name(self.state.name.clone());
        }
        if !self.state.quantity.is_empty() {
            filter = filter.with_quantity(self.state.quantity.clone());
        }

        match self.api.search(&filter).await {
            Ok(items) => {
                if let Some(first) = items.first() {
                    self.state.populate(first);
                }
                self.results = items;
                self.flash = FLASH_SUCCESS.to_string();
            }
            Err(err) => self.flash = err.to_string(),
        }
    }

    /// Reset the fields and the flash message. No request is made.
    pub fn clear(&mut self) {
        self.state.clear();
        self.flash.clear();
    }

    fn target(&self) -> CartTarget {
        CartTarget::from_fields(self.state.customer_id.clone(), &self.state.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shopcart_core::{CartPortError, CartPortResult};
    use std::sync::Mutex;

    /// Fake port with a single configured outcome, recording every call.
    #[derive(Default)]
    struct FakePort {
        item: Option<CartItem>,
        items: Vec<CartItem>,
        fail_status: Option<(u16, String)>,
        calls: Mutex<Vec<String>>,
    }

    impl FakePort {
        fn ok_with(item: CartItem) -> Self {
            Self {
                item: Some(item),
                ..Self::default()
            }
        }

        fn listing(items: Vec<CartItem>) -> Self {
            Self {
                items,
                ..Self::default()
            }
        }

        fn failing(status: u16, message: &str) -> Self {
            Self {
                fail_status: Some((status, message.to_string())),
                ..Self::default()
            }
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn fail(&self) -> Option<CartPortError> {
            self.fail_status
                .as_ref()
                .map(|(status, message)| match status {
                    404 => CartPortError::NotFound {
                        message: message.clone(),
                    },
                    _ => CartPortError::Rejected {
                        status: *status,
                        message: message.clone(),
                    },
                })
        }

        fn stored(&self) -> CartItem {
            self.item.clone().unwrap_or_default()
        }
    }

    #[async_trait]
    impl CartApiPort for FakePort {
        async fn create_item(&self, item: &CartItem) -> CartPortResult<CartItem> {
            self.record(format!("create {}", item.customer_id));
            self.fail().map_or_else(|| Ok(self.stored()), Err)
        }

        async fn update_item(&self, item: &CartItem) -> CartPortResult<CartItem> {
            self.record(format!("update {}/{}", item.customer_id, item.product_id));
            self.fail().map_or_else(|| Ok(self.stored()), Err)
        }

        async fn retrieve(&self, target: &CartTarget) -> CartPortResult<CartItem> {
            self.record(format!("retrieve {target}"));
            self.fail().map_or_else(|| Ok(self.stored()), Err)
        }

        async fn delete(&self, target: &CartTarget) -> CartPortResult<()> {
            self.record(format!("delete {target}"));
            self.fail().map_or(Ok(()), Err)
        }

        async fn checkout(&self, target: &CartTarget) -> CartPortResult<()> {
            self.record(format!("checkout {target}"));
            self.fail().map_or(Ok(()), Err)
        }

        async fn search(&self, filter: &SearchFilter) -> CartPortResult<Vec<CartItem>> {
            self.record(format!(
                "search name={:?} quantity={:?} priced={}",
                filter.name, filter.quantity, filter.priced
            ));
            match self.fail() {
                Some(err) => Err(err),
                None => Ok(self.items.clone()),
            }
        }
    }

    fn item(customer_id: &str, product_id: &str, name: &str) -> CartItem {
        CartItem {
            customer_id: customer_id.to_string(),
            product_id: product_id.to_string(),
            name: name.to_string(),
            quantity: "2".to_string(),
            price: "3.5".to_string(),
        }
    }

    fn controller(port: FakePort) -> (FormController, Arc<FakePort>) {
        let port = Arc::new(port);
        (FormController::new(port.clone()), port)
    }

    #[tokio::test]
    async fn test_create_success_populates_and_flashes() {
        let (mut form, _port) = controller(FakePort::ok_with(item("301", "17", "soap")));
        form.state_mut().customer_id = "301".to_string();

        form.create().await;

        assert_eq!(form.flash(), FLASH_SUCCESS);
        assert_eq!(form.state().name, "soap");
        assert_eq!(form.state().product_id, "17");
    }

    #[tokio::test]
    async fn test_create_failure_flashes_server_message() {
        let (mut form, _port) = controller(FakePort::failing(415, "Content-Type must be application/json"));

        form.create().await;

        assert_eq!(form.flash(), "Content-Type must be application/json");
    }

    #[tokio::test]
    async fn test_retrieve_targets_item_iff_product_set() {
        let (mut form, port) = controller(FakePort::ok_with(item("301", "17", "soap")));
        form.state_mut().customer_id = "301".to_string();
        form.retrieve().await;

        form.state_mut().product_id = "17".to_string();
        form.retrieve().await;

        let calls = port.calls.lock().unwrap().clone();
        assert_eq!(calls[0], "retrieve cart 301");
        assert_eq!(calls[1], "retrieve cart 301 item 17");
    }

    #[tokio::test]
    async fn test_retrieve_failure_clears_fields_and_shows_message() {
        let (mut form, _port) = controller(FakePort::failing(404, "ShopCart with id '301' was not found."));
        form.state_mut().customer_id = "301".to_string();
        form.state_mut().name = "stale".to_string();

        form.retrieve().await;

        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.flash(), "ShopCart with id '301' was not found.");
    }

    #[tokio::test]
    async fn test_delete_success_clears_and_flashes_deleted() {
        let (mut form, port) = controller(FakePort::default());
        form.state_mut().customer_id = "301".to_string();
        form.state_mut().name = "soap".to_string();

        form.delete().await;

        assert_eq!(form.flash(), FLASH_DELETED);
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(port.calls.lock().unwrap()[0], "delete cart 301");
    }

    #[tokio::test]
    async fn test_delete_failure_discards_server_message() {
        let (mut form, _port) = controller(FakePort::failing(404, "ShopCart with id '9' was not found."));
        form.state_mut().customer_id = "9".to_string();

        form.delete().await;

        // The original contract drops the server message here
        assert_eq!(form.flash(), FLASH_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_checkout_failure_discards_server_message() {
        let (mut form, port) = controller(FakePort::failing(500, "database exploded"));
        form.state_mut().customer_id = "301".to_string();
        form.state_mut().product_id = "17".to_string();

        form.checkout().await;

        assert_eq!(form.flash(), FLASH_SERVER_ERROR);
        assert_eq!(port.calls.lock().unwrap()[0], "checkout cart 301 item 17");
    }

    #[tokio::test]
    async fn test_search_filter_built_from_fields() {
        let (mut form, port) = controller(FakePort::listing(vec![]));
        form.state_mut().name = "soap".to_string();
        form.state_mut().price = "true".to_string();

        form.search().await;

        assert_eq!(
            port.calls.lock().unwrap()[0],
            "search name=Some(\"soap\") quantity=None priced=true"
        );
    }

    #[tokio::test]
    async fn test_search_price_flag_requires_literal_true() {
        let (mut form, port) = controller(FakePort::listing(vec![]));
        form.state_mut().price = "3.50".to_string();

        form.search().await;

        assert_eq!(
            port.calls.lock().unwrap()[0],
            "search name=None quantity=None priced=false"
        );
    }

    #[tokio::test]
    async fn test_search_copies_first_result_into_fields() {
        let first = item("1", "10", "soap");
        let second = item("2", "20", "tea");
        let (mut form, _port) = controller(FakePort::listing(vec![first.clone(), second]));

        form.search().await;

        assert_eq!(form.flash(), FLASH_SUCCESS);
        assert_eq!(form.results().len(), 2);
        assert_eq!(form.state().customer_id, first.customer_id);
        assert_eq!(form.state().name, first.name);
    }

    #[tokio::test]
    async fn test_search_empty_result_leaves_fields_unchanged() {
        let (mut form, _port) = controller(FakePort::listing(vec![]));
        form.state_mut().name = "soap".to_string();

        form.search().await;

        assert_eq!(form.flash(), FLASH_SUCCESS);
        assert_eq!(form.state().name, "soap");
        assert!(form.results().is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_without_a_request() {
        let (mut form, port) = controller(FakePort::default());
        form.state_mut().customer_id = "301".to_string();

        form.clear();

        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.flash(), "");
        assert!(port.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_operations_clear_previous_flash_first() {
        let (mut form, _port) = controller(FakePort::listing(vec![]));
        form.search().await;
        assert_eq!(form.flash(), FLASH_SUCCESS);

        // A later failing operation must not leave the old flash behind
        let (mut failing, _port) = controller(FakePort::failing(400, "bad request"));
        failing.create().await;
        assert_eq!(failing.flash(), "bad request");
    }
}
