use std::sync::Arc;

use crate::domain::cart::model::{Cart, LineItem, QuantityChange};
use crate::domain::cart::repository::CartRepository;
use crate::domain::display::{CountIndicator, render_count};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// The shopper's cart for the current session.
///
/// Built once at startup from whatever the repository holds, then kept as the
/// authoritative copy: every mutation is written back synchronously and the
/// cart badge is refreshed with the total number of units.
///
/// Storage problems never reach the caller. Unreadable stored data starts an
/// empty cart, failed writes are logged and the in-memory cart stays as is.
pub struct ItemCollection {
    cart: Cart,
    repository: Arc<dyn CartRepository>,
    indicator: Arc<dyn CountIndicator>,
    logger: Arc<dyn Logger>,
}

impl ItemCollection {
    pub fn load(
        repository: Arc<dyn CartRepository>,
        indicator: Arc<dyn CountIndicator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let cart = match repository.load() {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => {
                logger.debug("No stored cart, starting empty");
                Cart::default()
            }
            Err(e) => {
                logger.warn(&format!("Discarding unreadable stored cart: {}", e));
                Cart::default()
            }
        };

        logger.info(&format!("Cart loaded with {} lines", cart.len()));

        let collection = Self {
            cart,
            repository,
            indicator,
            logger,
        };
        collection.render();
        collection
    }

    pub fn add_item(&mut self, product: Product) {
        let line = self.cart.add(product);
        self.logger.info(&format!(
            "Cart item {} now at quantity {}",
            line.product_id, line.quantity
        ));

        self.persist();
        self.render();
    }

    pub fn remove_item(&mut self, product_id: &ProductId) {
        match self.cart.remove(product_id) {
            Some(_) => self
                .logger
                .info(&format!("Cart item removed: {}", product_id)),
            None => self
                .logger
                .debug(&format!("Cart item {} not in cart, nothing removed", product_id)),
        }

        self.persist();
        self.render();
    }

    /// Zero or negative quantities remove the line; unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        match self.cart.set_quantity(product_id, quantity) {
            QuantityChange::NotFound => {
                self.logger.debug(&format!(
                    "Cart item {} not in cart, quantity unchanged",
                    product_id
                ));
                return;
            }
            QuantityChange::Removed => self
                .logger
                .info(&format!("Cart item removed: {}", product_id)),
            QuantityChange::Updated(quantity) => self.logger.info(&format!(
                "Cart item {} now at quantity {}",
                product_id, quantity
            )),
        }

        self.persist();
        self.render();
    }

    /// Empties the cart and drops its stored copy.
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.repository.clear() {
            self.logger
                .error(&format!("Failed to clear stored cart: {}", e));
        }
        self.logger.info("Cart cleared");
        self.render();
    }

    pub fn get_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.cart.find(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(self.cart.items()) {
            self.logger.error(&format!("Failed to persist cart: {}", e));
        }
    }

    fn render(&self) {
        render_count(self.indicator.as_ref(), self.cart.total_quantity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::{mock, predicate::eq};
    use std::sync::Mutex;

    mock! {
        pub CartRepo {}

        impl CartRepository for CartRepo {
            fn load(&self) -> Result<Option<Vec<LineItem>>, RepositoryError>;
            fn save(&self, items: &[LineItem]) -> Result<(), RepositoryError>;
            fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Indicator {}

        impl CountIndicator for Indicator {
            fn set_text(&self, text: &str);
            fn set_visible(&self, visible: bool);
        }
    }

    /// Repository keeping the last saved lines, so reloads see earlier writes.
    #[derive(Default)]
    struct MemoryCartRepo {
        stored: Mutex<Option<Vec<LineItem>>>,
    }

    impl CartRepository for MemoryCartRepo {
        fn load(&self) -> Result<Option<Vec<LineItem>>, RepositoryError> {
            Ok(self.stored.lock().unwrap().clone())
        }
        fn save(&self, items: &[LineItem]) -> Result<(), RepositoryError> {
            *self.stored.lock().unwrap() = Some(items.to_vec());
            Ok(())
        }
        fn clear(&self) -> Result<(), RepositoryError> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    /// Indicator remembering what it was last told to show.
    #[derive(Default)]
    struct RecordingIndicator {
        text: Mutex<String>,
        visible: Mutex<bool>,
    }

    impl CountIndicator for RecordingIndicator {
        fn set_text(&self, text: &str) {
            *self.text.lock().unwrap() = text.to_string();
        }
        fn set_visible(&self, visible: bool) {
            *self.visible.lock().unwrap() = visible;
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn quiet_indicator() -> Arc<dyn CountIndicator> {
        let mut indicator = MockIndicator::new();
        indicator.expect_set_text().returning(|_| ());
        indicator.expect_set_visible().returning(|_| ());
        Arc::new(indicator)
    }

    fn product(id: &str, price: u64) -> Product {
        Product::new(ProductId::new(id).unwrap(), price)
    }

    fn id(value: &str) -> ProductId {
        ProductId::new(value).unwrap()
    }

    fn empty_collection() -> (ItemCollection, Arc<MemoryCartRepo>, Arc<RecordingIndicator>) {
        let repository = Arc::new(MemoryCartRepo::default());
        let indicator = Arc::new(RecordingIndicator::default());
        let collection =
            ItemCollection::load(repository.clone(), indicator.clone(), mock_logger());
        (collection, repository, indicator)
    }

    #[test]
    fn should_merge_repeated_add_into_one_line() {
        let (mut cart, _, _) = empty_collection();

        cart.add_item(product("p1", 1000));
        cart.add_item(product("p1", 1000));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn should_persist_after_every_mutation() {
        let (mut cart, repository, _) = empty_collection();

        cart.add_item(product("p1", 1000));
        assert_eq!(repository.load().unwrap().unwrap().len(), 1);

        cart.update_quantity(&id("p1"), 4);
        assert_eq!(repository.load().unwrap().unwrap()[0].quantity, 4);

        cart.remove_item(&id("p1"));
        assert!(repository.load().unwrap().unwrap().is_empty());
    }

    #[test]
    fn should_leave_cart_unchanged_when_removing_absent_item() {
        let (mut cart, _, _) = empty_collection();
        cart.add_item(product("p1", 1000));
        let before = cart.items().to_vec();

        cart.remove_item(&id("absent"));

        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn should_remove_item_when_quantity_updated_to_zero() {
        let (mut cart, _, _) = empty_collection();
        cart.add_item(product("p1", 1000));

        cart.update_quantity(&id("p1"), 0);

        assert!(!cart.contains(&id("p1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn should_not_write_when_quantity_update_targets_unknown_item() {
        let mut repository = MockCartRepo::new();
        repository.expect_load().returning(|| Ok(None));
        repository.expect_save().times(0);

        let mut cart =
            ItemCollection::load(Arc::new(repository), quiet_indicator(), mock_logger());

        cart.update_quantity(&id("ghost"), 3);

        assert!(cart.is_empty());
    }

    #[test]
    fn should_compute_total_from_prices_and_quantities() {
        let (mut cart, _, _) = empty_collection();
        cart.add_item(product("p1", 1000));
        cart.add_item(product("p1", 1000));
        cart.add_item(product("p2", 500));

        assert_eq!(cart.get_total(), 2500);
    }

    #[test]
    fn should_return_zero_total_for_empty_cart() {
        let (cart, _, _) = empty_collection();

        assert_eq!(cart.get_total(), 0);
    }

    #[test]
    fn should_show_badge_with_total_units() {
        let (mut cart, _, indicator) = empty_collection();

        cart.add_item(product("p1", 1000));
        cart.add_item(product("p1", 1000));
        cart.add_item(product("p2", 500));

        assert_eq!(*indicator.text.lock().unwrap(), "3");
        assert!(*indicator.visible.lock().unwrap());
    }

    #[test]
    fn should_hide_badge_when_cart_becomes_empty() {
        let (mut cart, _, indicator) = empty_collection();
        cart.add_item(product("p1", 1000));

        cart.remove_item(&id("p1"));

        assert_eq!(*indicator.text.lock().unwrap(), "0");
        assert!(!*indicator.visible.lock().unwrap());
    }

    #[test]
    fn should_render_badge_on_load() {
        let mut indicator = MockIndicator::new();
        indicator
            .expect_set_text()
            .withf(|text| text == "0")
            .times(1)
            .returning(|_| ());
        indicator
            .expect_set_visible()
            .with(eq(false))
            .times(1)
            .returning(|_| ());

        let _cart = ItemCollection::load(
            Arc::new(MemoryCartRepo::default()),
            Arc::new(indicator),
            mock_logger(),
        );
    }

    #[test]
    fn should_restore_same_lines_after_reload() {
        let (mut cart, repository, _) = empty_collection();
        cart.add_item(product("p1", 1000).with_attribute("name", "Formula Pro"));
        cart.add_item(product("p2", 500));
        cart.update_quantity(&id("p2"), 3);

        let reloaded = ItemCollection::load(repository, quiet_indicator(), mock_logger());

        assert_eq!(reloaded.items(), cart.items());
    }

    #[test]
    fn should_start_empty_when_stored_cart_is_malformed() {
        let mut repository = MockCartRepo::new();
        repository
            .expect_load()
            .returning(|| Err(RepositoryError::Malformed));

        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());

        let cart = ItemCollection::load(Arc::new(repository), quiet_indicator(), Arc::new(logger));

        assert!(cart.is_empty());
    }

    #[test]
    fn should_keep_in_memory_state_when_write_fails() {
        let mut repository = MockCartRepo::new();
        repository.expect_load().returning(|| Ok(None));
        repository
            .expect_save()
            .returning(|_| Err(RepositoryError::Write));

        let mut logger = MockLog::new();
        logger.expect_error().times(1).returning(|_| ());
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());

        let mut cart =
            ItemCollection::load(Arc::new(repository), quiet_indicator(), Arc::new(logger));
        cart.add_item(product("p1", 1000));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn should_clear_items_and_stored_copy() {
        let (mut cart, repository, indicator) = empty_collection();
        cart.add_item(product("p1", 1000));

        cart.clear();

        assert!(cart.is_empty());
        assert!(repository.load().unwrap().is_none());
        assert!(!*indicator.visible.lock().unwrap());
    }
}
