use std::sync::Arc;

use crate::domain::display::{CountIndicator, render_count};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::model::{Wishlist, WishlistEntry};
use crate::domain::wishlist::repository::WishlistRepository;

/// The shopper's saved products for the current session, mirrored to the
/// repository and to the wishlist badge. Same storage policy as the cart.
pub struct WishlistCollection {
    wishlist: Wishlist,
    repository: Arc<dyn WishlistRepository>,
    indicator: Arc<dyn CountIndicator>,
    logger: Arc<dyn Logger>,
}

impl WishlistCollection {
    pub fn load(
        repository: Arc<dyn WishlistRepository>,
        indicator: Arc<dyn CountIndicator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let wishlist = match repository.load() {
            Ok(Some(entries)) => Wishlist::from_entries(entries),
            Ok(None) => {
                logger.debug("No stored wishlist, starting empty");
                Wishlist::default()
            }
            Err(e) => {
                logger.warn(&format!("Discarding unreadable stored wishlist: {}", e));
                Wishlist::default()
            }
        };

        logger.info(&format!("Wishlist loaded with {} entries", wishlist.len()));

        let collection = Self {
            wishlist,
            repository,
            indicator,
            logger,
        };
        collection.render();
        collection
    }

    /// Saving a product twice is a no-op.
    pub fn add_item(&mut self, product: Product) {
        let product_id = product.id.clone();
        if !self.wishlist.add(product) {
            self.logger
                .debug(&format!("Wishlist already holds {}", product_id));
            return;
        }

        self.logger
            .info(&format!("Wishlist entry added: {}", product_id));
        self.persist();
        self.render();
    }

    pub fn remove_item(&mut self, product_id: &ProductId) {
        if self.wishlist.remove(product_id).is_some() {
            self.logger
                .info(&format!("Wishlist entry removed: {}", product_id));
        }

        self.persist();
        self.render();
    }

    pub fn clear(&mut self) {
        self.wishlist.clear();
        if let Err(e) = self.repository.clear() {
            self.logger
                .error(&format!("Failed to clear stored wishlist: {}", e));
        }
        self.logger.info("Wishlist cleared");
        self.render();
    }

    pub fn items(&self) -> &[WishlistEntry] {
        self.wishlist.entries()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn len(&self) -> usize {
        self.wishlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishlist.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(self.wishlist.entries()) {
            self.logger
                .error(&format!("Failed to persist wishlist: {}", e));
        }
    }

    fn render(&self) {
        render_count(self.indicator.as_ref(), self.wishlist.len() as u64);
    }
}
