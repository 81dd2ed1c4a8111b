use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryStore;
use persistence::file_store::FileKeyValueStore;
use persistence::memory_store::InMemoryKeyValueStore;
use persistence::store::KeyValueStore;
use persistence::wishlist::repository::WishlistRepositoryStore;

use business::application::cart::collection::ItemCollection;
use business::application::pricing::summarize::SummarizeOrderUseCaseImpl;
use business::application::wishlist::collection::WishlistCollection;
use business::domain::display::{CountIndicator, StorefrontView};
use business::domain::logger::Logger;
use business::domain::pricing::use_cases::summarize::SummarizeOrderUseCase;

use crate::config::app_config::AppConfig;
use crate::ui::indicator::ConsoleIndicator;
use crate::ui::view::ConsoleView;

/// Output surfaces the container hands to the collections and handlers.
pub struct Surfaces {
    pub cart_indicator: Arc<dyn CountIndicator>,
    pub wishlist_indicator: Arc<dyn CountIndicator>,
    pub view: Arc<dyn StorefrontView>,
}

impl Surfaces {
    pub fn console(currency_symbol: &str) -> Self {
        Self {
            cart_indicator: Arc::new(ConsoleIndicator::stdout("cart-count")),
            wishlist_indicator: Arc::new(ConsoleIndicator::stdout("wishlist-count")),
            view: Arc::new(ConsoleView::stdout(currency_symbol)),
        }
    }
}

/// Everything one shopping session needs, built once at startup.
pub struct DependencyContainer {
    pub cart: ItemCollection,
    pub wishlist: WishlistCollection,
    pub summarize_order: Arc<dyn SummarizeOrderUseCase>,
    pub view: Arc<dyn StorefrontView>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: AppConfig, surfaces: Surfaces) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("session"));

        // Infrastructure adapters
        let store: Arc<dyn KeyValueStore> = if config.storage.ephemeral {
            logger.info("Using in-memory storage, nothing will be kept");
            Arc::new(InMemoryKeyValueStore::new())
        } else {
            logger.info(&format!(
                "Using storage directory {}",
                config.storage.data_dir.display()
            ));
            Arc::new(FileKeyValueStore::open(&config.storage.data_dir)?)
        };
        let cart_repository = Arc::new(CartRepositoryStore::new(store.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryStore::new(store));
        let coupon_catalog = Arc::new(config.shop.load_coupon_catalog()?);
        logger.info(&format!("Loaded {} coupons", coupon_catalog.len()));

        // Collections
        let cart = ItemCollection::load(
            cart_repository,
            surfaces.cart_indicator,
            Arc::new(TracingLogger::new("cart")),
        );
        let wishlist = WishlistCollection::load(
            wishlist_repository,
            surfaces.wishlist_indicator,
            Arc::new(TracingLogger::new("wishlist")),
        );

        // Use cases
        let summarize_order = Arc::new(SummarizeOrderUseCaseImpl {
            catalog: coupon_catalog,
            settings: config.shop.settings,
            logger: Arc::new(TracingLogger::new("checkout")),
        });

        Ok(Self {
            cart,
            wishlist,
            summarize_order,
            view: surfaces.view,
            logger,
        })
    }
}
