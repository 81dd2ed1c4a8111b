use business::application::events::dispatcher::EventDispatcher;
use business::application::events::handlers::{CartHandler, WishlistHandler};
use business::domain::events::source::EventSource;

use crate::setup::dependency_injection::DependencyContainer;

pub struct Session;

impl Session {
    /// Registers the handlers and feeds them events until the source runs dry.
    pub fn run(container: DependencyContainer, source: &mut dyn EventSource) -> anyhow::Result<()> {
        let DependencyContainer {
            mut cart,
            mut wishlist,
            summarize_order,
            view,
            logger,
        } = container;

        let count = {
            let mut dispatcher = EventDispatcher::new(logger.clone());
            dispatcher.register(CartHandler::new(&mut cart, summarize_order, view.clone()));
            dispatcher.register(WishlistHandler::new(&mut wishlist, view));
            dispatcher.run(source)?
        };

        logger.info(&format!(
            "Session over after {} events: {} cart lines, {} wishlist entries",
            count,
            cart.len(),
            wishlist.len()
        ));
        Ok(())
    }
}
