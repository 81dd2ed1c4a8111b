use std::sync::Arc;

use crate::application::cart::collection::ItemCollection;
use crate::application::wishlist::collection::WishlistCollection;
use crate::domain::display::StorefrontView;
use crate::domain::events::model::StorefrontEvent;
use crate::domain::events::source::EventHandler;
use crate::domain::pricing::use_cases::summarize::{SummarizeOrderParams, SummarizeOrderUseCase};

/// Cart buttons, quantity inputs and the checkout button.
pub struct CartHandler<'a> {
    cart: &'a mut ItemCollection,
    summarize: Arc<dyn SummarizeOrderUseCase>,
    view: Arc<dyn StorefrontView>,
}

impl<'a> CartHandler<'a> {
    pub fn new(
        cart: &'a mut ItemCollection,
        summarize: Arc<dyn SummarizeOrderUseCase>,
        view: Arc<dyn StorefrontView>,
    ) -> Self {
        Self {
            cart,
            summarize,
            view,
        }
    }
}

impl EventHandler for CartHandler<'_> {
    fn handle(&mut self, event: &StorefrontEvent) -> bool {
        match event {
            StorefrontEvent::AddToCart(product) => self.cart.add_item(product.clone()),
            StorefrontEvent::RemoveFromCart(product_id) => self.cart.remove_item(product_id),
            StorefrontEvent::UpdateCartQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(product_id, *quantity),
            StorefrontEvent::ClearCart => self.cart.clear(),
            StorefrontEvent::ShowCart => {
                self.view.show_cart(self.cart.items(), self.cart.get_total())
            }
            StorefrontEvent::Checkout { coupon_code, today } => {
                let params = SummarizeOrderParams {
                    subtotal: self.cart.get_total(),
                    coupon_code: coupon_code.clone(),
                    today: *today,
                };
                match self.summarize.execute(params) {
                    Ok(summary) => self.view.show_order_summary(&summary),
                    Err(e) => self.view.show_error(&e.to_string()),
                }
            }
            _ => return false,
        }
        true
    }
}

/// Heart buttons and the wishlist page.
pub struct WishlistHandler<'a> {
    wishlist: &'a mut WishlistCollection,
    view: Arc<dyn StorefrontView>,
}

impl<'a> WishlistHandler<'a> {
    pub fn new(wishlist: &'a mut WishlistCollection, view: Arc<dyn StorefrontView>) -> Self {
        Self { wishlist, view }
    }
}

impl EventHandler for WishlistHandler<'_> {
    fn handle(&mut self, event: &StorefrontEvent) -> bool {
        match event {
            StorefrontEvent::AddToWishlist(product) => self.wishlist.add_item(product.clone()),
            StorefrontEvent::RemoveFromWishlist(product_id) => {
                self.wishlist.remove_item(product_id)
            }
            StorefrontEvent::ClearWishlist => self.wishlist.clear(),
            StorefrontEvent::ShowWishlist => self.view.show_wishlist(self.wishlist.items()),
            _ => return false,
        }
        true
    }
}
