use chrono::NaiveDate;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Shopper actions the storefront reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontEvent {
    AddToCart(Product),
    RemoveFromCart(ProductId),
    UpdateCartQuantity { product_id: ProductId, quantity: i64 },
    ClearCart,
    ShowCart,
    AddToWishlist(Product),
    RemoveFromWishlist(ProductId),
    ClearWishlist,
    ShowWishlist,
    Checkout {
        coupon_code: Option<String>,
        today: NaiveDate,
    },
}
