use crate::domain::cart::model::LineItem;
use crate::domain::pricing::model::OrderSummary;
use crate::domain::wishlist::model::WishlistEntry;

/// Badge next to the cart or wishlist icon.
pub trait CountIndicator: Send + Sync {
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);
}

/// Shows the count on the badge, hiding it entirely when there is nothing to count.
pub fn render_count(indicator: &dyn CountIndicator, count: u64) {
    indicator.set_text(&count.to_string());
    indicator.set_visible(count > 0);
}

/// Output surface for listings and checkout results.
pub trait StorefrontView: Send + Sync {
    fn show_cart(&self, items: &[LineItem], total: u64);
    fn show_wishlist(&self, entries: &[WishlistEntry]);
    fn show_order_summary(&self, summary: &OrderSummary);
    fn show_error(&self, message: &str);
}
