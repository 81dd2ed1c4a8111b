use std::io::Write;
use std::sync::Mutex;

use business::domain::cart::model::LineItem;
use business::domain::display::StorefrontView;
use business::domain::pricing::model::OrderSummary;
use business::domain::pricing::services::format_price;
use business::domain::wishlist::model::WishlistEntry;
use serde_json::{Map, Value};

pub struct ConsoleView {
    currency_symbol: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleView {
    pub fn new(currency_symbol: impl Into<String>, out: Box<dyn Write + Send>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            out: Mutex::new(out),
        }
    }

    pub fn stdout(currency_symbol: impl Into<String>) -> Self {
        Self::new(currency_symbol, Box::new(std::io::stdout()))
    }

    fn price(&self, amount: u64) -> String {
        format_price(amount, &self.currency_symbol)
    }

    fn print(&self, lines: Vec<String>) {
        if let Ok(mut out) = self.out.lock() {
            for line in lines {
                if let Err(e) = writeln!(out, "{}", line) {
                    tracing::debug!("Cannot print storefront view: {}", e);
                    return;
                }
            }
        }
    }
}

fn display_name(attributes: &Map<String, Value>) -> &str {
    attributes
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("-")
}

impl StorefrontView for ConsoleView {
    fn show_cart(&self, items: &[LineItem], total: u64) {
        if items.is_empty() {
            self.print(vec!["Cart is empty".to_string()]);
            return;
        }

        let mut lines = vec![format!("Cart ({} lines)", items.len())];
        for item in items {
            lines.push(format!(
                "  {}  {}  x{}  {}",
                item.product_id,
                display_name(&item.attributes),
                item.quantity,
                self.price(item.subtotal())
            ));
        }
        lines.push(format!("Total: {}", self.price(total)));
        self.print(lines);
    }

    fn show_wishlist(&self, entries: &[WishlistEntry]) {
        if entries.is_empty() {
            self.print(vec!["Wishlist is empty".to_string()]);
            return;
        }

        let mut lines = vec![format!("Wishlist ({} entries)", entries.len())];
        for entry in entries {
            let price = entry
                .attributes
                .get("price")
                .and_then(Value::as_u64)
                .map(|amount| self.price(amount))
                .unwrap_or_default();
            lines.push(format!(
                "  {}  {}  {}",
                entry.product_id,
                display_name(&entry.attributes),
                price
            ));
        }
        self.print(lines);
    }

    fn show_order_summary(&self, summary: &OrderSummary) {
        let mut lines = vec![format!("Subtotal: {}", self.price(summary.subtotal))];
        if let Some(code) = &summary.coupon_code {
            lines.push(format!("Discount ({}): -{}", code, self.price(summary.discount)));
        }
        lines.push(match summary.shipping {
            0 => "Shipping: free".to_string(),
            cost => format!("Shipping: {}", self.price(cost)),
        });
        lines.push(format!("Total: {}", self.price(summary.total)));
        self.print(lines);
    }

    fn show_error(&self, message: &str) {
        self.print(vec![format!("error: {}", message)]);
    }
}
