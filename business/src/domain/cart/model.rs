use serde_json::{Map, Value};

use crate::domain::product::model::{Product, strip_reserved};
use crate::domain::shared::value_objects::ProductId;

/// One product in the cart together with how many units the shopper wants.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub unit_price: u64,
    pub quantity: u32,
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// First unit of a product entering the cart.
    pub fn from_product(product: Product) -> Self {
        Self {
            product_id: product.id,
            unit_price: product.price,
            quantity: 1,
            attributes: strip_reserved(product.attributes),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        product_id: ProductId,
        unit_price: u64,
        quantity: u32,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            product_id,
            unit_price,
            quantity,
            attributes,
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Result of a quantity change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line for that product.
    NotFound,
    Updated(u32),
    Removed,
}

/// Ordered cart lines, at most one per product. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Rebuilds a cart from stored lines. Lines with zero quantity are
    /// dropped and repeated products are merged into their first occurrence.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::default();
        for item in items.into_iter().filter(|item| item.quantity > 0) {
            match cart.position(&item.product_id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    /// Adds one unit of the product and returns the resulting line.
    pub fn add(&mut self, product: Product) -> &LineItem {
        let index = match self.position(&product.id) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(LineItem::from_product(product));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Option<LineItem> {
        let index = self.position(product_id)?;
        Some(self.items.remove(index))
    }

    /// Sets the quantity of an existing line. Zero or negative removes it.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> QuantityChange {
        let Some(index) = self.position(product_id) else {
            return QuantityChange::NotFound;
        };

        if quantity <= 0 {
            self.items.remove(index);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.items[index].quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity over every line.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |sum, item| sum.saturating_add(item.subtotal()))
    }

    /// Number of units across all lines; this is what the cart badge shows.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| &item.product_id == product_id)
    }
}
