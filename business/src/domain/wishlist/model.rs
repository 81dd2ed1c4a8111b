use serde_json::{Map, Value};

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// A saved product. Everything except the identifier, price and any
/// `quantity` field included, is kept as a plain attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub attributes: Map<String, Value>,
}

impl WishlistEntry {
    pub fn from_product(product: Product) -> Self {
        let mut attributes = product.attributes;
        attributes.remove("id");
        attributes.insert("price".to_string(), Value::from(product.price));
        Self {
            product_id: product.id,
            attributes,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(product_id: ProductId, attributes: Map<String, Value>) -> Self {
        Self {
            product_id,
            attributes,
        }
    }
}

/// Saved products, deduplicated by identifier and kept in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Rebuilds a wishlist from stored entries, keeping the first of any repeated product.
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        let mut wishlist = Wishlist::default();
        for entry in entries {
            if !wishlist.contains(&entry.product_id) {
                wishlist.entries.push(entry);
            }
        }
        wishlist
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries
            .iter()
            .any(|entry| &entry.product_id == product_id)
    }

    /// Returns false when the product was already saved.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.entries.push(WishlistEntry::from_product(product));
        true
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Option<WishlistEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| &entry.product_id == product_id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
