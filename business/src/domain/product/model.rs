use serde_json::{Map, Value};

use crate::domain::shared::value_objects::ProductId;

/// Field names owned by the storefront itself. Attributes never shadow them.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "price", "quantity"];

/// Product descriptor as handed over by the page when a shopper clicks
/// "add to cart" or "add to wishlist".
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub price: u64,
    /// Free-form fields (name, image, option...) copied verbatim into the
    /// cart line or wishlist entry.
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn new(id: ProductId, price: u64) -> Self {
        Self {
            id,
            price,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Drops any attribute whose name collides with a reserved field.
pub fn strip_reserved(mut attributes: Map<String, Value>) -> Map<String, Value> {
    for field in RESERVED_FIELDS {
        attributes.remove(field);
    }
    attributes
}
