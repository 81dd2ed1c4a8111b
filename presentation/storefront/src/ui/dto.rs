use serde::Deserialize;
use serde_json::{Map, Value};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

/// Product payload typed after `cart add` / `wishlist add`.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub id: String,
    pub price: u64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ProductRequest {
    pub fn into_domain(self) -> Result<Product, ProductError> {
        Ok(Product {
            id: ProductId::new(self.id)?,
            price: self.price,
            attributes: self.attributes,
        })
    }
}
