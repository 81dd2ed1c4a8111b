use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use business::domain::cart::model::LineItem;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Stored shape of a cart line: the product object with its quantity merged in.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemEntity {
    #[serde(deserialize_with = "crate::product_id::deserialize")]
    pub id: String,
    pub price: u64,
    pub quantity: u32,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItemEntity {
    pub fn from_domain(item: &LineItem) -> Self {
        Self {
            id: item.product_id.as_str().to_string(),
            price: item.unit_price,
            quantity: item.quantity,
            attributes: item.attributes.clone(),
        }
    }

    pub fn into_domain(self) -> Result<LineItem, RepositoryError> {
        let product_id = ProductId::new(self.id).map_err(|_| RepositoryError::Malformed)?;
        Ok(LineItem::from_repository(
            product_id,
            self.price,
            self.quantity,
            self.attributes,
        ))
    }
}
