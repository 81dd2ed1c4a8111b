use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::model::WishlistEntry;

/// Stored shape of a wishlist entry: the product object as it was saved.
#[derive(Debug, Serialize, Deserialize)]
pub struct WishlistEntryEntity {
    #[serde(deserialize_with = "crate::product_id::deserialize")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl WishlistEntryEntity {
    pub fn from_domain(entry: &WishlistEntry) -> Self {
        Self {
            id: entry.product_id.as_str().to_string(),
            attributes: entry.attributes.clone(),
        }
    }

    pub fn into_domain(self) -> Result<WishlistEntry, RepositoryError> {
        let product_id = ProductId::new(self.id).map_err(|_| RepositoryError::Malformed)?;
        Ok(WishlistEntry::from_repository(product_id, self.attributes))
    }
}
