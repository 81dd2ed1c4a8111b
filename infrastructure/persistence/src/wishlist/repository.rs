use std::sync::Arc;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::WishlistEntry;
use business::domain::wishlist::repository::WishlistRepository;

use crate::store::{KeyValueStore, keys};

use super::entity::WishlistEntryEntity;

pub struct WishlistRepositoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl WishlistRepositoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl WishlistRepository for WishlistRepositoryStore {
    fn load(&self) -> Result<Option<Vec<WishlistEntry>>, RepositoryError> {
        let Some(raw) = self
            .store
            .get(keys::WISHLIST)
            .map_err(|_| RepositoryError::Read)?
        else {
            return Ok(None);
        };

        let entities: Vec<WishlistEntryEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::Malformed)?;

        entities
            .into_iter()
            .map(WishlistEntryEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn save(&self, entries: &[WishlistEntry]) -> Result<(), RepositoryError> {
        let entities: Vec<WishlistEntryEntity> =
            entries.iter().map(WishlistEntryEntity::from_domain).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| RepositoryError::Write)?;

        self.store
            .set(keys::WISHLIST, &raw)
            .map_err(|_| RepositoryError::Write)
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.store
            .remove(keys::WISHLIST)
            .map_err(|_| RepositoryError::Write)
    }
}
