use crate::domain::errors::RepositoryError;

use super::model::WishlistEntry;

pub trait WishlistRepository: Send + Sync {
    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<WishlistEntry>>, RepositoryError>;
    fn save(&self, entries: &[WishlistEntry]) -> Result<(), RepositoryError>;
    fn clear(&self) -> Result<(), RepositoryError>;
}
