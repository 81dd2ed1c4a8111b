use crate::domain::errors::RepositoryError;

use super::model::LineItem;

pub trait CartRepository: Send + Sync {
    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<LineItem>>, RepositoryError>;
    fn save(&self, items: &[LineItem]) -> Result<(), RepositoryError>;
    fn clear(&self) -> Result<(), RepositoryError>;
}
