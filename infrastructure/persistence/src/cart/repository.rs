use std::sync::Arc;

use business::domain::cart::model::LineItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::store::{KeyValueStore, keys};

use super::entity::LineItemEntity;

pub struct CartRepositoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl CartRepositoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CartRepository for CartRepositoryStore {
    fn load(&self) -> Result<Option<Vec<LineItem>>, RepositoryError> {
        let Some(raw) = self
            .store
            .get(keys::CART)
            .map_err(|_| RepositoryError::Read)?
        else {
            return Ok(None);
        };

        let entities: Vec<LineItemEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::Malformed)?;

        entities
            .into_iter()
            .map(LineItemEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn save(&self, items: &[LineItem]) -> Result<(), RepositoryError> {
        let entities: Vec<LineItemEntity> = items.iter().map(LineItemEntity::from_domain).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| RepositoryError::Write)?;

        self.store
            .set(keys::CART, &raw)
            .map_err(|_| RepositoryError::Write)
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.store
            .remove(keys::CART)
            .map_err(|_| RepositoryError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemoryKeyValueStore;
    use business::domain::shared::value_objects::ProductId;
    use serde_json::{Map, Value};

    fn repository_with(raw: Option<&str>) -> (CartRepositoryStore, Arc<InMemoryKeyValueStore>) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        if let Some(raw) = raw {
            store.set(keys::CART, raw).unwrap();
        }
        (CartRepositoryStore::new(store.clone()), store)
    }

    fn line(id: &str, price: u64, quantity: u32, name: &str) -> LineItem {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::from(name));
        LineItem::from_repository(ProductId::new(id).unwrap(), price, quantity, attributes)
    }

    #[test]
    fn should_report_absent_cart_as_none() {
        let (repository, _) = repository_with(None);

        assert!(repository.load().unwrap().is_none());
    }

    #[test]
    fn should_read_back_saved_lines() {
        let (repository, _) = repository_with(None);
        let items = vec![
            line("p1", 1000, 2, "Formula Pro"),
            line("p2", 500, 1, "Bottle Brush"),
        ];

        repository.save(&items).unwrap();

        assert_eq!(repository.load().unwrap().unwrap(), items);
    }

    #[test]
    fn should_store_flat_product_objects() {
        let (repository, store) = repository_with(None);

        repository.save(&[line("p1", 1000, 2, "Formula Pro")]).unwrap();

        let raw = store.get(keys::CART).unwrap().unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored[0]["id"], "p1");
        assert_eq!(stored[0]["price"], 1000);
        assert_eq!(stored[0]["quantity"], 2);
        assert_eq!(stored[0]["name"], "Formula Pro");
    }

    #[test]
    fn should_accept_numeric_product_ids() {
        let (repository, _) = repository_with(Some(r#"[{"id":42,"price":1000,"quantity":1}]"#));

        let items = repository.load().unwrap().unwrap();

        assert_eq!(items[0].product_id.as_str(), "42");
    }

    #[test]
    fn should_flag_garbage_as_malformed() {
        let (repository, _) = repository_with(Some("{not json"));

        assert!(matches!(repository.load(), Err(RepositoryError::Malformed)));
    }

    #[test]
    fn should_flag_lines_without_quantity_as_malformed() {
        let (repository, _) = repository_with(Some(r#"[{"id":"p1","price":1000}]"#));

        assert!(matches!(repository.load(), Err(RepositoryError::Malformed)));
    }

    #[test]
    fn should_flag_empty_product_id_as_malformed() {
        let (repository, _) = repository_with(Some(r#"[{"id":"","price":1,"quantity":1}]"#));

        assert!(matches!(repository.load(), Err(RepositoryError::Malformed)));
    }

    #[test]
    fn should_remove_stored_cart_on_clear() {
        let (repository, store) = repository_with(Some("[]"));

        repository.clear().unwrap();

        assert!(store.get(keys::CART).unwrap().is_none());
    }
}
