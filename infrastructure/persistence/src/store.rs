use crate::errors::StorageError;

/// Fixed keys the storefront stores its state under.
pub mod keys {
    pub const CART: &str = "cart";
    pub const WISHLIST: &str = "wishlist";
}

/// Durable string-to-string storage that outlives a shopping session.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under the key.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
