use super::{shop_config::ShopConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub storage: StorageConfig,
    pub shop: ShopConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            shop: ShopConfig::from_env(),
        }
    }
}
