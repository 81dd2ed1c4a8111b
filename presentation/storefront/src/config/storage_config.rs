use std::env;
use std::path::PathBuf;

/// Where the cart and wishlist are kept between sessions
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub ephemeral: bool,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_DATA_DIR: Directory holding one JSON file per key (default: ".storefront")
    /// - STOREFRONT_EPHEMERAL: "true" or "1" keeps everything in memory (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("STOREFRONT_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| ".storefront".to_string());
        let ephemeral = lookup("STOREFRONT_EPHEMERAL")
            .map(|flag| matches!(flag.trim().to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        Self {
            data_dir: PathBuf::from(data_dir),
            ephemeral,
        }
    }
}
