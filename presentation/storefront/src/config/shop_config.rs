use std::env;
use std::path::PathBuf;

use anyhow::Context;
use business::domain::pricing::model::ShopSettings;
use persistence::coupon::repository::InMemoryCouponCatalog;

/// Money settings and the coupon list
#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub settings: ShopSettings,
    pub coupons_file: Option<PathBuf>,
}

impl ShopConfig {
    /// Load shop configuration from environment variables
    ///
    /// Environment variables:
    /// - SHOP_CURRENCY_SYMBOL: Suffix used when printing prices (default: "원")
    /// - SHOP_FREE_SHIPPING_THRESHOLD: Order amount that ships for free (default: 50000)
    /// - SHOP_SHIPPING_COST: Shipping charged below the threshold (default: 3000)
    /// - SHOP_COUPONS_FILE: JSON array of coupons (default: none)
    ///
    /// Numbers that do not parse fall back to their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ShopSettings::default();
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let settings = ShopSettings {
            currency_symbol: lookup("SHOP_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            free_shipping_threshold: number(
                "SHOP_FREE_SHIPPING_THRESHOLD",
                defaults.free_shipping_threshold,
            ),
            shipping_cost: number("SHOP_SHIPPING_COST", defaults.shipping_cost),
        };

        Self {
            settings,
            coupons_file: lookup("SHOP_COUPONS_FILE").map(PathBuf::from),
        }
    }

    /// Reads the coupon file, or returns an empty catalog when none is configured.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or holds an invalid coupon
    pub fn load_coupon_catalog(&self) -> anyhow::Result<InMemoryCouponCatalog> {
        let Some(path) = &self.coupons_file else {
            return Ok(InMemoryCouponCatalog::empty());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading coupon file {}", path.display()))?;
        let catalog = InMemoryCouponCatalog::from_json(&raw)
            .with_context(|| format!("parsing coupon file {}", path.display()))?;
        Ok(catalog)
    }
}
