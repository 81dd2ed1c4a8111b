use business::domain::errors::RepositoryError;
use business::domain::pricing::model::Coupon;
use business::domain::pricing::repository::CouponCatalog;

use super::entity::CouponEntity;

/// Coupon list loaded once at startup.
pub struct InMemoryCouponCatalog {
    coupons: Vec<Coupon>,
}

impl InMemoryCouponCatalog {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parses a JSON array of coupons. One bad coupon rejects the whole file.
    pub fn from_json(raw: &str) -> Result<Self, RepositoryError> {
        let entities: Vec<CouponEntity> =
            serde_json::from_str(raw).map_err(|_| RepositoryError::Malformed)?;
        let coupons = entities
            .into_iter()
            .map(CouponEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(coupons))
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl CouponCatalog for InMemoryCouponCatalog {
    /// Codes match exactly, case included.
    fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, RepositoryError> {
        Ok(self
            .coupons
            .iter()
            .find(|coupon| coupon.code == code)
            .cloned())
    }
}
