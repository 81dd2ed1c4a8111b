use crate::domain::errors::RepositoryError;

use super::model::Coupon;

pub trait CouponCatalog: Send + Sync {
    /// Codes are matched case-insensitively.
    fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, RepositoryError>;
}
