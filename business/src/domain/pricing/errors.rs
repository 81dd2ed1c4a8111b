#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("pricing.coupon_not_found")]
    CouponNotFound,
    #[error("pricing.coupon_not_yet_valid")]
    CouponNotYetValid,
    #[error("pricing.coupon_expired")]
    CouponExpired,
    #[error("pricing.below_minimum_amount")]
    BelowMinimumAmount,
    #[error("repository.read")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
