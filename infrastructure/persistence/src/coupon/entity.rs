use chrono::NaiveDate;
use serde::Deserialize;

use business::domain::errors::RepositoryError;
use business::domain::pricing::model::{Coupon, CouponKind};

/// Coupon as written in the shop's coupon file. A zero `minAmount` or
/// `maxDiscount` means the limit is off.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponEntity {
    pub code: String,
    pub name: String,
    pub discount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub min_amount: Option<u64>,
    pub max_discount: Option<u64>,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

impl CouponEntity {
    pub fn into_domain(self) -> Result<Coupon, RepositoryError> {
        let kind = match self.kind.as_str() {
            "percentage" if (0.0..=1.0).contains(&self.discount) => {
                CouponKind::Percentage(self.discount)
            }
            _ => return Err(RepositoryError::Malformed),
        };

        if self.code.trim().is_empty() || self.valid_to < self.valid_from {
            return Err(RepositoryError::Malformed);
        }

        Ok(Coupon {
            code: self.code,
            name: self.name,
            kind,
            min_amount: self.min_amount.filter(|&amount| amount > 0),
            max_discount: self.max_discount.filter(|&amount| amount > 0),
            valid_from: self.valid_from,
            valid_to: self.valid_to,
        })
    }
}
