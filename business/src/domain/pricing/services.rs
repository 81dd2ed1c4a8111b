use chrono::NaiveDate;

use super::errors::PricingError;
use super::model::{Coupon, CouponKind, ShopSettings};

pub fn is_free_shipping(settings: &ShopSettings, amount: u64) -> bool {
    amount >= settings.free_shipping_threshold
}

pub fn calculate_shipping(settings: &ShopSettings, amount: u64) -> u64 {
    if is_free_shipping(settings, amount) {
        return 0;
    }
    settings.shipping_cost
}

/// Discount granted by a coupon on the given amount, rounded down to a whole unit.
pub fn calculate_discount(coupon: &Coupon, amount: u64) -> u64 {
    let discount = match coupon.kind {
        CouponKind::Percentage(rate) => (amount as f64 * rate.clamp(0.0, 1.0)).floor() as u64,
    };

    match coupon.max_discount {
        Some(max) => discount.min(max),
        None => discount,
    }
}

/// Checks the validity window (inclusive on both ends) and the minimum order amount.
pub fn check_coupon(coupon: &Coupon, amount: u64, today: NaiveDate) -> Result<(), PricingError> {
    if today < coupon.valid_from {
        return Err(PricingError::CouponNotYetValid);
    }
    if today > coupon.valid_to {
        return Err(PricingError::CouponExpired);
    }
    if let Some(min) = coupon.min_amount
        && amount < min
    {
        return Err(PricingError::BelowMinimumAmount);
    }
    Ok(())
}

/// Formats an amount with thousands separators followed by the currency symbol,
/// e.g. `1,234,567원`.
pub fn format_price(amount: u64, currency_symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(currency_symbol);
    grouped
}
