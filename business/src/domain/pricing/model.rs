use chrono::NaiveDate;

/// Shop-wide money settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopSettings {
    pub currency_symbol: String,
    /// Orders at or above this amount ship for free.
    pub free_shipping_threshold: u64,
    pub shipping_cost: u64,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "원".to_string(),
            free_shipping_threshold: 50_000,
            shipping_cost: 3_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CouponKind {
    /// Fraction of the order amount, between 0 and 1.
    Percentage(f64),
}

impl std::fmt::Display for CouponKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CouponKind::Percentage(_) => write!(f, "percentage"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub code: String,
    pub name: String,
    pub kind: CouponKind,
    pub min_amount: Option<u64>,
    pub max_discount: Option<u64>,
    /// First day the coupon can be used.
    pub valid_from: NaiveDate,
    /// Last day the coupon can be used.
    pub valid_to: NaiveDate,
}

/// Money breakdown shown at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: u64,
    pub discount: u64,
    pub shipping: u64,
    pub total: u64,
    pub coupon_code: Option<String>,
}
