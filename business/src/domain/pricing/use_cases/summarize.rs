use chrono::NaiveDate;

use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::OrderSummary;

pub struct SummarizeOrderParams {
    pub subtotal: u64,
    pub coupon_code: Option<String>,
    pub today: NaiveDate,
}

pub trait SummarizeOrderUseCase: Send + Sync {
    fn execute(&self, params: SummarizeOrderParams) -> Result<OrderSummary, PricingError>;
}
