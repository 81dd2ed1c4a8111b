use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{OrderSummary, ShopSettings};
use crate::domain::pricing::repository::CouponCatalog;
use crate::domain::pricing::services::{calculate_discount, calculate_shipping, check_coupon};
use crate::domain::pricing::use_cases::summarize::{SummarizeOrderParams, SummarizeOrderUseCase};

pub struct SummarizeOrderUseCaseImpl {
    pub catalog: Arc<dyn CouponCatalog>,
    pub settings: ShopSettings,
    pub logger: Arc<dyn Logger>,
}

impl SummarizeOrderUseCase for SummarizeOrderUseCaseImpl {
    fn execute(&self, params: SummarizeOrderParams) -> Result<OrderSummary, PricingError> {
        self.logger
            .info(&format!("Summarizing order of {}", params.subtotal));

        let (discount, coupon_code) = match params.coupon_code.as_deref() {
            Some(code) => {
                let coupon = self
                    .catalog
                    .find_by_code(code)?
                    .ok_or(PricingError::CouponNotFound)?;
                check_coupon(&coupon, params.subtotal, params.today)?;
                (calculate_discount(&coupon, params.subtotal), Some(coupon.code))
            }
            None => (0, None),
        };

        // Shipping is decided on what the shopper actually pays for the goods.
        let discounted = params.subtotal.saturating_sub(discount);
        let shipping = calculate_shipping(&self.settings, discounted);

        let summary = OrderSummary {
            subtotal: params.subtotal,
            discount,
            shipping,
            total: discounted.saturating_add(shipping),
            coupon_code,
        };

        self.logger.info(&format!(
            "Order summary: discount {}, shipping {}, total {}",
            summary.discount, summary.shipping, summary.total
        ));
        Ok(summary)
    }
}
