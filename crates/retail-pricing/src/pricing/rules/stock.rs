use super::{days_until_expiry, percent_of};
use crate::pricing::config::{PricingRule, RuleConfiguration, LOW_STOCK_EXPIRY_CUTOFF_DAYS};
use crate::pricing::outcome::{RuleOutcome, RuleReason};
use crate::pricing::product::Product;
use chrono::{DateTime, Utc};

const RULE: PricingRule = PricingRule::LowStockSurcharge;

/// Surcharges scarce products unless they are about to expire.
///
/// The expiry check always uses [`LOW_STOCK_EXPIRY_CUTOFF_DAYS`], never the
/// configurable expiry-discount threshold.
pub fn evaluate_low_stock_surcharge(
    product: &Product,
    config: &RuleConfiguration,
    now: DateTime<Utc>,
) -> RuleOutcome {
    let rule_config = &config.low_stock_surcharge;
    if !rule_config.enabled {
        return RuleOutcome::disabled(RULE);
    }

    if product.stock >= rule_config.stock_threshold {
        return RuleOutcome::skipped(
            RULE,
            RuleReason::StockAdequate {
                stock: product.stock,
            },
        );
    }

    let days = days_until_expiry(product.expiry_date, now);
    if days > LOW_STOCK_EXPIRY_CUTOFF_DAYS {
        let increase = percent_of(product.original_price, rule_config.increase_percentage);
        return RuleOutcome::applied(
            RULE,
            increase,
            RuleReason::LowStock {
                stock: product.stock,
                increase_percentage: rule_config.increase_percentage,
            },
        );
    }

    RuleOutcome::skipped(
        RULE,
        RuleReason::LowStockExpiringSoon {
            stock: product.stock,
            days_until_expiry: days,
        },
    )
}
