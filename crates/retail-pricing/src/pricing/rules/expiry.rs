use super::{days_until_expiry, percent_of};
use crate::pricing::config::{PricingRule, RuleConfiguration};
use crate::pricing::outcome::{RuleOutcome, RuleReason};
use crate::pricing::product::Product;
use chrono::{DateTime, Utc};

const RULE: PricingRule = PricingRule::ExpiryDiscount;

/// Discounts products that expire within the configured window.
pub fn evaluate_expiry_discount(
    product: &Product,
    config: &RuleConfiguration,
    now: DateTime<Utc>,
) -> RuleOutcome {
    let rule_config = &config.expiry_discount;
    if !rule_config.enabled {
        return RuleOutcome::disabled(RULE);
    }

    let days = days_until_expiry(product.expiry_date, now);
    if days <= rule_config.days_threshold {
        let discount = percent_of(product.original_price, rule_config.discount_percentage);
        return RuleOutcome::applied(
            RULE,
            -discount,
            RuleReason::ExpiringSoon {
                days_until_expiry: days,
                discount_percentage: rule_config.discount_percentage,
            },
        );
    }

    RuleOutcome::skipped(
        RULE,
        RuleReason::NotExpiringSoon {
            days_until_expiry: days,
        },
    )
}
