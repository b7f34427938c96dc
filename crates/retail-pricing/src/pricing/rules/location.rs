use super::percent_of;
use crate::pricing::area::AreaProfileTable;
use crate::pricing::config::{PricingRule, RuleConfiguration};
use crate::pricing::outcome::{RuleOutcome, RuleReason};
use crate::pricing::product::Product;
use rust_decimal::Decimal;

const RULE: PricingRule = PricingRule::LocationAdjustment;

/// Scales price with the affluence of the product's selling area.
///
/// Scores of 4 and above add 15% plus 5% per point over 4; scores of 2 and
/// below subtract 5% plus 5% per point under 2. A score of 3 is neutral.
pub fn evaluate_location_adjustment(
    product: &Product,
    config: &RuleConfiguration,
    areas: &AreaProfileTable,
) -> RuleOutcome {
    if !config.location_adjustment.enabled {
        return RuleOutcome::disabled(RULE);
    }

    let Some(area) = areas.lookup(product.area_code.as_deref()) else {
        return RuleOutcome::skipped(RULE, RuleReason::AreaNotFound);
    };

    let financial_score = area.financial_score;
    let score = i64::from(financial_score);
    let (percentage, reason) = if score >= 4 {
        let percentage = 15 + (score - 4) * 5;
        (
            percentage,
            RuleReason::AffluentArea {
                financial_score,
                percentage,
            },
        )
    } else if score <= 2 {
        let percentage = -(5 + (2 - score) * 5);
        (
            percentage,
            RuleReason::LowerIncomeArea {
                financial_score,
                percentage,
            },
        )
    } else {
        (0, RuleReason::MiddleIncomeArea { financial_score })
    };

    if percentage == 0 {
        return RuleOutcome::skipped(RULE, reason);
    }

    let adjustment = percent_of(product.original_price, Decimal::from(percentage));
    RuleOutcome::applied(RULE, adjustment, reason)
}
