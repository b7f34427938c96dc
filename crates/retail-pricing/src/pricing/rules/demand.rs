use super::percent_of;
use crate::pricing::area::{AreaProfileTable, UNKNOWN_AREA_AVG_DEMAND};
use crate::pricing::config::{PricingRule, RuleConfiguration};
use crate::pricing::outcome::{RuleOutcome, RuleReason};
use crate::pricing::product::Product;

const RULE: PricingRule = PricingRule::DemandSurcharge;

/// Surcharges products whose demand strictly exceeds their area's baseline.
pub fn evaluate_demand_surcharge(
    product: &Product,
    config: &RuleConfiguration,
    areas: &AreaProfileTable,
) -> RuleOutcome {
    let rule_config = &config.demand_surcharge;
    if !rule_config.enabled {
        return RuleOutcome::disabled(RULE);
    }

    let avg_demand = areas
        .lookup(product.area_code.as_deref())
        .map(|area| area.avg_demand)
        .unwrap_or(UNKNOWN_AREA_AVG_DEMAND);

    if (product.demand_count as f64) > avg_demand {
        let increase = percent_of(product.original_price, rule_config.increase_percentage);
        return RuleOutcome::applied(
            RULE,
            increase,
            RuleReason::HighDemand {
                demand_count: product.demand_count,
                avg_demand,
                increase_percentage: rule_config.increase_percentage,
            },
        );
    }

    RuleOutcome::skipped(
        RULE,
        RuleReason::NormalDemand {
            demand_count: product.demand_count,
            avg_demand,
        },
    )
}
