use super::area::AreaProfileTable;
use super::config::RuleConfiguration;
use super::outcome::{PricingResult, RuleOutcome};
use super::product::Product;
use super::rules::{
    evaluate_demand_surcharge, evaluate_expiry_discount, evaluate_location_adjustment,
    evaluate_low_stock_surcharge,
};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Lowest price the engine will ever return.
pub const MINIMUM_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Rounds to whole cents with half-cents going toward positive infinity.
///
/// Equivalent to `floor(amount * 100 + 0.5) / 100`, so shifting by a whole
/// number of cents never changes which way a half-cent rounds.
pub fn round_currency(amount: Decimal) -> Decimal {
    let strategy = if amount.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = amount.round_dp_with_strategy(2, strategy);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Prices one product against an explicit configuration, area table, and time.
///
/// Rules run in a fixed order (expiry, demand, low stock, location). Applied
/// adjustments are summed, the sum is floored at [`MINIMUM_PRICE`], and both
/// the final price and the total adjustment are rounded to cents. Arithmetic
/// saturates at the `Decimal` range rather than overflowing.
pub fn evaluate(
    product: &Product,
    config: &RuleConfiguration,
    areas: &AreaProfileTable,
    now: DateTime<Utc>,
) -> PricingResult {
    let evaluations: Vec<RuleOutcome> = vec![
        evaluate_expiry_discount(product, config, now),
        evaluate_demand_surcharge(product, config, areas),
        evaluate_low_stock_surcharge(product, config, now),
        evaluate_location_adjustment(product, config, areas),
    ];

    let adjustments: Vec<RuleOutcome> = evaluations
        .iter()
        .filter(|outcome| outcome.applied)
        .cloned()
        .collect();
    let total_raw = adjustments
        .iter()
        .fold(Decimal::ZERO, |total, outcome| total.saturating_add(outcome.adjustment));

    let unclamped = product.original_price.saturating_add(total_raw);
    let clamped = unclamped < MINIMUM_PRICE;
    let final_price = round_currency(unclamped.max(MINIMUM_PRICE));
    let total_adjustment = round_currency(total_raw);

    debug!(
        product_id = %product.id,
        %final_price,
        applied = adjustments.len(),
        clamped,
        "priced product"
    );

    PricingResult {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        original_price: product.original_price,
        final_price,
        adjustments,
        total_adjustment,
        clamped,
        area_info: areas.lookup(product.area_code.as_deref()).cloned(),
        evaluations,
    }
}

/// Owns a read-only rule configuration and area table snapshot.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: RuleConfiguration,
    areas: AreaProfileTable,
}

impl PricingEngine {
    pub fn new(config: RuleConfiguration, areas: AreaProfileTable) -> Self {
        Self { config, areas }
    }

    pub fn config(&self) -> &RuleConfiguration {
        &self.config
    }

    pub fn areas(&self) -> &AreaProfileTable {
        &self.areas
    }

    pub fn evaluate(&self, product: &Product, now: DateTime<Utc>) -> PricingResult {
        evaluate(product, &self.config, &self.areas, now)
    }

    /// Prices each product independently; results follow input order.
    pub fn evaluate_batch(&self, products: &[Product], now: DateTime<Utc>) -> Vec<PricingResult> {
        products
            .iter()
            .map(|product| self.evaluate(product, now))
            .collect()
    }
}
