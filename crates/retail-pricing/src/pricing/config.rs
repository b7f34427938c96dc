use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expiry window used by the low-stock rule to suppress surcharges on
/// perishables. Independent of [`ExpiryDiscountConfig::days_threshold`].
pub const LOW_STOCK_EXPIRY_CUTOFF_DAYS: i64 = 7;

/// The four pricing rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    ExpiryDiscount,
    DemandSurcharge,
    LowStockSurcharge,
    LocationAdjustment,
}

impl PricingRule {
    pub const ALL: [PricingRule; 4] = [
        PricingRule::ExpiryDiscount,
        PricingRule::DemandSurcharge,
        PricingRule::LowStockSurcharge,
        PricingRule::LocationAdjustment,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            PricingRule::ExpiryDiscount => "Expiry Date Based Discount",
            PricingRule::DemandSurcharge => "Demand-Based Price Increase",
            PricingRule::LowStockSurcharge => "Low Stock Rule",
            PricingRule::LocationAdjustment => "Location & Economic Condition Rule",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PricingRule::ExpiryDiscount => "expiry_discount",
            PricingRule::DemandSurcharge => "demand_surcharge",
            PricingRule::LowStockSurcharge => "low_stock_surcharge",
            PricingRule::LocationAdjustment => "location_adjustment",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|rule| rule.key() == normalized)
    }
}

impl std::fmt::Display for PricingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpiryDiscountConfig {
    pub enabled: bool,
    pub days_threshold: i64,
    pub discount_percentage: Decimal,
}

impl Default for ExpiryDiscountConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            days_threshold: 7,
            discount_percentage: Decimal::from(20),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandSurchargeConfig {
    pub enabled: bool,
    pub increase_percentage: Decimal,
}

impl Default for DemandSurchargeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            increase_percentage: Decimal::from(15),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowStockSurchargeConfig {
    pub enabled: bool,
    pub stock_threshold: i64,
    pub increase_percentage: Decimal,
}

impl Default for LowStockSurchargeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stock_threshold: 10,
            increase_percentage: Decimal::from(15),
        }
    }
}

/// Score bands for the location rule are fixed; only the toggle is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationAdjustmentConfig {
    pub enabled: bool,
}

impl Default for LocationAdjustmentConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Per-rule toggles and thresholds read by the engine.
///
/// Passed explicitly into every evaluation; the engine never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfiguration {
    pub expiry_discount: ExpiryDiscountConfig,
    pub demand_surcharge: DemandSurchargeConfig,
    pub low_stock_surcharge: LowStockSurchargeConfig,
    pub location_adjustment: LocationAdjustmentConfig,
}

impl RuleConfiguration {
    pub fn all_disabled() -> Self {
        let mut config = Self::default();
        for rule in PricingRule::ALL {
            config.set_enabled(rule, false);
        }
        config
    }

    pub fn is_enabled(&self, rule: PricingRule) -> bool {
        match rule {
            PricingRule::ExpiryDiscount => self.expiry_discount.enabled,
            PricingRule::DemandSurcharge => self.demand_surcharge.enabled,
            PricingRule::LowStockSurcharge => self.low_stock_surcharge.enabled,
            PricingRule::LocationAdjustment => self.location_adjustment.enabled,
        }
    }

    pub fn set_enabled(&mut self, rule: PricingRule, enabled: bool) {
        match rule {
            PricingRule::ExpiryDiscount => self.expiry_discount.enabled = enabled,
            PricingRule::DemandSurcharge => self.demand_surcharge.enabled = enabled,
            PricingRule::LowStockSurcharge => self.low_stock_surcharge.enabled = enabled,
            PricingRule::LocationAdjustment => self.location_adjustment.enabled = enabled,
        }
    }

    /// Copy of this configuration with one rule's toggle flipped.
    pub fn toggled(&self, rule: PricingRule) -> Self {
        let mut next = self.clone();
        next.set_enabled(rule, !self.is_enabled(rule));
        next
    }
}
