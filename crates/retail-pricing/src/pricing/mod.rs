//! Dynamic pricing: four independent rules combined into one adjusted price.
//!
//! Every evaluation is a pure function of the product, the rule
//! configuration, the area table, and a caller-supplied reference time.

pub mod area;
pub mod config;
mod engine;
pub mod outcome;
pub mod product;
pub mod router;
pub mod rules;
mod service;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use area::{AreaProfile, AreaProfileTable};
pub use config::{
    DemandSurchargeConfig, ExpiryDiscountConfig, LocationAdjustmentConfig,
    LowStockSurchargeConfig, PricingRule, RuleConfiguration, LOW_STOCK_EXPIRY_CUTOFF_DAYS,
};
pub use engine::{evaluate, round_currency, PricingEngine, MINIMUM_PRICE};
pub use outcome::{PricingResult, RuleOutcome, RuleReason};
pub use product::{Product, ProductId};
pub use router::pricing_router;
pub use service::PricingService;
