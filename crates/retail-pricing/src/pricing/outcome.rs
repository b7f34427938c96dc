use super::area::AreaProfile;
use super::config::PricingRule;
use super::product::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why a rule did or did not adjust the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleReason {
    Disabled,
    ExpiringSoon {
        days_until_expiry: i64,
        discount_percentage: Decimal,
    },
    NotExpiringSoon {
        days_until_expiry: i64,
    },
    HighDemand {
        demand_count: i64,
        avg_demand: f64,
        increase_percentage: Decimal,
    },
    NormalDemand {
        demand_count: i64,
        avg_demand: f64,
    },
    LowStock {
        stock: i64,
        increase_percentage: Decimal,
    },
    LowStockExpiringSoon {
        stock: i64,
        days_until_expiry: i64,
    },
    StockAdequate {
        stock: i64,
    },
    AreaNotFound,
    AffluentArea {
        financial_score: i32,
        percentage: i64,
    },
    LowerIncomeArea {
        financial_score: i32,
        percentage: i64,
    },
    MiddleIncomeArea {
        financial_score: i32,
    },
}

impl RuleReason {
    pub fn summary(&self) -> String {
        match self {
            RuleReason::Disabled => "Rule disabled".to_string(),
            RuleReason::ExpiringSoon {
                days_until_expiry,
                discount_percentage,
            } => format!(
                "Expiring in {days_until_expiry} days - {}% discount applied",
                discount_percentage.normalize()
            ),
            RuleReason::NotExpiringSoon { days_until_expiry } => {
                format!("Not expiring soon ({days_until_expiry} days left)")
            }
            RuleReason::HighDemand {
                demand_count,
                avg_demand,
                increase_percentage,
            } => format!(
                "High demand ({demand_count} vs avg {avg_demand}) - {}% increase",
                increase_percentage.normalize()
            ),
            RuleReason::NormalDemand {
                demand_count,
                avg_demand,
            } => format!("Demand normal ({demand_count} vs avg {avg_demand})"),
            RuleReason::LowStock {
                stock,
                increase_percentage,
            } => format!(
                "Low stock ({stock} units) and not expiring soon - {}% increase",
                increase_percentage.normalize()
            ),
            RuleReason::LowStockExpiringSoon {
                days_until_expiry, ..
            } => format!(
                "Low stock but expiring soon ({days_until_expiry} days) - no increase applied"
            ),
            RuleReason::StockAdequate { stock } => format!("Stock adequate ({stock} units)"),
            RuleReason::AreaNotFound => "Area data not found".to_string(),
            RuleReason::AffluentArea {
                financial_score,
                percentage,
            } => format!("Affluent area (score: {financial_score}) - {percentage}% increase"),
            RuleReason::LowerIncomeArea {
                financial_score,
                percentage,
            } => format!(
                "Lower-income area (score: {financial_score}) - {}% decrease",
                percentage.abs()
            ),
            RuleReason::MiddleIncomeArea { financial_score } => {
                format!("Middle-income area (score: {financial_score}) - no adjustment")
            }
        }
    }
}

/// Result of running one rule against one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: PricingRule,
    pub applied: bool,
    /// Signed additive change in the product's currency; zero when not applied.
    pub adjustment: Decimal,
    pub reason: RuleReason,
    pub message: String,
}

impl RuleOutcome {
    pub(crate) fn applied(rule: PricingRule, adjustment: Decimal, reason: RuleReason) -> Self {
        let message = reason.summary();
        Self {
            rule,
            applied: true,
            adjustment,
            reason,
            message,
        }
    }

    pub(crate) fn skipped(rule: PricingRule, reason: RuleReason) -> Self {
        let message = reason.summary();
        Self {
            rule,
            applied: false,
            adjustment: Decimal::ZERO,
            reason,
            message,
        }
    }

    pub(crate) fn disabled(rule: PricingRule) -> Self {
        Self::skipped(rule, RuleReason::Disabled)
    }
}

/// Adjusted price for one product together with the audit trail behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub product_id: ProductId,
    pub product_name: String,
    pub original_price: Decimal,
    pub final_price: Decimal,
    /// Applied outcomes only, in evaluation order.
    pub adjustments: Vec<RuleOutcome>,
    pub total_adjustment: Decimal,
    /// Set when the price floor replaced the arithmetic result.
    pub clamped: bool,
    pub area_info: Option<AreaProfile>,
    /// Every rule outcome, applied or not, in evaluation order.
    pub evaluations: Vec<RuleOutcome>,
}

impl PricingResult {
    pub fn outcome_for(&self, rule: PricingRule) -> Option<&RuleOutcome> {
        self.evaluations.iter().find(|outcome| outcome.rule == rule)
    }

    pub fn is_applied(&self, rule: PricingRule) -> bool {
        self.adjustments.iter().any(|outcome| outcome.rule == rule)
    }
}
