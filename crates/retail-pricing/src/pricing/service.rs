use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::area::AreaProfileTable;
use super::config::RuleConfiguration;
use super::engine::{self, PricingEngine};
use super::outcome::PricingResult;
use super::product::Product;

/// Answers quote requests against the configured defaults.
///
/// Callers may override the rule configuration per request; the area table is
/// always the service's snapshot.
#[derive(Debug, Clone)]
pub struct PricingService {
    engine: Arc<PricingEngine>,
}

impl PricingService {
    pub fn new(config: RuleConfiguration, areas: AreaProfileTable) -> Self {
        Self::with_engine(Arc::new(PricingEngine::new(config, areas)))
    }

    pub fn with_engine(engine: Arc<PricingEngine>) -> Self {
        Self { engine }
    }

    pub fn default_rules(&self) -> &RuleConfiguration {
        self.engine.config()
    }

    pub fn areas(&self) -> &AreaProfileTable {
        self.engine.areas()
    }

    pub fn quote(
        &self,
        product: &Product,
        rules: Option<&RuleConfiguration>,
        now: DateTime<Utc>,
    ) -> PricingResult {
        match rules {
            Some(rules) => engine::evaluate(product, rules, self.engine.areas(), now),
            None => self.engine.evaluate(product, now),
        }
    }

    pub fn quote_batch(
        &self,
        products: &[Product],
        rules: Option<&RuleConfiguration>,
        now: DateTime<Utc>,
    ) -> Vec<PricingResult> {
        products
            .iter()
            .map(|product| self.quote(product, rules, now))
            .collect()
    }
}
