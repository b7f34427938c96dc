use crate::infra::{load_area_table, parse_reference_time, parse_rule};
use crate::render::render_result;
use chrono::{DateTime, Utc};
use clap::Args;
use retail_pricing::catalog::CatalogImporter;
use retail_pricing::error::AppError;
use retail_pricing::pricing::{PricingEngine, PricingRule, RuleConfiguration};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Product catalog CSV (id,name,original_price,stock,expiry_date,demand_count,area_code,category)
    #[arg(long)]
    pub(crate) products: PathBuf,
    /// Area profile CSV (code,name,financial_score,avg_demand). Defaults to the reference areas.
    #[arg(long)]
    pub(crate) areas: Option<PathBuf>,
    /// Reference time for expiry calculations (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_reference_time)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Disable a rule for this run; repeatable
    #[arg(long = "disable", value_parser = parse_rule)]
    pub(crate) disable: Vec<PricingRule>,
    /// Emit results as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        products,
        areas,
        now,
        disable,
        json,
    } = args;

    let catalog = CatalogImporter::products_from_path(&products)?;
    let areas = load_area_table(areas.as_deref())?;
    let engine = PricingEngine::new(rules_without(&disable), areas);
    let now = now.unwrap_or_else(Utc::now);

    let results = engine.evaluate_batch(&catalog, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!(
        "Pricing {} products from {} at {}",
        catalog.len(),
        products.display(),
        now.to_rfc3339()
    );
    for (product, result) in catalog.iter().zip(&results) {
        render_result(product, result, engine.areas());
    }
    Ok(())
}

fn rules_without(disabled: &[PricingRule]) -> RuleConfiguration {
    let mut rules = RuleConfiguration::default();
    for rule in disabled {
        rules.set_enabled(*rule, false);
    }
    rules
}
