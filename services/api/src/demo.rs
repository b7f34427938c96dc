use crate::infra::parse_date;
use crate::render::{format_currency, render_result};
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use clap::Args;
use retail_pricing::error::AppError;
use retail_pricing::pricing::{
    AreaProfileTable, PricingEngine, PricingRule, Product, ProductId, RuleConfiguration,
};
use rust_decimal::Decimal;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Storefront date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let now = today.and_time(NaiveTime::MIN).and_utc();
    let catalog = storefront_catalog(today);
    let engine = PricingEngine::new(RuleConfiguration::default(), AreaProfileTable::reference());

    println!("Dynamic pricing demo for {today}");
    println!("Active rules:");
    for rule in PricingRule::ALL {
        println!("  - {}", rule.description());
    }

    let results = engine.evaluate_batch(&catalog, now);
    for (product, result) in catalog.iter().zip(&results) {
        render_result(product, result, engine.areas());
    }

    let without_location = engine.config().toggled(PricingRule::LocationAdjustment);
    let flat = PricingEngine::new(without_location, engine.areas().clone());
    println!("\nSame catalog with the location adjustment switched off:");
    for (product, result) in catalog.iter().zip(flat.evaluate_batch(&catalog, now)) {
        println!(
            "  {:<16} {} -> {}",
            product.name,
            format_currency(result.original_price),
            format_currency(result.final_price)
        );
    }

    Ok(())
}

pub(crate) fn storefront_catalog(today: NaiveDate) -> Vec<Product> {
    let item = |id: &str,
                name: &str,
                cents: i64,
                stock: i64,
                expires_in: i64,
                demand_count: i64,
                area: &str,
                category: &str| Product {
        id: ProductId::from(id),
        name: name.to_string(),
        original_price: Decimal::new(cents, 2),
        stock,
        expiry_date: today + Duration::days(expires_in),
        demand_count,
        area_code: Some(area.to_string()),
        category: category.to_string(),
    };

    vec![
        item("1", "Organic Bananas", 399, 25, 3, 45, "10001", "Fruits"),
        item("2", "Fresh Milk", 449, 8, 8, 120, "10002", "Dairy"),
        item("3", "Bakery Bread", 399, 5, 1, 85, "10003", "Bakery"),
        item("4", "Premium Coffee", 1299, 50, 29, 200, "10004", "Beverages"),
        item("5", "Generic Cereal", 299, 15, 24, 30, "10005", "Pantry"),
    ]
}
