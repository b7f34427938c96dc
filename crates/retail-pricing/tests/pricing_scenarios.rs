use chrono::{DateTime, TimeZone, Utc};
use retail_pricing::catalog::CatalogImporter;
use retail_pricing::pricing::{
    AreaProfileTable, PricingEngine, PricingRule, PricingService, RuleConfiguration, RuleReason,
};
use rust_decimal_macros::dec;
use std::io::Cursor;

const CATALOG: &str = "id,name,original_price,stock,expiry_date,demand_count,area_code,category\n\
1,Organic Bananas,3.99,25,2024-01-20,45,10001,Fruits\n\
2,Fresh Milk,4.49,8,2024-01-25,120,10002,Dairy\n\
3,Bakery Bread,3.99,5,2024-01-18,85,10003,Bakery\n\
4,Premium Coffee,12.99,50,2024-02-15,200,10004,Beverages\n\
5,Generic Cereal,2.99,15,2024-02-10,30,10005,Pantry\n\
6,Imported Cheese,8.00,40,2024-03-01,10,99999,Dairy\n";

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 17, 0, 0, 0)
        .single()
        .expect("valid reference time")
}

fn engine() -> PricingEngine {
    PricingEngine::new(RuleConfiguration::default(), AreaProfileTable::reference())
}

#[test]
fn storefront_catalog_prices_against_reference_areas() {
    let products =
        CatalogImporter::products_from_reader(Cursor::new(CATALOG)).expect("catalog imports");
    let results = engine().evaluate_batch(&products, reference_time());

    let prices: Vec<_> = results.iter().map(|result| result.final_price).collect();
    assert_eq!(
        prices,
        vec![
            dec!(3.79),  // -20% expiry, +15% affluent area
            dec!(5.84),  // +15% demand, +15% low stock
            dec!(3.59),  // -20% expiry, +15% demand, -5% lower-income area
            dec!(17.54), // +15% demand, +20% affluent area
            dec!(2.69),  // -10% lower-income area
            dec!(8.00),  // unknown area, nothing applies
        ]
    );

    let bread = &results[2];
    assert!(bread.is_applied(PricingRule::ExpiryDiscount));
    assert!(!bread.is_applied(PricingRule::LowStockSurcharge));
    assert!(matches!(
        bread
            .outcome_for(PricingRule::LowStockSurcharge)
            .map(|outcome| &outcome.reason),
        Some(RuleReason::LowStockExpiringSoon {
            stock: 5,
            days_until_expiry: 1
        })
    ));

    let cheese = &results[5];
    assert!(cheese.area_info.is_none());
    assert_eq!(
        cheese
            .outcome_for(PricingRule::LocationAdjustment)
            .map(|outcome| outcome.message.as_str()),
        Some("Area data not found")
    );
    assert_eq!(
        cheese
            .outcome_for(PricingRule::DemandSurcharge)
            .map(|outcome| outcome.message.as_str()),
        Some("Demand normal (10 vs avg 50)")
    );
}

#[test]
fn service_overrides_apply_per_request_only() {
    let service = PricingService::new(RuleConfiguration::default(), AreaProfileTable::reference());
    let products =
        CatalogImporter::products_from_reader(Cursor::new(CATALOG)).expect("catalog imports");
    let coffee = &products[3];

    let without_location = RuleConfiguration::default().toggled(PricingRule::LocationAdjustment);
    let overridden = service.quote(coffee, Some(&without_location), reference_time());
    assert_eq!(overridden.final_price, dec!(14.94));

    let default = service.quote(coffee, None, reference_time());
    assert_eq!(default.final_price, dec!(17.54));
    assert_eq!(service.default_rules(), &RuleConfiguration::default());
}

#[test]
fn area_table_loaded_from_csv_drives_location_rule() {
    let areas = CatalogImporter::areas_from_reader(Cursor::new(
        "code,name,financial_score,avg_demand\n10001,Upper East Side,2,60\n",
    ))
    .expect("areas import");
    let products =
        CatalogImporter::products_from_reader(Cursor::new(CATALOG)).expect("catalog imports");
    let engine = PricingEngine::new(RuleConfiguration::default(), areas);

    let bananas = engine.evaluate(&products[0], reference_time());

    // -20% expiry, -5% lower-income area
    assert_eq!(bananas.total_adjustment, dec!(-1.00));
    assert_eq!(bananas.final_price, dec!(2.99));
}
