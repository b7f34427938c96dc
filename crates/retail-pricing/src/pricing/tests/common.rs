use axum::response::Response;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::pricing::area::{AreaProfile, AreaProfileTable};
use crate::pricing::config::RuleConfiguration;
use crate::pricing::product::{Product, ProductId};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 17, 0, 0, 0)
        .single()
        .expect("valid reference time")
}

pub(super) fn days_from_now(days: i64) -> NaiveDate {
    (now() + Duration::days(days)).date_naive()
}

pub(super) fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub(super) fn areas() -> AreaProfileTable {
    [
        AreaProfile::new("X", "Upper East Side", 4, 60.0),
        AreaProfile::new("Y", "Lower Manhattan", 3, 80.0),
        AreaProfile::new("LOW", "Harlem", 1, 40.0),
        AreaProfile::new("MID", "East Village", 2, 70.0),
        AreaProfile::new("TOP", "Financial District", 5, 150.0),
    ]
    .into_iter()
    .collect()
}

pub(super) fn rules() -> RuleConfiguration {
    RuleConfiguration::default()
}

pub(super) fn product(
    id: &str,
    original_price: Decimal,
    stock: i64,
    expires_in_days: i64,
    demand_count: i64,
    area_code: Option<&str>,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("Product {id}"),
        original_price,
        stock,
        expiry_date: days_from_now(expires_in_days),
        demand_count,
        area_code: area_code.map(str::to_string),
        category: "Grocery".to_string(),
    }
}

/// Organic bananas in an affluent area, three days from expiry.
pub(super) fn scenario_a() -> Product {
    product("bananas", price(399), 25, 3, 45, Some("X"))
}

/// Fresh milk: low stock and high demand in a middle-income area.
pub(super) fn scenario_b() -> Product {
    product("milk", price(449), 8, 8, 120, Some("Y"))
}

/// Bakery bread: low stock but expiring tomorrow.
pub(super) fn scenario_c() -> Product {
    product("bread", price(399), 5, 1, 10, Some("Y"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
