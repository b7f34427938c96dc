use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque catalog identifier for a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Snapshot of the product attributes the pricing rules inspect.
///
/// Values are taken as given: negative stock or demand are not rejected, the
/// rules simply fall through to whichever branch the numbers select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub original_price: Decimal,
    pub stock: i64,
    pub expiry_date: NaiveDate,
    /// Observed interest over the recent demand window (views and orders).
    pub demand_count: i64,
    #[serde(default)]
    pub area_code: Option<String>,
    #[serde(default)]
    pub category: String,
}
