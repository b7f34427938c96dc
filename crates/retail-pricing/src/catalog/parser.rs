use crate::pricing::timestamp::parse_date;
use crate::pricing::{AreaProfile, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::str::FromStr;

use super::CatalogImportError;

#[derive(Debug, Deserialize)]
struct ProductRow {
    id: String,
    name: String,
    original_price: String,
    stock: i64,
    expiry_date: String,
    demand_count: i64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    area_code: Option<String>,
    #[serde(default)]
    category: String,
}

#[derive(Debug, Deserialize)]
struct AreaRow {
    code: String,
    name: String,
    financial_score: i32,
    avg_demand: f64,
}

fn reader_for<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub(crate) fn parse_products<R: Read>(reader: R) -> Result<Vec<Product>, CatalogImportError> {
    let mut csv_reader = reader_for(reader);
    let mut products = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProductRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = index + 2;

        let original_price = Decimal::from_str(&row.original_price).map_err(|_| {
            CatalogImportError::InvalidPrice {
                line,
                value: row.original_price.clone(),
            }
        })?;
        let expiry_date =
            parse_date(&row.expiry_date).map_err(|_| CatalogImportError::InvalidDate {
                line,
                value: row.expiry_date.clone(),
            })?;

        products.push(Product {
            id: ProductId(row.id),
            name: row.name,
            original_price,
            stock: row.stock,
            expiry_date,
            demand_count: row.demand_count,
            area_code: row.area_code,
            category: row.category,
        });
    }

    Ok(products)
}

pub(crate) fn parse_areas<R: Read>(reader: R) -> Result<Vec<AreaProfile>, CatalogImportError> {
    let mut csv_reader = reader_for(reader);
    let mut areas = Vec::new();

    for record in csv_reader.deserialize::<AreaRow>() {
        let row = record?;
        areas.push(AreaProfile {
            code: row.code,
            name: row.name,
            financial_score: row.financial_score,
            avg_demand: row.avg_demand,
        });
    }

    Ok(areas)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
