//! CSV import for product catalogs and area profile tables.

mod parser;

use crate::pricing::{AreaProfileTable, Product};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{value}' is not a valid price")]
    InvalidPrice { line: usize, value: String },
    #[error("line {line}: '{value}' is not a valid expiry date")]
    InvalidDate { line: usize, value: String },
}

pub struct CatalogImporter;

impl CatalogImporter {
    pub fn products_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::products_from_reader(file)
    }

    /// Reads `id,name,original_price,stock,expiry_date,demand_count,area_code,category` rows.
    pub fn products_from_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogImportError> {
        let products = parser::parse_products(reader)?;
        debug!(count = products.len(), "imported product catalog");
        Ok(products)
    }

    pub fn areas_from_path<P: AsRef<Path>>(path: P) -> Result<AreaProfileTable, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::areas_from_reader(file)
    }

    /// Reads `code,name,financial_score,avg_demand` rows; later duplicates win.
    pub fn areas_from_reader<R: Read>(reader: R) -> Result<AreaProfileTable, CatalogImportError> {
        let table: AreaProfileTable = parser::parse_areas(reader)?.into_iter().collect();
        debug!(count = table.len(), "imported area profiles");
        Ok(table)
    }
}
