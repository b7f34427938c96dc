use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use retail_pricing::catalog::CatalogImporter;
use retail_pricing::config::PricingSettings;
use retail_pricing::error::AppError;
use retail_pricing::pricing::timestamp;
use retail_pricing::pricing::{AreaProfileTable, PricingRule};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Area table from `path` when given, otherwise the reference areas.
pub(crate) fn load_area_table(path: Option<&Path>) -> Result<AreaProfileTable, AppError> {
    match path {
        Some(path) => {
            let table = CatalogImporter::areas_from_path(path)?;
            info!(path = %path.display(), areas = table.len(), "loaded area profiles");
            Ok(table)
        }
        None => Ok(AreaProfileTable::reference()),
    }
}

pub(crate) fn area_table_for(settings: &PricingSettings) -> Result<AreaProfileTable, AppError> {
    load_area_table(settings.areas_csv.as_deref())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    timestamp::parse_date(raw)
}

pub(crate) fn parse_reference_time(raw: &str) -> Result<DateTime<Utc>, String> {
    timestamp::parse_reference_time(raw)
}

pub(crate) fn parse_rule(raw: &str) -> Result<PricingRule, String> {
    PricingRule::from_key(raw).ok_or_else(|| {
        let known: Vec<&str> = PricingRule::ALL.iter().map(PricingRule::key).collect();
        format!("unknown rule '{raw}' (expected one of: {})", known.join(", "))
    })
}
